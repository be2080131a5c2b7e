mod model;
mod scenes;

use model::TwoPanelModel;
use pixeltheater::Scene;
use scenes::{PulseScene, RainbowScene};

fn build_scenes() -> Vec<Box<dyn Scene<TwoPanelModel>>> {
    vec![Box::new(RainbowScene::new()), Box::new(PulseScene::new())]
}

pixeltheater_web::export_simulator!(TwoPanelModel, build_scenes, "basic-sculpture");
