//! Top-level facade: owns the model, the platform, and the scene list, and
//! drives the active scene's lifecycle.

use log::warn;

use crate::model::{Model, ModelDefinition};
use crate::params::{ParamValue, Settings};
use crate::platform::Platform;
use crate::scene::{Scene, SceneBase, SceneContext, SceneMetadata};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TheaterState {
    #[default]
    Uninitialized,
    Initialized,
    Running,
}

struct DummyScene {
    base: SceneBase,
}

impl<D: ModelDefinition> Scene<D> for DummyScene {
    fn base(&self) -> &SceneBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }
    fn setup(&mut self, _ctx: &mut SceneContext<D>) {}
    fn tick(&mut self, _ctx: &mut SceneContext<D>) {}
}

/// Drives scene switching and per-frame ticking against one model and one platform.
pub struct Theater<D: ModelDefinition> {
    model: Model<D>,
    platform: Box<dyn Platform>,
    scenes: Vec<Box<dyn Scene<D>>>,
    current_scene_index: usize,
    state: TheaterState,
    dummy_scene: DummyScene,
}

impl<D: ModelDefinition> Theater<D> {
    pub fn new(platform: Box<dyn Platform>) -> Self {
        Self {
            model: Model::new(),
            platform,
            scenes: Vec::new(),
            current_scene_index: 0,
            state: TheaterState::Uninitialized,
            dummy_scene: DummyScene { base: SceneBase::new() },
        }
    }

    pub fn model(&self) -> &Model<D> {
        &self.model
    }

    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    pub fn platform_mut(&mut self) -> &mut dyn Platform {
        self.platform.as_mut()
    }

    pub fn add_scene(&mut self, scene: Box<dyn Scene<D>>) {
        self.scenes.push(scene);
    }

    /// The active scene's parameter store, for host-facing reflection/control.
    pub fn current_scene_settings(&self) -> Option<&Settings> {
        self.scenes.get(self.current_scene_index).map(|s| &s.base().settings)
    }

    pub fn set_current_scene_parameter(&mut self, name: &str, value: ParamValue) {
        if let Some(scene) = self.scenes.get_mut(self.current_scene_index) {
            scene.base_mut().settings.set_value(name, value);
        }
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Connects and sets up the first scene (if any) and marks the theater
    /// ready for `update()`. Calling this a second time is a no-op with a
    /// warning rather than re-running setup.
    pub fn start(&mut self) {
        if self.state != TheaterState::Uninitialized {
            warn!("Theater::start called more than once, ignoring");
            return;
        }
        self.state = TheaterState::Initialized;
        if !self.scenes.is_empty() {
            self.run_with_current(|scene, ctx| {
                scene.connect(ctx);
                scene.setup(ctx);
            });
        }
        self.state = TheaterState::Running;
    }

    /// Advances the active scene by one frame.
    pub fn update(&mut self) {
        if self.state != TheaterState::Running {
            warn!("Theater::update called before start(), ignoring");
            return;
        }
        if self.scenes.is_empty() {
            return;
        }
        self.run_with_current(|scene, ctx| scene.tick(ctx));
    }

    pub fn next_scene(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        self.switch_to((self.current_scene_index + 1) % self.scenes.len());
    }

    pub fn previous_scene(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        let len = self.scenes.len();
        self.switch_to((self.current_scene_index + len - 1) % len);
    }

    pub fn set_scene(&mut self, index: usize) {
        if self.scenes.is_empty() {
            return;
        }
        self.switch_to(index.min(self.scenes.len() - 1));
    }

    fn switch_to(&mut self, index: usize) {
        self.run_with_current(|scene, ctx| scene.reset(ctx));
        self.current_scene_index = index;
        self.run_with_current(|scene, ctx| {
            scene.connect(ctx);
            scene.setup(ctx);
        });
    }

    pub fn current_scene_index(&self) -> usize {
        self.current_scene_index
    }

    pub fn current_scene_metadata(&self) -> SceneMetadata {
        self.scenes
            .get(self.current_scene_index)
            .map(|s| s.metadata())
            .unwrap_or_default()
    }

    pub fn scene_metadata(&self, index: usize) -> Option<SceneMetadata> {
        self.scenes.get(index).map(|s| s.metadata())
    }

    fn run_with_current(&mut self, f: impl FnOnce(&mut dyn Scene<D>, &mut SceneContext<D>)) {
        let mut ctx = SceneContext {
            model: &self.model,
            platform: self.platform.as_mut(),
        };
        match self.scenes.get_mut(self.current_scene_index) {
            Some(scene) => f(scene.as_mut(), &mut ctx),
            None => f(&mut self.dummy_scene, &mut ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::definition::{EdgeData, FaceData, FaceTypeData, HardwareData, LedGroupData, NeighborData, PointData};
    use crate::platform::NativePlatform;

    struct EmptyModel;
    static POINTS: [PointData; 0] = [];
    static FACE_TYPES: [FaceTypeData; 0] = [];
    static FACES: [FaceData; 0] = [];
    static EDGES: [EdgeData; 0] = [];
    static GROUPS: [LedGroupData; 0] = [];
    static NEIGHBORS: [NeighborData; 0] = [];
    static HARDWARE: HardwareData = HardwareData {
        led_type: "",
        color_order: "",
        led_diameter_mm: 0.0,
        led_spacing_mm: 0.0,
        max_current_per_led_ma: 0,
        avg_current_per_led_ma: 0,
    };
    impl ModelDefinition for EmptyModel {
        const LED_COUNT: usize = 4;
        const FACE_COUNT: usize = 0;
        const SPHERE_RADIUS: f32 = 0.0;
        fn points() -> &'static [PointData] {
            &POINTS
        }
        fn faces() -> &'static [FaceData] {
            &FACES
        }
        fn face_types() -> &'static [FaceTypeData] {
            &FACE_TYPES
        }
        fn edges() -> &'static [EdgeData] {
            &EDGES
        }
        fn led_groups() -> &'static [LedGroupData] {
            &GROUPS
        }
        fn neighbors() -> &'static [NeighborData] {
            &NEIGHBORS
        }
        fn hardware() -> &'static HardwareData {
            &HARDWARE
        }
    }

    struct TickingScene {
        base: SceneBase,
        ticks: u32,
    }

    impl Scene<EmptyModel> for TickingScene {
        fn base(&self) -> &SceneBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut SceneBase {
            &mut self.base
        }
        fn setup(&mut self, _ctx: &mut SceneContext<EmptyModel>) {}
        fn tick(&mut self, ctx: &mut SceneContext<EmptyModel>) {
            self.ticks += 1;
            ctx.leds()[0] = crate::color::CRGB::WHITE;
        }
    }

    fn scene(name: &str) -> Box<TickingScene> {
        let mut base = SceneBase::new();
        base.set_name(name);
        Box::new(TickingScene { base, ticks: 0 })
    }

    #[test]
    fn start_then_update_ticks_current_scene() {
        let platform = Box::new(NativePlatform::new(4));
        let mut theater: Theater<EmptyModel> = Theater::new(platform);
        theater.add_scene(scene("a"));
        theater.start();
        theater.update();
        theater.update();
        assert_eq!(theater.current_scene_metadata().name, "a");
    }

    #[test]
    fn double_start_is_ignored() {
        let platform = Box::new(NativePlatform::new(4));
        let mut theater: Theater<EmptyModel> = Theater::new(platform);
        theater.add_scene(scene("a"));
        theater.start();
        theater.start();
        assert_eq!(theater.state, TheaterState::Running);
    }

    #[test]
    fn next_scene_wraps_around() {
        let platform = Box::new(NativePlatform::new(4));
        let mut theater: Theater<EmptyModel> = Theater::new(platform);
        theater.add_scene(scene("a"));
        theater.add_scene(scene("b"));
        theater.start();
        assert_eq!(theater.current_scene_index(), 0);
        theater.next_scene();
        assert_eq!(theater.current_scene_index(), 1);
        theater.next_scene();
        assert_eq!(theater.current_scene_index(), 0);
    }

    #[test]
    fn update_before_start_is_ignored() {
        let platform = Box::new(NativePlatform::new(4));
        let mut theater: Theater<EmptyModel> = Theater::new(platform);
        theater.add_scene(scene("a"));
        theater.update();
        assert_eq!(theater.current_scene_index(), 0);
    }

    #[test]
    fn no_scenes_falls_back_to_dummy_without_panicking() {
        let platform = Box::new(NativePlatform::new(4));
        let mut theater: Theater<EmptyModel> = Theater::new(platform);
        theater.start();
        theater.update();
        assert_eq!(theater.scene_count(), 0);
    }
}
