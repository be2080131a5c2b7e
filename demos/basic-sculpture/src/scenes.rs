use pixeltheater::scenekit::*;

use crate::model::TwoPanelModel;

/// Sweeps a rainbow across both panels; `speed` controls how fast the hue
/// offset advances per second.
pub struct RainbowScene {
    base: SceneBase,
    hue_offset: u8,
}

impl RainbowScene {
    pub fn new() -> Self {
        let mut base = SceneBase::new();
        base.set_name("rainbow");
        base.set_description("A hue sweep across both panels");
        base.set_author("pixeltheater");
        base.set_version("1.0");
        Self { base, hue_offset: 0 }
    }
}

impl Scene<TwoPanelModel> for RainbowScene {
    fn base(&self) -> &SceneBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }

    fn setup(&mut self, _ctx: &mut SceneContext<TwoPanelModel>) {
        self.base.param_ratio("speed", 0.3, ParamFlags::CLAMP, "hue advance rate");
        self.hue_offset = 0;
    }

    fn tick(&mut self, ctx: &mut SceneContext<TwoPanelModel>) {
        let speed = self.base.settings().get_float("speed");
        let dt = ctx.delta_time();
        self.hue_offset = self.hue_offset.wrapping_add((speed * dt * 255.0) as u8);

        let count = ctx.led_count();
        let mut leds = ctx.leds();
        for i in 0..count {
            let hue = self.hue_offset.wrapping_add((i as u8).wrapping_mul(16));
            leds[i] = hsv2rgb_rainbow(CHSV::new(hue, 255, 255));
        }
    }
}

/// Breathes a single hue in and out using an easing curve; `hue` selects the color.
pub struct PulseScene {
    base: SceneBase,
    elapsed: f32,
}

impl PulseScene {
    pub fn new() -> Self {
        let mut base = SceneBase::new();
        base.set_name("pulse");
        base.set_description("A breathing single-color pulse");
        base.set_author("pixeltheater");
        base.set_version("1.0");
        Self { base, elapsed: 0.0 }
    }
}

impl Scene<TwoPanelModel> for PulseScene {
    fn base(&self) -> &SceneBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut SceneBase {
        &mut self.base
    }

    fn setup(&mut self, _ctx: &mut SceneContext<TwoPanelModel>) {
        self.base.param_count("hue", 0, 255, 160, ParamFlags::WRAP, "base hue 0-255");
        self.base.param_ratio("period", 0.5, ParamFlags::CLAMP, "seconds per half-cycle");
        self.elapsed = 0.0;
    }

    fn tick(&mut self, ctx: &mut SceneContext<TwoPanelModel>) {
        let hue = self.base.settings().get_int("hue") as u8;
        let period = self.base.settings().get_float("period").max(0.05);
        self.elapsed += ctx.delta_time();

        let phase = (self.elapsed / period) % 2.0;
        let t = if phase < 1.0 { phase } else { 2.0 - phase };
        let brightness = (ease(0.0, 255.0, t, Easing::InOutSine)) as u8;

        let color = hsv2rgb_rainbow(CHSV::new(hue, 255, brightness));
        let count = ctx.led_count();
        let mut leds = ctx.leds();
        fill_solid(&mut leds.as_mut_slice()[..count], color);
    }
}
