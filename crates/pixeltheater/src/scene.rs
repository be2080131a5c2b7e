//! Scene lifecycle contract and the `SceneBase` ergonomic helper struct.
//!
//! Rather than storing the model/LED-buffer/platform as fields written once
//! by `connect` (as in the original, where a scene holds raw pointers for
//! its whole lifetime), each lifecycle hook receives a [`SceneContext`]
//! borrow for the duration of the call. This keeps the borrow checker happy
//! while preserving the same observable contract; it mirrors how the
//! teacher's own `Game` trait receives an `&mut EngineContext` per call
//! rather than storing one.

use crate::led::LedBuffer;
use crate::model::{Model, ModelDefinition};
use crate::params::{ParamValue, Settings, SettingsProxy};
use crate::platform::Platform;

#[derive(Debug, Clone, Default)]
pub struct SceneMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
}

/// Borrowed access to geometry, LEDs, and the platform for one lifecycle call.
///
/// LEDs are reached through `leds()`, a fresh [`LedBuffer`] over whatever the
/// platform currently owns, rather than a field stored alongside `platform`
/// — the two would otherwise be overlapping mutable borrows of the same
/// backing storage.
pub struct SceneContext<'a, D: ModelDefinition> {
    pub model: &'a Model<D>,
    pub platform: &'a mut dyn Platform,
}

impl<'a, D: ModelDefinition> SceneContext<'a, D> {
    pub fn leds(&mut self) -> LedBuffer<'_> {
        LedBuffer::new(self.platform.get_leds())
    }

    pub fn led_count(&self) -> usize {
        self.platform.num_leds()
    }

    pub fn millis(&self) -> u32 {
        self.platform.millis()
    }

    pub fn delta_time(&mut self) -> f32 {
        self.platform.delta_time()
    }

    pub fn random8(&self) -> u8 {
        self.platform.random8()
    }

    pub fn random16(&self) -> u16 {
        self.platform.random16()
    }

    pub fn random(&self, max: i32) -> i32 {
        self.platform.random(max)
    }

    pub fn log_info(&self, message: &str) {
        self.platform.log_info(message);
    }

    pub fn log_warning(&self, message: &str) {
        self.platform.log_warning(message);
    }

    pub fn log_error(&self, message: &str) {
        self.platform.log_error(message);
    }
}

/// Shared scene state: metadata, owned settings store, and tick counter.
/// Scenes embed this rather than inheriting from a base class.
#[derive(Default)]
pub struct SceneBase {
    pub metadata: SceneMetadata,
    pub settings: Settings,
    pub tick_count: u64,
}

impl SceneBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&mut self) -> SettingsProxy<'_> {
        SettingsProxy::new(&mut self.settings)
    }

    pub fn param_ratio(&mut self, name: &str, default: f32, flags: crate::params::ParamFlags, description: &str) {
        self.settings.add_parameter(crate::params::ParamDef::create_ratio(name, default, flags, description));
    }

    pub fn param_range(&mut self, name: &str, min: f32, max: f32, default: f32, flags: crate::params::ParamFlags, description: &str) {
        self.settings.add_range_parameter(name, min, max, default, flags, description);
    }

    pub fn param_count(&mut self, name: &str, min: i32, max: i32, default: i32, flags: crate::params::ParamFlags, description: &str) {
        self.settings.add_count_parameter(name, min, max, default, flags, description);
    }

    pub fn param_switch(&mut self, name: &str, default: bool, description: &str) {
        self.settings.add_parameter(crate::params::ParamDef::create_switch(name, default, description));
    }

    pub fn set_name(&mut self, name: &str) {
        self.metadata.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.metadata.description = description.to_string();
    }

    pub fn set_version(&mut self, version: &str) {
        self.metadata.version = version.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.metadata.author = author.to_string();
    }

    pub fn reset(&mut self) {
        self.tick_count = 0;
        self.settings.reset_all();
    }
}

/// A user-authored animation with its own settings and lifecycle.
///
/// Lifecycle: constructed -> `connect` (once, before setup) -> `setup`
/// (once) -> repeated `tick` -> optional `reset` on scene switch.
pub trait Scene<D: ModelDefinition> {
    fn base(&self) -> &SceneBase;
    fn base_mut(&mut self) -> &mut SceneBase;

    fn metadata(&self) -> SceneMetadata {
        self.base().metadata.clone()
    }

    /// Called once by Theater before `setup`. No engine I/O should happen
    /// here beyond storing anything the scene cannot defer; the default is a
    /// no-op since context is passed per-call to `setup`/`tick` instead.
    fn connect(&mut self, _ctx: &mut SceneContext<D>) {}

    /// Called once, after `connect`. Define parameters and initialize state.
    fn setup(&mut self, ctx: &mut SceneContext<D>);

    /// Called every frame. Read parameters, compute colors, write the LED buffer.
    fn tick(&mut self, ctx: &mut SceneContext<D>);

    /// Called on scene switch: zero the tick counter, reset settings to
    /// defaults, return to pre-setup state.
    fn reset(&mut self, _ctx: &mut SceneContext<D>) {
        self.base_mut().reset();
    }

    fn param_value(&self, name: &str) -> ParamValue {
        self.base().settings.get_value(name)
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
        const LED_COUNT: usize = 0;
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

    struct CountingScene {
        base: SceneBase,
        setup_calls: u32,
        reset_calls: u32,
    }

    impl Scene<EmptyModel> for CountingScene {
        fn base(&self) -> &SceneBase {
            &self.base
        }
        fn base_mut(&mut self) -> &mut SceneBase {
            &mut self.base
        }
        fn setup(&mut self, _ctx: &mut SceneContext<EmptyModel>) {
            self.setup_calls += 1;
        }
        fn tick(&mut self, _ctx: &mut SceneContext<EmptyModel>) {
            self.base.tick_count += 1;
        }
        fn reset(&mut self, _ctx: &mut SceneContext<EmptyModel>) {
            self.base_mut().reset();
            self.reset_calls += 1;
        }
    }

    #[test]
    fn lifecycle_counts_setup_and_reset() {
        let model: Model<EmptyModel> = Model::new();
        let mut platform = NativePlatform::new(0);
        let mut scene = CountingScene {
            base: SceneBase::new(),
            setup_calls: 0,
            reset_calls: 0,
        };
        {
            let mut ctx = SceneContext { model: &model, platform: &mut platform };
            scene.setup(&mut ctx);
            scene.tick(&mut ctx);
            scene.reset(&mut ctx);
        }
        assert_eq!(scene.setup_calls, 1);
        assert_eq!(scene.reset_calls, 1);
        assert_eq!(scene.base.tick_count, 0);
    }
}
