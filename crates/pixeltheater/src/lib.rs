pub mod benchmark;
pub mod color;
pub mod config;
pub mod constants;
pub mod easing;
pub mod led;
pub mod math;
pub mod model;
pub mod params;
pub mod platform;
pub mod random;
pub mod scene;
pub mod scenekit;
pub mod theater;

// Re-export key types at crate root for convenience
pub use color::{blend, fill_gradient_rgb, fill_rainbow, fill_solid, hsv2rgb_rainbow, nblend, scale8, scale8_video, CHSV, CRGB, CRGBPalette16};
pub use config::TheaterConfig;
pub use constants::{PT_HALF_PI, PT_PI, PT_TWO_PI};
pub use easing::{ease, Easing};
pub use led::LedBuffer;
pub use math::{clamp_value, cos8, map_f32, map_i32, qadd8, qsub8, sin8};
pub use model::{Edge, Face, FaceType, LedGroupView, Model, ModelDefinition, ModelValidation, Neighbor, Point};
pub use params::{ParamDef, ParamFlags, ParamType, ParamValue, ParameterSchema, SceneParameterSchema, Settings, SettingsProxy};
pub use platform::{NativePlatform, Platform};
pub use scene::{Scene, SceneBase, SceneContext, SceneMetadata};
pub use theater::Theater;
