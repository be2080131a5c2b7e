//! Convenience re-exports for scene authors: `use pixeltheater::scenekit::*;`
//! pulls in color types, math helpers, easing, and the parameter flags
//! without needing to know the crate's internal module layout.

pub use crate::color::{
    blend, fill_gradient_rgb, fill_rainbow, fill_solid, hsv2rgb_rainbow, nblend, scale8, scale8_video, CHSV, CRGB, CRGBPalette16,
};
pub use crate::constants::{PT_HALF_PI, PT_PI, PT_TWO_PI};
pub use crate::easing::{ease, Easing};
pub use crate::math::{clamp_value, cos8, map_f32, map_i32, qadd8, qsub8, sin8};
pub use crate::params::{ParamFlags, ParamValue};
pub use crate::scene::{Scene, SceneBase, SceneContext, SceneMetadata};
