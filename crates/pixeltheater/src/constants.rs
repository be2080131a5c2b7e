//! Geometry and topology limits shared across the model and parameter systems.

pub const PT_PI: f32 = std::f32::consts::PI;
pub const PT_TWO_PI: f32 = std::f32::consts::TAU;
pub const PT_HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

pub const MAX_NEIGHBORS: usize = 7;
pub const NEIGHBOR_THRESHOLD: f32 = 30.0;
pub const MAX_LEDS_PER_FACE: usize = 128;
pub const ABSOLUTE_MAX_LEDS: usize = 10_000;
pub const ABSOLUTE_MAX_FACES: usize = 32;
pub const MAX_EDGES: usize = 6;

pub const RATIO_MIN: f32 = 0.0;
pub const RATIO_MAX: f32 = 1.0;
pub const SIGNED_RATIO_MIN: f32 = -1.0;
pub const SIGNED_RATIO_MAX: f32 = 1.0;
pub const ANGLE_MIN: f32 = 0.0;
pub const ANGLE_MAX: f32 = PT_PI;
pub const SIGNED_ANGLE_MIN: f32 = -PT_PI;
pub const SIGNED_ANGLE_MAX: f32 = PT_PI;
