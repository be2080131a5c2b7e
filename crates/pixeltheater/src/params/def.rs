//! Immutable parameter definitions and the range/flag rule handlers.

use log::warn;

use super::flags::ParamFlags;
use super::value::{ParamType, ParamValue};
use crate::constants::{ANGLE_MAX, ANGLE_MIN, RATIO_MAX, RATIO_MIN, SIGNED_ANGLE_MAX, SIGNED_ANGLE_MIN, SIGNED_RATIO_MAX, SIGNED_RATIO_MIN};

#[derive(Debug, Clone)]
pub struct ParamDef {
    pub name: String,
    pub param_type: ParamType,
    pub flags: ParamFlags,
    pub description: String,
    pub default_value: ParamValue,
    min: f32,
    max: f32,
    pub options: Vec<String>,
}

impl ParamDef {
    fn implied_range(param_type: ParamType) -> Option<(f32, f32)> {
        match param_type {
            ParamType::Ratio => Some((RATIO_MIN, RATIO_MAX)),
            ParamType::SignedRatio => Some((SIGNED_RATIO_MIN, SIGNED_RATIO_MAX)),
            ParamType::Angle => Some((ANGLE_MIN, ANGLE_MAX)),
            ParamType::SignedAngle => Some((SIGNED_ANGLE_MIN, SIGNED_ANGLE_MAX)),
            _ => None,
        }
    }

    pub fn create_ratio(name: &str, default: f32, flags: ParamFlags, description: &str) -> Self {
        Self::new_float(name, ParamType::Ratio, RATIO_MIN, RATIO_MAX, default, flags, description)
    }

    pub fn create_signed_ratio(name: &str, default: f32, flags: ParamFlags, description: &str) -> Self {
        Self::new_float(name, ParamType::SignedRatio, SIGNED_RATIO_MIN, SIGNED_RATIO_MAX, default, flags, description)
    }

    pub fn create_angle(name: &str, default: f32, flags: ParamFlags, description: &str) -> Self {
        Self::new_float(name, ParamType::Angle, ANGLE_MIN, ANGLE_MAX, default, flags, description)
    }

    pub fn create_signed_angle(name: &str, default: f32, flags: ParamFlags, description: &str) -> Self {
        Self::new_float(name, ParamType::SignedAngle, SIGNED_ANGLE_MIN, SIGNED_ANGLE_MAX, default, flags, description)
    }

    pub fn create_range(name: &str, min: f32, max: f32, default: f32, flags: ParamFlags, description: &str) -> Self {
        Self::new_float(name, ParamType::Range, min, max, default, flags, description)
    }

    pub fn create_count(name: &str, min: i32, max: i32, default: i32, flags: ParamFlags, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: ParamType::Count,
            flags,
            description: description.to_string(),
            default_value: ParamValue::Int(default),
            min: min as f32,
            max: max as f32,
            options: Vec::new(),
        }
    }

    /// String-creatable resource handle; no range, no flags (matches
    /// `palette`'s `TypeInfo::allowed_flags == NONE`).
    pub fn create_palette(name: &str, default: i32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: ParamType::Palette,
            flags: ParamFlags::NONE,
            description: description.to_string(),
            default_value: ParamValue::PaletteRef(default),
            min: 0.0,
            max: 0.0,
            options: Vec::new(),
        }
    }

    pub fn create_switch(name: &str, default: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: ParamType::Switch,
            flags: ParamFlags::NONE,
            description: description.to_string(),
            default_value: ParamValue::Bool(default),
            min: 0.0,
            max: 0.0,
            options: Vec::new(),
        }
    }

    /// `default_option` names an option; unresolved names default to index 0.
    pub fn create_select(name: &str, options: &[&str], default_option: Option<&str>, flags: ParamFlags, description: &str) -> Self {
        let default_index = default_option
            .and_then(|wanted| options.iter().position(|o| *o == wanted))
            .unwrap_or(0) as i32;
        Self {
            name: name.to_string(),
            param_type: ParamType::Select,
            flags,
            description: description.to_string(),
            default_value: ParamValue::Int(default_index),
            min: 0.0,
            max: (options.len().saturating_sub(1)) as f32,
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn new_float(name: &str, param_type: ParamType, min: f32, max: f32, default: f32, flags: ParamFlags, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            flags,
            description: description.to_string(),
            default_value: ParamValue::Float(default),
            min,
            max,
            options: Vec::new(),
        }
    }

    pub fn has_flag(&self, flag: ParamFlags) -> bool {
        self.flags.has_flag(flag)
    }

    pub fn has_range(&self) -> bool {
        Self::implied_range(self.param_type).is_some() || matches!(self.param_type, ParamType::Range | ParamType::Count | ParamType::Select)
    }

    pub fn is_select_type(&self) -> bool {
        self.param_type == ParamType::Select
    }

    pub fn get_min(&self) -> f32 {
        self.min
    }

    pub fn get_max(&self) -> f32 {
        self.max
    }

    pub fn get_default_value(&self) -> ParamValue {
        self.default_value
    }

    /// Apply flag rules (CLAMP/WRAP, CLAMP winning ties) and range bounds to
    /// a candidate value, returning the stored result. `NONE` with an
    /// out-of-range value yields the type's sentinel.
    pub fn validate_value(&self, candidate: ParamValue) -> ParamValue {
        let converted = super::value::ParamValue::convert_to(candidate, self.param_type, self.param_type);
        if !self.has_range() {
            return converted;
        }

        match converted {
            ParamValue::Float(v) => ParamValue::Float(self.apply_flags_float(v)),
            ParamValue::Int(v) => ParamValue::Int(self.apply_flags_int(v)),
            other => other,
        }
    }

    fn apply_flags_float(&self, value: f32) -> f32 {
        let effective = self.flags.effective();
        if effective.has_flag(ParamFlags::CLAMP) {
            crate::math::clamp_value(value, self.min, self.max)
        } else if effective.has_flag(ParamFlags::WRAP) {
            wrap_float(value, self.min, self.max)
        } else if value < self.min || value > self.max {
            warn!("parameter {} value {value} out of range [{},{}], using sentinel", self.name, self.min, self.max);
            ParamValue::sentinel_for(self.param_type).as_float()
        } else {
            value
        }
    }

    fn apply_flags_int(&self, value: i32) -> i32 {
        let effective = self.flags.effective();
        let (min, max) = (self.min as i32, self.max as i32);
        if effective.has_flag(ParamFlags::CLAMP) {
            crate::math::clamp_value(value, min, max)
        } else if effective.has_flag(ParamFlags::WRAP) {
            wrap_int(value, min, max)
        } else if value < min || value > max {
            warn!("parameter {} value {value} out of range [{min},{max}], using sentinel", self.name);
            ParamValue::sentinel_for(self.param_type).as_int()
        } else {
            value
        }
    }
}

/// `value - floor((value - lo) / (hi - lo)) * (hi - lo)`.
fn wrap_float(value: f32, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    let span = hi - lo;
    value - ((value - lo) / span).floor() * span
}

/// `(value - lo) mod (hi - lo + 1) + lo`, handling negatives without overflow.
fn wrap_int(value: i32, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo + 1) as i64;
    let offset = (value as i64 - lo as i64).rem_euclid(span);
    (offset + lo as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_against_their_own_range() {
        let def = ParamDef::create_ratio("speed", 0.5, ParamFlags::CLAMP, "");
        let stored = def.validate_value(def.get_default_value());
        assert_eq!(stored, def.get_default_value());
    }

    #[test]
    fn clamp_keeps_value_within_bounds() {
        let def = ParamDef::create_ratio("speed", 0.5, ParamFlags::CLAMP, "");
        let stored = def.validate_value(ParamValue::Float(1.5));
        assert_eq!(stored, ParamValue::Float(1.0));
    }

    #[test]
    fn wrap_keeps_value_within_bounds() {
        let def = ParamDef::create_range("angle", 0.0, 10.0, 0.0, ParamFlags::WRAP, "");
        let stored = def.validate_value(ParamValue::Float(15.0));
        if let ParamValue::Float(v) = stored {
            assert!(v >= 0.0 && v <= 10.0);
        } else {
            panic!("expected float");
        }
    }

    #[test]
    fn none_flag_with_out_of_range_value_returns_sentinel() {
        let def = ParamDef::create_ratio("speed", 0.5, ParamFlags::NONE, "");
        let stored = def.validate_value(ParamValue::Float(5.0));
        assert_eq!(stored, ParamValue::sentinel_for(ParamType::Ratio));
    }

    #[test]
    fn clamp_and_wrap_together_clamp_wins() {
        let def = ParamDef::create_range("angle", 0.0, 10.0, 0.0, ParamFlags::CLAMP.union(ParamFlags::WRAP), "");
        let stored = def.validate_value(ParamValue::Float(15.0));
        assert_eq!(stored, ParamValue::Float(10.0));
    }

    #[test]
    fn select_default_resolves_named_option() {
        let def = ParamDef::create_select("mode", &["a", "b", "c"], Some("b"), ParamFlags::NONE, "");
        assert_eq!(def.get_default_value(), ParamValue::Int(1));
    }
}
