//! Typed parameter values and the conversion lattice between them.

use log::warn;

/// A parameter's declared type. `Ratio`/`SignedRatio`/`Angle`/`SignedAngle`
/// carry an implied range; `Range`/`Count` carry an authored one; `Select`
/// carries a named option table; `Switch` is boolean; `Palette`/`Bitmap` are
/// resource handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Ratio,
    SignedRatio,
    Angle,
    SignedAngle,
    Range,
    Count,
    Select,
    Switch,
    Palette,
    Bitmap,
}

impl ParamType {
    fn family(self) -> TypeFamily {
        match self {
            ParamType::Ratio | ParamType::SignedRatio | ParamType::Angle | ParamType::SignedAngle | ParamType::Range => TypeFamily::Float,
            ParamType::Count | ParamType::Select => TypeFamily::Int,
            ParamType::Switch => TypeFamily::Bool,
            ParamType::Palette => TypeFamily::Palette,
            ParamType::Bitmap => TypeFamily::Bitmap,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::Ratio => "ratio",
            ParamType::SignedRatio => "signed_ratio",
            ParamType::Angle => "angle",
            ParamType::SignedAngle => "signed_angle",
            ParamType::Range => "range",
            ParamType::Count => "count",
            ParamType::Select => "select",
            ParamType::Switch => "switch",
            ParamType::Palette => "palette",
            ParamType::Bitmap => "bitmap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeFamily {
    Float,
    Int,
    Bool,
    Palette,
    Bitmap,
}

/// A stored parameter value. Sentinel values (`0.0`, `-1`, `false`) are the
/// canonical "invalid result" for each family; callers must treat them as
/// "unchanged/previous value".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    PaletteRef(i32),
    BitmapRef(i32),
}

impl ParamValue {
    pub fn sentinel_for(param_type: ParamType) -> ParamValue {
        match param_type.family() {
            TypeFamily::Float => ParamValue::Float(0.0),
            TypeFamily::Int => ParamValue::Int(-1),
            TypeFamily::Bool => ParamValue::Bool(false),
            TypeFamily::Palette => ParamValue::PaletteRef(-1),
            TypeFamily::Bitmap => ParamValue::BitmapRef(-1),
        }
    }

    pub fn as_float(&self) -> f32 {
        match self {
            ParamValue::Float(v) => *v,
            ParamValue::Int(v) => *v as f32,
            ParamValue::Bool(v) => {
                if *v {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    pub fn as_int(&self) -> i32 {
        match self {
            ParamValue::Int(v) => *v,
            ParamValue::Float(v) => *v as i32,
            ParamValue::Bool(v) => {
                if *v {
                    1
                } else {
                    0
                }
            }
            ParamValue::PaletteRef(v) | ParamValue::BitmapRef(v) => *v,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            ParamValue::Bool(v) => *v,
            ParamValue::Float(v) => *v != 0.0,
            ParamValue::Int(v) => *v != 0,
            _ => false,
        }
    }

    /// Whether `self`'s family can cross-convert into `target`'s family.
    /// Float-family types interconvert, int-family types interconvert,
    /// `Switch` and the resource types are islands unto themselves.
    pub fn can_convert_to(from: ParamType, to: ParamType) -> bool {
        from.family() == to.family()
    }

    /// Convert a raw value declared as `from` into `target`'s storage,
    /// returning the target type's sentinel (with a warning) if the two
    /// types are not in the same conversion family, or if the value is NaN/Inf.
    pub fn convert_to(value: ParamValue, from: ParamType, target: ParamType) -> ParamValue {
        if !Self::can_convert_to(from, target) {
            warn!("cannot convert parameter of type {} to {}", from.as_str(), target.as_str());
            return ParamValue::sentinel_for(target);
        }
        if let ParamValue::Float(f) = value {
            if !f.is_finite() {
                warn!("parameter value {f} is NaN/Inf, using sentinel");
                return ParamValue::sentinel_for(target);
            }
        }
        match target.family() {
            TypeFamily::Float => ParamValue::Float(value.as_float()),
            TypeFamily::Int => ParamValue::Int(value.as_int()),
            TypeFamily::Bool => ParamValue::Bool(value.as_bool()),
            TypeFamily::Palette => match value {
                ParamValue::PaletteRef(v) => ParamValue::PaletteRef(v),
                _ => {
                    warn!("cannot convert non-palette value to palette parameter");
                    ParamValue::sentinel_for(target)
                }
            },
            TypeFamily::Bitmap => match value {
                ParamValue::BitmapRef(v) => ParamValue::BitmapRef(v),
                _ => {
                    warn!("cannot convert non-bitmap value to bitmap parameter");
                    ParamValue::sentinel_for(target)
                }
            },
        }
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_family_interconverts() {
        assert!(ParamValue::can_convert_to(ParamType::Ratio, ParamType::Angle));
        assert!(ParamValue::can_convert_to(ParamType::Range, ParamType::SignedRatio));
    }

    #[test]
    fn switch_is_its_own_island() {
        assert!(!ParamValue::can_convert_to(ParamType::Switch, ParamType::Ratio));
        assert!(!ParamValue::can_convert_to(ParamType::Ratio, ParamType::Switch));
    }

    #[test]
    fn resource_types_cross_convert_only_within_themselves() {
        assert!(!ParamValue::can_convert_to(ParamType::Palette, ParamType::Bitmap));
        assert!(ParamValue::can_convert_to(ParamType::Palette, ParamType::Palette));
    }

    #[test]
    fn nan_and_inf_convert_to_sentinel() {
        let v = ParamValue::convert_to(ParamValue::Float(f32::NAN), ParamType::Ratio, ParamType::Ratio);
        assert_eq!(v, ParamValue::sentinel_for(ParamType::Ratio));
        let v = ParamValue::convert_to(ParamValue::Float(f32::INFINITY), ParamType::Ratio, ParamType::Ratio);
        assert_eq!(v, ParamValue::sentinel_for(ParamType::Ratio));
    }

    #[test]
    fn cross_island_conversion_returns_sentinel() {
        let v = ParamValue::convert_to(ParamValue::Bool(true), ParamType::Switch, ParamType::Ratio);
        assert_eq!(v, ParamValue::sentinel_for(ParamType::Ratio));
    }

    #[test]
    fn same_family_conversion_succeeds() {
        let v = ParamValue::convert_to(ParamValue::Float(0.5), ParamType::Ratio, ParamType::Angle);
        assert_eq!(v, ParamValue::Float(0.5));
    }
}
