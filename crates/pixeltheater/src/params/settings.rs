//! The per-scene parameter value store and its scene-facing proxy.

use std::collections::HashMap;

use super::def::ParamDef;
use super::flags::ParamFlags;
use super::value::{ParamType, ParamValue};
use log::warn;

/// `name -> (definition, current value)`. Insertion order is irrelevant for
/// semantics; iteration order is definition order for schema reflection.
#[derive(Default)]
pub struct Settings {
    order: Vec<String>,
    entries: HashMap<String, (ParamDef, ParamValue)>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_parameter(&mut self, def: ParamDef) {
        let name = def.name.clone();
        let default = def.validate_value(def.get_default_value());
        if !self.entries.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.entries.insert(name, (def, default));
    }

    pub fn add_range_parameter(&mut self, name: &str, min: f32, max: f32, default: f32, flags: ParamFlags, description: &str) {
        self.add_parameter(ParamDef::create_range(name, min, max, default, flags, description));
    }

    pub fn add_count_parameter(&mut self, name: &str, min: i32, max: i32, default: i32, flags: ParamFlags, description: &str) {
        self.add_parameter(ParamDef::create_count(name, min, max, default, flags, description));
    }

    /// Ergonomic string-driven scene setup. Unknown type strings are dropped
    /// with a warning; unknown flag tokens in the flags string are ignored.
    pub fn add_parameter_from_strings(&mut self, name: &str, type_str: &str, default: &str, flags_str: &str, description: &str) {
        let flags = ParamFlags::from_str_liberal(flags_str);
        let def = match type_str {
            "ratio" => ParamDef::create_ratio(name, default.parse().unwrap_or(0.0), flags, description),
            "signed_ratio" => ParamDef::create_signed_ratio(name, default.parse().unwrap_or(0.0), flags, description),
            "angle" => ParamDef::create_angle(name, default.parse().unwrap_or(0.0), flags, description),
            "signed_angle" => ParamDef::create_signed_angle(name, default.parse().unwrap_or(0.0), flags, description),
            "switch" => ParamDef::create_switch(name, default.parse().unwrap_or(false), description),
            // `range`/`count` have no min/max in this string form, so (like the
            // definition this is ported from) they get a degenerate 0.0..=0.0
            // range; use `add_range_parameter`/`add_count_parameter` for a real one.
            "range" => ParamDef::create_range(name, 0.0, 0.0, default.parse().unwrap_or(0.0), flags, description),
            "count" => ParamDef::create_count(name, 0, 0, default.parse().unwrap_or(0), flags, description),
            "palette" => ParamDef::create_palette(name, default.parse().unwrap_or(-1), description),
            _ => {
                warn!("unknown parameter type '{type_str}' for '{name}', dropping parameter");
                return;
            }
        };
        self.add_parameter(def);
    }

    pub fn set_value(&mut self, name: &str, value: ParamValue) {
        match self.entries.get_mut(name) {
            Some((def, stored)) => {
                *stored = def.validate_value(value);
            }
            None => warn!("set_value on unknown parameter '{name}'"),
        }
    }

    pub fn get_value(&self, name: &str) -> ParamValue {
        self.entries
            .get(name)
            .map(|(_, v)| *v)
            .unwrap_or_else(|| {
                warn!("get_value on unknown parameter '{name}'");
                ParamValue::sentinel_for(ParamType::Range)
            })
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get_metadata(&self, name: &str) -> Option<&ParamDef> {
        self.entries.get(name).map(|(def, _)| def)
    }

    pub fn get_type(&self, name: &str) -> Option<ParamType> {
        self.get_metadata(name).map(|def| def.param_type)
    }

    pub fn reset_all(&mut self) {
        for name in &self.order {
            if let Some((def, value)) = self.entries.get_mut(name) {
                *value = def.validate_value(def.get_default_value());
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParamDef, &ParamValue)> {
        self.order.iter().filter_map(move |name| self.entries.get(name)).map(|(def, value)| (def, value))
    }
}

/// Scene-facing accessor. `settings["name"]` in the original surfaces an
/// implicitly-converting proxy; Rust makes the read/write split explicit.
pub struct SettingsProxy<'a> {
    settings: &'a mut Settings,
}

impl<'a> SettingsProxy<'a> {
    pub fn new(settings: &'a mut Settings) -> Self {
        Self { settings }
    }

    pub fn get(&self, name: &str) -> ParamValue {
        self.settings.get_value(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.settings.set_value(name, value.into());
    }

    pub fn get_float(&self, name: &str) -> f32 {
        self.get(name).as_float()
    }

    pub fn get_int(&self, name: &str) -> i32 {
        self.get(name).as_int()
    }

    pub fn get_bool(&self, name: &str) -> bool {
        self.get(name).as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_all_restores_defaults() {
        let mut settings = Settings::new();
        settings.add_range_parameter("speed", 0.0, 1.0, 0.5, ParamFlags::CLAMP, "");
        settings.set_value("speed", ParamValue::Float(0.9));
        settings.reset_all();
        assert_eq!(settings.get_value("speed"), ParamValue::Float(0.5));
    }

    #[test]
    fn get_value_on_missing_parameter_is_sentinel() {
        let settings = Settings::new();
        assert_eq!(settings.get_value("missing"), ParamValue::sentinel_for(ParamType::Range));
    }

    #[test]
    fn proxy_round_trips_through_flag_rules() {
        let mut settings = Settings::new();
        settings.add_range_parameter("speed", 0.0, 1.0, 0.5, ParamFlags::CLAMP, "");
        let mut proxy = SettingsProxy::new(&mut settings);
        proxy.set("speed", 2.0_f32);
        assert_eq!(proxy.get_float("speed"), 1.0);
    }

    #[test]
    fn add_parameter_from_strings_drops_unknown_type() {
        let mut settings = Settings::new();
        settings.add_parameter_from_strings("x", "bogus", "0", "", "");
        assert!(!settings.has_parameter("x"));
    }
}
