//! JSON-serializable reflection of a scene's parameters, consumed by host UIs.

use serde::Serialize;

use super::settings::Settings;
use super::value::{ParamType, ParamValue};

#[derive(Debug, Clone, Serialize)]
pub struct ParameterSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_float: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_int: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_bool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub flags: String,
    pub step: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneParameterSchema {
    pub scene_name: String,
    pub scene_description: String,
    pub parameters: Vec<ParameterSchema>,
}

impl SceneParameterSchema {
    pub fn from_settings(scene_name: &str, scene_description: &str, settings: &Settings) -> Self {
        let parameters = settings
            .iter()
            .map(|(def, value)| {
                let (default_float, default_int, default_bool) = split_default(def.get_default_value());
                let _ = value;
                ParameterSchema {
                    name: def.name.clone(),
                    param_type: def.param_type.as_str().to_string(),
                    description: def.description.clone(),
                    min: def.has_range().then(|| def.get_min()),
                    max: def.has_range().then(|| def.get_max()),
                    default_float,
                    default_int,
                    default_bool,
                    options: (!def.options.is_empty()).then(|| def.options.clone()),
                    flags: def.flags.name(),
                    step: step_for(def.param_type),
                }
            })
            .collect();
        Self {
            scene_name: scene_name.to_string(),
            scene_description: scene_description.to_string(),
            parameters,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn split_default(value: ParamValue) -> (Option<f32>, Option<i32>, Option<bool>) {
    match value {
        ParamValue::Float(v) => (Some(v), None, None),
        ParamValue::Int(v) => (None, Some(v), None),
        ParamValue::Bool(v) => (None, None, Some(v)),
        ParamValue::PaletteRef(v) | ParamValue::BitmapRef(v) => (None, Some(v), None),
    }
}

/// UI step hint: a type-appropriate default, not an authored per-parameter value.
fn step_for(param_type: ParamType) -> f32 {
    match param_type {
        ParamType::Ratio | ParamType::SignedRatio | ParamType::Angle | ParamType::SignedAngle | ParamType::Range => 0.01,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::def::ParamDef;
    use crate::params::flags::ParamFlags;

    #[test]
    fn schema_json_contains_expected_fields() {
        let mut settings = Settings::new();
        settings.add_parameter(ParamDef::create_ratio("speed", 0.5, ParamFlags::CLAMP, "how fast"));
        let schema = SceneParameterSchema::from_settings("demo", "a demo scene", &settings);
        let json = schema.to_json();
        assert!(json.contains("\"name\":\"speed\""));
        assert!(json.contains("\"type\":\"ratio\""));
        assert!(json.contains("\"min\":0.0"));
        assert!(json.contains("\"max\":1.0"));
    }

    #[test]
    fn string_fields_are_escaped() {
        let mut settings = Settings::new();
        settings.add_parameter(ParamDef::create_ratio("speed", 0.5, ParamFlags::NONE, "has \"quotes\""));
        let schema = SceneParameterSchema::from_settings("demo", "a demo scene", &settings);
        let json = schema.to_json();
        assert!(json.contains("\\\"quotes\\\""));
    }
}
