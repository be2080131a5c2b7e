//! Web/C ABI parameter JSON: a flat array of live values, keyed by control
//! widget, distinct from [`pixeltheater::SceneParameterSchema`]'s
//! `{scene_name, parameters}` reflection shape used by non-browser hosts.

use pixeltheater::{ParamDef, ParamType, ParamValue, Settings};

pub fn parameters_json(settings: &Settings) -> String {
    let entries: Vec<serde_json::Value> = settings.iter().map(|(def, value)| parameter_entry(def, *value)).collect();
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}

fn parameter_entry(def: &ParamDef, value: ParamValue) -> serde_json::Value {
    let control_type = match def.param_type {
        ParamType::Switch => "checkbox",
        ParamType::Select => "select",
        _ => "slider",
    };

    let mut entry = serde_json::json!({
        "id": def.name,
        "label": def.name,
        "type": def.param_type.as_str(),
        "controlType": control_type,
    });

    match control_type {
        "checkbox" => {
            entry["value"] = serde_json::json!(value.as_bool());
        }
        "select" => {
            // Current selection, not the original's "TODO" placeholder --
            // `Settings` exposes the live value directly.
            entry["value"] = serde_json::json!(value.as_int().to_string());
            entry["options"] = serde_json::json!(def.options);
        }
        _ => {
            let value_str = match def.param_type {
                ParamType::Count => value.as_int().to_string(),
                _ => format!("{:.6}", value.as_float()),
            };
            entry["value"] = serde_json::json!(value_str);
            entry["min"] = serde_json::json!(def.get_min());
            entry["max"] = serde_json::json!(def.get_max());
            entry["step"] = serde_json::json!(step_for(def.param_type, def.get_min(), def.get_max()));
        }
    }

    entry
}

fn step_for(param_type: ParamType, min: f32, max: f32) -> f32 {
    match param_type {
        ParamType::Ratio | ParamType::SignedRatio => 0.01,
        ParamType::Angle | ParamType::SignedAngle => std::f32::consts::PI / 100.0,
        ParamType::Range => {
            if max != min {
                (max - min) / 100.0
            } else {
                0.01
            }
        }
        ParamType::Count => 1.0,
        _ => 0.01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixeltheater::ParamFlags;

    #[test]
    fn ratio_slider_reports_live_value_and_step() {
        let mut settings = Settings::new();
        settings.add_parameter(ParamDef::create_ratio("speed", 0.5, ParamFlags::CLAMP, ""));
        settings.set_value("speed", ParamValue::Float(1.5));
        let json = parameters_json(&settings);
        assert!(json.contains("\"id\":\"speed\""));
        assert!(json.contains("\"type\":\"ratio\""));
        assert!(json.contains("\"controlType\":\"slider\""));
        assert!(json.contains("\"value\":\"1.000000\""));
        assert!(json.contains("\"min\":0.0"));
        assert!(json.contains("\"max\":1.0"));
        assert!(json.contains("\"step\":0.01"));
    }

    #[test]
    fn switch_reports_unquoted_boolean() {
        let mut settings = Settings::new();
        settings.add_parameter(ParamDef::create_switch("glow", true, ""));
        let json = parameters_json(&settings);
        assert!(json.contains("\"controlType\":\"checkbox\""));
        assert!(json.contains("\"value\":true"));
    }

    #[test]
    fn select_reports_current_index_and_options() {
        let mut settings = Settings::new();
        settings.add_parameter(ParamDef::create_select("mode", &["a", "b", "c"], Some("b"), ParamFlags::NONE, ""));
        let json = parameters_json(&settings);
        assert!(json.contains("\"controlType\":\"select\""));
        assert!(json.contains("\"value\":\"1\""));
        assert!(json.contains("\"options\":[\"a\",\"b\",\"c\"]"));
    }
}
