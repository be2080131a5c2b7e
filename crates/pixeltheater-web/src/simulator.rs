//! Browser-facing wrapper around a [`Theater`]: camera state (rotation, zoom),
//! frame-rate tracking, and JSON reflection of scene metadata/parameters.

use pixeltheater::{ModelDefinition, ParamType, ParamValue, Scene, Theater};

use crate::platform::WebPlatform;
use crate::web_schema;

pub struct Simulator<D: ModelDefinition> {
    theater: Theater<D>,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    auto_rotate: bool,
    auto_rotate_speed: f32,
    debug_mode: bool,
    canvas_width: u32,
    canvas_height: u32,
    fps: f32,
    frame_count: u64,
}

impl<D: ModelDefinition> Simulator<D> {
    pub fn new(scenes: Vec<Box<dyn Scene<D>>>) -> Self {
        let platform = Box::new(WebPlatform::new(D::LED_COUNT));
        let mut theater = Theater::new(platform);
        for scene in scenes {
            theater.add_scene(scene);
        }
        theater.start();
        Self {
            theater,
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
            auto_rotate: false,
            auto_rotate_speed: 0.5,
            debug_mode: false,
            canvas_width: 0,
            canvas_height: 0,
            fps: 0.0,
            frame_count: 0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.auto_rotate {
            self.yaw += dt * self.auto_rotate_speed;
        }
        self.theater.update();
        self.frame_count += 1;
        if dt > 0.0 {
            let instantaneous = 1.0 / dt;
            self.fps = if self.frame_count == 1 { instantaneous } else { self.fps * 0.9 + instantaneous * 0.1 };
        }
    }

    pub fn num_scenes(&self) -> usize {
        self.theater.scene_count()
    }

    pub fn change_scene(&mut self, index: usize) {
        self.theater.set_scene(index);
    }

    pub fn current_scene_metadata_json(&self) -> String {
        let meta = self.theater.current_scene_metadata();
        serde_json::json!({
            "name": meta.name,
            "description": meta.description,
            "version": meta.version,
            "author": meta.author,
            "index": self.theater.current_scene_index(),
        })
        .to_string()
    }

    /// The Web/C ABI's flat `[{id, label, type, controlType, value, ...}]`
    /// shape with live values, not [`pixeltheater::SceneParameterSchema`]'s
    /// reflection shape (used by non-browser hosts).
    pub fn scene_parameters_json(&self) -> String {
        let empty = pixeltheater::Settings::new();
        let settings = self.theater.current_scene_settings().unwrap_or(&empty);
        web_schema::parameters_json(settings)
    }

    /// Parses `value` against the parameter's declared type before storing it,
    /// since the browser only ever sends strings across the ABI boundary.
    pub fn update_scene_parameter_string(&mut self, name: &str, value: &str) {
        let Some(param_type) = self.theater.current_scene_settings().and_then(|s| s.get_type(name)) else {
            return;
        };
        let parsed = match param_type {
            ParamType::Switch => value.parse::<bool>().map(ParamValue::Bool).ok(),
            ParamType::Count | ParamType::Select => value.parse::<i32>().map(ParamValue::Int).ok(),
            _ => value.parse::<f32>().map(ParamValue::Float).ok(),
        };
        if let Some(value) = parsed {
            self.theater.set_current_scene_parameter(name, value);
        }
    }

    /// `value` is normalized 0..1, matching the Web/C ABI; the platform
    /// itself still stores brightness as a `u8`.
    pub fn set_brightness(&mut self, value: f32) {
        let scaled = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.theater.platform_mut().set_brightness(scaled);
    }

    pub fn get_brightness(&self) -> f32 {
        self.theater.platform().get_brightness() as f32 / 255.0
    }

    pub fn update_rotation(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-pixeltheater::PT_HALF_PI, pixeltheater::PT_HALF_PI);
    }

    pub fn reset_rotation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    pub fn set_auto_rotation(&mut self, enabled: bool, speed: f32) {
        self.auto_rotate = enabled;
        self.auto_rotate_speed = speed;
    }

    /// `zoom` is a percentage (100 == 1.0x), matching the Web/C ABI's
    /// integer `set_zoom_level`.
    pub fn set_zoom_level(&mut self, zoom: i32) {
        self.zoom = (zoom as f32 / 100.0).max(0.01);
    }

    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn led_count(&self) -> usize {
        D::LED_COUNT
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn toggle_debug_mode(&mut self) -> bool {
        self.debug_mode = !self.debug_mode;
        self.debug_mode
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}
