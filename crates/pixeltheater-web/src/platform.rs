//! [`Platform`] backend that targets the browser: timing via `performance.now()`
//! through `js_sys`, logging routed through the `log`/`console_log` bridge.

use pixeltheater::{Platform, CRGB};

pub struct WebPlatform {
    leds: Vec<CRGB>,
    brightness: u8,
    max_refresh_rate: u8,
    dither_mode: u8,
    started_at_ms: f64,
    last_delta_at_ms: f64,
}

impl WebPlatform {
    pub fn new(num_leds: usize) -> Self {
        let now = now_ms();
        Self {
            leds: vec![CRGB::BLACK; num_leds],
            brightness: 255,
            max_refresh_rate: 60,
            dither_mode: 0,
            started_at_ms: now,
            last_delta_at_ms: now,
        }
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

impl Platform for WebPlatform {
    fn get_leds(&mut self) -> &mut [CRGB] {
        &mut self.leds
    }

    fn num_leds(&self) -> usize {
        self.leds.len()
    }

    /// The browser renderer reads LED state directly off `get_leds()` each
    /// frame; there is no hardware strip to flush here.
    fn show(&mut self) {}

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn get_brightness(&self) -> u8 {
        self.brightness
    }

    fn set_max_refresh_rate(&mut self, fps: u8) {
        self.max_refresh_rate = fps;
    }

    fn set_dither(&mut self, mode: u8) {
        self.dither_mode = mode;
    }

    fn delta_time(&mut self) -> f32 {
        let now = now_ms();
        let dt = ((now - self.last_delta_at_ms) / 1000.0) as f32;
        self.last_delta_at_ms = now;
        dt.min(0.1)
    }

    fn millis(&self) -> u32 {
        (now_ms() - self.started_at_ms) as u32
    }
}
