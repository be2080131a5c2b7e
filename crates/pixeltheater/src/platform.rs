//! Uniform surface over LED output, timing, PRNG, and logging that decouples
//! scenes from whichever backend is live (hardware, native, WebGL).

use crate::color::CRGB;
use crate::random;
use log::{error, info, warn};
use std::time::Instant;

/// Backend-agnostic platform contract. Implementations own the LED storage.
pub trait Platform {
    fn get_leds(&mut self) -> &mut [CRGB];
    fn num_leds(&self) -> usize;

    /// Commit the current LED buffer to output.
    fn show(&mut self);

    fn set_brightness(&mut self, brightness: u8);
    fn get_brightness(&self) -> u8;

    /// Clear the buffer to black.
    fn clear(&mut self) {
        for led in self.get_leds() {
            *led = CRGB::BLACK;
        }
    }

    fn set_max_refresh_rate(&mut self, fps: u8);
    fn set_dither(&mut self, mode: u8);

    /// Seconds since the previous call, capped at 0.1 to avoid a huge jump on
    /// the first call or after a stall.
    fn delta_time(&mut self) -> f32;

    /// Milliseconds since process start. Monotonic; may wrap on embedded targets.
    fn millis(&self) -> u32;

    fn random8(&self) -> u8 {
        random::random8()
    }
    fn random16(&self) -> u16 {
        random::random16()
    }
    fn random(&self, max: i32) -> i32 {
        random::random(max)
    }
    fn random_range(&self, min: i32, max: i32) -> i32 {
        random::random_range(min, max)
    }
    fn random_float(&self) -> f32 {
        random::random_float()
    }
    fn random_float_max(&self, max: f32) -> f32 {
        random::random_float_max(max)
    }
    fn random_float_range(&self, min: f32, max: f32) -> f32 {
        random::random_float_range(min, max)
    }

    fn log_info(&self, message: &str) {
        info!("{message}");
    }
    fn log_warning(&self, message: &str) {
        warn!("{message}");
    }
    fn log_error(&self, message: &str) {
        error!("{message}");
    }
}

/// A headless platform for offline development and testing. `show()` is a
/// no-op; timing runs off the host clock.
pub struct NativePlatform {
    leds: Vec<CRGB>,
    brightness: u8,
    max_refresh_rate: u8,
    dither_mode: u8,
    started_at: Instant,
    last_delta_at: Instant,
}

impl NativePlatform {
    pub fn new(num_leds: usize) -> Self {
        let now = Instant::now();
        Self {
            leds: vec![CRGB::BLACK; num_leds],
            brightness: 255,
            max_refresh_rate: 60,
            dither_mode: 0,
            started_at: now,
            last_delta_at: now,
        }
    }
}

impl Platform for NativePlatform {
    fn get_leds(&mut self) -> &mut [CRGB] {
        &mut self.leds
    }

    fn num_leds(&self) -> usize {
        self.leds.len()
    }

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
        let now = Instant::now();
        let dt = now.duration_since(self.last_delta_at).as_secs_f32();
        self.last_delta_at = now;
        dt.min(0.1)
    }

    fn millis(&self) -> u32 {
        self.started_at.elapsed().as_millis() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_zeroes_buffer() {
        let mut platform = NativePlatform::new(4);
        platform.get_leds()[0] = CRGB::WHITE;
        platform.clear();
        assert_eq!(platform.get_leds()[0], CRGB::BLACK);
    }

    #[test]
    fn brightness_round_trips() {
        let mut platform = NativePlatform::new(1);
        platform.set_brightness(42);
        assert_eq!(platform.get_brightness(), 42);
    }

    #[test]
    fn delta_time_is_capped() {
        let mut platform = NativePlatform::new(1);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(platform.delta_time() <= 0.1);
    }
}
