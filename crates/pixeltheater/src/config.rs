//! Process-wide capacity ceilings and defaults, set once at startup.

use crate::constants::{ABSOLUTE_MAX_FACES, ABSOLUTE_MAX_LEDS};

#[derive(Debug, Clone, Copy)]
pub struct TheaterConfig {
    pub max_leds: usize,
    pub max_faces: usize,
    pub benchmarks_enabled: bool,
    pub default_brightness: u8,
}

impl Default for TheaterConfig {
    fn default() -> Self {
        Self {
            max_leds: ABSOLUTE_MAX_LEDS,
            max_faces: ABSOLUTE_MAX_FACES,
            benchmarks_enabled: true,
            default_brightness: 255,
        }
    }
}

impl TheaterConfig {
    pub fn apply(&self) {
        crate::benchmark::set_enabled(self.benchmarks_enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = TheaterConfig::default();
        assert_eq!(config.max_leds, ABSOLUTE_MAX_LEDS);
        assert_eq!(config.default_brightness, 255);
    }
}
