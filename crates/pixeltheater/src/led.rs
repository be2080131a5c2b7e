//! A thin, bounds-clamped, non-owning view over a contiguous LED color buffer.

use crate::color::CRGB;

/// A non-owning view over `count` LEDs. The backing storage is owned by the
/// platform and must outlive the buffer.
pub struct LedBuffer<'a> {
    leds: &'a mut [CRGB],
    /// Fallback storage for the mutable accessors on an empty buffer, so they
    /// can return `&mut CRGB` instead of panicking or returning `Option`.
    dummy: CRGB,
}

impl<'a> LedBuffer<'a> {
    pub fn new(leds: &'a mut [CRGB]) -> Self {
        Self { leds, dummy: CRGB::BLACK }
    }

    pub fn led_count(&self) -> usize {
        self.leds.len()
    }

    fn clamp(&self, i: usize) -> usize {
        if self.leds.is_empty() {
            0
        } else {
            i.min(self.leds.len() - 1)
        }
    }

    pub fn led(&self, i: usize) -> CRGB {
        if self.leds.is_empty() {
            return CRGB::BLACK;
        }
        self.leds[self.clamp(i)]
    }

    pub fn led_mut(&mut self, i: usize) -> &mut CRGB {
        if self.leds.is_empty() {
            self.dummy = CRGB::BLACK;
            return &mut self.dummy;
        }
        let idx = self.clamp(i);
        &mut self.leds[idx]
    }

    pub fn as_slice(&self) -> &[CRGB] {
        self.leds
    }

    pub fn as_mut_slice(&mut self) -> &mut [CRGB] {
        self.leds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CRGB> {
        self.leds.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, CRGB> {
        self.leds.iter_mut()
    }
}

impl<'a> std::ops::Index<usize> for LedBuffer<'a> {
    type Output = CRGB;
    fn index(&self, i: usize) -> &CRGB {
        &self.leds[self.clamp(i)]
    }
}

impl<'a> std::ops::IndexMut<usize> for LedBuffer<'a> {
    fn index_mut(&mut self, i: usize) -> &mut CRGB {
        if self.leds.is_empty() {
            self.dummy = CRGB::BLACK;
            return &mut self.dummy;
        }
        let idx = self.clamp(i);
        &mut self.leds[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_index_clamps_to_last() {
        let mut backing = vec![CRGB::BLACK; 4];
        let buf = LedBuffer::new(&mut backing);
        assert_eq!(buf.led(100), buf.led(3));
    }

    #[test]
    fn empty_buffer_returns_dummy_black() {
        let mut backing: Vec<CRGB> = Vec::new();
        let buf = LedBuffer::new(&mut backing);
        assert_eq!(buf.led(0), CRGB::BLACK);
    }

    #[test]
    fn empty_buffer_led_mut_does_not_panic() {
        let mut backing: Vec<CRGB> = Vec::new();
        let mut buf = LedBuffer::new(&mut backing);
        *buf.led_mut(0) = CRGB::WHITE;
        buf[5] = CRGB::RED;
    }

    #[test]
    fn index_mut_writes_through() {
        let mut backing = vec![CRGB::BLACK; 4];
        let mut buf = LedBuffer::new(&mut backing);
        buf[2] = CRGB::WHITE;
        drop(buf);
        assert_eq!(backing[2], CRGB::WHITE);
    }
}
