use crate::color::CRGB;

/// A named, read-only-shaped view over a subset of a face's LEDs. Indexing
/// into the group indexes the same underlying storage as the face's LEDs —
/// mutating through the group mutates the LED buffer directly.
pub struct LedGroupView<'a> {
    leds: &'a mut [CRGB],
    base_offset: usize,
    local_indices: &'static [u8],
}

impl<'a> LedGroupView<'a> {
    pub fn new(leds: &'a mut [CRGB], base_offset: usize, local_indices: &'static [u8]) -> Self {
        Self {
            leds,
            base_offset,
            local_indices,
        }
    }

    pub fn len(&self) -> usize {
        self.local_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.local_indices.is_empty()
    }

    fn global_index(&self, i: usize) -> usize {
        let i = if self.leds.is_empty() {
            0
        } else if i >= self.local_indices.len() {
            self.local_indices.len().saturating_sub(1)
        } else {
            i
        };
        (self.base_offset + self.local_indices[i] as usize).min(self.leds.len().saturating_sub(1))
    }
}

impl<'a> std::ops::Index<usize> for LedGroupView<'a> {
    type Output = CRGB;
    fn index(&self, i: usize) -> &CRGB {
        &self.leds[self.global_index(i)]
    }
}

impl<'a> std::ops::IndexMut<usize> for LedGroupView<'a> {
    fn index_mut(&mut self, i: usize) -> &mut CRGB {
        let idx = self.global_index(i);
        &mut self.leds[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_into_face_local_leds() {
        let mut leds = vec![CRGB::BLACK; 10];
        let indices: &'static [u8] = &[0, 2, 4];
        let mut group = LedGroupView::new(&mut leds, 5, indices);
        group[1] = CRGB::WHITE;
        assert_eq!(leds[7], CRGB::WHITE);
    }
}
