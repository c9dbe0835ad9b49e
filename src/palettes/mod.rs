pub mod gradient;
pub mod presets;

use std::num::NonZeroU8;
use std::ops::Index;

use palette::Srgb;

pub use gradient::{resolve, GradientStop};
pub use presets::PaletteId;

pub const PALETTE_SIZE: usize = 16;

/// How a palette is sampled between two of its slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blending {
    None,
    Linear,
}

/// A gradient resolved into 16 evenly spaced colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette16 {
    entries: [Srgb<u8>; PALETTE_SIZE],
}

impl Palette16 {
    pub fn new(entries: [Srgb<u8>; PALETTE_SIZE]) -> Palette16 {
        Palette16 { entries }
    }

    pub fn entries(&self) -> &[Srgb<u8>; PALETTE_SIZE] {
        &self.entries
    }

    /// Looks up the color for an 8-bit palette index. The high nibble picks
    /// the slot, the low nibble fades toward the next one (slot 15 fades
    /// back into slot 0).
    pub fn color_at(&self, index: u8, blending: Blending) -> Srgb<u8> {
        let slot = usize::from(index >> 4);
        let fraction = index & 0x0F;
        let color = self.entries[slot];

        if fraction == 0 || blending == Blending::None {
            return color;
        }

        let next = self.entries[(slot + 1) % PALETTE_SIZE];
        let next_weight = fraction << 4;
        let weight = 255 - next_weight;

        Srgb::new(
            scale8(color.red, weight).saturating_add(scale8(next.red, next_weight)),
            scale8(color.green, weight).saturating_add(scale8(next.green, next_weight)),
            scale8(color.blue, weight).saturating_add(scale8(next.blue, next_weight)),
        )
    }

    /// Samples the palette into `pixels`, starting at `start_index` and
    /// advancing the index by `index_step` per pixel.
    pub fn fill(&self, pixels: &mut [Srgb<u8>], start_index: u8, index_step: u8, blending: Blending) {
        let mut index = start_index;
        for pixel in pixels.iter_mut() {
            *pixel = self.color_at(index, blending);
            index = index.wrapping_add(index_step);
        }
    }

    /// Moves every channel at most `step` toward `target` without passing
    /// it. Returns false if the palettes were already identical.
    pub fn blend_toward(&mut self, target: &Palette16, step: NonZeroU8) -> bool {
        let step = step.get();
        let mut changed = false;

        for (entry, goal) in self.entries.iter_mut().zip(target.entries.iter()) {
            let blended = Srgb::new(
                step_toward(entry.red, goal.red, step),
                step_toward(entry.green, goal.green, step),
                step_toward(entry.blue, goal.blue, step),
            );
            if blended != *entry {
                *entry = blended;
                changed = true;
            }
        }

        changed
    }
}

impl Index<usize> for Palette16 {
    type Output = Srgb<u8>;

    fn index(&self, slot: usize) -> &Srgb<u8> {
        &self.entries[slot]
    }
}

fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * (1 + u16::from(scale))) >> 8) as u8
}

fn step_toward(value: u8, target: u8, step: u8) -> u8 {
    if value < target {
        value.saturating_add(step).min(target)
    } else {
        value.saturating_sub(step).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire() -> Palette16 {
        PaletteId::Fire.resolve()
    }

    fn step(value: u8) -> NonZeroU8 {
        NonZeroU8::new(value).unwrap()
    }

    #[test]
    fn whole_indices_hit_slots_exactly() {
        let palette = fire();
        for slot in 0..PALETTE_SIZE {
            let index = (slot * 16) as u8;
            assert_eq!(palette.color_at(index, Blending::Linear), palette[slot]);
        }
    }

    #[test]
    fn linear_sampling_mixes_neighbours() {
        let palette = fire();
        assert_eq!(palette[0], Srgb::new(255, 0, 0));
        assert_eq!(palette[1], Srgb::new(216, 0, 0));

        assert_eq!(palette.color_at(8, Blending::Linear), Srgb::new(235, 0, 0));
        assert_eq!(palette.color_at(8, Blending::None), palette[0]);
    }

    #[test]
    fn last_slot_wraps_to_first() {
        let palette = fire();
        assert_eq!(palette[15], Srgb::new(255, 215, 0));
        assert_eq!(palette.color_at(255, Blending::Linear), Srgb::new(255, 13, 0));
        assert_eq!(palette.color_at(255, Blending::None), palette[15]);
    }

    #[test]
    fn fill_walks_indices() {
        let palette = fire();
        let mut pixels = [Srgb::new(0, 0, 0); 4];
        palette.fill(&mut pixels, 240, 16, Blending::None);

        assert_eq!(pixels[0], palette[15]);
        assert_eq!(pixels[1], palette[0]);
        assert_eq!(pixels[2], palette[1]);
        assert_eq!(pixels[3], palette[2]);
    }

    #[test]
    fn blend_clamps_at_target() {
        let mut current = Palette16::new([Srgb::new(0, 250, 100); PALETTE_SIZE]);
        let target = Palette16::new([Srgb::new(5, 255, 90); PALETTE_SIZE]);

        assert!(current.blend_toward(&target, step(12)));
        assert_eq!(current, target);
        assert!(!current.blend_toward(&target, step(12)));
        assert_eq!(current, target);
    }

    #[test]
    fn blend_moves_by_step() {
        let mut current = Palette16::new([Srgb::new(0, 255, 128); PALETTE_SIZE]);
        let target = Palette16::new([Srgb::new(255, 0, 128); PALETTE_SIZE]);

        current.blend_toward(&target, step(12));
        assert_eq!(current[0], Srgb::new(12, 243, 128));
        assert_eq!(current[15], Srgb::new(12, 243, 128));
    }

    #[test]
    fn smallest_step_still_converges() {
        let mut current = Palette16::new([Srgb::new(0, 3, 128); PALETTE_SIZE]);
        let target = Palette16::new([Srgb::new(2, 0, 128); PALETTE_SIZE]);

        assert!(current.blend_toward(&target, step(1)));
        assert!(current.blend_toward(&target, step(1)));
        assert!(current.blend_toward(&target, step(1)));
        assert_eq!(current, target);
        assert!(!current.blend_toward(&target, step(1)));
    }
}
