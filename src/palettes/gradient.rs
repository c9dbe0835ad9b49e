use palette::Srgb;

use crate::palettes::{Palette16, PALETTE_SIZE};

/// One color stop of a gradient. Positions run from 0 to 255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub position: u8,
    pub color: Srgb<u8>,
}

impl GradientStop {
    pub const fn new(position: u8, red: u8, green: u8, blue: u8) -> GradientStop {
        GradientStop {
            position,
            color: Srgb::new(red, green, blue),
        }
    }
}

/// Spreads a gradient over the 16 slots of a palette.
///
/// The gradient ends at the first stop positioned at 255. Gradients that do
/// not start at 0 or end at 255 still resolve, just not to anything pretty.
pub fn resolve(stops: &[GradientStop]) -> Palette16 {
    let mut entries = [Srgb::new(0, 0, 0); PALETTE_SIZE];

    let Some(first) = stops.first() else {
        return Palette16::new(entries);
    };

    let end = stops
        .iter()
        .position(|stop| stop.position == 255)
        .map_or(stops.len(), |i| i + 1);
    let stops = &stops[..end];

    if stops.len() == 1 {
        return Palette16::new([first.color; PALETTE_SIZE]);
    }

    // With few stops several segments would land on the same slot; give each
    // its own instead.
    let sparse = stops.len() < PALETTE_SIZE;
    let mut last_slot: Option<usize> = None;
    let mut start_position = 0u8;
    let mut start_color = first.color;

    for stop in &stops[1..] {
        let mut start_slot = usize::from(start_position / 16);
        let mut end_slot = usize::from(stop.position / 16);

        if sparse {
            if let Some(last) = last_slot {
                if start_slot <= last && last < PALETTE_SIZE - 1 {
                    start_slot = last + 1;
                    end_slot = end_slot.max(start_slot);
                }
            }
            last_slot = Some(end_slot);
        }

        fill_gradient(&mut entries, start_slot, start_color, end_slot, stop.color);
        start_position = stop.position;
        start_color = stop.color;
    }

    Palette16::new(entries)
}

/// Fixed-point ramp from `start_color` at `start_slot` to roughly
/// `end_color` at `end_slot`, both inclusive.
fn fill_gradient(
    entries: &mut [Srgb<u8>; PALETTE_SIZE],
    mut start_slot: usize,
    mut start_color: Srgb<u8>,
    mut end_slot: usize,
    mut end_color: Srgb<u8>,
) {
    if end_slot < start_slot {
        std::mem::swap(&mut start_slot, &mut end_slot);
        std::mem::swap(&mut start_color, &mut end_color);
    }

    let divisor = (end_slot - start_slot).max(1) as i16;
    let delta = |from: u8, to: u8| (((i16::from(to) - i16::from(from)) << 7) / divisor).wrapping_mul(2);

    let deltas = [
        delta(start_color.red, end_color.red),
        delta(start_color.green, end_color.green),
        delta(start_color.blue, end_color.blue),
    ];
    let mut channels = [
        u16::from(start_color.red) << 8,
        u16::from(start_color.green) << 8,
        u16::from(start_color.blue) << 8,
    ];

    for entry in &mut entries[start_slot..=end_slot] {
        *entry = Srgb::new(
            (channels[0] >> 8) as u8,
            (channels[1] >> 8) as u8,
            (channels[2] >> 8) as u8,
        );
        for (channel, delta) in channels.iter_mut().zip(deltas) {
            *channel = channel.wrapping_add(delta as u16);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes::presets;

    #[test]
    fn fire_anchors_land_on_their_slots() {
        let fire = resolve(presets::FIRE);

        assert_eq!(fire[0], Srgb::new(255, 0, 0));
        assert_eq!(fire[4], Srgb::new(139, 0, 0));
        assert_eq!(fire[6], Srgb::new(0, 0, 0));
        assert_eq!(fire[7], Srgb::new(0, 0, 0));
        assert_eq!(fire[13], Srgb::new(255, 140, 0));
        assert_eq!(fire[15], Srgb::new(255, 215, 0));
    }

    #[test]
    fn ice_second_segment_is_pushed_past_the_first() {
        let ice = resolve(presets::ICE);

        assert_eq!(ice[0], Srgb::new(224, 240, 255));
        assert_eq!(ice[7], Srgb::new(31, 147, 255));
        assert_eq!(ice[8], Srgb::new(31, 147, 255));
    }

    #[test]
    fn full_range_in_one_slot_step() {
        let stops = [
            GradientStop::new(0, 0, 255, 0),
            GradientStop::new(16, 255, 0, 0),
            GradientStop::new(255, 255, 0, 0),
        ];
        let palette = resolve(&stops);

        assert_eq!(palette[0], Srgb::new(0, 255, 0));
        assert_eq!(palette[1], Srgb::new(255, 0, 0));
        assert_eq!(palette[15], Srgb::new(255, 0, 0));
    }

    #[test]
    fn degenerate_gradients_do_not_panic() {
        assert_eq!(resolve(&[]), Palette16::new([Srgb::new(0, 0, 0); PALETTE_SIZE]));

        let single = resolve(&[GradientStop::new(255, 1, 2, 3)]);
        assert_eq!(single, Palette16::new([Srgb::new(1, 2, 3); PALETTE_SIZE]));

        let unterminated = resolve(&[GradientStop::new(0, 10, 10, 10), GradientStop::new(64, 20, 20, 20)]);
        assert_eq!(unterminated[0], Srgb::new(10, 10, 10));
        assert_eq!(unterminated[4], Srgb::new(20, 20, 20));

        let backwards = resolve(&[
            GradientStop::new(0, 0, 0, 0),
            GradientStop::new(200, 100, 100, 100),
            GradientStop::new(100, 50, 50, 50),
            GradientStop::new(255, 0, 0, 0),
        ]);
        assert_eq!(backwards.entries().len(), PALETTE_SIZE);
    }

    #[test]
    fn resolving_is_deterministic() {
        for id in presets::PaletteId::ALL {
            assert_eq!(resolve(id.gradient()), resolve(id.gradient()));
        }
    }
}
