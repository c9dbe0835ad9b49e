use std::fmt;

use serde::Deserialize;

use crate::palettes::gradient::{resolve, GradientStop};
use crate::palettes::Palette16;

pub const FIRE: &[GradientStop] = &[
    GradientStop::new(0, 255, 0, 0),     // red
    GradientStop::new(50, 139, 0, 0),    // dark red
    GradientStop::new(100, 0, 0, 0),     // black
    GradientStop::new(200, 255, 140, 0), // orange
    GradientStop::new(255, 255, 215, 0), // gold
];

pub const TEAL_GREEN_GOLD: &[GradientStop] = &[
    GradientStop::new(0, 34, 139, 34),   // forest green
    GradientStop::new(85, 0, 255, 0),    // lime
    GradientStop::new(170, 255, 215, 0), // gold
    GradientStop::new(255, 255, 140, 0), // dark orange
];

pub const RED_ROSE_LAVENDER: &[GradientStop] = &[
    GradientStop::new(0, 128, 0, 0),       // maroon
    GradientStop::new(85, 210, 105, 30),   // chocolate
    GradientStop::new(170, 255, 127, 80),  // coral
    GradientStop::new(255, 230, 230, 250), // lavender
];

pub const ICE: &[GradientStop] = &[
    GradientStop::new(0, 224, 240, 255),
    GradientStop::new(127, 31, 147, 255),
    GradientStop::new(255, 48, 64, 72),
];

pub const FAIRY: &[GradientStop] = &[
    GradientStop::new(0, 63, 57, 11),
    GradientStop::new(127, 127, 114, 22),
    GradientStop::new(224, 255, 227, 45), // fairy light
    GradientStop::new(255, 255, 255, 255),
];

/// The built-in gradients, as named in config files and on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteId {
    Fire,
    TealGreenGold,
    RedRoseLavender,
    Ice,
    Fairy,
}

impl PaletteId {
    pub const ALL: [PaletteId; 5] = [
        PaletteId::Fire,
        PaletteId::TealGreenGold,
        PaletteId::RedRoseLavender,
        PaletteId::Ice,
        PaletteId::Fairy,
    ];

    pub fn gradient(self) -> &'static [GradientStop] {
        match self {
            PaletteId::Fire => FIRE,
            PaletteId::TealGreenGold => TEAL_GREEN_GOLD,
            PaletteId::RedRoseLavender => RED_ROSE_LAVENDER,
            PaletteId::Ice => ICE,
            PaletteId::Fairy => FAIRY,
        }
    }

    pub fn resolve(self) -> Palette16 {
        resolve(self.gradient())
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteId::Fire => "fire",
            PaletteId::TealGreenGold => "teal-green-gold",
            PaletteId::RedRoseLavender => "red-rose-lavender",
            PaletteId::Ice => "ice",
            PaletteId::Fairy => "fairy",
        }
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn gradients_cover_the_full_range() {
        for id in PaletteId::ALL {
            let stops = id.gradient();
            assert_eq!(stops.first().map(|s| s.position), Some(0), "{id}");
            assert_eq!(stops.last().map(|s| s.position), Some(255), "{id}");
            assert!(stops.windows(2).all(|w| w[0].position <= w[1].position), "{id}");
        }
    }

    #[test]
    fn every_palette_resolves_to_sixteen_colors() {
        for id in PaletteId::ALL {
            assert_eq!(id.resolve().entries().len(), 16);
        }
    }

    #[test]
    fn command_line_names_match_display() {
        for id in PaletteId::ALL {
            let parsed = PaletteId::from_str(id.name(), false);
            assert_eq!(parsed, Ok(id));
        }
    }
}
