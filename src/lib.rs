pub mod config;
pub mod cycler;
pub mod intervaltimer;
pub mod palettes;
pub mod preview;

pub use config::CyclerOptions;
pub use cycler::{ActivePalettes, PaletteCycler};
pub use palettes::{Blending, GradientStop, Palette16, PaletteId};
