use std::num::NonZeroU8;
use std::path::Path;
use std::time::Duration;

use config_file::FromConfigFile;
use serde::Deserialize;

use crate::palettes::PaletteId;

const DEFAULT_BLEND_STEP: NonZeroU8 = match NonZeroU8::new(12) {
    Some(step) => step,
    None => unreachable!(),
};

/// Options of the palette cycler, usually read from a TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CyclerOptions {
    /// Palettes to cycle through, in order.
    pub active_palettes: Vec<PaletteId>,
    pub seconds_per_palette: u64,
    pub blend_interval_ms: u64,
    /// Largest change of a single color channel per blend.
    pub blend_step: NonZeroU8,
}

impl Default for CyclerOptions {
    fn default() -> Self {
        CyclerOptions {
            active_palettes: vec![PaletteId::Fire],
            seconds_per_palette: 10,
            blend_interval_ms: 10,
            blend_step: DEFAULT_BLEND_STEP,
        }
    }
}

impl CyclerOptions {
    pub fn load(path: &Path) -> Result<CyclerOptions, String> {
        let options = match CyclerOptions::from_config_file(path) {
            Ok(options) => options,
            Err(err) => return Err(format!("Cannot load {}: {}", path.display(), err)),
        };

        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.active_palettes.is_empty() {
            return Err("active_palettes must name at least one palette".to_string());
        }
        Ok(())
    }

    pub fn palette_interval(&self) -> Duration {
        Duration::from_secs(self.seconds_per_palette)
    }

    pub fn blend_interval(&self) -> Duration {
        Duration::from_millis(self.blend_interval_ms)
    }
}
