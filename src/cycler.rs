use std::num::NonZeroU8;
use std::time::Instant;

use crate::config::CyclerOptions;
use crate::intervaltimer::IntervalGate;
use crate::palettes::{Palette16, PaletteId};

/// The palettes taking part in cycling. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePalettes {
    entries: Vec<(PaletteId, Palette16)>,
}

impl ActivePalettes {
    pub fn new(first: PaletteId, rest: &[PaletteId]) -> ActivePalettes {
        let entries = std::iter::once(first)
            .chain(rest.iter().copied())
            .map(|id| (id, id.resolve()))
            .collect();

        ActivePalettes { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = PaletteId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    fn get(&self, index: usize) -> (PaletteId, Palette16) {
        self.entries[index]
    }
}

impl TryFrom<&[PaletteId]> for ActivePalettes {
    type Error = String;

    fn try_from(ids: &[PaletteId]) -> Result<Self, Self::Error> {
        match ids.split_first() {
            Some((first, rest)) => Ok(ActivePalettes::new(*first, rest)),
            None => Err("No active palettes given".to_string()),
        }
    }
}

/// Blends the displayed palette through the active palettes over time.
///
/// `current()` is what gets drawn. Every palette interval the next active
/// palette becomes the target and every blend interval `current` takes one
/// bounded step toward it.
pub struct PaletteCycler {
    palettes: ActivePalettes,
    current: Palette16,
    target: Palette16,
    index: usize,
    blend_step: NonZeroU8,
    blending: bool,
    palette_gate: IntervalGate,
    blend_gate: IntervalGate,
}

impl PaletteCycler {
    pub fn new(palettes: ActivePalettes, options: &CyclerOptions, now: Instant) -> PaletteCycler {
        let (_, first) = palettes.get(0);

        PaletteCycler {
            palettes,
            current: first,
            target: first,
            index: 0,
            blend_step: options.blend_step,
            blending: false,
            palette_gate: IntervalGate::new(options.palette_interval(), now),
            blend_gate: IntervalGate::new(options.blend_interval(), now),
        }
    }

    pub fn from_options(options: &CyclerOptions, now: Instant) -> Result<PaletteCycler, String> {
        options.validate()?;
        let palettes = ActivePalettes::try_from(options.active_palettes.as_slice())?;

        log::info!(
            "Cycling {} palette(s) every {:?}: {}",
            palettes.len(),
            options.palette_interval(),
            palettes.ids().map(|id| id.name()).collect::<Vec<_>>().join(", ")
        );

        Ok(PaletteCycler::new(palettes, options, now))
    }

    pub fn current(&self) -> &Palette16 {
        &self.current
    }

    pub fn target(&self) -> &Palette16 {
        &self.target
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn target_id(&self) -> PaletteId {
        self.palettes.get(self.index).0
    }

    /// Makes the next active palette the blend target, wrapping around at
    /// the end of the list.
    pub fn advance_target(&mut self) {
        self.index = (self.index + 1) % self.palettes.len();
        let (id, palette) = self.palettes.get(self.index);
        self.target = palette;

        if self.current != self.target {
            self.blending = true;
        }
        log::info!("Blending toward palette {} ({})", id, self.index);
    }

    /// Moves `current` one step toward the target. Returns false once there
    /// is nothing left to blend.
    pub fn blend_step(&mut self) -> bool {
        let changed = self.current.blend_toward(&self.target, self.blend_step);

        if self.blending && self.current == self.target {
            self.blending = false;
            log::debug!("Reached palette {}", self.target_id());
        }

        changed
    }

    /// Runs whichever of the two timed actions are due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.palette_gate.ready(now) {
            self.advance_target();
        }

        if self.blend_gate.ready(now) {
            self.blend_step();
        }
    }
}
