//! Selection-scoped edits of a song
//!
//! Every transform works on a [`BeatSet`]: the beats a [`Selector`] picked,
//! materialized as tree locations before anything is mutated. Transforms
//! never insert or remove beats, so the locations stay valid for the whole
//! pass.
//!
//! ## Modules
//!
//! - `shift`: move notes to a neighbouring string keeping their pitch
//! - `duration`: multiply or divide beat durations
//! - `stroke`: brush and pick strokes
//! - `remove`: clear strokes or text
//! - `rest`: turn beats into rests
//! - `effect`: dead notes and natural harmonics

pub mod duration;
pub mod effect;
pub mod remove;
pub mod rest;
pub mod shift;
pub mod stroke;

pub use duration::DurationOp;
pub use effect::NoteEffectKind;
pub use remove::RemoveTarget;

use crate::error::{Result, ToolError};
use crate::models::{Beat, GuitarString, Song, Track};
use crate::selection::{BeatLocation, Selector};

/// Direction as the user names it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Outcome of one transform pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Beats visited
    pub beats: usize,
    /// Items (notes or beats, depending on the transform) that changed
    pub changed: usize,
    /// Items left as they were because the edit was impossible
    pub skipped: usize,
}

/// A beat reachable for mutation, with the owning track's tuning
pub struct BeatMut<'a> {
    pub location: BeatLocation,
    pub is_percussion: bool,
    pub strings: &'a [GuitarString],
    pub beat: &'a mut Beat,
}

/// Selected beats of one song
pub struct BeatSet<'a> {
    song: &'a mut Song,
    locations: Vec<BeatLocation>,
}

impl<'a> BeatSet<'a> {
    pub fn new(song: &'a mut Song, selector: &Selector) -> Self {
        let locations = selector.locate(song);
        Self { song, locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[BeatLocation] {
        &self.locations
    }

    /// Visit every selected beat in document order
    pub fn for_each(&mut self, mut f: impl FnMut(BeatMut<'_>)) {
        for &location in &self.locations {
            let Track {
                is_percussion,
                strings,
                measures,
                ..
            } = &mut self.song.tracks[location.track];
            let beat = &mut measures[location.measure].voices[location.voice].beats[location.beat];
            f(BeatMut {
                location,
                is_percussion: *is_percussion,
                strings,
                beat,
            });
        }
    }
}

/// One editing request, as issued by the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Shift { direction: Direction, amount: u32 },
    Duration { op: DurationOp, factor: u32 },
    Brush { direction: Direction, value: u8 },
    PickStroke { direction: Direction },
    Remove(RemoveTarget),
    Rest,
    SetEffect(NoteEffectKind),
}

impl Operation {
    /// Check parameters before anything is touched
    pub fn validate(&self) -> Result<()> {
        match *self {
            Operation::Shift { amount: 0, .. } => Err(ToolError::InvalidArgument(
                "shift amount must be at least 1".to_string(),
            )),
            Operation::Duration { factor: 0, .. } => Err(ToolError::InvalidArgument(
                "duration factor must be at least 1".to_string(),
            )),
            Operation::Brush { value, .. } => stroke::validate_stroke_value(value as u32).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Apply this operation to every beat the selector picks
    pub fn apply(&self, song: &mut Song, selector: &Selector) -> Result<TransformReport> {
        self.validate()?;

        let mut beats = BeatSet::new(song, selector);
        if beats.is_empty() {
            log::warn!("selection matched no beats, nothing to do");
        }

        let report = match *self {
            Operation::Shift { direction, amount } => shift::shift(&mut beats, direction, amount),
            Operation::Duration { op, factor } => duration::scale(&mut beats, op, factor),
            Operation::Brush { direction, value } => stroke::set_brush(&mut beats, direction, value),
            Operation::PickStroke { direction } => stroke::set_pick_stroke(&mut beats, direction),
            Operation::Remove(target) => remove::remove(&mut beats, target),
            Operation::Rest => rest::replace_with_rests(&mut beats),
            Operation::SetEffect(kind) => effect::set_effect(&mut beats, kind),
        };

        log::info!(
            "{:?}: {} beats, {} changed, {} skipped",
            self,
            report.beats,
            report.changed,
            report.skipped
        );
        Ok(report)
    }
}
