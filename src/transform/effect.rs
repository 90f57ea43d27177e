//! Note effects applied to every note of the selected beats

use super::{BeatSet, TransformReport};
use crate::models::{Harmonic, NoteType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteEffectKind {
    /// Muted, unpitched note
    Dead,
    NaturalHarmonic,
}

pub fn set_effect(beats: &mut BeatSet<'_>, kind: NoteEffectKind) -> TransformReport {
    let mut report = TransformReport::default();

    beats.for_each(|selected| {
        report.beats += 1;
        for note in selected.beat.notes.iter_mut() {
            let before = *note;
            match kind {
                NoteEffectKind::Dead => note.note_type = NoteType::Dead,
                NoteEffectKind::NaturalHarmonic => note.effect.harmonic = Some(Harmonic::Natural),
            }
            if *note != before {
                report.changed += 1;
            }
        }
    });

    report
}
