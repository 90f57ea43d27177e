//! Replacing beats with rests

use super::{BeatSet, TransformReport};
use crate::models::Beat;

/// Replace every selected beat with a rest of the same duration
///
/// The rest takes the beat's place in its voice, so beat counts and timing
/// are unchanged. Notes, effects and text are dropped.
pub fn replace_with_rests(beats: &mut BeatSet<'_>) -> TransformReport {
    let mut report = TransformReport::default();

    beats.for_each(|selected| {
        report.beats += 1;
        let rest = Beat::rest(selected.beat.duration);
        if *selected.beat != rest {
            *selected.beat = rest;
            report.changed += 1;
        }
    });

    report
}
