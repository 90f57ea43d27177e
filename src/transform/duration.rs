//! Multiplying and dividing beat durations

use super::{BeatSet, TransformReport};
use crate::models::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationOp {
    Multiply,
    Divide,
}

impl DurationOp {
    /// Scale a time in ticks; division truncates
    pub fn apply(&self, time: u32, factor: u32) -> u32 {
        match self {
            DurationOp::Multiply => time.saturating_mul(factor),
            DurationOp::Divide => time / factor,
        }
    }
}

/// Rescale a single duration, never going below the shortest note value
pub fn scale_duration(duration: Duration, op: DurationOp, factor: u32) -> Duration {
    Duration::from_time(op.apply(duration.time(), factor), Duration::shortest())
}

/// Rescale the duration of every selected beat
///
/// `factor` must be positive; [`super::Operation::validate`] checks that.
pub fn scale(beats: &mut BeatSet<'_>, op: DurationOp, factor: u32) -> TransformReport {
    let mut report = TransformReport::default();

    beats.for_each(|selected| {
        report.beats += 1;
        let scaled = scale_duration(selected.beat.duration, op, factor);
        if scaled == selected.beat.duration {
            report.skipped += 1;
        } else {
            selected.beat.duration = scaled;
            report.changed += 1;
        }
    });

    report
}
