//! Clearing beat effects and text

use super::{BeatSet, TransformReport};
use crate::models::{BeatStroke, StrokeDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveTarget {
    Brush,
    PickStroke,
    Text,
}

/// Reset the target field of every selected beat to its empty value
pub fn remove(beats: &mut BeatSet<'_>, target: RemoveTarget) -> TransformReport {
    let mut report = TransformReport::default();

    beats.for_each(|selected| {
        report.beats += 1;
        let effect = &mut selected.beat.effect;
        let changed = match target {
            RemoveTarget::Brush => std::mem::take(&mut effect.stroke) != BeatStroke::default(),
            RemoveTarget::PickStroke => {
                std::mem::take(&mut effect.pick_stroke) != StrokeDirection::None
            }
            RemoveTarget::Text => selected.beat.text.take().is_some(),
        };
        if changed {
            report.changed += 1;
        }
    });

    report
}
