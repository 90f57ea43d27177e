//! Brush strokes and pick strokes
//!
//! Directions are stored inverted relative to how they are requested: a
//! stroke the user calls "up" is written as [`StrokeDirection::Down`] and
//! the other way round. Tablature readers depend on this mapping, keep it.

use super::{BeatSet, Direction, TransformReport};
use crate::error::{Result, ToolError};
use crate::models::{BeatStroke, StrokeDirection};

/// Stored stroke direction for a requested direction
pub fn stored_direction(direction: Direction) -> StrokeDirection {
    match direction {
        Direction::Up => StrokeDirection::Down,
        Direction::Down => StrokeDirection::Up,
    }
}

/// Brush length must be a power of two note value between 4 and 128
pub fn validate_stroke_value(value: u32) -> Result<u8> {
    if !(4..=128).contains(&value) || !value.is_power_of_two() {
        return Err(ToolError::InvalidArgument(format!(
            "stroke duration {value} must be a power of 2 between 4 and 128"
        )));
    }
    Ok(value as u8)
}

pub fn set_brush(beats: &mut BeatSet<'_>, direction: Direction, value: u8) -> TransformReport {
    let stroke = BeatStroke {
        direction: stored_direction(direction),
        value,
    };
    let mut report = TransformReport::default();

    beats.for_each(|selected| {
        report.beats += 1;
        if selected.beat.effect.stroke != stroke {
            selected.beat.effect.stroke = stroke;
            report.changed += 1;
        }
    });

    report
}

pub fn set_pick_stroke(beats: &mut BeatSet<'_>, direction: Direction) -> TransformReport {
    let stored = stored_direction(direction);
    let mut report = TransformReport::default();

    beats.for_each(|selected| {
        report.beats += 1;
        if selected.beat.effect.pick_stroke != stored {
            selected.beat.effect.pick_stroke = stored;
            report.changed += 1;
        }
    });

    report
}
