//! Moving notes between strings
//!
//! A note moved to a neighbouring string keeps its sounded pitch: the fret
//! changes by the interval between the two open strings. Strings are ordered
//! highest first, so "up" means towards string 1.

use super::{BeatSet, Direction, TransformReport};
use crate::models::{GuitarString, Note};

/// Highest fret a note may sit on
pub const MAX_FRET: i32 = 30;

/// 0-based index of the note's string, if it exists on this track
fn string_index(strings: &[GuitarString], note: &Note) -> Option<usize> {
    (note.string as usize)
        .checked_sub(1)
        .filter(|&index| index < strings.len())
}

/// Move `note` one string up; returns false and leaves it alone if impossible
pub fn shift_up(strings: &[GuitarString], note: &mut Note) -> bool {
    let Some(index) = string_index(strings, note) else {
        return false;
    };
    if index == 0 {
        return false;
    }

    let interval = strings[index - 1].value - strings[index].value;
    // Would need a negative fret
    if note.value < interval {
        return false;
    }

    note.string -= 1;
    note.value -= interval;
    true
}

/// Move `note` one string down; returns false and leaves it alone if impossible
pub fn shift_down(strings: &[GuitarString], note: &mut Note) -> bool {
    let Some(index) = string_index(strings, note) else {
        return false;
    };
    if index == strings.len() - 1 {
        return false;
    }

    let interval = strings[index].value - strings[index + 1].value;
    if note.value > MAX_FRET - interval {
        return false;
    }

    note.string += 1;
    note.value += interval;
    true
}

/// Shift a note up to `amount` strings, stopping at the first impossible step
///
/// Returns the number of steps taken. A partial shift is kept as is.
pub fn shift_note(strings: &[GuitarString], note: &mut Note, direction: Direction, amount: u32) -> u32 {
    let step: fn(&[GuitarString], &mut Note) -> bool = match direction {
        Direction::Up => shift_up,
        Direction::Down => shift_down,
    };

    let mut steps = 0;
    while steps < amount && step(strings, note) {
        steps += 1;
    }
    steps
}

/// Shift every note of the selected beats; percussion tracks are left out
pub fn shift(beats: &mut BeatSet<'_>, direction: Direction, amount: u32) -> TransformReport {
    let mut report = TransformReport::default();

    beats.for_each(|selected| {
        report.beats += 1;
        if selected.is_percussion {
            return;
        }

        for note in selected.beat.notes.iter_mut() {
            let steps = shift_note(selected.strings, note, direction, amount);
            if steps > 0 {
                report.changed += 1;
            }
            if steps < amount {
                log::debug!(
                    "note at {:?} stopped after {} of {} steps (string {}, fret {})",
                    selected.location,
                    steps,
                    amount,
                    note.string,
                    note.value
                );
                report.skipped += 1;
            }
        }
    });

    report
}
