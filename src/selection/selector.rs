//! Resolve which tracks, measures and beats a tool works on
//!
//! Each axis is either explicitly given by the user or falls back to the
//! clipboard selection stored in the document. Without clipboard metadata an
//! unspecified axis means "everything".
//!
//! Tracks and measures are matched by their `number`. Beats are matched by
//! their 1-based position inside their own voice, so beat 2 of every voice in
//! a measure is selected by `2`.

use std::collections::BTreeSet;

use crate::models::{Beat, ClipboardSelection, Measure, Song, Track, Voice};

/// Membership filter for one axis
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Explicit(BTreeSet<u32>),
}

impl Selection {
    /// Inclusive span `start..=stop`
    pub fn span(start: u32, stop: u32) -> Self {
        Selection::Explicit((start..=stop).collect())
    }

    pub fn contains(&self, number: u32) -> bool {
        match self {
            Selection::All => true,
            Selection::Explicit(numbers) => numbers.contains(&number),
        }
    }
}

/// Selection flags as the user gave them; `None` means unspecified
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSpec {
    pub tracks: Option<BTreeSet<u32>>,
    pub measures: Option<BTreeSet<u32>>,
    pub beats: Option<BTreeSet<u32>>,
}

/// Tree position of a selected beat (0-based indices, not numbers)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BeatLocation {
    pub track: usize,
    pub measure: usize,
    pub voice: usize,
    pub beat: usize,
}

/// A selected beat together with its owners
#[derive(Clone, Copy, Debug)]
pub struct SelectedBeat<'a> {
    pub location: BeatLocation,
    pub track: &'a Track,
    pub measure: &'a Measure,
    pub voice: &'a Voice,
    pub beat: &'a Beat,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Selector {
    pub tracks: Selection,
    pub measures: Selection,
    pub beats: Selection,
}

impl Selector {
    /// Select every beat of the song
    pub fn all() -> Self {
        Self::default()
    }

    /// Fill unspecified axes from the song's clipboard selection, if any
    pub fn resolve(song: &Song, spec: &SelectionSpec) -> Self {
        let clipboard = song.clipboard.as_ref();

        let tracks = explicit_or(&spec.tracks, || {
            clipboard.map(|c| Selection::span(c.start_track, c.stop_track))
        });
        let measures = explicit_or(&spec.measures, || {
            clipboard.map(|c| Selection::span(c.start_measure, c.stop_measure))
        });
        let beats = explicit_or(&spec.beats, || clipboard.and_then(clipboard_beats));

        let selector = Self {
            tracks,
            measures,
            beats,
        };
        log::debug!("resolved selection: {:?}", selector);
        selector
    }

    /// Lazily walk the selected beats in document order
    ///
    /// Every call starts a fresh traversal over the song's current state.
    pub fn selected<'a>(&'a self, song: &'a Song) -> impl Iterator<Item = SelectedBeat<'a>> + 'a {
        song.tracks
            .iter()
            .enumerate()
            .filter(move |(_, track)| self.tracks.contains(track.number))
            .flat_map(move |(ti, track)| {
                track
                    .measures
                    .iter()
                    .enumerate()
                    .filter(move |(_, measure)| self.measures.contains(measure.number))
                    .flat_map(move |(mi, measure)| {
                        measure.voices.iter().enumerate().flat_map(move |(vi, voice)| {
                            voice
                                .beats
                                .iter()
                                .enumerate()
                                .filter(move |(bi, _)| self.beats.contains(*bi as u32 + 1))
                                .map(move |(bi, beat)| SelectedBeat {
                                    location: BeatLocation {
                                        track: ti,
                                        measure: mi,
                                        voice: vi,
                                        beat: bi,
                                    },
                                    track,
                                    measure,
                                    voice,
                                    beat,
                                })
                        })
                    })
            })
    }

    /// Materialize the locations of all selected beats
    ///
    /// Locations stay valid while no beats are inserted or removed, which
    /// holds for every transform (rests replace beats at the same index).
    pub fn locate(&self, song: &Song) -> Vec<BeatLocation> {
        self.selected(song).map(|selected| selected.location).collect()
    }
}

fn explicit_or(
    given: &Option<BTreeSet<u32>>,
    fallback: impl FnOnce() -> Option<Selection>,
) -> Selection {
    match given {
        Some(numbers) => Selection::Explicit(numbers.clone()),
        None => fallback().unwrap_or_default(),
    }
}

fn clipboard_beats(clipboard: &ClipboardSelection) -> Option<Selection> {
    clipboard
        .sub_bar_copy
        .then(|| Selection::span(clipboard.start_beat, clipboard.stop_beat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BeatStatus, Duration, GuitarString, Note};
    use crate::transform::Operation;

    fn beat(fret: i32) -> Beat {
        Beat::new(Duration::default(), vec![Note::new(1, fret)])
    }

    fn measure(number: u32, voices: &[&[i32]]) -> Measure {
        Measure {
            number,
            voices: voices
                .iter()
                .map(|frets| Voice {
                    beats: frets.iter().map(|&f| beat(f)).collect(),
                })
                .collect(),
        }
    }

    fn track(number: u32) -> Track {
        Track {
            number,
            strings: vec![GuitarString::new(1, 64), GuitarString::new(2, 59)],
            measures: vec![
                measure(1, &[&[1, 2, 3], &[4]]),
                measure(2, &[&[5, 6], &[]]),
                measure(3, &[&[7, 8, 9, 10]]),
            ],
            ..Default::default()
        }
    }

    fn song() -> Song {
        Song::new(vec![track(1), track(2), track(3)])
    }

    fn frets(selector: &Selector, song: &Song) -> Vec<(u32, u32, i32)> {
        selector
            .selected(song)
            .map(|s| (s.track.number, s.measure.number, s.beat.notes[0].value))
            .collect()
    }

    #[test]
    fn test_selection_membership() {
        assert!(Selection::All.contains(42));
        let span = Selection::span(2, 4);
        assert!(!span.contains(1));
        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_unspecified_without_clipboard_is_all() {
        let song = song();
        let selector = Selector::resolve(&song, &SelectionSpec::default());
        assert_eq!(selector, Selector::all());
        assert_eq!(selector.selected(&song).count(), 30);
    }

    #[test]
    fn test_explicit_track_selects_only_that_track() {
        let song = song();
        let spec = SelectionSpec {
            tracks: Some([1].into()),
            ..Default::default()
        };
        let selector = Selector::resolve(&song, &spec);
        let picked = frets(&selector, &song);
        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(|(t, _, _)| *t == 1));
    }

    #[test]
    fn test_beats_are_positions_within_voice() {
        let song = song();
        let spec = SelectionSpec {
            tracks: Some([2].into()),
            beats: Some([1].into()),
            ..Default::default()
        };
        let selector = Selector::resolve(&song, &spec);
        // First beat of each voice, the empty voice contributes nothing
        assert_eq!(frets(&selector, &song), vec![(2, 1, 1), (2, 1, 4), (2, 2, 5), (2, 3, 7)]);
    }

    #[test]
    fn test_disjoint_ranges() {
        let song = song();
        let spec = SelectionSpec {
            tracks: Some([1, 3].into()),
            measures: Some([1, 3].into()),
            beats: Some([2, 4].into()),
        };
        let selector = Selector::resolve(&song, &spec);
        assert_eq!(
            frets(&selector, &song),
            vec![(1, 1, 2), (1, 3, 8), (1, 3, 10), (3, 1, 2), (3, 3, 8), (3, 3, 10)]
        );
    }

    #[test]
    fn test_clipboard_defaults() {
        let mut song = song();
        song.clipboard = Some(ClipboardSelection::measures((2, 3), (2, 2)));
        let selector = Selector::resolve(&song, &SelectionSpec::default());
        assert_eq!(selector.tracks, Selection::span(2, 3));
        assert_eq!(selector.measures, Selection::span(2, 2));
        assert_eq!(selector.beats, Selection::All);
        assert_eq!(frets(&selector, &song), vec![(2, 2, 5), (2, 2, 6), (3, 2, 5), (3, 2, 6)]);
    }

    #[test]
    fn test_clipboard_sub_bar_copy_limits_beats() {
        let mut song = song();
        song.clipboard = Some(ClipboardSelection {
            start_beat: 2,
            stop_beat: 3,
            sub_bar_copy: true,
            ..ClipboardSelection::measures((1, 1), (3, 3))
        });
        let selector = Selector::resolve(&song, &SelectionSpec::default());
        assert_eq!(frets(&selector, &song), vec![(1, 3, 8), (1, 3, 9)]);
    }

    #[test]
    fn test_explicit_overrides_clipboard_per_axis() {
        let mut song = song();
        song.clipboard = Some(ClipboardSelection::measures((2, 2), (1, 1)));
        let spec = SelectionSpec {
            measures: Some([3].into()),
            ..Default::default()
        };
        let selector = Selector::resolve(&song, &spec);
        assert_eq!(selector.tracks, Selection::span(2, 2));
        assert_eq!(frets(&selector, &song), vec![(2, 3, 7), (2, 3, 8), (2, 3, 9), (2, 3, 10)]);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let mut song = song();
        let selector = Selector::all();
        let first = selector.locate(&song);
        assert_eq!(
            first[3],
            BeatLocation {
                track: 0,
                measure: 0,
                voice: 1,
                beat: 0
            }
        );
        assert!(selector
            .selected(&song)
            .all(|selected| selected.beat.status == BeatStatus::Normal));

        let second_track = Selector::resolve(
            &song,
            &SelectionSpec {
                tracks: Some([2].into()),
                ..Default::default()
            },
        );
        Operation::Rest.apply(&mut song, &second_track).unwrap();

        // A new pass sees the rests written since the first one
        let statuses: Vec<(u32, BeatStatus)> = selector
            .selected(&song)
            .map(|selected| (selected.track.number, selected.beat.status))
            .collect();
        assert_eq!(statuses.len(), first.len());
        for (track, status) in statuses {
            let expected = if track == 2 { BeatStatus::Rest } else { BeatStatus::Normal };
            assert_eq!(status, expected, "track {track}");
        }
        assert_eq!(selector.locate(&song), first);
    }
}
