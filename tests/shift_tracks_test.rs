// Test: shifting a whole track against a hand-written expected track
//
// Track 1 holds the source notes, track 2 the notes expected after the
// shift. The clipboard selection covers track 1 only, so track 2 must be
// left alone and can be compared beat by beat afterwards.

use gptab_tools::models::{Beat, ClipboardSelection, Duration, GuitarString, Measure, Note, Song, Track, Voice};
use gptab_tools::transform::{Direction, Operation};
use gptab_tools::{SelectionSpec, Selector};

fn standard_strings() -> Vec<GuitarString> {
    [64, 59, 55, 50, 45, 40]
        .iter()
        .enumerate()
        .map(|(i, &value)| GuitarString::new(i as u8 + 1, value))
        .collect()
}

/// Helper to build a track from measures of beats of (string, fret) notes
fn make_track(number: u32, measures: &[&[&[(u8, i32)]]]) -> Track {
    Track {
        number,
        strings: standard_strings(),
        measures: measures
            .iter()
            .enumerate()
            .map(|(i, beats)| Measure {
                number: i as u32 + 1,
                voices: vec![Voice {
                    beats: beats
                        .iter()
                        .map(|notes| {
                            Beat::new(
                                Duration::default(),
                                notes.iter().map(|&(s, f)| Note::new(s, f)).collect(),
                            )
                        })
                        .collect(),
                }],
            })
            .collect(),
        ..Default::default()
    }
}

fn make_song(source: Track, expected: Track) -> Song {
    let measure_count = source.measures.len() as u32;
    let mut song = Song::new(vec![source, expected]);
    song.clipboard = Some(ClipboardSelection::measures((1, 1), (1, measure_count)));
    song
}

fn assert_tracks_match(song: &Song) {
    let (source, expected) = (&song.tracks[0], &song.tracks[1]);
    for (source_measure, expected_measure) in source.measures.iter().zip(&expected.measures) {
        for (source_voice, expected_voice) in source_measure.voices.iter().zip(&expected_measure.voices) {
            for (source_beat, expected_beat) in source_voice.beats.iter().zip(&expected_voice.beats) {
                assert_eq!(
                    source_beat, expected_beat,
                    "measure {} differs",
                    source_measure.number
                );
            }
        }
    }
}

fn apply(song: &mut Song, operation: Operation) {
    let selector = Selector::resolve(song, &SelectionSpec::default());
    operation.apply(song, &selector).expect("shift should succeed");
}

#[test]
fn test_shift_up_track() {
    let source = make_track(
        1,
        &[
            &[&[(2, 5)], &[(3, 4), (4, 5)], &[(6, 0)]],
            &[&[(1, 3)], &[(6, 12), (5, 12)]],
        ],
    );
    let expected = make_track(
        2,
        &[
            // Open low E cannot move up, the highest string cannot either
            &[&[(1, 0)], &[(2, 0), (3, 0)], &[(6, 0)]],
            &[&[(1, 3)], &[(5, 7), (4, 7)]],
        ],
    );
    let mut song = make_song(source, expected);

    apply(
        &mut song,
        Operation::Shift {
            direction: Direction::Up,
            amount: 1,
        },
    );
    assert_tracks_match(&song);
}

#[test]
fn test_shift_down_track() {
    let source = make_track(
        1,
        &[
            &[&[(1, 0)], &[(2, 3), (3, 2)], &[(6, 3)]],
            &[&[(1, 28)], &[(3, 26)]],
        ],
    );
    let expected = make_track(
        2,
        &[
            &[&[(2, 5)], &[(3, 7), (4, 7)], &[(6, 3)]],
            // Would land past fret 30
            &[&[(1, 28)], &[(3, 26)]],
        ],
    );
    let mut song = make_song(source, expected);

    apply(
        &mut song,
        Operation::Shift {
            direction: Direction::Down,
            amount: 1,
        },
    );
    assert_tracks_match(&song);
}

#[test]
fn test_shift_leaves_unselected_track_alone() {
    let source = make_track(1, &[&[&[(3, 9)]]]);
    let expected = make_track(2, &[&[&[(2, 5)]]]);
    let mut song = make_song(source, expected.clone());

    apply(
        &mut song,
        Operation::Shift {
            direction: Direction::Up,
            amount: 1,
        },
    );
    assert_eq!(song.tracks[1], expected);
    assert_tracks_match(&song);
}
