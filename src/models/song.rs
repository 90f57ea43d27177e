//! Score document tree
//!
//! Song → tracks → measures → voices → beats → notes. Every entity is owned
//! by its parent; transforms mutate the tree in place.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::duration::Duration;

/// Root document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Song {
    #[serde(default)]
    pub title: String,
    pub tracks: Vec<Track>,
    /// Present only when the document is a clipboard snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard: Option<ClipboardSelection>,
}

impl Song {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            title: String::new(),
            tracks,
            clipboard: None,
        }
    }

    pub fn is_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }
}

/// Range recorded when the editor copied a selection to its clipboard
///
/// All bounds are 1-based and inclusive. The beat bounds only mean something
/// when `sub_bar_copy` is set; otherwise whole measures were copied.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipboardSelection {
    pub start_track: u32,
    pub stop_track: u32,
    pub start_measure: u32,
    pub stop_measure: u32,
    #[serde(default)]
    pub start_beat: u32,
    #[serde(default)]
    pub stop_beat: u32,
    #[serde(default)]
    pub sub_bar_copy: bool,
}

impl ClipboardSelection {
    /// Whole-measure selection
    pub fn measures(tracks: (u32, u32), measures: (u32, u32)) -> Self {
        Self {
            start_track: tracks.0,
            stop_track: tracks.1,
            start_measure: measures.0,
            stop_measure: measures.1,
            start_beat: 0,
            stop_beat: 0,
            sub_bar_copy: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Track {
    /// 1-based position of the track in the song
    pub number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_percussion: bool,
    /// Open string tunings, highest string first
    pub strings: Vec<GuitarString>,
    pub measures: Vec<Measure>,
}

/// Open-string tuning of one string
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuitarString {
    /// 1-based string number, 1 is the highest string
    pub number: u8,
    /// Pitch of the open string in semitones
    pub value: i32,
}

impl GuitarString {
    pub fn new(number: u8, value: i32) -> Self {
        Self { number, value }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Measure {
    /// 1-based measure number
    pub number: u32,
    pub voices: Vec<Voice>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Voice {
    pub beats: Vec<Beat>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Beat {
    pub duration: Duration,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub effect: BeatEffect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub status: BeatStatus,
}

impl Beat {
    pub fn new(duration: Duration, notes: Vec<Note>) -> Self {
        Self {
            duration,
            notes,
            ..Default::default()
        }
    }

    /// A silent beat lasting `duration`
    pub fn rest(duration: Duration) -> Self {
        Self {
            duration,
            status: BeatStatus::Rest,
            ..Default::default()
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
pub enum BeatStatus {
    Empty = 0,
    #[default]
    Normal = 1,
    Rest = 2,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BeatEffect {
    #[serde(default)]
    pub stroke: BeatStroke,
    #[serde(default)]
    pub pick_stroke: StrokeDirection,
}

/// Brush stroke across the strings of a beat
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BeatStroke {
    pub direction: StrokeDirection,
    /// Stroke length as a note value (4, 8, ... 128), 0 when unset
    pub value: u8,
}

impl BeatStroke {
    pub fn is_set(&self) -> bool {
        self.direction != StrokeDirection::None
    }
}

/// Stroke direction as stored in the document
///
/// The stored direction is the opposite of what a player calls the stroke:
/// strumming "up" the neck is stored as [`StrokeDirection::Down`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
pub enum StrokeDirection {
    #[default]
    None = 0,
    Up = 1,
    Down = 2,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    /// 1-based index into the owning track's strings
    pub string: u8,
    /// Fret number
    pub value: i32,
    #[serde(default, rename = "type")]
    pub note_type: NoteType,
    #[serde(default)]
    pub effect: NoteEffect,
}

impl Note {
    pub fn new(string: u8, value: i32) -> Self {
        Self {
            string,
            value,
            note_type: NoteType::Normal,
            effect: NoteEffect::default(),
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
pub enum NoteType {
    Rest = 0,
    #[default]
    Normal = 1,
    Tie = 2,
    Dead = 3,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NoteEffect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmonic: Option<Harmonic>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Harmonic {
    Natural,
    Artificial,
    Tapped,
    Pinch,
    Semi,
}
