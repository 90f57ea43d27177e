//! Loading and saving score documents
//!
//! Documents are stored as a JSON envelope naming their format. A clipboard
//! snapshot keeps its clipboard selection so the editor can paste it back;
//! a normal score never carries one.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ToolError};
use crate::models::Song;

/// How a song is written back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMode {
    Normal,
    ClipboardSnapshot,
}

impl SaveMode {
    /// Clipboard snapshots must be written back as snapshots
    pub fn for_song(song: &Song) -> Self {
        if song.is_clipboard() {
            SaveMode::ClipboardSnapshot
        } else {
            SaveMode::Normal
        }
    }
}

pub trait DocumentGateway {
    fn load(&self, path: &Path) -> Result<Song>;
    fn save(&self, song: &Song, path: &Path, mode: SaveMode) -> Result<()>;
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum DocumentFormat {
    Score,
    Clipboard,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    format: DocumentFormat,
    song: Song,
}

/// Gateway for JSON score documents
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonGateway {
    /// Indent output for readability
    pub pretty: bool,
}

impl JsonGateway {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Decode a document from bytes
    ///
    /// Besides the JSON shape, every duration must be a valid note value and
    /// every note must sit on one of its track's strings.
    pub fn decode(&self, bytes: &[u8]) -> Result<Song> {
        let envelope: Envelope = serde_json::from_slice(bytes)?;
        check_tree(&envelope.song)?;
        match (envelope.format, envelope.song.is_clipboard()) {
            (DocumentFormat::Score, true) => Err(ToolError::DocumentParse(
                "score document carries clipboard metadata".to_string(),
            )),
            (DocumentFormat::Clipboard, false) => Err(ToolError::DocumentParse(
                "clipboard document without clipboard metadata".to_string(),
            )),
            _ => Ok(envelope.song),
        }
    }

    /// Encode a document in the given mode
    pub fn encode(&self, song: &Song, mode: SaveMode) -> Result<Vec<u8>> {
        let mut song = song.clone();
        let format = match mode {
            SaveMode::Normal => {
                song.clipboard = None;
                DocumentFormat::Score
            }
            SaveMode::ClipboardSnapshot => {
                if !song.is_clipboard() {
                    return Err(ToolError::InvalidArgument(
                        "cannot write a clipboard snapshot without clipboard metadata".to_string(),
                    ));
                }
                DocumentFormat::Clipboard
            }
        };

        let envelope = Envelope { format, song };
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&envelope)?
        } else {
            serde_json::to_vec(&envelope)?
        };
        Ok(bytes)
    }
}

fn check_tree(song: &Song) -> Result<()> {
    for track in &song.tracks {
        for measure in &track.measures {
            for beat in measure.voices.iter().flat_map(|voice| &voice.beats) {
                if !beat.duration.is_valid() {
                    return Err(ToolError::DocumentParse(format!(
                        "track {} measure {}: invalid duration {:?}",
                        track.number, measure.number, beat.duration
                    )));
                }
                let strings = track.strings.len();
                if let Some(note) = beat
                    .notes
                    .iter()
                    .find(|note| note.string == 0 || note.string as usize > strings)
                {
                    return Err(ToolError::DocumentParse(format!(
                        "track {} measure {}: note on string {} of a {}-string track",
                        track.number, measure.number, note.string, strings
                    )));
                }
            }
        }
    }
    Ok(())
}

impl DocumentGateway for JsonGateway {
    fn load(&self, path: &Path) -> Result<Song> {
        let bytes = fs::read(path).map_err(|source| ToolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let song = self.decode(&bytes)?;
        log::debug!(
            "loaded {} ({} tracks, clipboard: {})",
            path.display(),
            song.tracks.len(),
            song.is_clipboard()
        );
        Ok(song)
    }

    fn save(&self, song: &Song, path: &Path, mode: SaveMode) -> Result<()> {
        let bytes = self.encode(song, mode)?;
        fs::write(path, bytes).map_err(|source| ToolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved {} as {:?}", path.display(), mode);
        Ok(())
    }
}
