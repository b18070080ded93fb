// SPDX-License-Identifier: GPL-3.0-or-later

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The lyrics representations the service can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LyricsType {
    /// Word by word, each word carrying its syllable timings.
    Wbw,
    /// Line by line.
    Lbl,
    /// Plain unsynchronised text.
    Raw,
}

impl LyricsType {
    pub fn as_str(self) -> &'static str {
        match self {
            LyricsType::Wbw => "wbw",
            LyricsType::Lbl => "lbl",
            LyricsType::Raw => "raw",
        }
    }
}

impl fmt::Display for LyricsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timed fragment of lyrics text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lyric {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// A timed word together with its syllable breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordLyric {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub syllables: Vec<Lyric>,
}

/// One lyrics variant, discriminated by the wire-level `type` tag.
///
/// The tag uniquely determines which payload fields are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Lyrics {
    Wbw {
        lyrics: Vec<WordLyric>,
        copyright: String,
    },
    Lbl {
        lyrics: Vec<Lyric>,
        copyright: String,
    },
    Raw {
        text: String,
        copyright: String,
    },
}

impl Lyrics {
    /// The discriminator of this variant.
    pub fn kind(&self) -> LyricsType {
        match self {
            Lyrics::Wbw { .. } => LyricsType::Wbw,
            Lyrics::Lbl { .. } => LyricsType::Lbl,
            Lyrics::Raw { .. } => LyricsType::Raw,
        }
    }

    /// The copyright notice attached to this variant.
    pub fn copyright(&self) -> &str {
        match self {
            Lyrics::Wbw { copyright, .. }
            | Lyrics::Lbl { copyright, .. }
            | Lyrics::Raw { copyright, .. } => copyright,
        }
    }
}

/// Descriptive metadata about the matched track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub length: f64,
    pub explicit: bool,
    /// Always present on the wire, but may be null.
    pub album_id: Option<String>,
    pub album_name: String,
}

/// Payload of a failure envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureData {
    pub message: String,
}

/// Payload of a success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricsData {
    pub lyrics: Vec<Lyrics>,
    pub track: Track,
}

impl LyricsData {
    /// The first lyrics variant of the requested kind, in sequence order.
    ///
    /// The schema does not forbid duplicate kinds; the first match wins.
    pub fn extract(&self, kind: LyricsType) -> Option<&Lyrics> {
        self.lyrics.iter().find(|lyrics| lyrics.kind() == kind)
    }
}

/// The response envelope, discriminated by the wire-level `success` boolean.
///
/// Constructed from untrusted input only through
/// [`validate_response`](crate::validate::validate_response), which checks the
/// discriminator before touching `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum LyricsResponse {
    Failure(FailureData),
    Success(LyricsData),
}

impl LyricsResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, LyricsResponse::Success(_))
    }
}

impl Serialize for LyricsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            LyricsResponse::Failure(data) => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("data", data)?;
            }
            LyricsResponse::Success(data) => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
        }
        map.end()
    }
}
