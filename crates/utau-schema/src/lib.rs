// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire-format schema for the Utau lyrics API.
//!
//! This crate describes every shape the service puts on the wire (lyric
//! spans, the three lyrics variants, track metadata, and the success/failure
//! response envelope) and provides validation that checks an arbitrary JSON
//! value against those shapes, reporting every mismatch with the path it
//! occurred at instead of stopping on the first.

pub mod diagnostics;
pub mod model;
pub mod validate;
#[cfg(test)]
mod validate_tests;

pub use diagnostics::{Mismatch, ValidationDiagnostics};
pub use model::{
    FailureData, Lyric, Lyrics, LyricsData, LyricsResponse, LyricsType, Track, WordLyric,
};
pub use validate::{validate_requested_types, validate_response};
