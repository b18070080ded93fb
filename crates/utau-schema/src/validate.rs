// SPDX-License-Identifier: GPL-3.0-or-later

//! Validation of arbitrary JSON values against the wire schema.
//!
//! Every function here is total: it never panics on malformed input and
//! reports mismatches through [`ValidationDiagnostics`] instead. Within an
//! object, all fields are checked before giving up, so one pass surfaces as
//! many independent problems as possible.

use serde_json::{Map, Value};

use crate::diagnostics::ValidationDiagnostics;
use crate::model::{
    FailureData, Lyric, Lyrics, LyricsData, LyricsResponse, LyricsType, Track, WordLyric,
};

const LYRICS_TAGS: &str = "\"wbw\", \"lbl\", or \"raw\"";
const TYPES_RULE: &str = "between one and three lyrics types";

/// Validate a JSON value against the response envelope schema.
///
/// Returns the typed envelope, or every mismatch found.
pub fn validate_response(value: &Value) -> Result<LyricsResponse, ValidationDiagnostics> {
    let mut diags = ValidationDiagnostics::new();
    let response = response_value(value, "", &mut diags);
    match response {
        Some(response) if diags.is_empty() => Ok(response),
        _ => Err(diags),
    }
}

/// Validate a caller-supplied sequence of requested lyrics types.
///
/// The sequence must contain between one and three elements with no
/// duplicates. All violations are reported as one diagnostic set.
pub fn validate_requested_types(types: &[LyricsType]) -> Result<(), ValidationDiagnostics> {
    let mut diags = ValidationDiagnostics::new();
    if types.is_empty() {
        diags.push("types", TYPES_RULE, "an empty sequence");
    } else if types.len() > 3 {
        diags.push("types", TYPES_RULE, format!("{} elements", types.len()));
    }
    for (i, requested) in types.iter().enumerate() {
        if types[..i].contains(requested) {
            diags.push(
                format!("types[{i}]"),
                "a lyrics type not requested earlier in the sequence",
                format!("duplicate \"{requested}\""),
            );
        }
    }
    if diags.is_empty() {
        Ok(())
    } else {
        Err(diags)
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn index(path: &str, i: usize) -> String {
    format!("{path}[{i}]")
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn object<'a>(
    value: &'a Value,
    path: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            diags.push(path, "an object", describe(other));
            None
        }
    }
}

/// Report fields the schema does not know about.
fn reject_unknown_fields(
    map: &Map<String, Value>,
    path: &str,
    allowed: &[&str],
    diags: &mut ValidationDiagnostics,
) {
    for (key, value) in map {
        if !allowed.contains(&key.as_str()) {
            diags.push(join(path, key), "no value (unknown field)", describe(value));
        }
    }
}

fn required<'a>(
    map: &'a Map<String, Value>,
    path: &str,
    key: &str,
    expected: &'static str,
    diags: &mut ValidationDiagnostics,
) -> Option<&'a Value> {
    match map.get(key) {
        Some(value) => Some(value),
        None => {
            diags.push(join(path, key), expected, "missing");
            None
        }
    }
}

fn string(value: &Value, path: &str, diags: &mut ValidationDiagnostics) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            diags.push(path, "a string", describe(other));
            None
        }
    }
}

fn number(value: &Value, path: &str, diags: &mut ValidationDiagnostics) -> Option<f64> {
    match value.as_f64() {
        Some(n) => Some(n),
        None => {
            diags.push(path, "a number", describe(value));
            None
        }
    }
}

fn boolean(value: &Value, path: &str, diags: &mut ValidationDiagnostics) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        other => {
            diags.push(path, "a boolean", describe(other));
            None
        }
    }
}

fn nullable_string(
    value: &Value,
    path: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) => Some(Some(s.clone())),
        other => {
            diags.push(path, "a string or null", describe(other));
            None
        }
    }
}

fn array_of<T>(
    value: &Value,
    path: &str,
    diags: &mut ValidationDiagnostics,
    element: impl Fn(&Value, &str, &mut ValidationDiagnostics) -> Option<T>,
) -> Option<Vec<T>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            diags.push(path, "an array", describe(other));
            return None;
        }
    };
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if let Some(parsed) = element(item, &index(path, i), diags) {
            out.push(parsed);
        }
    }
    (out.len() == items.len()).then_some(out)
}

fn string_field(
    map: &Map<String, Value>,
    path: &str,
    key: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<String> {
    required(map, path, key, "a string", diags).and_then(|v| string(v, &join(path, key), diags))
}

fn number_field(
    map: &Map<String, Value>,
    path: &str,
    key: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<f64> {
    required(map, path, key, "a number", diags).and_then(|v| number(v, &join(path, key), diags))
}

fn lyric_value(value: &Value, path: &str, diags: &mut ValidationDiagnostics) -> Option<Lyric> {
    let map = object(value, path, diags)?;
    reject_unknown_fields(map, path, &["text", "start", "end"], diags);
    let text = string_field(map, path, "text", diags);
    let start = number_field(map, path, "start", diags);
    let end = number_field(map, path, "end", diags);
    Some(Lyric {
        text: text?,
        start: start?,
        end: end?,
    })
}

fn word_lyric_value(
    value: &Value,
    path: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<WordLyric> {
    let map = object(value, path, diags)?;
    reject_unknown_fields(map, path, &["text", "start", "end", "syllables"], diags);
    let text = string_field(map, path, "text", diags);
    let start = number_field(map, path, "start", diags);
    let end = number_field(map, path, "end", diags);
    let syllables = required(map, path, "syllables", "an array", diags)
        .and_then(|v| array_of(v, &join(path, "syllables"), diags, lyric_value));
    Some(WordLyric {
        text: text?,
        start: start?,
        end: end?,
        syllables: syllables?,
    })
}

fn lyrics_value(value: &Value, path: &str, diags: &mut ValidationDiagnostics) -> Option<Lyrics> {
    let map = object(value, path, diags)?;
    let tag_path = join(path, "type");
    let tag = match map.get("type") {
        Some(Value::String(tag)) => tag.as_str(),
        Some(other) => {
            diags.push(tag_path, LYRICS_TAGS, describe(other));
            return None;
        }
        None => {
            diags.push(tag_path, LYRICS_TAGS, "missing");
            return None;
        }
    };
    match tag {
        "wbw" => {
            reject_unknown_fields(map, path, &["type", "lyrics", "copyright"], diags);
            let lyrics = required(map, path, "lyrics", "an array", diags)
                .and_then(|v| array_of(v, &join(path, "lyrics"), diags, word_lyric_value));
            let copyright = string_field(map, path, "copyright", diags);
            Some(Lyrics::Wbw {
                lyrics: lyrics?,
                copyright: copyright?,
            })
        }
        "lbl" => {
            reject_unknown_fields(map, path, &["type", "lyrics", "copyright"], diags);
            let lyrics = required(map, path, "lyrics", "an array", diags)
                .and_then(|v| array_of(v, &join(path, "lyrics"), diags, lyric_value));
            let copyright = string_field(map, path, "copyright", diags);
            Some(Lyrics::Lbl {
                lyrics: lyrics?,
                copyright: copyright?,
            })
        }
        "raw" => {
            reject_unknown_fields(map, path, &["type", "text", "copyright"], diags);
            let text = string_field(map, path, "text", diags);
            let copyright = string_field(map, path, "copyright", diags);
            Some(Lyrics::Raw {
                text: text?,
                copyright: copyright?,
            })
        }
        other => {
            diags.push(tag_path, LYRICS_TAGS, format!("\"{other}\""));
            None
        }
    }
}

fn track_value(value: &Value, path: &str, diags: &mut ValidationDiagnostics) -> Option<Track> {
    let map = object(value, path, diags)?;
    reject_unknown_fields(
        map,
        path,
        &[
            "id",
            "title",
            "artists",
            "genres",
            "length",
            "explicit",
            "album_id",
            "album_name",
        ],
        diags,
    );
    let id = string_field(map, path, "id", diags);
    let title = string_field(map, path, "title", diags);
    let artists = required(map, path, "artists", "an array", diags)
        .and_then(|v| array_of(v, &join(path, "artists"), diags, string));
    let genres = required(map, path, "genres", "an array", diags)
        .and_then(|v| array_of(v, &join(path, "genres"), diags, string));
    let length = number_field(map, path, "length", diags);
    let explicit = required(map, path, "explicit", "a boolean", diags)
        .and_then(|v| boolean(v, &join(path, "explicit"), diags));
    let album_id = required(map, path, "album_id", "a string or null", diags)
        .and_then(|v| nullable_string(v, &join(path, "album_id"), diags));
    let album_name = string_field(map, path, "album_name", diags);
    Some(Track {
        id: id?,
        title: title?,
        artists: artists?,
        genres: genres?,
        length: length?,
        explicit: explicit?,
        album_id: album_id?,
        album_name: album_name?,
    })
}

fn failure_data_value(
    value: &Value,
    path: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<FailureData> {
    let map = object(value, path, diags)?;
    reject_unknown_fields(map, path, &["message"], diags);
    let message = string_field(map, path, "message", diags);
    Some(FailureData { message: message? })
}

fn lyrics_data_value(
    value: &Value,
    path: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<LyricsData> {
    let map = object(value, path, diags)?;
    reject_unknown_fields(map, path, &["lyrics", "track"], diags);
    let lyrics = required(map, path, "lyrics", "an array", diags)
        .and_then(|v| array_of(v, &join(path, "lyrics"), diags, lyrics_value));
    let track = required(map, path, "track", "an object", diags)
        .and_then(|v| track_value(v, &join(path, "track"), diags));
    Some(LyricsData {
        lyrics: lyrics?,
        track: track?,
    })
}

fn response_value(
    value: &Value,
    path: &str,
    diags: &mut ValidationDiagnostics,
) -> Option<LyricsResponse> {
    let map = object(value, path, diags)?;
    reject_unknown_fields(map, path, &["success", "data"], diags);
    let success = required(map, path, "success", "a boolean", diags)
        .and_then(|v| boolean(v, &join(path, "success"), diags));
    let data = required(map, path, "data", "an object", diags);
    let data_path = join(path, "data");
    match (success, data) {
        (Some(true), Some(data)) => {
            lyrics_data_value(data, &data_path, diags).map(LyricsResponse::Success)
        }
        (Some(false), Some(data)) => {
            failure_data_value(data, &data_path, diags).map(LyricsResponse::Failure)
        }
        _ => None,
    }
}
