// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::{
        validate_requested_types, validate_response, Lyrics, LyricsResponse, LyricsType,
    };
    use serde_json::json;

    fn success_envelope() -> serde_json::Value {
        json!({
            "success": true,
            "data": {
                "lyrics": [
                    {
                        "type": "wbw",
                        "lyrics": [{
                            "text": "flashlights",
                            "start": 12.5,
                            "end": 13.1,
                            "syllables": [
                                { "text": "flash", "start": 12.5, "end": 12.8 },
                                { "text": "lights", "start": 12.8, "end": 13.1 }
                            ]
                        }],
                        "copyright": "© Powfu"
                    },
                    {
                        "type": "lbl",
                        "lyrics": [
                            { "text": "flashlights in the forest", "start": 12.5, "end": 15.0 }
                        ],
                        "copyright": "© Powfu"
                    },
                    {
                        "type": "raw",
                        "text": "flashlights in the forest",
                        "copyright": "© Powfu"
                    }
                ],
                "track": {
                    "id": "4iV5W9uYEdYUVa79Axb7Rh",
                    "title": "flashlights by the forest",
                    "artists": ["Powfu"],
                    "genres": ["lo-fi"],
                    "length": 154.2,
                    "explicit": false,
                    "album_id": null,
                    "album_name": "some boring love stories"
                }
            }
        })
    }

    fn failure_envelope(message: &str) -> serde_json::Value {
        json!({
            "success": false,
            "data": { "message": message }
        })
    }

    #[test]
    fn test_accepts_success_envelope() {
        let response = validate_response(&success_envelope()).unwrap();
        assert!(response.is_success());
        let LyricsResponse::Success(data) = response else {
            panic!("expected a success envelope");
        };
        assert_eq!(data.lyrics.len(), 3);
        assert_eq!(data.track.title, "flashlights by the forest");
        assert_eq!(data.track.album_id, None);
        assert!(!data.track.explicit);
    }

    #[test]
    fn test_accepts_failure_envelope() {
        let response = validate_response(&failure_envelope("no lyrics available")).unwrap();
        let LyricsResponse::Failure(data) = response else {
            panic!("expected a failure envelope");
        };
        assert_eq!(data.message, "no lyrics available");
    }

    #[test]
    fn test_rejects_missing_success_field() {
        let diags = validate_response(&json!({ "data": { "message": "hi" } })).unwrap_err();
        assert_eq!(diags.mismatches().len(), 1);
        assert_eq!(diags.mismatches()[0].path, "success");
        assert_eq!(diags.mismatches()[0].found, "missing");
    }

    #[test]
    fn test_rejects_non_object_payload() {
        let diags = validate_response(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(diags.mismatches().len(), 1);
        assert_eq!(diags.mismatches()[0].path, "");
        assert_eq!(diags.mismatches()[0].expected, "an object");
    }

    #[test]
    fn test_rejects_wrongly_typed_fields_with_paths() {
        let mut payload = success_envelope();
        payload["data"]["track"]["length"] = json!("154.2");
        payload["data"]["lyrics"][2]["text"] = json!(42);
        let diags = validate_response(&payload).unwrap_err();

        let paths: Vec<&str> = diags.mismatches().iter().map(|m| m.path.as_str()).collect();
        assert!(paths.contains(&"data.track.length"));
        assert!(paths.contains(&"data.lyrics[2].text"));
        assert_eq!(diags.mismatches().len(), 2);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let mut payload = failure_envelope("nope");
        payload["data"]["details"] = json!({ "code": 7 });
        let diags = validate_response(&payload).unwrap_err();
        assert_eq!(diags.mismatches().len(), 1);
        assert_eq!(diags.mismatches()[0].path, "data.details");
        assert_eq!(diags.mismatches()[0].expected, "no value (unknown field)");
    }

    #[test]
    fn test_rejects_unknown_lyrics_tag() {
        let mut payload = success_envelope();
        payload["data"]["lyrics"][0] = json!({
            "type": "karaoke",
            "text": "la la",
            "copyright": "©"
        });
        let diags = validate_response(&payload).unwrap_err();
        assert_eq!(diags.mismatches().len(), 1);
        assert_eq!(diags.mismatches()[0].path, "data.lyrics[0].type");
        assert_eq!(diags.mismatches()[0].found, "\"karaoke\"");
    }

    #[test]
    fn test_rejects_fields_from_another_variant() {
        // a raw variant must not carry the timed `lyrics` field
        let mut payload = success_envelope();
        payload["data"]["lyrics"][2] = json!({
            "type": "raw",
            "text": "la la",
            "lyrics": [],
            "copyright": "©"
        });
        let diags = validate_response(&payload).unwrap_err();
        assert_eq!(diags.mismatches().len(), 1);
        assert_eq!(diags.mismatches()[0].path, "data.lyrics[2].lyrics");
    }

    #[test]
    fn test_rejects_syllable_mismatch_inside_word() {
        let mut payload = success_envelope();
        payload["data"]["lyrics"][0]["lyrics"][0]["syllables"][1]["start"] = json!(null);
        let diags = validate_response(&payload).unwrap_err();
        assert_eq!(diags.mismatches().len(), 1);
        assert_eq!(
            diags.mismatches()[0].path,
            "data.lyrics[0].lyrics[0].syllables[1].start"
        );
    }

    #[test]
    fn test_collects_every_mismatch_in_one_pass() {
        let diags = validate_response(&json!({
            "success": true,
            "data": {
                "lyrics": "not an array",
                "track": { "id": "x" }
            }
        }))
        .unwrap_err();
        // bad lyrics plus every missing track field
        assert!(diags.mismatches().len() >= 8);
        let rendered = diags.to_string();
        assert!(rendered.contains("data.lyrics"));
        assert!(rendered.contains("data.track.title"));
    }

    #[test]
    fn test_accepts_empty_strings_and_any_numbers() {
        let mut payload = success_envelope();
        payload["data"]["track"]["album_name"] = json!("");
        payload["data"]["track"]["length"] = json!(-1);
        payload["data"]["lyrics"][1]["lyrics"][0]["start"] = json!(0);
        assert!(validate_response(&payload).is_ok());
    }

    #[test]
    fn test_album_id_accepts_string_or_null() {
        let mut payload = success_envelope();
        payload["data"]["track"]["album_id"] = json!("6nxDQi0FeEwccEPJeNySoS");
        let response = validate_response(&payload).unwrap();
        let LyricsResponse::Success(data) = response else {
            panic!("expected a success envelope");
        };
        assert_eq!(
            data.track.album_id.as_deref(),
            Some("6nxDQi0FeEwccEPJeNySoS")
        );

        payload["data"]["track"]["album_id"] = json!(17);
        let diags = validate_response(&payload).unwrap_err();
        assert_eq!(diags.mismatches()[0].path, "data.track.album_id");
    }

    #[test]
    fn test_requested_types_accepts_one_to_three_unique() {
        assert!(validate_requested_types(&[LyricsType::Raw]).is_ok());
        assert!(validate_requested_types(&[LyricsType::Wbw, LyricsType::Lbl]).is_ok());
        assert!(
            validate_requested_types(&[LyricsType::Wbw, LyricsType::Lbl, LyricsType::Raw]).is_ok()
        );
    }

    #[test]
    fn test_requested_types_rejects_empty() {
        let diags = validate_requested_types(&[]).unwrap_err();
        assert_eq!(diags.mismatches().len(), 1);
        assert_eq!(diags.mismatches()[0].path, "types");
        assert_eq!(diags.mismatches()[0].found, "an empty sequence");
    }

    #[test]
    fn test_requested_types_rejects_oversized_and_duplicates_together() {
        let diags = validate_requested_types(&[
            LyricsType::Raw,
            LyricsType::Lbl,
            LyricsType::Raw,
            LyricsType::Raw,
        ])
        .unwrap_err();
        let paths: Vec<&str> = diags.mismatches().iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["types", "types[2]", "types[3]"]);
        assert_eq!(diags.mismatches()[1].found, "duplicate \"raw\"");
    }

    #[test]
    fn test_extract_returns_first_match_by_kind() {
        let response = validate_response(&success_envelope()).unwrap();
        let LyricsResponse::Success(data) = response else {
            panic!("expected a success envelope");
        };

        let raw = data.extract(LyricsType::Raw).unwrap();
        assert_eq!(raw.kind(), LyricsType::Raw);
        assert_eq!(raw.copyright(), "© Powfu");

        let wbw = data.extract(LyricsType::Wbw).unwrap();
        let Lyrics::Wbw { lyrics, .. } = wbw else {
            panic!("expected word-by-word lyrics");
        };
        assert_eq!(lyrics[0].syllables.len(), 2);
    }

    #[test]
    fn test_extract_absent_kind_returns_none() {
        let payload = json!({
            "success": true,
            "data": {
                "lyrics": [
                    { "type": "raw", "text": "la la", "copyright": "©" }
                ],
                "track": success_envelope()["data"]["track"]
            }
        });
        let LyricsResponse::Success(data) = validate_response(&payload).unwrap() else {
            panic!("expected a success envelope");
        };
        assert!(data.extract(LyricsType::Raw).is_some());
        assert!(data.extract(LyricsType::Lbl).is_none());
    }

    #[test]
    fn test_extract_duplicate_kinds_first_wins() {
        let payload = json!({
            "success": true,
            "data": {
                "lyrics": [
                    { "type": "raw", "text": "first", "copyright": "©" },
                    { "type": "raw", "text": "second", "copyright": "©" }
                ],
                "track": success_envelope()["data"]["track"]
            }
        });
        let LyricsResponse::Success(data) = validate_response(&payload).unwrap() else {
            panic!("expected a success envelope");
        };
        let Some(Lyrics::Raw { text, .. }) = data.extract(LyricsType::Raw) else {
            panic!("expected raw lyrics");
        };
        assert_eq!(text, "first");
    }

    #[test]
    fn test_validation_is_idempotent_over_serialization() {
        for payload in [success_envelope(), failure_envelope("nope")] {
            let first = validate_response(&payload).unwrap();
            let reserialized = serde_json::to_value(&first).unwrap();
            let second = validate_response(&reserialized).unwrap();
            assert_eq!(first, second);
        }
    }
}
