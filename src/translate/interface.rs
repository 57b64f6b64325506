use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const DEFAULT_TONE: &str = "Cute";

/// A permitted `SRC>DST` translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub from: &'static str,
    pub to: &'static str,
}

/// Every direction the endpoint accepts, keyed by its wire form.
const ALLOWED_DIRECTIONS: [(&str, Direction); 6] = [
    ("EN>JA", Direction { from: "EN", to: "JA" }),
    ("EN>ZH-TW", Direction { from: "EN", to: "ZH-TW" }),
    ("JA>EN", Direction { from: "JA", to: "EN" }),
    ("ZH-TW>EN", Direction { from: "ZH-TW", to: "EN" }),
    ("JA>ZH-TW", Direction { from: "JA", to: "ZH-TW" }),
    ("ZH-TW>JA", Direction { from: "ZH-TW", to: "JA" }),
];

impl Direction {
    /// Exact membership lookup; no case folding or trimming.
    pub fn parse(value: &str) -> Option<Self> {
        ALLOWED_DIRECTIONS
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, direction)| *direction)
    }
}

/// Validated translation request
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateRequest {
    pub text: String,
    pub direction: Direction,
    pub tone: String,
}

impl TranslateRequest {
    /// Validate a raw JSON body.
    ///
    /// The body is taken loosely so that shape problems surface as
    /// `Missing text` / `Bad direction` instead of a deserializer rejection.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        let text = match body.get("text").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => return Err(AppError::MissingText),
        };

        let direction = body
            .get("direction")
            .and_then(Value::as_str)
            .and_then(Direction::parse)
            .ok_or(AppError::BadDirection)?;

        let tone = match body.get("tone").and_then(Value::as_str) {
            Some(tone) if !tone.is_empty() => tone.to_string(),
            _ => DEFAULT_TONE.to_string(),
        };

        Ok(Self {
            text,
            direction,
            tone,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_allowed_directions_parse() {
        for (key, expected) in ALLOWED_DIRECTIONS {
            let direction = Direction::parse(key).unwrap();
            assert_eq!(direction, expected);
            assert_eq!(format!("{}>{}", direction.from, direction.to), key);
        }
    }

    #[test]
    fn test_rejects_directions_outside_allow_list() {
        for value in [
            "en>ja", "En>Ja", "JA>JA", "EN>EN", "ZH-TW>ZH-TW", "EN>ZH", "ZH>EN", " EN>JA",
            "EN>JA ", "EN > JA", "EN-JA", "", ">", "EN>JA>EN",
        ] {
            assert!(Direction::parse(value).is_none(), "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_valid_body() {
        let request = TranslateRequest::from_body(&json!({
            "text": "Hi 😊",
            "direction": "EN>JA",
            "tone": "Flirty"
        }))
        .unwrap();
        assert_eq!(request.text, "Hi 😊");
        assert_eq!(request.direction, Direction { from: "EN", to: "JA" });
        assert_eq!(request.tone, "Flirty");
    }

    #[test]
    fn test_tone_defaults_to_cute() {
        for tone in [None, Some(json!(null)), Some(json!("")), Some(json!(3))] {
            let mut body = json!({"text": "hello", "direction": "JA>EN"});
            if let Some(tone) = tone {
                body["tone"] = tone;
            }
            let request = TranslateRequest::from_body(&body).unwrap();
            assert_eq!(request.tone, DEFAULT_TONE);
        }
    }

    #[test]
    fn test_missing_text() {
        for body in [
            json!({"direction": "EN>JA"}),
            json!({"text": null, "direction": "EN>JA"}),
            json!({"text": 42, "direction": "EN>JA"}),
            json!({"text": ["a"], "direction": "EN>JA"}),
            json!({"text": "", "direction": "EN>JA"}),
            json!(null),
            json!("just a string"),
        ] {
            assert!(matches!(
                TranslateRequest::from_body(&body),
                Err(AppError::MissingText)
            ));
        }
    }

    #[test]
    fn test_text_is_checked_before_direction() {
        let body = json!({"direction": "nope"});
        assert!(matches!(
            TranslateRequest::from_body(&body),
            Err(AppError::MissingText)
        ));
    }

    #[test]
    fn test_bad_direction() {
        for direction in [json!("en>ja"), json!("JA>JA"), json!(null), json!(1)] {
            let body = json!({"text": "hello", "direction": direction});
            assert!(matches!(
                TranslateRequest::from_body(&body),
                Err(AppError::BadDirection)
            ));
        }
        assert!(matches!(
            TranslateRequest::from_body(&json!({"text": "hello"})),
            Err(AppError::BadDirection)
        ));
    }

    #[test]
    fn test_response_serializes_single_field() {
        let response = TranslateResponse {
            translation: "こんにちは".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"translation": "こんにちは"})
        );
    }
}
