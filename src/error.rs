//! Error types.
//!
//! - [`GameError`]: start-up failures surfaced to JS as exceptions
//! - [`QuizError`]: content lookups that can fail while building a question

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Start-up / surface errors. Anything here aborts `start_game`.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),

    #[error("canvas has no 2d context")]
    NoContext,

    #[error("invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("quiz setup failed: {0}")]
    Quiz(#[from] QuizError),

    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Content errors raised while generating a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("unknown fallacy '{0}'")]
    UnknownFallacy(String),

    #[error("fallacy '{key}' has {found} related kinds, need {needed}")]
    TooFewRelated {
        key: String,
        found: usize,
        needed: usize,
    },

    #[error("not enough fallacy kinds to fill {needed} choices")]
    TooFewKinds { needed: usize },

    #[error("passage pool is empty")]
    NoPassages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_error_messages_name_the_key() {
        let err = QuizError::UnknownFallacy("red-herring".into());
        assert_eq!(err.to_string(), "unknown fallacy 'red-herring'");
        let err = QuizError::TooFewRelated {
            key: "x".into(),
            found: 1,
            needed: 2,
        };
        assert!(err.to_string().contains("has 1 related"));
    }

    #[test]
    fn quiz_error_wraps_into_game_error() {
        let err: GameError = QuizError::NoPassages.into();
        assert_eq!(err.to_string(), "quiz setup failed: passage pool is empty");
    }
}
