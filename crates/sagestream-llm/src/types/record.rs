use serde::{Deserialize, Serialize};

use crate::error::{Result, StreamError};
use crate::streaming::StreamEvent;

/// Content value marking the end of generation
pub const STOP_TOKEN: &str = "</s>";

/// One decoded line of the endpoint's newline-delimited JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub delta: Delta,
    /// Number of tokens generated so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Record {
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
    }

    /// Classify the first choice.
    ///
    /// Returns `Ok(None)` when the delta carries no content. The stop sentinel
    /// requires `index` to be present.
    pub fn event(&self) -> Result<Option<StreamEvent>> {
        let choice = self
            .choices
            .first()
            .ok_or(StreamError::MissingField("choices"))?;

        let Some(content) = choice.delta.content.as_deref() else {
            return Ok(None);
        };

        if content != STOP_TOKEN {
            return Ok(Some(StreamEvent::Content {
                content: content.to_string(),
            }));
        }

        let tokens = choice.index.ok_or(StreamError::MissingField("index"))?;
        Ok(Some(StreamEvent::Stop { tokens }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_content_event() {
        let r = record(r#"{"choices":[{"delta":{"content":"hi"},"index":1}]}"#);
        assert_eq!(r.content(), Some("hi"));
        assert_eq!(
            r.event().unwrap(),
            Some(StreamEvent::Content { content: "hi".to_string() })
        );
    }

    #[test]
    fn test_stop_event() {
        let r = record(r#"{"choices":[{"delta":{"content":"</s>"},"index":7}]}"#);
        assert_eq!(r.event().unwrap(), Some(StreamEvent::Stop { tokens: 7 }));
    }

    #[test]
    fn test_delta_without_content() {
        let r = record(r#"{"choices":[{"delta":{"role":"assistant"},"index":0}]}"#);
        assert_eq!(r.event().unwrap(), None);
    }

    #[test]
    fn test_null_content_is_treated_as_absent() {
        let r = record(r#"{"choices":[{"delta":{"content":null},"index":3}]}"#);
        assert_eq!(r.content(), None);
        assert_eq!(r.event().unwrap(), None);
    }

    #[test]
    fn test_non_string_content_fails_to_parse() {
        let result = serde_json::from_str::<Record>(r#"{"choices":[{"delta":{"content":5},"index":3}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let r = record(r#"{"choices":[]}"#);
        assert!(matches!(r.event(), Err(StreamError::MissingField("choices"))));
    }

    #[test]
    fn test_stop_without_index_is_an_error() {
        let r = record(r#"{"choices":[{"delta":{"content":"</s>"}}]}"#);
        assert!(matches!(r.event(), Err(StreamError::MissingField("index"))));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let r = record(
            r#"{"id":"x","model":"llama","choices":[{"delta":{"content":"a"},"index":2,"logprobs":null}]}"#,
        );
        assert_eq!(r.content(), Some("a"));
    }
}
