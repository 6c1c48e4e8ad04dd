use serde::{Deserialize, Serialize};

/// What a single record contributes to the rendered output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Incremental text to append to the output
    Content {
        content: String,
    },

    /// End of generation, with the token count reported by the endpoint
    Stop {
        tokens: u64,
    },
}

impl StreamEvent {
    pub fn is_stop(&self) -> bool {
        matches!(self, StreamEvent::Stop { .. })
    }
}
