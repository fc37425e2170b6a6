use serde::{Deserialize, Serialize};

/// State threaded through the nodes of one graph run.
///
/// Both fields start out unset; nodes take the state by value and return a
/// new record rather than mutating shared storage. Unset fields are omitted
/// from the serialized form, so the empty state renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl GraphState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the state with `message` set.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns a copy of the state with `question` set.
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.question.is_none()
    }
}
