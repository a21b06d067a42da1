use serde::{Deserialize, Serialize};

use crate::catalog::rules::ChatTable;
use crate::matching::error::EngineError;
use crate::utils::validation::require_text;

/// Assistant reply to a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// Topic of the rule that produced the reply
    pub topic: String,
    /// RFC 3339 time the reply was produced (UTC)
    pub timestamp: String,
}

/// Answers chat messages from a keyword table
pub struct ChatResponder<'a> {
    table: &'a ChatTable,
}

impl<'a> ChatResponder<'a> {
    pub fn new(table: &'a ChatTable) -> Self {
        Self { table }
    }

    /// Reply with the first rule whose keywords appear in `message`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the message is blank.
    pub fn respond(&self, message: &str) -> Result<ChatReply, EngineError> {
        let message = require_text("message", message)?;
        let rule = self.table.select(message);
        tracing::debug!("Chat message answered with topic '{}'", rule.topic);

        Ok(ChatReply {
            response: rule.response.clone(),
            topic: rule.topic.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }
}
