use serde::{Deserialize, Serialize};

use crate::insight::TrackInsight;

use super::respond::respond;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Agent,
    User,
}

/// One turn in the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Per-log sequence number; unique within one log.
    pub id: u64,
    pub role: Role,
    /// Turn text. May contain embedded line breaks, which the rendering
    /// shell must preserve literally.
    pub content: String,
    /// Monotonic ordering key. Not wall-clock time and never computed with.
    pub timestamp: u64,
}

/// Append-only conversation log. Messages are never edited or removed.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<Message>,
    next_seq: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log opened by the agent with `greeting`.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut log = Self::new();
        log.push(Role::Agent, greeting.to_string());
        log
    }

    fn push(&mut self, role: Role, content: String) -> usize {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(Message {
            id: seq,
            role,
            content,
            timestamp: seq,
        });
        self.messages.len() - 1
    }

    /// Record one user question and produce exactly one agent reply for it.
    pub fn ask(&mut self, question: &str, insights: &[TrackInsight]) -> &Message {
        self.push(Role::User, question.to_string());
        let reply = respond(question, insights);
        let at = self.push(Role::Agent, reply);
        &self.messages[at]
    }

    /// Every turn so far, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
