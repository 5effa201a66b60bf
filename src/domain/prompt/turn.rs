//! Conversation turns and the bounded history window.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The learner.
    Human,
    /// The tutor persona.
    Agent,
}

impl Speaker {
    /// Maps a caller-supplied sender tag onto a speaker.
    ///
    /// Only the exact tag `user` is the learner; every other tag, including
    /// `bot`, `USER` and unknown values, is coerced to the agent.
    pub fn from_sender_tag(tag: &str) -> Self {
        if tag == "user" {
            Speaker::Human
        } else {
            Speaker::Agent
        }
    }
}

/// One prior exchange in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    /// Creates a turn.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    /// Creates a learner turn.
    pub fn human(text: impl Into<String>) -> Self {
        Self::new(Speaker::Human, text)
    }

    /// Creates a tutor turn.
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Speaker::Agent, text)
    }

    /// Creates a turn from the client's `{sender, text}` shape.
    pub fn from_sender(sender: &str, text: impl Into<String>) -> Self {
        Self::new(Speaker::from_sender_tag(sender), text)
    }

    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// How much history a call site keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCap {
    /// Keep only the most recent `n` turns.
    Recent(usize),
    /// Keep everything the caller sent.
    Unbounded,
}

impl HistoryCap {
    /// Builds a cap from an optional limit (`None` means unbounded).
    pub fn from_limit(limit: Option<usize>) -> Self {
        match limit {
            Some(n) => HistoryCap::Recent(n),
            None => HistoryCap::Unbounded,
        }
    }
}

/// The ordered turns that go into a chat prompt.
///
/// Rebuilt from caller data on every request; there is no server-side store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationWindow {
    turns: Vec<Turn>,
}

impl ConversationWindow {
    /// Wraps turns as-is, without truncation.
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    /// Keeps the most recent turns allowed by `cap`, in chronological order.
    pub fn from_history(turns: Vec<Turn>, cap: HistoryCap) -> Self {
        match cap {
            HistoryCap::Unbounded => Self::new(turns),
            HistoryCap::Recent(n) => {
                let skip = turns.len().saturating_sub(n);
                Self::new(turns.into_iter().skip(skip).collect())
            }
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
