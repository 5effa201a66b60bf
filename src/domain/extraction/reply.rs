//! What the text model handed back.

/// The model's answer before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawReply {
    /// Free text.
    Text(String),
    /// The provider refused for content-policy reasons.
    Blocked { reason: String },
    /// The provider answered with nothing usable.
    Empty,
}

impl RawReply {
    /// Wraps model text, classifying blank text as `Empty`.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            RawReply::Empty
        } else {
            RawReply::Text(text)
        }
    }

    pub fn blocked(reason: impl Into<String>) -> Self {
        RawReply::Blocked {
            reason: reason.into(),
        }
    }

    /// Length of the text body, zero for signals.
    pub fn text_len(&self) -> usize {
        match self {
            RawReply::Text(text) => text.len(),
            _ => 0,
        }
    }
}
