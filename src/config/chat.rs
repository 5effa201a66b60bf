//! Conversation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::prompt::{HistoryCap, Persona};

/// Persona and history window settings for the chat routes.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Name the model speaks as
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Turns of history replayed for open chat
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Turns of history replayed for scenarios; unset keeps the whole history
    pub scenario_history_limit: Option<usize>,
}

impl ChatConfig {
    pub fn persona(&self) -> Result<Persona, ValidationError> {
        Persona::new(&self.persona).map_err(|_| ValidationError::InvalidPersona)
    }

    pub fn history_cap(&self) -> HistoryCap {
        HistoryCap::Recent(self.history_limit)
    }

    pub fn scenario_history_cap(&self) -> HistoryCap {
        HistoryCap::from_limit(self.scenario_history_limit)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.persona()?;
        if self.history_limit == 0 || self.scenario_history_limit == Some(0) {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            persona: default_persona(),
            history_limit: default_history_limit(),
            scenario_history_limit: None,
        }
    }
}

fn default_persona() -> String {
    "Ada".to_string()
}

fn default_history_limit() -> usize {
    6
}
