//! The single-shot tutoring tasks and how each one is run.
//!
//! Every task is one instruction prompt, one model call and one extraction.
//! What differs per task is captured here: template, extraction strategy,
//! reply guard and how failures are written into the response.

use super::echo::{detect_level_echo, echo_preview};
use super::templates;
use crate::domain::extraction::marker_sets::{correction_extractor, translation_extractor};
use crate::domain::extraction::{Extractor, WholeBodyExtractor};
use crate::domain::foundation::RelayError;
use crate::domain::prompt::{InstructionTemplate, Substitutions};

/// A tutoring task backed by one instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TutorTask {
    GenerateText,
    Dictionary,
    Correction,
    GrammarAid,
    Essay,
    EssayOutline,
    Paraphrase,
    Summarize,
    TranslateExplain,
    ScenarioOpening,
}

impl TutorTask {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            TutorTask::GenerateText => "generate_text",
            TutorTask::Dictionary => "dictionary",
            TutorTask::Correction => "correct_text",
            TutorTask::GrammarAid => "grammar_aid",
            TutorTask::Essay => "essay",
            TutorTask::EssayOutline => "essay_outline",
            TutorTask::Paraphrase => "paraphrase",
            TutorTask::Summarize => "summarize",
            TutorTask::TranslateExplain => "translate_explain",
            TutorTask::ScenarioOpening => "scenario_opening",
        }
    }

    pub fn template(&self) -> &'static InstructionTemplate {
        match self {
            TutorTask::GenerateText => &templates::GENERATE_TEXT,
            TutorTask::Dictionary => &templates::DICTIONARY,
            TutorTask::Correction => &templates::CORRECTION,
            TutorTask::GrammarAid => &templates::GRAMMAR_AID,
            TutorTask::Essay => &templates::ESSAY,
            TutorTask::EssayOutline => &templates::ESSAY_OUTLINE,
            TutorTask::Paraphrase => &templates::PARAPHRASE,
            TutorTask::Summarize => &templates::SUMMARY,
            TutorTask::TranslateExplain => &templates::TRANSLATE_EXPLAIN,
            TutorTask::ScenarioOpening => &templates::SCENARIO_OPENING,
        }
    }

    /// Field that carries the result, or the error marker on failure.
    pub fn primary_field(&self) -> &'static str {
        match self {
            TutorTask::GenerateText => "generated_text",
            TutorTask::Dictionary => "details",
            TutorTask::Correction => "corrected_text",
            TutorTask::GrammarAid => "explanation",
            TutorTask::Essay | TutorTask::EssayOutline => "essay_content",
            TutorTask::Paraphrase => "rephrased_text",
            TutorTask::Summarize => "summary",
            TutorTask::TranslateExplain => "translation",
            TutorTask::ScenarioOpening => "reply",
        }
    }

    pub fn extractor(&self) -> Box<dyn Extractor> {
        match self {
            TutorTask::Correction => Box::new(correction_extractor()),
            TutorTask::TranslateExplain => Box::new(translation_extractor()),
            other => Box::new(WholeBodyExtractor::new(other.primary_field())),
        }
    }

    pub fn reply_guard(&self) -> ReplyGuard {
        match self {
            TutorTask::GenerateText => ReplyGuard::LevelEcho,
            _ => ReplyGuard::None,
        }
    }

    pub fn error_style(&self) -> ErrorStyle {
        match self {
            TutorTask::ScenarioOpening => ErrorStyle::Apology,
            _ => ErrorStyle::Prefixed,
        }
    }
}

/// Post-extraction check on the reply body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyGuard {
    None,
    /// Rejects replies that repeat the `level` / `level_description`
    /// substitutions instead of answering.
    LevelEcho,
}

impl ReplyGuard {
    pub fn check(&self, body: &str, substitutions: &Substitutions) -> Result<(), RelayError> {
        match self {
            ReplyGuard::None => Ok(()),
            ReplyGuard::LevelEcho => {
                let level = substitutions.get("level").unwrap_or_default();
                let description = substitutions.get("level_description").unwrap_or_default();
                if detect_level_echo(body, level, description) {
                    Err(RelayError::EchoedInput {
                        preview: echo_preview(body),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// How a failure message is written into the primary field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStyle {
    /// `Error: {message}`
    Prefixed,
    /// `Sorry, an error occurred ({message}).`
    Apology,
}

impl ErrorStyle {
    pub fn render(&self, err: &RelayError) -> String {
        match self {
            ErrorStyle::Prefixed => format!("Error: {}", err),
            ErrorStyle::Apology => format!("Sorry, an error occurred ({}).", err),
        }
    }
}
