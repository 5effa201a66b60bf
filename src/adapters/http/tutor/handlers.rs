//! HTTP handlers for the tutoring endpoints.
//!
//! Failures keep the success shape: the primary field carries the error
//! marker and an extra `error` key carries the message.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_json, status_for};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    ChatCommand, ChatHandler, RunInstructionCommand, RunInstructionHandler, ScenarioChatCommand,
    ScenarioChatHandler,
};
use crate::domain::extraction::ExtractedFields;
use crate::domain::foundation::{CallerIdentity, RelayError};
use crate::domain::prompt::Substitutions;
use crate::domain::tutor::{describe_level, ErrorStyle, TutorTask};

use super::dto::{
    parse_history, ChatRequest, CorrectTextRequest, DictionaryRequest, EssayRequest,
    FieldsResponse, GenerateTextRequest, GrammarAidRequest, ParaphraseRequest, ReplyResponse,
    ScenarioChatRequest, SummarizeRequest, TranslateExplainRequest,
};

const DEFAULT_ESSAY_TYPE: &str = "argumentative";
const DEFAULT_PARAPHRASE_STYLE: &str = "simpler";
const DEFAULT_TARGET_LANGUAGE: &str = "English";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TutorHandlers {
    chat_handler: Arc<ChatHandler>,
    scenario_handler: Arc<ScenarioChatHandler>,
    instruction_handler: Arc<RunInstructionHandler>,
}

impl TutorHandlers {
    pub fn new(
        chat_handler: Arc<ChatHandler>,
        scenario_handler: Arc<ScenarioChatHandler>,
        instruction_handler: Arc<RunInstructionHandler>,
    ) -> Self {
        Self {
            chat_handler,
            scenario_handler,
            instruction_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Chat handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Continue an open conversation
pub async fn chat(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };

    let result = match parse_history(req.history) {
        Ok(history) => {
            handlers
                .chat_handler
                .handle(ChatCommand {
                    caller,
                    history,
                    message: req.message.unwrap_or_default(),
                })
                .await
        }
        Err(e) => Err(e),
    };

    reply_response(result, ErrorStyle::Prefixed)
}

/// POST /api/scenario-chat - Start or continue a role-play scenario
pub async fn scenario_chat(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<ScenarioChatRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };

    let result = match parse_history(req.history) {
        Ok(history) => {
            handlers
                .scenario_handler
                .handle(ScenarioChatCommand {
                    caller,
                    scenario: req.scenario.unwrap_or_default(),
                    history,
                    message: req.message,
                    start: req.start,
                })
                .await
        }
        Err(e) => Err(e),
    };

    reply_response(result, TutorTask::ScenarioOpening.error_style())
}

fn reply_response(result: Result<String, RelayError>, style: ErrorStyle) -> Response {
    match result {
        Ok(reply) => (StatusCode::OK, Json(ReplyResponse { reply, error: None })).into_response(),
        Err(e) => (
            status_for(&e),
            Json(ReplyResponse {
                reply: style.render(&e),
                error: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Instruction handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/generate_text - Reading passage at a learner level
pub async fn generate_text(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<GenerateTextRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let task = TutorTask::GenerateText;

    let level = req.level.unwrap_or_default();
    if level.trim().is_empty() {
        let err = RelayError::invalid_input("Missing required field: level");
        return fields_response(task, Err(err));
    }

    let substitutions = Substitutions::new()
        .with("level_description", describe_level(&level))
        .with("level", level)
        .with("topic", req.topic.unwrap_or_default());

    run_task(&handlers, caller, task, substitutions).await
}

/// POST /api/dictionary - Word details
pub async fn dictionary(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<DictionaryRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let substitutions = Substitutions::new().with("word", req.word.unwrap_or_default());

    run_task(&handlers, caller, TutorTask::Dictionary, substitutions).await
}

/// POST /api/correct_text - Corrected text plus feedback
pub async fn correct_text(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<CorrectTextRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let substitutions = Substitutions::new().with("text", req.text.unwrap_or_default());

    run_task(&handlers, caller, TutorTask::Correction, substitutions).await
}

/// POST /api/grammar_aid - Grammar explanation
pub async fn grammar_aid(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<GrammarAidRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let substitutions = Substitutions::new().with("topic", req.topic.unwrap_or_default());

    run_task(&handlers, caller, TutorTask::GrammarAid, substitutions).await
}

/// POST /api/essay - Full essay, or an outline with `outline_only`
pub async fn essay(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<EssayRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let task = if req.outline_only {
        TutorTask::EssayOutline
    } else {
        TutorTask::Essay
    };
    let substitutions = Substitutions::new()
        .with("topic", req.topic.unwrap_or_default())
        .with("essay_type", or_default(req.essay_type, DEFAULT_ESSAY_TYPE));

    run_task(&handlers, caller, task, substitutions).await
}

/// POST /api/paraphrase - Rephrase in a requested style
pub async fn paraphrase(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<ParaphraseRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let substitutions = Substitutions::new()
        .with("text", req.text.unwrap_or_default())
        .with("style", or_default(req.style, DEFAULT_PARAPHRASE_STYLE));

    run_task(&handlers, caller, TutorTask::Paraphrase, substitutions).await
}

/// POST /api/summarize - Summary
pub async fn summarize(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let substitutions = Substitutions::new().with("text", req.text.unwrap_or_default());

    run_task(&handlers, caller, TutorTask::Summarize, substitutions).await
}

/// POST /api/translate_explain - Translation plus explanation
pub async fn translate_explain(
    State(handlers): State<TutorHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<TranslateExplainRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };
    let substitutions = Substitutions::new()
        .with("text", req.text.unwrap_or_default())
        .with(
            "target_language",
            or_default(req.target_language, DEFAULT_TARGET_LANGUAGE),
        );

    run_task(&handlers, caller, TutorTask::TranslateExplain, substitutions).await
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

async fn run_task(
    handlers: &TutorHandlers,
    caller: CallerIdentity,
    task: TutorTask,
    substitutions: Substitutions,
) -> Response {
    let result = handlers
        .instruction_handler
        .handle(RunInstructionCommand::new(caller, task, substitutions))
        .await;
    fields_response(task, result)
}

fn fields_response(task: TutorTask, result: Result<ExtractedFields, RelayError>) -> Response {
    match result {
        Ok(fields) => (StatusCode::OK, Json(FieldsResponse::from(fields))).into_response(),
        Err(e) => {
            let extractor = task.extractor();
            let body = FieldsResponse::failure(
                &extractor.field_names(),
                task.primary_field(),
                task.error_style().render(&e),
                &e,
            );
            (status_for(&e), Json(body)).into_response()
        }
    }
}
