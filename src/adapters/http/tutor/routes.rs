//! HTTP routes for the tutoring endpoints.

use axum::{routing::post, Router};

use super::handlers::{
    chat, correct_text, dictionary, essay, generate_text, grammar_aid, paraphrase, scenario_chat,
    summarize, translate_explain, TutorHandlers,
};

/// Creates the tutoring router. Mounted under `/api`.
pub fn tutor_routes(handlers: TutorHandlers) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/scenario-chat", post(scenario_chat))
        .route("/generate_text", post(generate_text))
        .route("/dictionary", post(dictionary))
        .route("/correct_text", post(correct_text))
        .route("/grammar_aid", post(grammar_aid))
        .route("/essay", post(essay))
        .route("/paraphrase", post(paraphrase))
        .route("/summarize", post(summarize))
        .route("/translate_explain", post(translate_explain))
        .with_state(handlers)
}
