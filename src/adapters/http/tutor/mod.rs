//! HTTP adapter for the tutoring endpoints: chat, scenarios and the
//! single-shot instruction tasks.

mod dto;
mod handlers;
mod routes;

pub use dto::{parse_history, FieldsResponse, ReplyResponse, TurnDto};
pub use handlers::TutorHandlers;
pub use routes::tutor_routes;
