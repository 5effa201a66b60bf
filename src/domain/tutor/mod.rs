//! Tutoring task catalog.

mod echo;
mod level;
mod task;
pub mod templates;

pub use echo::{detect_level_echo, echo_preview, ECHO_PREVIEW_CHARS};
pub use level::{describe_level, DEFAULT_LEVEL_DESCRIPTION};
pub use task::{ErrorStyle, ReplyGuard, TutorTask};
