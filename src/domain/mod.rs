//! Domain layer: prompt construction, reply extraction and the tutoring tasks.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, caller identity, errors)
//! - `prompt` - Conversation turns, persona, templates and the prompt composer
//! - `extraction` - Raw replies and the field extraction strategies
//! - `tutor` - Tutoring tasks, their templates, level mapping and echo policy

pub mod extraction;
pub mod foundation;
pub mod prompt;
pub mod tutor;
