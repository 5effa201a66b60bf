//! Lingua Relay - backend relay for a language-learning assistant.
//!
//! Turns structured requests (chat turns, correction and translation tasks,
//! role-play scenarios) into prompts for a generative text model, pulls
//! named fields back out of the free-text reply, and streams text-to-speech
//! audio through from a speech provider.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
