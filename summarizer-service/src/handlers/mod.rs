//! HTTP handlers for the summarizer service.

pub mod health;
pub mod not_found;
pub mod summarize;
