//! `MySpend` assistant
//!
//! Conversational budgeting helper: a keyword rule engine for demo mode, a
//! Gemini-backed mode when a credential is configured, and the HTTP surface
//! the dashboard and mobile shell talk to.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod goal;
pub mod llm;
pub mod payload;
pub mod resolver;
pub mod runtime;
pub mod session;
pub mod shell;
pub mod system_prompt;
