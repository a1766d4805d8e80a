pub mod commands;
pub mod priority;
pub mod language;
pub mod app_state;
pub mod ai_provider_error;
pub mod section_kind;
pub mod section_body;
pub mod session_command;
