pub mod app_state_machine;
pub mod command_runner;
pub mod interactive_session;
