mod common;
mod interactive_session;
