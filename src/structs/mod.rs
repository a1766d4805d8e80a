pub mod cli;
pub mod report;
pub mod ai;
pub mod config;
pub mod rendered_report;
pub mod saved_report;
pub mod submission;
