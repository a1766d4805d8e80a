//! Survey analysis against a generative model, rendered as a bilingual
//! (English/Korean) UX research report.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
