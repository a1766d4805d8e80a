pub mod ai_providers;
pub mod analysis_parser;
pub mod input_collector;
pub mod report_renderer;
pub mod survey_analyzer;
