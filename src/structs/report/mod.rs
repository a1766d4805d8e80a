pub mod survey_summary;
pub mod pain_point_category;
pub mod user_persona;
pub mod service_design_insight;
pub mod ppt_summary;
pub mod analyzed_section;
pub mod analysis_result;
