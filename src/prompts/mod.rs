pub mod survey_analysis_prompt;
