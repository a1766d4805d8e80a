const SURVEY_ANALYSIS_PROMPT: &str = r#"
You are an expert Senior UX Researcher and Data Analyst.
Analyze the user survey data provided below. The data may be in English, Korean, or a mix of both.

YOUR TASKS:
1. Analyze the raw data.
2. Mask any personal information (names, phone numbers, emails) with bracketed placeholders such as [Name], [Phone], [Email].
3. Generate the report in TWO languages: a full English section and a full Korean translation. Both sections MUST have exactly the same structure.
4. STRICTLY follow the JSON structure provided. Do not add fields and do not wrap the JSON in markdown.

DATA TO ANALYZE:
{{SURVEY_DATA}}

REQUIREMENTS FOR ANALYSIS:
- Survey Summary: an overview and 3-5 major themes.
- Top 5 Key Insights: exactly the five most critical observations, most important first.
- Pain Points: group recurring problems by category.
- User Needs: at least 5 distinct user needs.
- User Personas: 2-3 detailed personas based on patterns in the data, each with goals, behavior, pain points and needs.
- Service Design: propose features, each tagged with exactly one priority: Must, Should or Could.
- PPT Summary: a concise slide title and a list of bullet points.
"#;

pub fn build_survey_prompt(survey_data: &str) -> String {
    SURVEY_ANALYSIS_PROMPT.replace("{{SURVEY_DATA}}", survey_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_raw_survey_text() {
        let prompt = build_survey_prompt("Q1: 결제가 너무 느려요\nQ2: love the app");

        assert!(prompt.contains("Q1: 결제가 너무 느려요\nQ2: love the app"));
        assert!(!prompt.contains("{{SURVEY_DATA}}"));
    }

    #[test]
    fn prompt_states_every_content_requirement() {
        let prompt = build_survey_prompt("data");

        for needle in [
            "English, Korean, or a mix",
            "[Name], [Phone], [Email]",
            "full Korean translation",
            "exactly the same structure",
            "3-5 major themes",
            "Top 5 Key Insights",
            "group recurring problems by category",
            "at least 5 distinct user needs",
            "2-3 detailed personas",
            "Must, Should or Could",
            "slide title",
        ] {
            assert!(prompt.contains(needle), "prompt is missing '{}'", needle);
        }
    }
}
