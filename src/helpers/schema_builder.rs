use serde_json::{json, Value};
use crate::enums::language::Language;
use crate::enums::priority::Priority;

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

/// Schema of one language section. Used for both language keys.
pub fn section_schema() -> Value {
    let priorities: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();

    object(
        json!({
            "surveySummary": object(
                json!({ "overview": string(), "themes": string_array() }),
                &["overview", "themes"],
            ),
            "topInsights": string_array(),
            "painPoints": {
                "type": "ARRAY",
                "items": object(
                    json!({ "category": string(), "points": string_array() }),
                    &["category", "points"],
                ),
            },
            "userNeeds": string_array(),
            "personas": {
                "type": "ARRAY",
                "items": object(
                    json!({
                        "name": string(),
                        "goals": string(),
                        "behavior": string(),
                        "painPoints": string(),
                        "needs": string(),
                    }),
                    &["name", "goals", "behavior", "painPoints", "needs"],
                ),
            },
            "serviceDesign": {
                "type": "ARRAY",
                "items": object(
                    json!({
                        "feature": string(),
                        "description": string(),
                        "priority": { "type": "STRING", "enum": priorities },
                    }),
                    &["feature", "description", "priority"],
                ),
            },
            "pptSummary": object(
                json!({ "title": string(), "bullets": string_array() }),
                &["title", "bullets"],
            ),
        }),
        &[
            "surveySummary",
            "topInsights",
            "painPoints",
            "userNeeds",
            "personas",
            "serviceDesign",
            "pptSummary",
        ],
    )
}

/// Response schema for the full bilingual result.
pub fn analysis_schema() -> Value {
    let mut properties = serde_json::Map::new();
    for language in Language::ALL {
        properties.insert(language.key().to_string(), section_schema());
    }
    let required: Vec<&str> = Language::ALL.iter().map(Language::key).collect();

    object(Value::Object(properties), &required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_language_keys_share_one_shape() {
        let schema = analysis_schema();

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], json!(["english", "korean"]));
        assert_eq!(schema["properties"]["english"], schema["properties"]["korean"]);
    }

    #[test]
    fn priority_is_a_closed_enumeration() {
        let schema = section_schema();
        let priority = &schema["properties"]["serviceDesign"]["items"]["properties"]["priority"];

        assert_eq!(priority["enum"], json!(["Must", "Should", "Could"]));
    }

    #[test]
    fn every_section_field_is_required() {
        let schema = section_schema();
        let required = schema["required"].as_array().unwrap();
        let properties = schema["properties"].as_object().unwrap();

        assert_eq!(required.len(), properties.len());
        for key in properties.keys() {
            assert!(required.contains(&json!(key)), "{} not required", key);
        }
    }
}
