//! Classification prompt and response schema

use arsip_core::{FileCategory, FileMetadata};
use serde_json::{json, Value};

/// Build the instruction sent to the model for one file
pub fn build_prompt(file: &FileMetadata) -> String {
    let file_type = if file.file_type().is_empty() {
        "unknown"
    } else {
        file.file_type()
    };

    let mut parts = vec![
        "Analyze the following file metadata and suggest a categorization for a government archive system.".to_string(),
        format!("File Name: \"{}\"", file.file_name()),
        format!("File Type: \"{}\"", file_type),
        format!("File Size: {} bytes.", file.size()),
        String::new(),
        "Available Categories:".to_string(),
    ];

    for category in FileCategory::ALL {
        parts.push(format!("- {} ({})", category.label(), category.description()));
    }

    parts.push(String::new());
    parts.push("Task:".to_string());
    parts.push("1. Select the best matching Category from the list.".to_string());
    parts.push("2. Generate 3-5 relevant lowercase tags based on the filename keywords.".to_string());
    parts.push(
        "3. Write a very short 1-sentence summary of what this file might contain.".to_string(),
    );
    parts.push(String::new());
    parts.push(
        "Respond with only a JSON object with the keys \"category\", \"tags\" and \"summary\"."
            .to_string(),
    );
    parts.join("\n")
}

/// JSON schema of the expected answer, in the Gemini `responseSchema` dialect
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "category": {
                "type": "STRING",
                "enum": FileCategory::labels(),
                "description": "The classified category of the file"
            },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of relevant tags"
            },
            "summary": {
                "type": "STRING",
                "description": "A short summary description"
            }
        },
        "required": ["category", "tags", "summary"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_metadata_and_categories() {
        let file = FileMetadata::new("Perda_No_5.pdf", "application/pdf", 5600).unwrap();
        let prompt = build_prompt(&file);

        assert!(prompt.contains("\"Perda_No_5.pdf\""));
        assert!(prompt.contains("application/pdf"));
        assert!(prompt.contains("5600 bytes"));
        for label in FileCategory::labels() {
            assert!(prompt.contains(label));
        }
        assert!(prompt.contains("JSON"));
    }

    #[test]
    fn test_prompt_marks_unknown_type() {
        let file = FileMetadata::new("catatan", "", 0).unwrap();
        assert!(build_prompt(&file).contains("File Type: \"unknown\""));
    }

    #[test]
    fn test_schema_enumerates_categories() {
        let schema = response_schema();
        let labels = schema["properties"]["category"]["enum"].as_array().unwrap();
        assert_eq!(labels.len(), FileCategory::ALL.len());
        assert_eq!(schema["required"].as_array().unwrap().len(), 3);
    }
}
