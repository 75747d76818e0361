pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// One segment of the user turn sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Text(String),
    InlineImage { mime_type: String, data: String },
}

impl PromptPart {
    pub fn text(text: impl Into<String>) -> Self {
        PromptPart::Text(text.into())
    }

    pub fn jpeg(data: impl Into<String>) -> Self {
        PromptPart::InlineImage {
            mime_type: IMAGE_MIME_TYPE.to_string(),
            data: data.into(),
        }
    }
}

/// Everything the model needs for one schema-constrained generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateContentRequest {
    pub system_instruction: String,
    pub parts: Vec<PromptPart>,
    pub response_schema: serde_json::Value,
}
