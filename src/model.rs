use serde::{Deserialize, Serialize};

/// JSON body of `POST /analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub ingredients: String,
    pub product_type: String,
}

/// JSON body returned by `POST /extract`
///
/// Failures are reported in-band; the HTTP status is 200 either way.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExtractResponse {
    Success {
        ingredients: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        warning: Option<String>,
    },
    Failure {
        error: String,
    },
}

impl ExtractResponse {
    /// Shape trimmed OCR output into the wire response
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            ExtractResponse::Success {
                ingredients: String::new(),
                warning: Some("No text extracted. Check image quality.".to_string()),
            }
        } else {
            ExtractResponse::Success {
                ingredients: trimmed.to_string(),
                warning: None,
            }
        }
    }
}

/// JSON body returned by `POST /analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}
