use thiserror::Error;

/// Errors that can occur while serving extraction or analysis requests
#[derive(Error, Debug)]
pub enum ApiError {
    /// Uploaded payload could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Required multipart field was missing or unreadable
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// OCR engine failed to process the image
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// Completion API request failed at the transport level
    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Completion API returned an unusable response
    #[error("Completion failed: {0}")]
    Completion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error talking to the OCR subprocess
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
