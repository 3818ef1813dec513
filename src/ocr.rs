use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use log::debug;
use std::io::Cursor;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::OcrConfig;
use crate::error::ApiError;

/// Decodes raw uploaded bytes into a bitmap
///
/// # Arguments
/// * `data` - Raw image bytes as received from the client
///
/// # Errors
/// Returns an error if the payload is not a decodable image
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, ApiError> {
    let image = image::load_from_memory(data)?;
    debug!(
        "Decoded image: {}x{} pixels",
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Unified trait for OCR engines
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Extract raw text from a decoded image
    async fn recognize(&self, image: &DynamicImage) -> Result<String, ApiError>;
}

/// OCR engine backed by the Tesseract command-line binary
///
/// The decoded bitmap is re-encoded as PNG and piped to
/// `tesseract stdin stdout -l <languages>`, so no temporary files are
/// written and the buffer lives only for the duration of the request.
pub struct TesseractEngine {
    command: String,
    languages: String,
}

impl TesseractEngine {
    /// Create a new engine from configuration
    pub fn new(config: &OcrConfig) -> Self {
        TesseractEngine {
            command: config.command.clone(),
            languages: config.languages.clone(),
        }
    }

    /// Probe whether the engine binary can be invoked
    ///
    /// Used at startup to warn early instead of failing on the first request.
    pub async fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl TextRecognizer for TesseractEngine {
    async fn recognize(&self, image: &DynamicImage) -> Result<String, ApiError> {
        // Tesseract reads any format it was built with; PNG is always in
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        debug!(
            "Running OCR engine '{}' on {} bytes of PNG data",
            self.command,
            png.len()
        );

        let mut child = Command::new(&self.command)
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ApiError::Ocr(format!("failed to start '{}': {}", self.command, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ApiError::Ocr("failed to open engine stdin".to_string()))?;
        stdin.write_all(&png).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApiError::Ocr(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|_| ApiError::Ocr("engine produced non-UTF-8 output".to_string()))?;

        debug!("OCR extracted text: {:?}", text);

        Ok(text)
    }
}
