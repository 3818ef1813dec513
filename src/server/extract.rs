//! `POST /extract` — OCR over an uploaded label image.

use axum::{
    extract::{Multipart, State},
    Json,
};
use log::{debug, error, info};

use crate::error::ApiError;
use crate::model::ExtractResponse;
use crate::ocr::decode_image;
use crate::server::AppState;

/// Handle a multipart upload with fields `image` (binary) and
/// `product_type` (text, accepted but not used by this endpoint).
///
/// Every outcome is reported with HTTP 200; failures are carried in the
/// body's `error` field.
pub async fn extract_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<ExtractResponse> {
    match run_extraction(&state, &mut multipart).await {
        Ok(response) => Json(response),
        Err(e) => {
            error!("Extraction failed: {}", e);
            Json(ExtractResponse::Failure {
                error: e.to_string(),
            })
        }
    }
}

async fn run_extraction(
    state: &AppState,
    multipart: &mut Multipart,
) -> Result<ExtractResponse, ApiError> {
    let mut image_bytes = None;
    let mut product_type = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidUpload(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("image") => {
                let filename = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;
                info!(
                    "Received image: {}, size: {} bytes",
                    filename.as_deref().unwrap_or("<unnamed>"),
                    data.len()
                );
                image_bytes = Some(data);
            }
            Some("product_type") => {
                product_type = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::InvalidUpload(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let data =
        image_bytes.ok_or_else(|| ApiError::InvalidUpload("missing 'image' field".to_string()))?;
    if let Some(product_type) = &product_type {
        debug!("Product type tag: {}", product_type);
    }

    let image = decode_image(&data)?;
    let text = state.recognizer.recognize(&image).await?;
    debug!("OCR extracted text raw: {:?}", text);

    if text.trim().is_empty() {
        info!("OCR extracted text was empty or only whitespace");
    }

    Ok(ExtractResponse::from_text(&text))
}
