//! `POST /analyze` — forward an ingredient list to the completion API.

use axum::{extract::State, Json};
use log::{debug, error};

use crate::model::{AnalyzeRequest, AnalyzeResponse};
use crate::providers::build_analysis_prompt;
use crate::server::AppState;

/// Build the analysis prompt and relay the model's reply verbatim.
///
/// Provider failures are reported with HTTP 200 and a `result` string
/// prefixed `"Analysis failed: "`, keeping the error in-band.
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let prompt = build_analysis_prompt(&request.ingredients, &request.product_type);
    debug!("Prompt sent to model: {}", prompt);

    let result = match state.completion.complete(&prompt).await {
        Ok(text) => {
            debug!("Model response: {}", text);
            text
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            format!("Analysis failed: {}", e)
        }
    };

    Json(AnalyzeResponse { result })
}
