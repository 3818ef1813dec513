use log::warn;
use std::sync::Arc;

use labelens::config::AppConfig;
use labelens::ocr::TesseractEngine;
use labelens::providers::GroqProvider;
use labelens::server::{run_server, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;

    let recognizer = TesseractEngine::new(&config.ocr);
    if !recognizer.is_available().await {
        warn!(
            "OCR engine '{}' is not available; /extract requests will fail",
            config.ocr.command
        );
    }

    let completion = GroqProvider::new(&config.completion)?;

    let state = AppState::new(Arc::new(recognizer), Arc::new(completion));
    run_server(state, &config.server).await?;

    Ok(())
}
