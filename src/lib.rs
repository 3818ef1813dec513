pub mod config;
pub mod error;
pub mod model;
pub mod ocr;
pub mod providers;
pub mod server;

pub use config::AppConfig;
pub use error::ApiError;
pub use server::{create_router, run_server, AppState};
