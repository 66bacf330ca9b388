//! Health check handler

use axum::Json;
use serde::Serialize;

/// Welcome message returned by the health check
pub const WELCOME_MESSAGE: &str = "Welcome to the Financial Guru ML Server! 🐍";

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
}

/// GET / - Show the server is alive
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: WELCOME_MESSAGE,
    })
}
