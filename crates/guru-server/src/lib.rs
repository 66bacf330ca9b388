//! Guru Web Server
//!
//! Axum-based JSON API fronting the expense analyzers in `guru-core`.
//!
//! - `GET /` health check
//! - `POST /timeline` peak spending weekday
//! - `POST /tags` advisory tags for a new expense
//!
//! Handlers only extract fields and map errors; all analysis lives in core.

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

mod handlers;

/// Server configuration
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty or "*" = any origin, the frontend is
    /// served from a different domain)
    pub allowed_origins: Vec<String>,
}

/// Parse a comma-separated list of CORS origins
///
/// Entries that are not valid header values are skipped with a warning.
pub fn parse_allowed_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let valid = HeaderValue::from_str(s).is_ok();
            if !valid {
                warn!(origin = *s, "Failed to parse allowed origin entry");
            }
            valid
        })
        .map(str::to_string)
        .collect()
}

/// Create the application router
pub fn create_router(config: ServerConfig) -> Router {
    let allow_any = config.allowed_origins.is_empty()
        || config.allowed_origins.iter().any(|o| o == "*");
    let allow_origin = if allow_any {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::home))
        .route("/timeline", post(handlers::post_timeline))
        .route("/tags", post(handlers::post_tags))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

/// Start the server
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    serve_with_config(host, port, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.allowed_origins.is_empty() {
        info!("CORS: allowing any origin");
    } else {
        info!(origins = ?config.allowed_origins, "CORS: restricted origins");
    }

    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
        }
    }

    /// Map an analysis failure to a response
    ///
    /// Missing fields are the caller's fault (400). Anything else is reported
    /// as a failure of `operation` with the underlying description (500).
    pub fn analysis(operation: &str, err: guru_core::Error) -> Self {
        if err.is_missing_field() {
            Self::bad_request(&err.to_string())
        } else {
            Self::internal(&format!("{} analysis failed: {}", operation, err))
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, error = %self.message, "Rejected request");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests;
