//! Timeline analysis handler

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use guru_core::{analyze_timeline, Error, ExpenseRecord, Result, TimelineInsight};

use super::{json_object, take_field};
use crate::AppError;

/// Response for timeline analysis
#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub insight: String,
}

/// POST /timeline - Find the weekday with the highest spending
///
/// Body: `{ "expenses": [ { "description", "amount", "date", "category" }, ... ] }`
pub async fn post_timeline(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<Json<TimelineResponse>, AppError> {
    let insight = timeline_insight(payload).map_err(|e| AppError::analysis("Timeline", e))?;

    Ok(Json(TimelineResponse {
        insight: insight.message(),
    }))
}

fn timeline_insight(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<TimelineInsight> {
    let mut body = json_object(payload)?;
    let expenses =
        take_field(&mut body, "expenses").ok_or_else(|| Error::missing_data("expenses"))?;
    let expenses: Vec<ExpenseRecord> = serde_json::from_value(expenses)?;

    info!(count = expenses.len(), "Received expenses for timeline analysis");

    analyze_timeline(&expenses)
}
