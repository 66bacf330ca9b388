//! Expense tag handler

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use guru_core::{generate_tags, Error, ExpenseRecord, Result};

use super::{json_object, take_field};
use crate::AppError;

/// Response for tag generation
#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

/// POST /tags - Generate advisory tags for a new expense
///
/// Body: `{ "new_expense": {...}, "past_expenses": [...] }`
pub async fn post_tags(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> std::result::Result<Json<TagsResponse>, AppError> {
    let tags = expense_tags(payload).map_err(|e| AppError::analysis("Tag", e))?;

    Ok(Json(TagsResponse { tags }))
}

fn expense_tags(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Vec<String>> {
    let mut body = json_object(payload)?;

    let (Some(new_expense), Some(past_expenses)) = (
        take_field(&mut body, "new_expense"),
        take_field(&mut body, "past_expenses"),
    ) else {
        return Err(Error::MissingField(
            "Missing 'new_expense' or 'past_expenses' data".to_string(),
        ));
    };

    let new_expense: ExpenseRecord = serde_json::from_value(new_expense)?;
    let past_expenses: Vec<ExpenseRecord> = serde_json::from_value(past_expenses)?;

    info!(past = past_expenses.len(), "Received expense for tag analysis");

    Ok(generate_tags(&new_expense, &past_expenses))
}
