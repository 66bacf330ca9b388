//! Advisory tags for a newly entered expense
//!
//! A new expense is compared against the caller's past expenses:
//! - same description (case-insensitive): warn when the price went up
//! - same category, different description: suggest the most recent alternative
//!
//! A check whose inputs are missing is skipped, never reported as an error.

use std::cmp::Reverse;
use std::fmt;

use tracing::debug;

use crate::models::ExpenseRecord;

/// A tag attached to a new expense
#[derive(Debug, Clone, PartialEq)]
pub enum TagKind {
    /// The new amount is higher than the last time this was bought
    PriceIncrease { percent: i64 },
    /// A recent expense in the same category under a different name
    Similar { description: String, amount: i64 },
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriceIncrease { percent } => write!(f, "⚠️ {}% price increase", percent),
            Self::Similar {
                description,
                amount,
            } => write!(f, "💡 Similar: {} (₹{})", description, amount),
        }
    }
}

/// Generate display tags for `new_expense`, price increase first
pub fn generate_tags(new_expense: &ExpenseRecord, past_expenses: &[ExpenseRecord]) -> Vec<String> {
    generate_tag_kinds(new_expense, past_expenses)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Structured form of [`generate_tags`]
pub fn generate_tag_kinds(
    new_expense: &ExpenseRecord,
    past_expenses: &[ExpenseRecord],
) -> Vec<TagKind> {
    let mut tags = Vec::new();
    if past_expenses.is_empty() {
        return tags;
    }

    let new_key = new_expense.description_key();

    if let Some(tag) = price_increase(new_expense, new_key.as_deref(), past_expenses) {
        tags.push(tag);
    }

    if let Some(tag) = similar_expense(new_expense, new_key.as_deref(), past_expenses) {
        tags.push(tag);
    }

    debug!(
        past = past_expenses.len(),
        tags = tags.len(),
        "Generated expense tags"
    );
    tags
}

fn price_increase(
    new_expense: &ExpenseRecord,
    new_key: Option<&str>,
    past_expenses: &[ExpenseRecord],
) -> Option<TagKind> {
    let new_key = new_key?;
    let previous = most_recent(
        past_expenses
            .iter()
            .filter(|p| p.description_key().as_deref() == Some(new_key)),
    )?;

    let past_amount = previous.amount.value().filter(|a| *a > 0.0)?;
    let new_amount = new_expense.amount.value().filter(|a| *a > past_amount)?;

    let percent = (new_amount - past_amount) / past_amount * 100.0;
    Some(TagKind::PriceIncrease {
        percent: percent.round_ties_even() as i64,
    })
}

fn similar_expense(
    new_expense: &ExpenseRecord,
    new_key: Option<&str>,
    past_expenses: &[ExpenseRecord],
) -> Option<TagKind> {
    let category = new_expense.category.as_deref()?;
    let similar = most_recent(past_expenses.iter().filter(|p| {
        p.category.as_deref() == Some(category)
            && p.description_key()
                .is_some_and(|key| Some(key.as_str()) != new_key)
    }))?;

    let description = similar.description.clone()?;
    let amount = similar.amount.value()?;
    Some(TagKind::Similar {
        description,
        amount: amount.round_ties_even() as i64,
    })
}

/// Latest record by date; undated records rank last and ties keep input order
fn most_recent<'a, I>(candidates: I) -> Option<&'a ExpenseRecord>
where
    I: Iterator<Item = &'a ExpenseRecord>,
{
    let mut sorted: Vec<&ExpenseRecord> = candidates.collect();
    sorted.sort_by_key(|r| Reverse(r.date.value()));
    sorted.into_iter().next()
}
