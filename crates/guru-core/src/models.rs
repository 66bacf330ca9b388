//! Domain models for Guru
//!
//! Expense records arrive as loosely-shaped JSON objects. All lenient parsing
//! happens here, once, when a record is deserialized: values that are present
//! but unusable become [`Field::Invalid`] instead of failing the request.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Date-only formats accepted for `date`, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time formats accepted for `date` when no offset is given
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A record field that may be absent, present but unparseable, or valid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<T> {
    /// The key was not in the record
    Absent,
    /// The key was present but its value could not be parsed
    Invalid,
    Valid(T),
}

impl<T> Field<T> {
    /// Whether the key appeared in the source record, valid or not
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn valid(&self) -> Option<&T> {
        match self {
            Self::Valid(v) => Some(v),
            _ => None,
        }
    }

    fn parse(value: Option<&Value>, parser: impl FnOnce(&Value) -> Option<T>) -> Self {
        match value {
            None => Self::Absent,
            Some(v) => parser(v).map_or(Self::Invalid, Self::Valid),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: Copy> Field<T> {
    pub fn value(&self) -> Option<T> {
        self.valid().copied()
    }
}

/// A single spending entry, scoped to one request
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ExpenseRecord {
    pub description: Option<String>,
    pub amount: Field<f64>,
    pub date: Field<NaiveDate>,
    pub category: Option<String>,
}

impl ExpenseRecord {
    /// Lower-cased description, used for case-insensitive comparisons
    pub fn description_key(&self) -> Option<String> {
        self.description.as_deref().map(str::to_lowercase)
    }
}

impl From<Map<String, Value>> for ExpenseRecord {
    fn from(raw: Map<String, Value>) -> Self {
        Self {
            description: text(raw.get("description")),
            amount: Field::parse(raw.get("amount"), parse_amount),
            date: Field::parse(raw.get("date"), |v| v.as_str().and_then(parse_date)),
            category: text(raw.get("category")),
        }
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Parse an amount from a JSON number or a numeric string
///
/// Non-finite values are rejected.
pub fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}

/// Parse a calendar date from the formats clients commonly send
///
/// Timestamps carrying an offset resolve to the date at that offset.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
}

/// Rows kept by a filter-and-collect pass, plus how many were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Cleaned<T> {
    pub rows: Vec<T>,
    pub dropped: usize,
}

impl<T> Cleaned<T> {
    /// Keep every item for which `keep` returns `Some`, counting the rest
    pub fn collect<I, F>(items: I, mut keep: F) -> Self
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Option<T>,
    {
        let mut rows = Vec::new();
        let mut dropped = 0;
        for item in items {
            match keep(item) {
                Some(row) => rows.push(row),
                None => dropped += 1,
            }
        }
        Self { rows, dropped }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
