//! Offline analysis commands (timeline, tags) over JSON files

use std::path::Path;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use guru_core::{generate_tags, timeline_report, weekday_name, ExpenseRecord, TimelineReport};

/// Accepted shapes for a timeline input file
#[derive(Deserialize)]
#[serde(untagged)]
enum TimelineInput {
    List(Vec<ExpenseRecord>),
    Wrapped { expenses: Vec<ExpenseRecord> },
}

impl TimelineInput {
    fn into_expenses(self) -> Vec<ExpenseRecord> {
        match self {
            Self::List(expenses) | Self::Wrapped { expenses } => expenses,
        }
    }
}

/// Tag input file
#[derive(Deserialize)]
struct TagsInput {
    new_expense: ExpenseRecord,
    #[serde(default)]
    past_expenses: Vec<ExpenseRecord>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load expenses from `path` and run the timeline analysis
pub fn load_timeline(path: &Path) -> Result<TimelineReport> {
    let expenses = read_json::<TimelineInput>(path)?.into_expenses();
    debug!(path = %path.display(), count = expenses.len(), "Loaded expenses");
    Ok(timeline_report(&expenses)?)
}

/// Load a tag request from `path` and generate tags
pub fn load_tags(path: &Path) -> Result<Vec<String>> {
    let input: TagsInput = read_json(path)?;
    debug!(
        path = %path.display(),
        past = input.past_expenses.len(),
        "Loaded tag request"
    );
    Ok(generate_tags(&input.new_expense, &input.past_expenses))
}

pub fn cmd_timeline(file: &Path) -> Result<()> {
    let report = load_timeline(file)?;

    println!("{}", report.insight);

    if !report.totals.is_empty() {
        println!();
        println!("📅 Spending by weekday:");
        for (day, total) in report.totals.iter() {
            println!("   {:<10} {:>12.2}", weekday_name(day), total);
        }
    }

    if report.dropped_dates > 0 || report.dropped_amounts > 0 {
        println!();
        println!(
            "   Skipped {} without a valid date, {} without a valid amount",
            report.dropped_dates, report.dropped_amounts
        );
    }

    Ok(())
}

pub fn cmd_tags(file: &Path) -> Result<()> {
    let tags = load_tags(file)?;

    if tags.is_empty() {
        println!("No tags for this expense.");
    } else {
        for tag in tags {
            println!("{}", tag);
        }
    }

    Ok(())
}
