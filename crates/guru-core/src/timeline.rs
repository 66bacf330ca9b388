//! Timeline analysis: which day of the week carries the most spending
//!
//! Records without a usable date or amount are dropped rather than failing
//! the analysis. Dirty data degrades the insight, it never rejects it.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Cleaned, ExpenseRecord};

/// All weekdays in bucket order (Monday = 0 ... Sunday = 6)
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// English name of a weekday
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Outcome of a timeline analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineInsight {
    /// No expenses were supplied
    NotEnoughData,
    /// Every expense had a missing or unparseable date
    NoValidDates,
    /// Dated expenses exist, but none had a usable amount
    NoSpendingTotals,
    /// The weekday with the highest summed spending
    PeakDay(Weekday),
}

impl TimelineInsight {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimelineInsight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughData => write!(f, "Not enough data for timeline analysis yet."),
            Self::NoValidDates => write!(f, "No valid dates found for timeline analysis."),
            Self::NoSpendingTotals => write!(f, "Could not calculate daily spending patterns."),
            Self::PeakDay(day) => write!(
                f,
                "💡 You typically spend the most on {}s.",
                weekday_name(*day)
            ),
        }
    }
}

/// Spending summed per weekday
///
/// A weekday only has a total if at least one row fell on it, so a day
/// with no spending never competes with a day whose total is negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeekdayTotals {
    totals: [Option<f64>; 7],
}

impl WeekdayTotals {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Weekday, f64)>,
    {
        let mut totals = Self::default();
        for (day, amount) in rows {
            let slot = &mut totals.totals[day.num_days_from_monday() as usize];
            *slot = Some(slot.unwrap_or(0.0) + amount);
        }
        totals
    }

    pub fn get(&self, day: Weekday) -> Option<f64> {
        self.totals[day.num_days_from_monday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(Option::is_none)
    }

    /// Populated weekdays in Monday-first order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, f64)> + '_ {
        WEEK.iter()
            .zip(self.totals.iter())
            .filter_map(|(day, total)| total.map(|t| (*day, t)))
    }

    /// Weekday with the highest total; ties go to the earliest weekday
    pub fn peak(&self) -> Option<Weekday> {
        let mut best: Option<(Weekday, f64)> = None;
        for (day, total) in self.iter() {
            match best {
                Some((_, max)) if total <= max => {}
                _ => best = Some((day, total)),
            }
        }
        best.map(|(day, _)| day)
    }
}

/// Full result of a timeline analysis, including how many rows were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineReport {
    pub insight: TimelineInsight,
    pub totals: WeekdayTotals,
    /// Rows excluded for a missing or unparseable date
    pub dropped_dates: usize,
    /// Dated rows excluded for a missing or unparseable amount
    pub dropped_amounts: usize,
}

impl TimelineReport {
    fn early(insight: TimelineInsight, dropped_dates: usize) -> Self {
        Self {
            insight,
            totals: WeekdayTotals::default(),
            dropped_dates,
            dropped_amounts: 0,
        }
    }
}

/// Find the weekday with the highest aggregate spending
///
/// Fails only when no record carries an `amount` key at all. Every other
/// data problem is handled by dropping the offending rows.
pub fn analyze_timeline(expenses: &[ExpenseRecord]) -> Result<TimelineInsight> {
    timeline_report(expenses).map(|report| report.insight)
}

/// Like [`analyze_timeline`], but also returns per-weekday totals and drop counts
pub fn timeline_report(expenses: &[ExpenseRecord]) -> Result<TimelineReport> {
    if expenses.is_empty() {
        return Ok(TimelineReport::early(TimelineInsight::NotEnoughData, 0));
    }

    let dated: Cleaned<(NaiveDate, &ExpenseRecord)> =
        Cleaned::collect(expenses, |r| r.date.value().map(|d| (d, r)));
    debug!(
        kept = dated.rows.len(),
        dropped = dated.dropped,
        "Expenses remaining after date validation"
    );

    if dated.is_empty() {
        return Ok(TimelineReport::early(
            TimelineInsight::NoValidDates,
            dated.dropped,
        ));
    }

    if !expenses.iter().any(|r| r.amount.is_present()) {
        return Err(Error::missing_column("amount"));
    }

    let dropped_dates = dated.dropped;
    let priced: Cleaned<(Weekday, f64)> = Cleaned::collect(dated.rows, |(date, r)| {
        r.amount.value().map(|amount| (date.weekday(), amount))
    });
    debug!(
        kept = priced.rows.len(),
        dropped = priced.dropped,
        "Expenses remaining after amount validation"
    );

    let dropped_amounts = priced.dropped;
    let totals = WeekdayTotals::from_rows(priced.rows);
    debug!(?totals, "Daily spending calculated");

    let insight = match totals.peak() {
        Some(day) => TimelineInsight::PeakDay(day),
        None => TimelineInsight::NoSpendingTotals,
    };

    Ok(TimelineReport {
        insight,
        totals,
        dropped_dates,
        dropped_amounts,
    })
}
