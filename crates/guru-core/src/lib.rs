//! Guru Core Library
//!
//! Shared functionality for the Financial Guru expense insight service:
//! - Lenient expense record parsing
//! - Timeline analysis (peak spending weekday)
//! - Advisory tags for new expenses (price increases, similar expenses)
//! - Credential packing for deployment

pub mod credentials;
pub mod error;
pub mod models;
pub mod tags;
pub mod timeline;

pub use credentials::{decode_credentials, encode_credentials_file};
pub use error::{Error, Result};
pub use models::{Cleaned, ExpenseRecord, Field};
pub use tags::{generate_tag_kinds, generate_tags, TagKind};
pub use timeline::{
    analyze_timeline, timeline_report, weekday_name, TimelineInsight, TimelineReport, WeekdayTotals,
};
