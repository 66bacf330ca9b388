//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Offline timeline and tag analysis of JSON files
//! - `encode_key` - Credential packing for deployment
//! - `serve` - Web server command

pub mod analyze;
pub mod encode_key;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use encode_key::*;
pub use serve::*;
