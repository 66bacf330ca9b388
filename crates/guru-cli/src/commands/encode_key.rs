//! Credential encoding command

use std::path::Path;

use anyhow::{Context, Result};
use guru_core::credentials::{encode_credentials_file, CREDENTIALS_ENV_VAR};

pub fn cmd_encode_key(file: &Path) -> Result<()> {
    let encoded = encode_credentials_file(file)
        .with_context(|| format!("Failed to encode {}", file.display()))?;

    let rule = "=".repeat(60);
    println!();
    println!("{}", rule);
    println!(
        "SUCCESS! PASTE THE FOLLOWING STRING INTO YOUR HOST ({}):",
        CREDENTIALS_ENV_VAR
    );
    println!("{}", rule);
    println!("{}", encoded);
    println!("{}", rule);
    println!();

    Ok(())
}
