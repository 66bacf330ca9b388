//! Server command implementation

use anyhow::{Context, Result};

/// Port used when neither --port nor $PORT is set
pub const DEFAULT_PORT: u16 = 5000;

/// Pick the listening port: --port flag, then the PORT env value, then the default
pub fn resolve_port(flag: Option<u16>, env_port: Option<&str>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }

    match env_port.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", value)),
        None => Ok(DEFAULT_PORT),
    }
}

pub async fn cmd_serve(host: &str, port: Option<u16>) -> Result<()> {
    let env_port = std::env::var("PORT").ok();
    let port = resolve_port(port, env_port.as_deref())?;

    // Parse allowed origins from environment (comma-separated)
    let origins_str = std::env::var("GURU_ALLOWED_ORIGINS").unwrap_or_default();
    let allowed_origins = guru_server::parse_allowed_origins(&origins_str);

    println!("🚀 Starting Guru analysis server...");
    println!("   Listening: http://{}:{}", host, port);
    if allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin (set GURU_ALLOWED_ORIGINS to restrict)");
    } else {
        println!(
            "   🌐 CORS: {} (GURU_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = guru_server::ServerConfig { allowed_origins };
    guru_server::serve_with_config(host, port, config).await?;

    Ok(())
}
