//! Credential packing for deployment
//!
//! Hosting platforms take secrets as environment variables, so a service
//! account JSON file is shipped as a single base64 string.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Default service account key file name
pub const DEFAULT_KEY_FILE: &str = "serviceAccountKey.json";

/// Environment variable the encoded credentials are deployed under
pub const CREDENTIALS_ENV_VAR: &str = "FIREBASE_CONFIG_BASE64";

/// Read a credential file and return its contents base64-encoded
pub fn encode_credentials_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::NotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)?;
    Ok(STANDARD.encode(contents.as_bytes()))
}

/// Decode a previously encoded credential string
pub fn decode_credentials(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded.trim())?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(e.to_string()))
}
