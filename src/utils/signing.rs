// @file: capital_history/src/utils/signing.rs
// @description: HMAC-SHA256 request signing for Binance USER_DATA endpoints.
// @author: LAS.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use crate::core::errors::{HistoryError, Result};

type HmacSha256 = Hmac<Sha256>;


//
// PUBLIC INTERFACE
//

// Lowercase hex digest of HMAC-SHA256(secret, message). No I/O, fully deterministic.
pub fn sign(secret: &str, message: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| HistoryError::Auth(format!("Invalid secret key: {}", e)))?;

    mac.update(message.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

// Appends `signature=<hex>` to an already built query string.
pub fn sign_query(secret: &str, query: &str) -> Result<String> {
    let signature: String = sign(secret, query)?;

    if query.is_empty() {
        return Ok(format!("signature={}", signature));
    }
    Ok(format!("{}&signature={}", query, signature))
}
