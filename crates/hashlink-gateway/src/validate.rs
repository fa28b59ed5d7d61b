use axum::http::HeaderValue;
use url::Url;

use crate::error::{AppError, Result};

/// Checks that `raw` is an absolute URL usable as a `Location` header.
///
/// The raw string is what gets stored, so input that the parser would
/// silently clean up (surrounding whitespace) is rejected rather than kept.
pub fn validate_url(raw: &str) -> Result<()> {
    if raw.trim() != raw {
        return Err(AppError::InvalidUrl);
    }

    Url::parse(raw).map_err(|_| AppError::InvalidUrl)?;
    HeaderValue::from_str(raw).map_err(|_| AppError::InvalidUrl)?;
    Ok(())
}
