use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Download the hearing document. Any failure aborts the run; nothing is retried.
pub fn fetch_document(config: &FetchConfig) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(FetchError::Client)?;

    info!(url = %config.url, timeout_secs = config.timeout_secs, "Fetching hearing transcript");

    let response = client
        .get(&config.url)
        .send()
        .map_err(|source| FetchError::Request {
            url: config.url.clone(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: config.url.clone(),
            status,
        });
    }

    let body = response.text().map_err(|source| FetchError::Body {
        url: config.url.clone(),
        source,
    })?;
    info!(bytes = body.len(), "Fetched hearing transcript");

    Ok(body)
}

/// Read a previously saved hearing document from disk.
pub fn read_document(path: &Path) -> Result<String> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file: {:?}", path))?;
    info!(path = %path.display(), bytes = body.len(), "Read hearing transcript");
    Ok(body)
}
