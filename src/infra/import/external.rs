use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::external::ExternalRecord;
use crate::infra::import::tokenizer;

/// Parses external roster CSV text into records. Never fails; unknown
/// columns are ignored and missing ones come back empty.
pub fn parse_external_csv(text: &str) -> Vec<ExternalRecord> {
    tokenizer::parse(text)
        .iter()
        .map(ExternalRecord::from_fields)
        .collect()
}

pub fn read_external_csv(path: &Path) -> Result<Vec<ExternalRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read csv: {}", path.display()))?;
    Ok(parse_external_csv(&text))
}

/// Fetches an external roster CSV over HTTP. Anything but a 2xx status is
/// an error; the caller surfaces it in the import dialog and may simply
/// retry.
pub fn fetch_external_csv(url: &str) -> Result<Vec<ExternalRecord>> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("failed to fetch csv from {url}"))?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("failed to fetch csv from {url}: server returned {status}");
    }
    let text = response
        .text()
        .with_context(|| format!("failed to read csv body from {url}"))?;
    Ok(parse_external_csv(&text))
}
