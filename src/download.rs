//! Annotation sheet downloads
//!
//! Fetches the published annotation CSV sheets and writes them to
//! local files for the analysis apps to pick up.

use std::path::Path;

use reqwest::Client;
use tracing::error;

use crate::error::Result;

/// Published annotation sheet (CSV export).
pub const DATA_ANNOTATION_SHEET: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRhQ7Cr3aBo8W9Ne8DAehMvFRxYd395ENIW9giK2ATQ3QSrM8jA2E7xXbnW7CWKMdh0IhN0YqWn37Wr/pub?gid=0&single=true&output=csv";

/// Published reference data annotation sheet (CSV export).
pub const REFERENCE_DATA_ANNOTATION_SHEET: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRhQ7Cr3aBo8W9Ne8DAehMvFRxYd395ENIW9giK2ATQ3QSrM8jA2E7xXbnW7CWKMdh0IhN0YqWn37Wr/pub?gid=522048357&single=true&output=csv";

/// Download a URL body into a file.
///
/// Returns `Ok(false)` without writing when the server answers with a
/// non-success status; that case is logged, not raised. Transport and
/// filesystem errors propagate.
pub async fn download_to_file(client: &Client, url: &str, dest: &Path) -> Result<bool> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        error!(
            "Failed to fetch the sheet. Status code: {}",
            response.status()
        );
        return Ok(false);
    }

    let contents = response.bytes().await?;
    tokio::fs::write(dest, &contents).await?;

    Ok(true)
}

/// Fetch both annotation sheets into the given paths.
///
/// A rejected status on one sheet does not prevent the other from
/// being fetched.
pub async fn download_annotation_data(
    client: &Client,
    annotation_url: &str,
    reference_data_url: &str,
    annotation_path: &Path,
    reference_annotation_path: &Path,
) -> Result<()> {
    download_to_file(client, annotation_url, annotation_path).await?;
    download_to_file(client, reference_data_url, reference_annotation_path).await?;

    Ok(())
}
