// src/fetch/mod.rs

pub mod query;

pub use query::{FetchConfig, Filters};

use reqwest::{header, Client};
use tracing::{debug, info, instrument, warn};

use crate::error::FetchError;
use crate::records::{FetchOutcome, Record, RecordsResponse};

/// One GET, one decode. Errors keep their kind here; folding to a display
/// message happens in [`fetch_result_set`].
async fn fetch_records(client: &Client, config: &FetchConfig) -> Result<Vec<Record>, FetchError> {
    let url = config.request_url();
    debug!(%url, "requesting records");

    let resp = client
        .get(url)
        .header(header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let detail = resp
            .text()
            .await
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        return Err(FetchError::Http {
            status: status.as_u16(),
            detail,
        });
    }

    let body = resp.text().await?;
    let envelope: RecordsResponse = serde_json::from_str(&body)?;
    debug!(
        total = ?envelope.total_count,
        rows = envelope.results.len(),
        "decoded records envelope"
    );
    Ok(envelope.results)
}

/// Issue exactly one request and fold the result into the three-way
/// outcome. No retries. Every error kind becomes a `Failure` message at
/// this boundary; nothing propagates past it.
#[instrument(level = "info", skip(client, config))]
pub async fn fetch_result_set(client: &Client, config: &FetchConfig) -> FetchOutcome {
    match fetch_records(client, config).await {
        Ok(records) if records.is_empty() => {
            info!("no matching records");
            FetchOutcome::Empty
        }
        Ok(records) => {
            info!(rows = records.len(), "fetch succeeded");
            FetchOutcome::Success(records)
        }
        Err(e) => {
            warn!(error = %e, "fetch failed");
            FetchOutcome::Failure(e.to_string())
        }
    }
}
