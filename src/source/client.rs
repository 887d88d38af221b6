use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::entities::Record;
use crate::source::errors::SourceError;

const DATA_ENDPOINT: &str = "/api/data";
const USER_AGENT: &str = "DataScope/0.1 (+https://datascope.example.com)";
const FALLBACK_RECORD_COUNT: usize = 800;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
});

/// JSON envelope served by the read proxy.
#[derive(Debug, Deserialize)]
struct DataEnvelope {
    success: bool,
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    data: Vec<Record>,
    #[serde(default)]
    error: Option<String>,
}

/// Fetch the full record set from the read proxy.
#[instrument(skip_all, fields(base = %base_url))]
pub async fn fetch_records(base_url: &str) -> Result<Vec<Record>, SourceError> {
    let endpoint = url::Url::parse(base_url)?.join(DATA_ENDPOINT)?;

    let response = HTTP_CLIENT
        .get(endpoint)
        .send()
        .await
        .map_err(SourceError::from_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Http { status });
    }

    let envelope: DataEnvelope = response
        .json()
        .await
        .map_err(|e| SourceError::Decode(e.to_string()))?;

    if !envelope.success {
        return Err(SourceError::Envelope(
            envelope.error.unwrap_or_else(|| "unknown".to_string()),
        ));
    }

    if let Some(count) = envelope.count
        && count != envelope.data.len()
    {
        warn!(
            declared = count,
            actual = envelope.data.len(),
            "envelope count does not match payload"
        );
    }

    info!(records = envelope.data.len(), "fetched record set");
    Ok(envelope.data)
}

/// Fetch the record set, substituting a synthetic sample on any failure.
/// The dashboard stays usable without a reachable API.
pub async fn load_records(base_url: &str) -> Vec<Record> {
    match fetch_records(base_url).await {
        Ok(records) => records,
        Err(err) => {
            warn!(%err, "data api unreachable, falling back to mock data");
            super::mock::generate(FALLBACK_RECORD_COUNT)
        }
    }
}
