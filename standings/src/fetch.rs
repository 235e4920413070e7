//! Download a season file from the footballcsv mirror.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use standingslib::{read_fixtures, FixtureTable, SeasonSource};

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("standings/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")
    })
}

/// Fetch and parse the fixtures of one season.
///
/// The whole body is read before parsing; a failed request never yields a
/// partial table.
pub fn fetch_season(source: &SeasonSource) -> Result<FixtureTable> {
    let url = source.url();
    tracing::info!(%url, "fetching season");

    let response = http_client()?
        .get(&url)
        .send()
        .with_context(|| format!("request to {url} failed"))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        bail!("season not found at {url}");
    }
    if !status.is_success() {
        bail!("unexpected status {status} from {url}");
    }

    let body = response
        .bytes()
        .with_context(|| format!("failed to read response body from {url}"))?;
    tracing::debug!(bytes = body.len(), "downloaded season file");

    read_fixtures(body.as_ref()).with_context(|| format!("failed to parse fixtures from {url}"))
}
