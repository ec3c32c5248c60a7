use std::env;
use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::info;

use kin_client::{Auth, ClientConfig, RestClient};
use kin_model::{AppId, RecordQuery};
use kin_observe::{LogConfig, log_init};
use kin_record::RecordFetcher;

/// Fetches every record of one app and prints a summary.
///
/// Environment:
/// - KINTONE_BASE_URL  e.g. https://example.cybozu.com
/// - KINTONE_API_TOKEN or KINTONE_USERNAME + KINTONE_PASSWORD
/// - KINTONE_APP       numeric app id
/// - KINTONE_QUERY     optional filter expression
/// - KINTONE_FIELDS    optional comma-separated field projection
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = LogConfig::default();
    log_init(&cfg)?;
    info!("logger initialized");

    let base_url = env::var("KINTONE_BASE_URL").context("KINTONE_BASE_URL is not set")?;
    let auth = auth_from_env()?;
    let app: u64 = env::var("KINTONE_APP")
        .context("KINTONE_APP is not set")?
        .parse()
        .context("KINTONE_APP must be a number")?;

    let client = RestClient::new(ClientConfig::new(base_url, auth))?;
    let fetcher = RecordFetcher::new(Arc::new(client));

    let mut query = RecordQuery::new();
    if let Ok(filter) = env::var("KINTONE_QUERY") {
        query = query.with_filter(filter);
    }
    if let Ok(fields) = env::var("KINTONE_FIELDS") {
        query = query.with_fields(fields.split(',').map(str::trim));
    }

    info!("fetching records: app={}", app);
    let records = fetcher.fetch_all(AppId::new(app), &query).await?;
    info!("fetched {} records", records.len());

    if let Some(first) = records.first() {
        let codes: Vec<&str> = first.iter().map(|(code, _)| code.as_str()).collect();
        info!("field codes: {}", codes.join(", "));
    }

    Ok(())
}

fn auth_from_env() -> anyhow::Result<Auth> {
    if let Ok(token) = env::var("KINTONE_API_TOKEN") {
        return Ok(Auth::api_token(token));
    }
    match (env::var("KINTONE_USERNAME"), env::var("KINTONE_PASSWORD")) {
        (Ok(username), Ok(password)) => Ok(Auth::password(username, password)),
        _ => bail!("set KINTONE_API_TOKEN or KINTONE_USERNAME/KINTONE_PASSWORD"),
    }
}
