//! HTTP client for the arms-transfer registry export scripts.

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::{Map, Value};
use url::Url;

use crate::{
    decode,
    query::{FileType, Query, RegistersQuery, TivQuery},
    types::{TivTable, TransferRecord},
    user_agent::get_user_agent,
    Endpoint, Error,
};

/// HTTP client for the registry export scripts.
///
/// Posts form-encoded queries with browser-like headers and a randomized
/// user agent to avoid being blocked. Each request builds a fresh
/// `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the export scripts. Defaults to
    /// `https://armstrade.sipri.org/armstrade/html/`.
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production registry.
    pub fn new() -> Self {
        Self {
            base_url: "https://armstrade.sipri.org/armstrade/html/".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    fn get_url(&self, endpoint: Endpoint) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_url, endpoint.path()).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn post_form(
        &self,
        endpoint: Endpoint,
        params: &[(String, String)],
    ) -> Result<String, Error> {
        let url = self.get_url(endpoint)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .post(url)
            .header("origin", "https://armstrade.sipri.org")
            .header("referer", "https://armstrade.sipri.org/armstrade/page/values.php")
            .header("accept", "text/csv, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9")
            .form(params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to post query: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    /// Posts the query with the file type forced to CSV, whatever the
    /// builder was given. The typed methods all decode CSV.
    async fn post_csv<Q: Query>(&self, query: &Q) -> Result<String, Error> {
        let mut params = query.form_params();
        for param in params.iter_mut() {
            if param.0 == "filetype" {
                param.1 = FileType::Csv.to_string();
            }
        }
        self.post_form(query.endpoint(), &params).await
    }

    /// Posts the query and returns the undecoded export body.
    ///
    /// The JSON file type never reaches the wire: it is sent as `csv` and
    /// only changes how the typed methods decode the body.
    pub async fn fetch_raw<Q: Query>(&self, query: &Q) -> Result<String, Error> {
        let mut params = query.form_params();
        for param in params.iter_mut() {
            if param.0 == "filetype" && param.1 == FileType::Json.to_string() {
                param.1 = FileType::Csv.to_string();
            }
        }
        self.post_form(query.endpoint(), &params).await
    }

    /// Fetches trade-register records matching the given query.
    pub async fn trade_registers(
        &self,
        query: &RegistersQuery,
    ) -> Result<Vec<TransferRecord>, Error> {
        let body = self.post_csv(query).await?;
        decode::parse_trade_registers(&body)
    }

    /// Fetches trade-register rows re-encoded as JSON objects keyed by
    /// transfer id, with empty cells dropped.
    pub async fn trade_registers_indexed(
        &self,
        query: &RegistersQuery,
    ) -> Result<BTreeMap<i64, Map<String, Value>>, Error> {
        let body = self.post_csv(query).await?;
        decode::parse_trade_registers_indexed(&body)
    }

    /// Fetches a TIV table matching the given query.
    pub async fn tiv_values(&self, query: &TivQuery) -> Result<TivTable, Error> {
        let body = self.post_csv(query).await?;
        decode::parse_tiv_values(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
