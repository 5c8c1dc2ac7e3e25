//! HTTP client for the court-auction portal.
//!
//! Every fetch is a strictly linear two-step exchange: a GET against the
//! portal index to pick up session cookies, then a JSON POST to the
//! tab-specific endpoint with a `Referer` pointing back at the index. The
//! portal rejects POSTs that arrive without the cookies or the referrer, so
//! both steps go through one cookie-jarred `reqwest::Client` whose lifetime
//! is the single call.

use gavel_core::{QueryError, QueryRequest, Tab};
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER, USER_AGENT,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Root of the production portal.
pub const PORTAL_BASE_URL: &str = "https://www.courtauction.go.kr";

/// Index page fetched once per call to acquire session cookies.
const INDEX_PATH: &str = "/pgj/index.on";

// The portal serves browsers only; plain library requests get bounced.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en-US;q=0.8,en;q=0.7";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The portal answered with something that is not JSON (typically an
    /// HTML block page). The raw body is kept for diagnostics.
    #[error("response was not valid JSON")]
    ResponseParse { body: String },
}

/// Client for querying case details from the auction portal.
pub struct AuctionClient {
    base_url: String,
}

impl AuctionClient {
    /// Client against the production portal.
    pub fn new() -> Self {
        Self::with_base_url(PORTAL_BASE_URL.to_string())
    }

    /// Client against an arbitrary portal root (no trailing slash needed).
    /// Tests point this at a local mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the `data` payload for one case from one tab.
    ///
    /// Returns `Value::Null` when the response parses but carries no `data`
    /// key. A non-JSON response surfaces as [`FetchError::ResponseParse`]
    /// with the raw body; transport failures propagate as
    /// [`FetchError::Http`]. No retries.
    pub async fn fetch(&self, court: &str, case_no: &str, tab: Tab) -> Result<Value, FetchError> {
        let request = QueryRequest::new(court, case_no, tab)?;

        // Fresh session per call; the jar holds whatever the index grants.
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(browser_headers())
            .build()?;

        let index_url = format!("{}{}", self.base_url, INDEX_PATH);
        debug!(url = %index_url, "priming session cookies");
        client.get(&index_url).send().await?;

        let post_url = format!("{}{}", self.base_url, request.endpoint_path());
        info!(url = %post_url, tab = %request.tab, "querying case");
        let resp = client
            .post(&post_url)
            .header(REFERER, &index_url)
            .json(&request.body)
            .send()
            .await?;

        let body = resp.text().await?;
        let parsed: Value = serde_json::from_str(&body).map_err(|err| {
            warn!(error = %err, body = %body, "portal response was not valid JSON");
            FetchError::ResponseParse { body }
        })?;

        Ok(parsed.get("data").cloned().unwrap_or(Value::Null))
    }
}

impl Default for AuctionClient {
    fn default() -> Self {
        Self::new()
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = AuctionClient::with_base_url("http://localhost:4000/".into());
        assert_eq!(client.base_url, "http://localhost:4000");
    }

    #[test]
    fn default_points_at_portal() {
        let client = AuctionClient::new();
        assert_eq!(client.base_url, PORTAL_BASE_URL);
    }

    #[test]
    fn browser_headers_complete() {
        let headers = browser_headers();
        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
        assert_eq!(headers.get(CONNECTION).unwrap(), "keep-alive");
    }
}
