//! Blocking HTTP client for the paginated leaderboard.

use crate::utils::config::USER_AGENT;
use crate::utils::error::FetchError;
use log::{debug, warn};
use reqwest::blocking::Client;
use std::time::Duration;

/// Anything that can hand back the raw markup for a URL
///
/// A failed fetch is reported by the implementation and surfaces as `None`;
/// callers treat it as a page that yielded nothing.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Option<String>;
}

/// HTTP client used for the live scrape
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Create a new client
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::RequestFailed)?;

        Ok(Self { client })
    }

    /// Perform one GET request and return the body text
    pub fn fetch_checked(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(FetchError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        response
            .text()
            .map_err(|e| FetchError::BodyUnreadable(e.to_string()))
    }
}

impl PageSource for PageClient {
    fn fetch(&self, url: &str) -> Option<String> {
        match self.fetch_checked(url) {
            Ok(body) => {
                debug!("Fetched {} ({} bytes)", url, body.len());
                Some(body)
            }
            Err(e) => {
                warn!("{} ({})", e, url);
                None
            }
        }
    }
}

/// Join a base URL and a page identifier
pub fn page_url(base_url: &str, page: &str) -> String {
    format!("{}{}", base_url, page)
}
