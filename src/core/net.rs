// src/core/net.rs
//
// Blocking HTTP GET. Every call finishes (or times out) before returning;
// there is no retry and no backoff.

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Anything that can turn a URL into a response body.
/// Only a 200 counts as success; every other status is an `Error::Status`.
pub trait Fetch {
    fn get_text(&self, url: &str) -> Result<String>;
}

pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| Error::Http { url: s!("(client setup)"), source })?;
        Ok(Self { inner })
    }
}

impl Fetch for HttpClient {
    fn get_text(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = self
            .inner
            .get(url)
            .send()
            .map_err(|source| Error::Http { url: s!(url), source })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::Status { url: s!(url), status: status.as_u16() });
        }

        resp.text().map_err(|source| Error::Http { url: s!(url), source })
    }
}
