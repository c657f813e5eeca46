// src/core/net.rs
// Blocking HTTP GET with the fixed header set. No timeout, no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{EXTRA_HEADERS, USER_AGENT};
use crate::error::FetchError;

/// Where pages come from. The crawl only needs the body of a GET.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let mut req = self.client.get(url);
        for (name, value) in EXTRA_HEADERS {
            req = req.header(name, value);
        }

        let resp = req
            .send()
            .map_err(|source| FetchError::Network { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        resp.text()
            .map_err(|source| FetchError::Network { url: s!(url), source })
    }
}
