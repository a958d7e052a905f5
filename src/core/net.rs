// src/core/net.rs
// One GET per run. No retries: the next scheduled trigger is the retry.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header;

use crate::config::consts::{ACCEPT_LANGUAGE, USER_AGENT};
use crate::error::FetchError;

/// Source of the calendar markup.
pub trait Fetch {
    fn fetch(&self) -> Result<String, FetchError>;
}

/// Blocking client with a browser-like user agent; the calendar site turns away default clients.
pub fn client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = client(timeout).map_err(FetchError::Client)?;
        Ok(Self { client, url: s!(url) })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self) -> Result<String, FetchError> {
        logd!("GET {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .header(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .map_err(|e| self.request_error(e))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status { url: self.url.clone(), status: status.as_u16() });
        }

        let body = resp.text().map_err(|e| self.request_error(e))?;
        logf!("fetched {} ({} bytes)", self.url, body.len());
        Ok(body)
    }
}

impl HttpFetcher {
    fn request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout { url: self.url.clone() }
        } else {
            FetchError::Request { url: self.url.clone(), source: e }
        }
    }
}

/// Reads a saved copy of the page instead of going to the network.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetch for FileFetcher {
    fn fetch(&self) -> Result<String, FetchError> {
        let body = fs::read_to_string(&self.path)
            .map_err(|source| FetchError::Read { path: self.path.clone(), source })?;
        logf!("read {} ({} bytes)", self.path.display(), body.len());
        Ok(body)
    }
}
