use std::fs;
use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};

use crate::{error::Error, Result};

pub fn is_remote_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Retrieves raw image bytes from an http(s) URL or a local path.
///
/// One client is kept for all requests of a run and released on drop.
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::FailedToBuildHttpClient(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let bytes = if is_remote_source(source) {
            self.download(source)?
        } else {
            read_local_file(source)?
        };
        log::debug!("Fetched {} bytes from {}", bytes.len(), source);
        Ok(bytes)
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::FetchFailure(url.to_owned(), e.to_string()))?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::FetchFailure(
                url.to_owned(),
                format!("status code {}", status.as_u16()),
            ));
        }
        let body = response
            .bytes()
            .map_err(|e| Error::FetchFailure(url.to_owned(), e.to_string()))?;
        Ok(body.to_vec())
    }
}

fn read_local_file(path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::FetchFailure(path.to_owned(), e.to_string()))
}
