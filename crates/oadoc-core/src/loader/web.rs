//! Single-GET retrieval of remote documents

use crate::loader::error::{LoaderError, LoaderResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Body and content type of a fetched document
#[derive(Debug, Clone)]
pub struct RemoteDocument {
    pub url: Url,
    pub content_type: Option<String>,
    pub body: String,
}

/// Fetch a document with one GET request. No retry: a timeout is a hard failure.
pub fn fetch(url: &Url, timeout: Duration) -> LoaderResult<RemoteDocument> {
    let http_error = |source| LoaderError::HttpError {
        url: url.to_string(),
        source,
    };

    let client = Client::builder().timeout(timeout).build().map_err(http_error)?;

    debug!(url = %url, timeout_secs = timeout.as_secs(), "Fetching remote document");
    let response = client.get(url.clone()).send().map_err(http_error)?;

    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(LoaderError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().map_err(http_error)?;

    Ok(RemoteDocument {
        url: url.clone(),
        content_type,
        body,
    })
}
