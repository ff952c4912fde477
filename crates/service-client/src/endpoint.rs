//! Base URL handling shared by the clients.

use reqwest::{Response, Url};

use crate::error::{RemoteCallError, Result};

/// Parse a configured service base such as `http://localhost:4444`.
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|e| RemoteCallError::InvalidBaseUrl(format!("{}: {}", base, e)))?;
    if url.cannot_be_a_base() {
        return Err(RemoteCallError::InvalidBaseUrl(base.to_string()));
    }
    Ok(url)
}

/// Append path segments to `base`, percent-encoding each one.
///
/// A trailing slash on the base is dropped first, so `http://host/` and
/// `http://host` produce the same endpoint.
pub fn join_segments(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| RemoteCallError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Read the body of a successful response, turning any non-2xx status into an error.
pub(crate) async fn success_body(url: &Url, response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteCallError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(|source| RemoteCallError::Transport {
        url: url.to_string(),
        source,
    })
}

pub(crate) fn transport_error(url: &Url) -> impl FnOnce(reqwest::Error) -> RemoteCallError + '_ {
    move |source| RemoteCallError::Transport {
        url: url.to_string(),
        source,
    }
}
