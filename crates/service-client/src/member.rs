//! Client for the membership registry.

use std::time::Duration;

use membership::Member;
use reqwest::Url;
use tracing::debug;

use crate::endpoint::{join_segments, parse_base_url, success_body, transport_error};
use crate::error::{RemoteCallError, Result};

/// Default bound on a member lookup.
///
/// The lookup used for authentication has no timeout of its own, so the
/// client applies this one to every request it sends.
pub const DEFAULT_MEMBER_LOOKUP_TIMEOUT: Duration = Duration::from_millis(5000);

/// Talks to the membership registry over HTTP.
#[derive(Debug, Clone)]
pub struct MemberClient {
    http: reqwest::Client,
    base: Url,
}

impl MemberClient {
    /// Create a client for the registry at `base` (e.g., "http://localhost:4444").
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base_url(base)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport_error(&base))?;
        Ok(Self { http, base })
    }

    /// Raw body of `GET /api/members/{username}`.
    ///
    /// The registry answers an unknown member with an empty body, which
    /// comes back as `None`.
    pub async fn find_member_body(&self, username: &str) -> Result<Option<String>> {
        let url = join_segments(&self.base, &["api", "members", username])?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(transport_error(&url))?;
        let body = success_body(&url, response).await?;

        if body.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(body))
        }
    }

    /// Decoded member for `username`, if registered.
    pub async fn find_member(&self, username: &str) -> Result<Option<Member>> {
        match self.find_member_body(username).await? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// Register (or overwrite) a member and return the registry's echo.
    pub async fn register(&self, member: &Member) -> Result<Member> {
        let url = join_segments(&self.base, &["api", "members"])?;
        debug!("POST {} ({})", url, member.user);

        let response = self
            .http
            .post(url.clone())
            .json(member)
            .send()
            .await
            .map_err(transport_error(&url))?;
        let body = success_body(&url, response).await?;
        serde_json::from_str(&body).map_err(RemoteCallError::from)
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }
}
