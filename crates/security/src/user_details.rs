//! Loading users for authentication.
//!
//! `MemberUserDetailsService` turns "does this member exist in the registry"
//! into a `UserDetails` record. It asks the registry on every attempt; there
//! is no cache and no retry.

use async_trait::async_trait;
use service_client::MemberClient;
use tracing::{debug, warn};

use crate::error::{AuthError, Result};
use crate::principal::{Authority, UserDetails};

/// Credential every registered member is given.
///
/// The registry stores no passwords, so HTTP Basic effectively authorizes on
/// username existence plus this shared value.
pub const STAND_IN_PASSWORD: &str = "metflix";

/// Source of user records for authentication.
#[async_trait]
pub trait UserDetailsService: Send + Sync {
    async fn load_user_by_username(&self, username: &str) -> Result<UserDetails>;
}

/// Looks users up in the remote member registry.
#[derive(Debug, Clone)]
pub struct MemberUserDetailsService {
    members: MemberClient,
}

impl MemberUserDetailsService {
    pub fn new(members: MemberClient) -> Self {
        Self { members }
    }
}

#[async_trait]
impl UserDetailsService for MemberUserDetailsService {
    async fn load_user_by_username(&self, username: &str) -> Result<UserDetails> {
        let body = self.members.find_member_body(username).await.map_err(|e| {
            warn!("Member lookup for {} failed: {}", username, e);
            AuthError::ServiceUnavailable(e.to_string())
        })?;

        if body.is_none() {
            debug!("No member record for {}", username);
            return Err(AuthError::UserNotFound(username.to_string()));
        }

        Ok(UserDetails {
            username: username.to_string(),
            password: STAND_IN_PASSWORD.to_string(),
            authorities: vec![Authority::Member],
        })
    }
}
