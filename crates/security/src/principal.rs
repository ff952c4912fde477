//! Authenticated identities.

use std::fmt;

/// Capability granted to an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    Member,
}

impl Authority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Member => "MEMBER",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record as loaded by a `UserDetailsService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub username: String,
    pub password: String,
    pub authorities: Vec<Authority>,
}

impl UserDetails {
    /// Drop the credential and keep the identity.
    pub fn into_principal(self) -> Principal {
        Principal {
            username: self.username,
            authorities: self.authorities,
        }
    }
}

/// The identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    username: String,
    authorities: Vec<Authority>,
}

impl Principal {
    pub fn new(username: impl Into<String>, authorities: Vec<Authority>) -> Self {
        Self {
            username: username.into(),
            authorities,
        }
    }

    pub fn name(&self) -> &str {
        &self.username
    }

    pub fn authorities(&self) -> &[Authority] {
        &self.authorities
    }

    pub fn has_authority(&self, authority: Authority) -> bool {
        self.authorities.contains(&authority)
    }
}
