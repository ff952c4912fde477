use thiserror::Error;

/// Reasons a request fails authentication.
///
/// Every variant ends up as `401 Unauthorized` at the HTTP layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No interceptor authenticated or permitted the request
    #[error("Full authentication is required to access this resource")]
    Unauthenticated,

    /// The Authorization header could not be decoded
    #[error("Invalid basic authentication header: {0}")]
    InvalidAuthorizationHeader(String),

    /// Password did not match the user's credential
    #[error("Bad credentials")]
    BadCredentials,

    /// The member registry has no record for this user
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The member registry could not be asked
    #[error("Authentication service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Message safe to send back to the client.
    ///
    /// Anything past "no credentials" reads as a wrong password; the detail
    /// stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::Unauthenticated => self.to_string(),
            _ => AuthError::BadCredentials.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_is_hidden_from_clients() {
        let err = AuthError::UserNotFound("ghost".to_string());
        assert_eq!(err.to_string(), "User not found: ghost");
        assert_eq!(err.public_message(), "Bad credentials");
    }

    #[test]
    fn test_internal_details_are_hidden_from_clients() {
        let unavailable = AuthError::ServiceUnavailable(
            "Failed to reach http://127.0.0.1:1/api/members/making".to_string(),
        );
        let malformed = AuthError::InvalidAuthorizationHeader("Invalid symbol 33".to_string());

        assert_eq!(unavailable.public_message(), "Bad credentials");
        assert_eq!(malformed.public_message(), "Bad credentials");
        assert_eq!(
            AuthError::Unauthenticated.public_message(),
            "Full authentication is required to access this resource"
        );
    }
}
