//! HTTP Basic authentication backed by a `UserDetailsService`.
//!
//! Requests without a Basic `Authorization` header are passed on untouched,
//! so a later rule decides whether anonymous access is fine.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info};

use crate::error::AuthError;
use crate::traits::{Decision, Interceptor, RequestContext};
use crate::user_details::UserDetailsService;

/// Split a `Basic <base64(user:password)>` header value.
///
/// Returns `Ok(None)` when the header uses another scheme.
pub fn parse_basic_credentials(header: &str) -> Result<Option<(String, String)>, AuthError> {
    let header = header.trim();
    let Some((scheme, token)) = header.split_once(' ') else {
        return Ok(None);
    };
    if !scheme.eq_ignore_ascii_case("Basic") {
        return Ok(None);
    }

    let decoded = STANDARD
        .decode(token.trim())
        .map_err(|e| AuthError::InvalidAuthorizationHeader(e.to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|e| AuthError::InvalidAuthorizationHeader(e.to_string()))?;
    let (username, password) = decoded.split_once(':').ok_or_else(|| {
        AuthError::InvalidAuthorizationHeader("missing ':' separator".to_string())
    })?;

    Ok(Some((username.to_string(), password.to_string())))
}

/// Authenticates Basic credentials against users loaded from `U`.
///
/// Passwords are compared as plain text.
pub struct HttpBasicAuthentication<U> {
    user_details: U,
}

impl<U: UserDetailsService> HttpBasicAuthentication<U> {
    pub fn new(user_details: U) -> Self {
        Self { user_details }
    }
}

#[async_trait]
impl<U: UserDetailsService> Interceptor for HttpBasicAuthentication<U> {
    fn name(&self) -> &str {
        "HttpBasicAuthentication"
    }

    async fn intercept(&self, request: &RequestContext) -> Decision {
        let Some(header) = request.authorization.as_deref() else {
            return Decision::Delegate;
        };

        let (username, password) = match parse_basic_credentials(header) {
            Ok(Some(credentials)) => credentials,
            Ok(None) => return Decision::Delegate,
            Err(err) => {
                info!("Rejected Authorization header: {}", err);
                return Decision::Deny(AuthError::BadCredentials);
            }
        };

        let user = match self.user_details.load_user_by_username(&username).await {
            Ok(user) => user,
            Err(err) => {
                info!("Authentication failed for {}: {}", username, err);
                return Decision::Deny(err);
            }
        };

        if user.password != password {
            info!("Authentication failed for {}: bad credentials", username);
            return Decision::Deny(AuthError::BadCredentials);
        }

        debug!("Authenticated {}", username);
        Decision::Authenticated(user.into_principal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::{Authority, Principal, UserDetails};
    use http::Method;

    struct OnlyMaking;

    #[async_trait]
    impl UserDetailsService for OnlyMaking {
        async fn load_user_by_username(&self, username: &str) -> Result<UserDetails, AuthError> {
            if username == "making" {
                Ok(UserDetails {
                    username: username.to_string(),
                    password: "metflix".to_string(),
                    authorities: vec![Authority::Member],
                })
            } else {
                Err(AuthError::UserNotFound(username.to_string()))
            }
        }
    }

    fn basic(user: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
    }

    fn request(authorization: Option<String>) -> RequestContext {
        let request = RequestContext::new(Method::GET, "/");
        match authorization {
            Some(value) => request.with_authorization(value),
            None => request,
        }
    }

    #[test]
    fn test_parse_basic_credentials() {
        assert_eq!(
            parse_basic_credentials(&basic("making", "metflix")).unwrap(),
            Some(("making".to_string(), "metflix".to_string()))
        );
        // Password may itself contain ':'
        assert_eq!(
            parse_basic_credentials(&basic("making", "a:b")).unwrap(),
            Some(("making".to_string(), "a:b".to_string()))
        );
        assert_eq!(parse_basic_credentials("Bearer abc.def").unwrap(), None);
        assert!(parse_basic_credentials("Basic !!!").is_err());
        assert!(parse_basic_credentials(&format!("Basic {}", STANDARD.encode("nocolon"))).is_err());
    }

    #[tokio::test]
    async fn test_missing_header_delegates() {
        let auth = HttpBasicAuthentication::new(OnlyMaking);
        assert_eq!(auth.intercept(&request(None)).await, Decision::Delegate);
    }

    #[tokio::test]
    async fn test_known_user_with_stand_in_password_authenticates() {
        let auth = HttpBasicAuthentication::new(OnlyMaking);

        let decision = auth.intercept(&request(Some(basic("making", "metflix")))).await;

        assert_eq!(
            decision,
            Decision::Authenticated(Principal::new("making", vec![Authority::Member]))
        );
    }

    #[tokio::test]
    async fn test_malformed_header_is_bad_credentials() {
        let auth = HttpBasicAuthentication::new(OnlyMaking);

        let decision = auth.intercept(&request(Some("Basic !!!".to_string()))).await;

        assert_eq!(decision, Decision::Deny(AuthError::BadCredentials));
    }

    #[tokio::test]
    async fn test_wrong_password_is_denied() {
        let auth = HttpBasicAuthentication::new(OnlyMaking);

        let decision = auth.intercept(&request(Some(basic("making", "nope")))).await;

        assert_eq!(decision, Decision::Deny(AuthError::BadCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_is_denied() {
        let auth = HttpBasicAuthentication::new(OnlyMaking);

        let decision = auth.intercept(&request(Some(basic("ghost", "metflix")))).await;

        assert_eq!(
            decision,
            Decision::Deny(AuthError::UserNotFound("ghost".to_string()))
        );
    }
}
