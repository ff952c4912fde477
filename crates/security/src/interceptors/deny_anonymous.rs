//! Catch-all rule: anything that reaches it needs authentication.
//!
//! This is typically the last interceptor in the chain.

use async_trait::async_trait;

use crate::error::AuthError;
use crate::traits::{Decision, Interceptor, RequestContext};

/// Denies every request that earlier interceptors did not decide on.
pub struct DenyAnonymous;

#[async_trait]
impl Interceptor for DenyAnonymous {
    fn name(&self) -> &str {
        "DenyAnonymous"
    }

    async fn intercept(&self, _request: &RequestContext) -> Decision {
        Decision::Deny(AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[tokio::test]
    async fn test_deny_anonymous_denies_everything() {
        let request = RequestContext::new(Method::GET, "/anything");
        assert_eq!(
            DenyAnonymous.intercept(&request).await,
            Decision::Deny(AuthError::Unauthenticated)
        );
    }
}
