//! The InterceptorChain evaluates access rules in order.
//!
//! This module provides the main InterceptorChain struct that chains
//! multiple interceptors together using the builder pattern.

use crate::error::{AuthError, Result};
use crate::principal::Principal;
use crate::traits::{Decision, Interceptor, RequestContext};

/// How a request was let through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Authenticated(Principal),
}

/// Ordered list of interceptors; the first one with an opinion decides.
///
/// ## Usage
/// ```ignore
/// let chain = InterceptorChain::new()
///     .add_interceptor(PermitPaths::new(["/actuator/health"]))
///     .add_interceptor(HttpBasicAuthentication::new(user_details))
///     .add_interceptor(DenyAnonymous);
///
/// let access = chain.evaluate(&request).await?;
/// ```
pub struct InterceptorChain {
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl InterceptorChain {
    /// Create a new empty InterceptorChain.
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Add an interceptor to the end of the chain (builder pattern).
    pub fn add_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    /// Run the interceptors in order until one permits, authenticates or
    /// denies. A request nobody decides on is unauthenticated.
    pub async fn evaluate(&self, request: &RequestContext) -> Result<Access> {
        for interceptor in &self.interceptors {
            let decision = interceptor.intercept(request).await;
            tracing::debug!(
                "Interceptor {} on {} {}: {:?}",
                interceptor.name(),
                request.method,
                request.path,
                decision
            );
            match decision {
                Decision::Permit => return Ok(Access::Anonymous),
                Decision::Authenticated(principal) => return Ok(Access::Authenticated(principal)),
                Decision::Deny(err) => return Err(err),
                Decision::Delegate => continue,
            }
        }
        Err(AuthError::Unauthenticated)
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl Default for InterceptorChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptors::{DenyAnonymous, PermitPaths};
    use crate::principal::Authority;
    use async_trait::async_trait;
    use http::Method;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed(Decision, Arc<AtomicUsize>);

    #[async_trait]
    impl Interceptor for Fixed {
        fn name(&self) -> &str {
            "Fixed"
        }

        async fn intercept(&self, _request: &RequestContext) -> Decision {
            self.1.fetch_add(1, Ordering::SeqCst);
            self.0.clone()
        }
    }

    fn get(path: &str) -> RequestContext {
        RequestContext::new(Method::GET, path)
    }

    #[tokio::test]
    async fn test_empty_chain_is_unauthenticated() {
        let chain = InterceptorChain::new();

        assert!(chain.is_empty());
        assert_eq!(chain.evaluate(&get("/")).await, Err(AuthError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_first_decision_wins() {
        let calls = Arc::new(AtomicUsize::new(0));
        let principal = Principal::new("making", vec![Authority::Member]);

        let chain = InterceptorChain::new()
            .add_interceptor(Fixed(Decision::Delegate, Arc::clone(&calls)))
            .add_interceptor(Fixed(
                Decision::Authenticated(principal.clone()),
                Arc::clone(&calls),
            ))
            .add_interceptor(Fixed(
                Decision::Deny(AuthError::BadCredentials),
                Arc::clone(&calls),
            ));

        let access = chain.evaluate(&get("/")).await.unwrap();

        assert_eq!(access, Access::Authenticated(principal));
        assert_eq!(calls.load(Ordering::SeqCst), 2, "third interceptor must not run");
    }

    #[tokio::test]
    async fn test_permit_paths_before_deny_anonymous() {
        let chain = InterceptorChain::new()
            .add_interceptor(PermitPaths::new(["/actuator/health"]))
            .add_interceptor(DenyAnonymous);

        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.evaluate(&get("/actuator/health")).await,
            Ok(Access::Anonymous)
        );
        assert_eq!(
            chain.evaluate(&get("/")).await,
            Err(AuthError::Unauthenticated)
        );
    }
}
