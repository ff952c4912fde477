//! Anonymous access to a fixed set of path prefixes.

use async_trait::async_trait;

use crate::traits::{Decision, Interceptor, RequestContext};

/// Permits requests whose path is one of the prefixes or lies below one.
///
/// `/actuator/env` matches `/actuator/env` and `/actuator/env/message` but
/// not `/actuator/environment`.
pub struct PermitPaths {
    prefixes: Vec<String>,
}

impl PermitPaths {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.into().trim_end_matches('/').to_string())
                .collect(),
        }
    }

    fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| match path.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        })
    }
}

#[async_trait]
impl Interceptor for PermitPaths {
    fn name(&self) -> &str {
        "PermitPaths"
    }

    async fn intercept(&self, request: &RequestContext) -> Decision {
        if self.matches(&request.path) {
            Decision::Permit
        } else {
            Decision::Delegate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    fn get(path: &str) -> RequestContext {
        RequestContext::new(Method::GET, path)
    }

    #[tokio::test]
    async fn test_permit_paths_matches_prefix_segments() {
        let rule = PermitPaths::new(["/actuator/env", "/actuator/refresh/"]);

        assert_eq!(rule.intercept(&get("/actuator/env")).await, Decision::Permit);
        assert_eq!(rule.intercept(&get("/actuator/env/message")).await, Decision::Permit);
        assert_eq!(rule.intercept(&get("/actuator/refresh")).await, Decision::Permit);
        assert_eq!(rule.intercept(&get("/actuator/environment")).await, Decision::Delegate);
        assert_eq!(rule.intercept(&get("/")).await, Decision::Delegate);
    }
}
