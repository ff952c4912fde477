use serde::{Deserialize, Serialize};

/// A recommended movie as returned by the recommendation service.
///
/// Any extra fields in the remote payload are ignored. A missing or `null`
/// title decodes as `None` so the rest of the list survives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub title: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// A movie the service sent without a title
    pub fn untitled() -> Self {
        Self { title: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_titles_decode_as_none() {
        let movies: Vec<Movie> =
            serde_json::from_str(r#"[{"title":"Inception"},{"title":null},{"year":1999}]"#).unwrap();

        assert_eq!(
            movies,
            vec![Movie::new("Inception"), Movie::untitled(), Movie::untitled()]
        );
    }

    #[test]
    fn test_untitled_movie_serializes_null_title() {
        let value = serde_json::to_value(Movie::untitled()).unwrap();
        assert_eq!(value, serde_json::json!({"title": null}));
    }
}
