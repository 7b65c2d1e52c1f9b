//! Request DTOs for the search API
//!
//! Defines incoming request bodies and query strings, and how each one is
//! normalized into a cache key.

use serde::Deserialize;

/// Request body for POST /search/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query, e.g. "sushi"
    pub query: String,
    /// Optional area to search in, e.g. "SF"
    #[serde(default)]
    pub location: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.query.trim().is_empty() {
            return Some("Query cannot be empty".to_string());
        }
        None
    }

    /// Query with surrounding whitespace removed, case preserved.
    pub fn query_text(&self) -> String {
        collapse_whitespace(&self.query)
    }

    /// Non-blank location, case preserved.
    pub fn location_text(&self) -> Option<String> {
        self.location
            .as_deref()
            .map(collapse_whitespace)
            .filter(|l| !l.is_empty())
    }

    /// Cache key: equal for requests that differ only in case or spacing.
    pub fn cache_key(&self) -> String {
        let query = self.query_text().to_lowercase();
        match self.location_text() {
            Some(location) => format!("search:{}|{}", query, location.to_lowercase()),
            None => format!("search:{}", query),
        }
    }
}

/// Query string for GET /details/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailsQuery {
    #[serde(default)]
    pub place_id: Option<String>,
}

impl DetailsQuery {
    /// Returns the trimmed place id, or an error message when missing.
    pub fn place_id(&self) -> Result<&str, String> {
        match self.place_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err("place_id is required".to_string()),
        }
    }
}

/// Cache key for a details lookup. Place ids are case-sensitive.
pub fn details_cache_key(place_id: &str) -> String {
    format!("details:{}", place_id.trim())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_deserialize() {
        let json = r#"{"query": "sushi"}"#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.query, "sushi");
        assert!(req.location.is_none());
    }

    #[test]
    fn test_search_request_with_location() {
        let json = r#"{"query": "sushi", "location": "SF"}"#;
        let req: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.location.as_deref(), Some("SF"));
    }

    #[test]
    fn test_validate_empty_query() {
        assert!(SearchRequest::new("").validate().is_some());
        assert!(SearchRequest::new("   ").validate().is_some());
        assert!(SearchRequest::new("tacos").validate().is_none());
    }

    #[test]
    fn test_cache_key_normalizes() {
        let a = SearchRequest::new("  Sushi   Bar ").with_location("SF");
        let b = SearchRequest::new("sushi bar").with_location(" sf ");
        assert_eq!(a.cache_key(), "search:sushi bar|sf");
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_cache_key_location_distinguishes() {
        let plain = SearchRequest::new("sushi");
        let sf = SearchRequest::new("sushi").with_location("SF");
        let blank = SearchRequest::new("sushi").with_location("  ");
        assert_eq!(plain.cache_key(), "search:sushi");
        assert_ne!(plain.cache_key(), sf.cache_key());
        assert_eq!(plain.cache_key(), blank.cache_key());
    }

    #[test]
    fn test_details_query() {
        let missing = DetailsQuery::default();
        assert!(missing.place_id().is_err());

        let blank = DetailsQuery {
            place_id: Some("  ".into()),
        };
        assert!(blank.place_id().is_err());

        let ok = DetailsQuery {
            place_id: Some(" ChIJabc ".into()),
        };
        assert_eq!(ok.place_id().unwrap(), "ChIJabc");
        assert_eq!(details_cache_key("ChIJabc"), "details:ChIJabc");
    }
}
