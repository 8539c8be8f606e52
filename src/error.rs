//! Crate-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("name pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("no canonical route for {entity_type} {id}")]
    NoCanonicalRoute { entity_type: String, id: String },

    #[error("unknown text format: {0}")]
    UnknownFormat(String),

    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),

    #[error("invalid {entity_type} record: {reason}")]
    InvalidRecord { entity_type: String, reason: String },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LinkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn no_route_display() {
        let e = LinkError::NoCanonicalRoute {
            entity_type: "taxonomy_term".into(),
            id: "7".into(),
        };
        assert_eq!(e.to_string(), "no canonical route for taxonomy_term 7");
    }

    #[test]
    fn pattern_error_converts() {
        let re_err = regex::Regex::new("(").unwrap_err();
        let e: LinkError = re_err.into();
        assert!(e.to_string().starts_with("name pattern error"));
        let _: &dyn Error = &e;
    }

    #[test]
    fn config_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: LinkError = json_err.into();
        assert!(e.to_string().contains("config error"));
    }
}
