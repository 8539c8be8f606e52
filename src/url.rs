//! Canonical URL building for linked entities.

use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::error::{LinkError, Result};

/// Builds the canonical link target for an entity id
pub trait UrlBuilder {
    fn canonical_url(&self, id: &str) -> Result<String>;
}

impl<F> UrlBuilder for F
where
    F: Fn(&str) -> Result<String>,
{
    fn canonical_url(&self, id: &str) -> Result<String> {
        self(id)
    }
}

// =============================================================================
// RouteTable
// =============================================================================

/// Canonical route templates per entity type (`/taxonomy/term/{id}`)
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            routes: config.routes.clone(),
        }
    }

    pub fn insert(&mut self, entity_type: impl Into<String>, template: impl Into<String>) {
        self.routes.insert(entity_type.into(), template.into());
    }

    pub fn with_route(mut self, entity_type: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(entity_type, template);
        self
    }

    /// Fill the entity type's template with the encoded id
    pub fn canonical_url(&self, entity_type: &str, id: &str) -> Result<String> {
        match self.routes.get(entity_type) {
            Some(template) if template.contains("{id}") && !id.is_empty() => {
                Ok(template.replace("{id}", &urlencoding::encode(id)))
            }
            _ => Err(LinkError::NoCanonicalRoute {
                entity_type: entity_type.to_string(),
                id: id.to_string(),
            }),
        }
    }

    /// A [`UrlBuilder`] bound to one entity type
    pub fn for_entity_type<'a>(&'a self, entity_type: &'a str) -> EntityRoutes<'a> {
        EntityRoutes {
            table: self,
            entity_type,
        }
    }
}

/// Route lookup for a single entity type
#[derive(Debug, Clone, Copy)]
pub struct EntityRoutes<'a> {
    table: &'a RouteTable,
    entity_type: &'a str,
}

impl UrlBuilder for EntityRoutes<'_> {
    fn canonical_url(&self, id: &str) -> Result<String> {
        self.table.canonical_url(self.entity_type, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let routes = RouteTable::from_config(&SiteConfig::default());
        assert_eq!(routes.canonical_url("taxonomy_term", "7").unwrap(), "/taxonomy/term/7");
        assert_eq!(routes.canonical_url("node", "12").unwrap(), "/node/12");
    }

    #[test]
    fn test_missing_route() {
        let routes = RouteTable::new();
        let err = routes.canonical_url("taxonomy_term", "7").unwrap_err();
        assert!(matches!(err, LinkError::NoCanonicalRoute { .. }));
    }

    #[test]
    fn test_template_without_placeholder_is_not_a_route() {
        let routes = RouteTable::new().with_route("media", "/media");
        assert!(routes.canonical_url("media", "1").is_err());
    }

    #[test]
    fn test_id_is_encoded() {
        let routes = RouteTable::new().with_route("glossary", "/glossary/{id}");
        assert_eq!(
            routes.canonical_url("glossary", "a b/c").unwrap(),
            "/glossary/a%20b%2Fc"
        );
        assert_eq!(
            routes.canonical_url("glossary", "caf\u{e9}?x=1&y").unwrap(),
            "/glossary/caf%C3%A9%3Fx%3D1%26y"
        );
        assert_eq!(routes.canonical_url("glossary", "a-b_c.d~e").unwrap(), "/glossary/a-b_c.d~e");
    }

    #[test]
    fn test_bound_builder_and_closures() {
        let routes = RouteTable::from_config(&SiteConfig::default());
        let terms = routes.for_entity_type("taxonomy_term");
        assert_eq!(terms.canonical_url("3").unwrap(), "/taxonomy/term/3");

        fn failing(id: &str) -> Result<String> {
            Err(LinkError::NoCanonicalRoute {
                entity_type: "node".into(),
                id: id.into(),
            })
        }
        let builder: &dyn UrlBuilder = &failing;
        assert!(builder.canonical_url("1").is_err());
    }
}
