//! Configuration types and defaults for LinkCore

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// Default compiled-pattern budget (matches the regex crate's own default)
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

// =============================================================================
// Linker Configuration
// =============================================================================

/// Settings for the name scanner and anchor substitution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkerConfig {
    /// Also recognize lowercase-initial variants of qualifying names. Default: true
    pub lowercase_variants: bool,
    /// Minimum name length (in characters) for a lowercase variant. Default: 4
    pub lowercase_min_chars: usize,
    /// Optional `class` attribute for generated anchors. Default: None
    pub anchor_class: Option<String>,
    /// Compiled size budget for the name pattern. Default: 10 MiB
    pub pattern_size_limit: usize,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            lowercase_variants: true,
            lowercase_min_chars: 4,
            anchor_class: None,
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }
}

// =============================================================================
// Entity Keys
// =============================================================================

/// Field names used to read an entity record of one entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityKeys {
    pub id_field: String,
    pub label_field: String,
    pub bundle_field: String,
    pub status_field: String,
}

impl EntityKeys {
    pub fn new(
        id_field: impl Into<String>,
        label_field: impl Into<String>,
        bundle_field: impl Into<String>,
        status_field: impl Into<String>,
    ) -> Self {
        Self {
            id_field: id_field.into(),
            label_field: label_field.into(),
            bundle_field: bundle_field.into(),
            status_field: status_field.into(),
        }
    }

    /// Taxonomy terms: `tid` / `name` / vocabulary `vid` / `status`
    pub fn taxonomy_term() -> Self {
        Self::new("tid", "name", "vid", "status")
    }

    /// Content nodes: `nid` / `title` / `type` / `status`
    pub fn node() -> Self {
        Self::new("nid", "title", "type", "status")
    }
}

// =============================================================================
// Site Configuration
// =============================================================================

/// Everything the render pipeline needs, loadable from one JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub linker: LinkerConfig,
    /// Canonical route template per entity type, `{id}` is substituted
    pub routes: HashMap<String, String>,
    /// Record field names per entity type
    pub entity_keys: HashMap<String, EntityKeys>,
    /// Format used when an item names an unknown format. Default: "plain_text"
    pub fallback_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let mut routes = HashMap::new();
        routes.insert("taxonomy_term".to_string(), "/taxonomy/term/{id}".to_string());
        routes.insert("node".to_string(), "/node/{id}".to_string());

        let mut entity_keys = HashMap::new();
        entity_keys.insert("taxonomy_term".to_string(), EntityKeys::taxonomy_term());
        entity_keys.insert("node".to_string(), EntityKeys::node());

        Self {
            linker: LinkerConfig::default(),
            routes,
            entity_keys,
            fallback_format: "plain_text".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document; missing sections take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn keys_for(&self, entity_type: &str) -> Option<&EntityKeys> {
        self.entity_keys.get(entity_type)
    }
}
