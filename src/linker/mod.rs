//! EntityLinker Core
//!
//! Finds sibling-entity names in plain text and writes links to them into the
//! already-rendered HTML fragment of the same text.
//!
//! # Pipeline
//! 1. `pattern` - escaped, word-bounded alternation of candidate names plus
//!    lowercase-initial variants (`case`)
//! 2. one scan over the plain text, reduced to distinct literals
//! 3. resolution of each literal to a candidate id
//! 4. `substitute` - first eligible occurrence in the fragment becomes an anchor
//!
//! Every distinct literal is linked at most once: a name mentioned three
//! times gets one link, on its first occurrence.

pub mod boundary;
pub mod case;
pub mod pattern;
pub mod substitute;


pub use boundary::*;
pub use case::*;
pub use pattern::{search_names, NamePattern, ScanMatch, SearchName};
pub use substitute::{anchor_markup, escape_attribute, is_inside_markup, substitute_first};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::candidate::{CandidateSet, EntityId};
use crate::config::LinkerConfig;
use crate::error::Result;
use crate::url::UrlBuilder;

// =============================================================================
// Types
// =============================================================================

/// A literal that was turned into a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    pub literal: String,
    pub entity_id: EntityId,
    pub href: String,
}

/// Outcome of one linking pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReport {
    pub fragment: String,
    /// Links written, in substitution order
    pub linked: Vec<ResolvedLink>,
    /// Matched literals with no candidate behind them
    pub unresolved: Vec<String>,
    /// Candidates whose canonical URL could not be built
    pub url_failures: Vec<EntityId>,
    /// Resolved literals with no eligible occurrence in the fragment
    pub missing_in_fragment: Vec<String>,
}

impl LinkReport {
    fn unchanged(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Linker
// =============================================================================

/// Stateless linker; holds only configuration
#[derive(Debug, Clone, Default)]
pub struct Linker {
    config: LinkerConfig,
}

impl Linker {
    pub fn new(config: LinkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkerConfig {
        &self.config
    }

    /// Link candidate names found in `plain_text` inside `rendered`
    pub fn link(
        &self,
        plain_text: &str,
        rendered: &str,
        candidates: &CandidateSet,
        urls: &dyn UrlBuilder,
    ) -> Result<String> {
        self.link_with_report(plain_text, rendered, candidates, urls)
            .map(|report| report.fragment)
    }

    /// Same as [`Linker::link`], also reporting what was skipped and why
    pub fn link_with_report(
        &self,
        plain_text: &str,
        rendered: &str,
        candidates: &CandidateSet,
        urls: &dyn UrlBuilder,
    ) -> Result<LinkReport> {
        if candidates.is_empty() || plain_text.is_empty() {
            return Ok(LinkReport::unchanged(rendered));
        }

        let Some(pattern) = NamePattern::build(candidates, &self.config)? else {
            return Ok(LinkReport::unchanged(rendered));
        };

        let matches = pattern.distinct_matches(plain_text);
        let mut report = LinkReport::unchanged(rendered);

        for scan in matches {
            let Some(entity_id) = self.resolve(candidates, &scan.literal) else {
                warn!(literal = %scan.literal, "matched name has no candidate");
                report.unresolved.push(scan.literal);
                continue;
            };

            let href = match urls.canonical_url(entity_id) {
                Ok(href) => href,
                Err(e) => {
                    warn!(entity_id = %entity_id, error = %e, "skipping link, no canonical url");
                    report.url_failures.push(entity_id.clone());
                    continue;
                }
            };

            let anchor = anchor_markup(&scan.literal, &href, self.config.anchor_class.as_deref());
            match substitute_first(&report.fragment, &scan.literal, &anchor) {
                Some(fragment) => {
                    report.fragment = fragment;
                    report.linked.push(ResolvedLink {
                        literal: scan.literal,
                        entity_id: entity_id.clone(),
                        href,
                    });
                }
                None => {
                    debug!(literal = %scan.literal, "no eligible occurrence in rendered fragment");
                    report.missing_in_fragment.push(scan.literal);
                }
            }
        }

        debug!(
            names = pattern.name_count(),
            linked = report.linked.len(),
            unresolved = report.unresolved.len(),
            url_failures = report.url_failures.len(),
            missing = report.missing_in_fragment.len(),
            "entity link pass complete"
        );

        Ok(report)
    }

    /// Map a matched literal back to a candidate id.
    ///
    /// Exact candidate names win; otherwise a lowercase-initial literal is
    /// capitalized and looked up again, provided that name qualifies for
    /// lowercase matching.
    pub fn resolve<'c>(&self, candidates: &'c CandidateSet, literal: &str) -> Option<&'c EntityId> {
        if let Some(id) = candidates.id_for_name(literal) {
            return Some(id);
        }
        if !self.config.lowercase_variants {
            return None;
        }
        let canonical = capitalize_initial(literal);
        if canonical == literal || !qualifies_for_lowercase(&canonical, self.config.lowercase_min_chars) {
            return None;
        }
        candidates.id_for_name(&canonical)
    }
}

/// Link with the default configuration
pub fn link_entities(
    plain_text: &str,
    rendered: &str,
    candidates: &CandidateSet,
    urls: &dyn UrlBuilder,
) -> Result<String> {
    Linker::default().link(plain_text, rendered, candidates, urls)
}
