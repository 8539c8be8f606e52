//! LinkedText render element and field formatter.
//!
//! Rendering a text field item: apply its text format, fetch the sibling
//! candidates of the owning entity, link them. Any failure past the format
//! step degrades to the unlinked fragment; a field never fails to render.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::SiteConfig;
use crate::directory::{CandidateDirectory, EntityRef};
use crate::format::TextFormat;
use crate::linker::Linker;
use crate::url::RouteTable;

// =============================================================================
// Render Context
// =============================================================================

/// Collaborators shared by every element rendered on a page
pub struct RenderContext<'a> {
    directory: &'a dyn CandidateDirectory,
    routes: &'a RouteTable,
    linker: Linker,
    fallback_format: TextFormat,
}

impl<'a> RenderContext<'a> {
    pub fn new(directory: &'a dyn CandidateDirectory, routes: &'a RouteTable, config: &SiteConfig) -> Self {
        let fallback_format = TextFormat::from_id(&config.fallback_format).unwrap_or_else(|e| {
            warn!(error = %e, "invalid fallback format, using plain_text");
            TextFormat::PlainText
        });
        Self {
            directory,
            routes,
            linker: Linker::new(config.linker.clone()),
            fallback_format,
        }
    }

    /// Format by id; unknown ids fall back to the configured fallback format
    pub fn resolve_format(&self, format_id: &str) -> TextFormat {
        TextFormat::from_id(format_id).unwrap_or_else(|e| {
            warn!(error = %e, fallback = self.fallback_format.id(), "using fallback text format");
            self.fallback_format
        })
    }
}

// =============================================================================
// LinkedText
// =============================================================================

/// Render element: formatted text with sibling entities linked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedText {
    pub text: String,
    pub format: String,
    pub langcode: String,
    /// Entity owning the text; its siblings are the link candidates
    pub entity: EntityRef,
}

impl LinkedText {
    pub fn pre_render(&self, ctx: &RenderContext<'_>) -> String {
        let rendered = ctx
            .resolve_format(&self.format)
            .apply(&self.text, &self.langcode);

        let candidates = match ctx.directory.candidates(&self.entity) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(entity = %self.entity.id, error = %e, "candidate lookup failed, rendering unlinked");
                return rendered;
            }
        };

        let urls = ctx.routes.for_entity_type(&self.entity.entity_type);
        match ctx.linker.link(&self.text, &rendered, &candidates, &urls) {
            Ok(linked) => linked,
            Err(e) => {
                warn!(entity = %self.entity.id, error = %e, "entity linking failed, rendering unlinked");
                rendered
            }
        }
    }
}

// =============================================================================
// Field Formatter
// =============================================================================

/// One value of a formatted text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldItem {
    pub value: String,
    /// Format id stored with the value; `None` uses the fallback format
    #[serde(default)]
    pub format: Option<String>,
}

impl FieldItem {
    pub fn new(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: Some(format.into()),
        }
    }
}

/// Field formatter producing one `LinkedText` element per field item
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedTextFormatter;

impl LinkedTextFormatter {
    pub const ID: &'static str = "entity_linked_text";

    pub fn view_elements(&self, items: &[FieldItem], entity: &EntityRef, langcode: &str) -> Vec<LinkedText> {
        items
            .iter()
            .map(|item| LinkedText {
                text: item.value.clone(),
                // Unknown ids resolve to the fallback format at render time
                format: item.format.clone().unwrap_or_default(),
                langcode: langcode.to_string(),
                entity: entity.clone(),
            })
            .collect()
    }

    pub fn render(
        &self,
        items: &[FieldItem],
        entity: &EntityRef,
        langcode: &str,
        ctx: &RenderContext<'_>,
    ) -> Vec<String> {
        self.view_elements(items, entity, langcode)
            .iter()
            .map(|element| element.pre_render(ctx))
            .collect()
    }
}
