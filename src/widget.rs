//! Entity-reference widget defaults.
//!
//! Autocomplete widgets get the ids of the entities already selected in the
//! field as a `+`-joined context string, so the picker can leave them out.

use serde::{Deserialize, Serialize};

use crate::candidate::EntityId;

/// Widget types whose selection settings receive the context
pub const AUTOCOMPLETE_WIDGETS: [&str; 2] = [
    "entity_reference_autocomplete",
    "entity_reference_autocomplete_tags",
];

/// `["3", "7"]` → `"3+7"`; blank ids are skipped
pub fn selection_context<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .filter(|id| !id.trim().is_empty())
        .collect::<Vec<_>>()
        .join("+")
}

/// Inverse of [`selection_context`]
pub fn parse_selection_context(context: &str) -> Vec<EntityId> {
    context
        .split('+')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Selection settings of one entity-reference widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    pub widget_type: String,
    pub target_type: String,
    #[serde(default)]
    pub target_bundles: Vec<String>,
    #[serde(default)]
    pub selection_context: Option<String>,
}

impl WidgetSettings {
    pub fn new(widget_type: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            target_type: target_type.into(),
            ..Self::default()
        }
    }

    pub fn is_autocomplete(&self) -> bool {
        AUTOCOMPLETE_WIDGETS.contains(&self.widget_type.as_str())
    }

    /// Record the current selection; other widget types are left untouched.
    ///
    /// Returns whether the settings were changed.
    pub fn apply_selection<S: AsRef<str>>(&mut self, selected: &[S]) -> bool {
        if !self.is_autocomplete() {
            return false;
        }
        let context = selection_context(selected);
        self.selection_context = (!context.is_empty()).then_some(context);
        true
    }

    pub fn with_selection<S: AsRef<str>>(mut self, selected: &[S]) -> Self {
        self.apply_selection(selected);
        self
    }

    /// Ids carried by the selection context
    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.selection_context
            .as_deref()
            .map(parse_selection_context)
            .unwrap_or_default()
    }
}
