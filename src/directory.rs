//! Candidate Directory
//!
//! Supplies the sibling entities a text may link to. The in-memory
//! `EntityStore` keeps raw field records per entity type and reads them
//! through the configured `EntityKeys`, so any record shape works as long as
//! its id/label/bundle/status field names are known.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::candidate::{Candidate, CandidateSet, EntityId};
use crate::config::{EntityKeys, SiteConfig};
use crate::error::{LinkError, Result};

/// Raw entity record (field name → value)
pub type FieldRecord = serde_json::Map<String, Value>;

/// The entity whose text is being rendered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity_type: String,
    pub id: EntityId,
    pub bundle: String,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<String>, id: impl Into<EntityId>, bundle: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
            bundle: bundle.into(),
        }
    }
}

/// Source of link candidates for a subject entity.
///
/// Implementations return every published entity of the subject's type and
/// bundle except the subject itself, ordered by name ascending.
pub trait CandidateDirectory {
    fn candidates(&self, subject: &EntityRef) -> Result<CandidateSet>;
}

// =============================================================================
// Field helpers
// =============================================================================

/// Read an id-like field: strings as-is, integers formatted
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Published means `true`, a non-zero number, or "1" / "true"
pub fn is_published(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(s)) => matches!(s.as_str(), "1" | "true"),
        _ => false,
    }
}

// =============================================================================
// EntityStore
// =============================================================================

/// In-memory entity records grouped by entity type
#[derive(Debug, Default)]
pub struct EntityStore {
    keys: HashMap<String, EntityKeys>,
    records: HashMap<String, Vec<FieldRecord>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store knowing every entity type declared in the site config
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            keys: config.entity_keys.clone(),
            records: HashMap::new(),
        }
    }

    pub fn register_type(&mut self, entity_type: impl Into<String>, keys: EntityKeys) {
        self.keys.insert(entity_type.into(), keys);
    }

    fn keys(&self, entity_type: &str) -> Result<&EntityKeys> {
        self.keys
            .get(entity_type)
            .ok_or_else(|| LinkError::UnknownEntityType(entity_type.to_string()))
    }

    /// Insert or replace a record (matched by id)
    pub fn insert(&mut self, entity_type: &str, record: FieldRecord) -> Result<EntityRef> {
        let keys = self.keys(entity_type)?;
        let invalid = |reason: String| LinkError::InvalidRecord {
            entity_type: entity_type.to_string(),
            reason,
        };

        let id = record
            .get(&keys.id_field)
            .and_then(scalar_string)
            .ok_or_else(|| invalid(format!("missing id field '{}'", keys.id_field)))?;
        if !matches!(record.get(&keys.label_field), Some(Value::String(_))) {
            return Err(invalid(format!("missing label field '{}'", keys.label_field)));
        }
        let bundle = record
            .get(&keys.bundle_field)
            .and_then(scalar_string)
            .ok_or_else(|| invalid(format!("missing bundle field '{}'", keys.bundle_field)))?;

        let id_field = keys.id_field.clone();
        let records = self.records.entry(entity_type.to_string()).or_default();
        match records
            .iter()
            .position(|r| r.get(&id_field).and_then(scalar_string).as_deref() == Some(id.as_str()))
        {
            Some(idx) => records[idx] = record,
            None => records.push(record),
        }

        Ok(EntityRef::new(entity_type, id, bundle))
    }

    /// Load a JSON array of records; returns the number inserted
    pub fn load_json(&mut self, entity_type: &str, json: &str) -> Result<usize> {
        let records: Vec<FieldRecord> = serde_json::from_str(json)?;
        let count = records.len();
        for record in records {
            self.insert(entity_type, record)?;
        }
        Ok(count)
    }

    /// Number of records stored for an entity type
    pub fn len(&self, entity_type: &str) -> usize {
        self.records.get(entity_type).map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.records.values().all(Vec::is_empty)
    }

    /// Reference to a stored entity, for use as a render subject
    pub fn entity_ref(&self, entity_type: &str, id: &str) -> Option<EntityRef> {
        let keys = self.keys.get(entity_type)?;
        self.records.get(entity_type)?.iter().find_map(|record| {
            let record_id = record.get(&keys.id_field).and_then(scalar_string)?;
            if record_id != id {
                return None;
            }
            let bundle = record.get(&keys.bundle_field).and_then(scalar_string)?;
            Some(EntityRef::new(entity_type, record_id, bundle))
        })
    }
}

impl CandidateDirectory for EntityStore {
    fn candidates(&self, subject: &EntityRef) -> Result<CandidateSet> {
        let keys = self.keys(&subject.entity_type)?;
        let Some(records) = self.records.get(&subject.entity_type) else {
            return Ok(CandidateSet::default());
        };

        let mut candidates: Vec<Candidate> = records
            .iter()
            .filter(|r| is_published(r.get(&keys.status_field)))
            .filter(|r| r.get(&keys.bundle_field).and_then(scalar_string).as_deref() == Some(subject.bundle.as_str()))
            .filter_map(|r| {
                let id = r.get(&keys.id_field).and_then(scalar_string)?;
                let name = r.get(&keys.label_field)?.as_str()?.to_string();
                Some(Candidate { id, name })
            })
            .filter(|c| c.id != subject.id)
            .collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            entity_type = %subject.entity_type,
            bundle = %subject.bundle,
            subject = %subject.id,
            count = candidates.len(),
            "candidate lookup"
        );

        Ok(CandidateSet::new(candidates))
    }
}
