//! Candidate Directory Types
//!
//! A `CandidateSet` is the ordered id → name directory the linker resolves
//! matches against. It is built fresh for every render and never mutated
//! once constructed.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Core Types
// =============================================================================

pub type EntityId = String;

/// An entity eligible to be auto-linked from text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: EntityId,
    pub name: String,
}

impl Candidate {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Candidates ordered by name (byte-wise, case-sensitive) with a reverse
/// name → id index.
///
/// When several candidates share a display name the first one in set order
/// owns the name; the others can never be resolved from text.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
    by_name: HashMap<String, EntityId>,
}

impl CandidateSet {
    /// Build a set from candidates in any order.
    ///
    /// Sorting is stable, so candidates with equal names keep their input
    /// order. A repeated identifier keeps its first entry.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut seen_ids = HashSet::new();
        let mut candidates: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| seen_ids.insert(c.id.clone()))
            .collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_name = HashMap::with_capacity(candidates.len());
        for candidate in &candidates {
            by_name
                .entry(candidate.name.clone())
                .or_insert_with(|| candidate.id.clone());
        }

        Self { candidates, by_name }
    }

    /// Build a set from `(id, name)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<EntityId>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, name)| Candidate::new(id, name))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Candidate names in set order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.name.as_str())
    }

    /// Exact (case-sensitive) name lookup
    pub fn id_for_name(&self, name: &str) -> Option<&EntityId> {
        self.by_name.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }
}

impl FromIterator<Candidate> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = Candidate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
