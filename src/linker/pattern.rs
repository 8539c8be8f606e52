//! NamePattern: one word-bounded alternation over every searchable name.
//!
//! Names are escaped and matched literally. Alternatives are ordered longest
//! first so that, at any position, the longest name that still ends on a word
//! boundary wins ("Climate Council" over "Climate") regardless of the
//! candidate set order.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::case::{lowercase_initial, qualifies_for_lowercase};
use crate::candidate::CandidateSet;
use crate::config::LinkerConfig;
use crate::error::Result;

/// A name the scanner looks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchName {
    pub text: String,
    /// True for a lowercase-initial variant of a candidate name
    pub is_variant: bool,
}

/// First occurrence of a distinct matched literal in the scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanMatch {
    pub literal: String,
    pub start: usize,
    pub end: usize,
}

/// Collect the candidate names plus their lowercase variants.
///
/// Blank names are dropped and every name appears once.
pub fn search_names(candidates: &CandidateSet, config: &LinkerConfig) -> Vec<SearchName> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(candidates.len());

    for name in candidates.names() {
        if name.trim().is_empty() {
            continue;
        }
        if seen.insert(name.to_string()) {
            names.push(SearchName {
                text: name.to_string(),
                is_variant: false,
            });
        }
    }

    if config.lowercase_variants {
        let variants: Vec<SearchName> = names
            .iter()
            .filter(|n| qualifies_for_lowercase(&n.text, config.lowercase_min_chars))
            .map(|n| lowercase_initial(&n.text))
            .filter(|v| seen.insert(v.clone()))
            .map(|text| SearchName {
                text,
                is_variant: true,
            })
            .collect();
        names.extend(variants);
    }

    names
}

/// Compiled scanner over a set of search names
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
    name_count: usize,
}

impl NamePattern {
    /// Build the pattern for a candidate set.
    ///
    /// Returns `Ok(None)` when there is nothing to search for, so an empty
    /// alternation is never compiled.
    pub fn build(candidates: &CandidateSet, config: &LinkerConfig) -> Result<Option<Self>> {
        let names = search_names(candidates, config);
        Self::from_names(&names, config.pattern_size_limit)
    }

    pub fn from_names(names: &[SearchName], size_limit: usize) -> Result<Option<Self>> {
        if names.is_empty() {
            return Ok(None);
        }

        let mut ordered: Vec<&str> = names.iter().map(|n| n.text.as_str()).collect();
        // Stable: equal lengths keep candidate order
        ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let alternation = ordered
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .size_limit(size_limit)
            .build()?;

        Ok(Some(Self {
            regex,
            name_count: names.len(),
        }))
    }

    /// Number of searchable names (originals + variants)
    pub fn name_count(&self) -> usize {
        self.name_count
    }

    /// Scan once, keeping the first occurrence of every distinct literal in
    /// textual order.
    pub fn distinct_matches(&self, text: &str) -> Vec<ScanMatch> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.regex
            .find_iter(text)
            .filter(|m| seen.insert(m.as_str()))
            .map(|m| ScanMatch {
                literal: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(pairs: &[(&str, &str)]) -> NamePattern {
        let set = CandidateSet::from_pairs(pairs.iter().copied());
        NamePattern::build(&set, &LinkerConfig::default())
            .unwrap()
            .expect("non-empty pattern")
    }

    fn literals(matches: Vec<ScanMatch>) -> Vec<String> {
        matches.into_iter().map(|m| m.literal).collect()
    }

    #[test]
    fn test_search_names_adds_variants_after_originals() {
        let set = CandidateSet::from_pairs([("1", "Meeting"), ("2", "WTO"), ("3", "Global Forum")]);
        let names = search_names(&set, &LinkerConfig::default());
        let texts: Vec<&str> = names.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Global Forum", "Meeting", "WTO", "meeting"]);
        assert!(names[3].is_variant);
        assert!(!names[0].is_variant);
    }

    #[test]
    fn test_variants_disabled() {
        let set = CandidateSet::from_pairs([("1", "Meeting")]);
        let config = LinkerConfig {
            lowercase_variants: false,
            ..LinkerConfig::default()
        };
        assert_eq!(search_names(&set, &config).len(), 1);
    }

    #[test]
    fn test_variant_equal_to_existing_name_not_duplicated() {
        let set = CandidateSet::from_pairs([("1", "Meeting"), ("2", "meeting")]);
        let names = search_names(&set, &LinkerConfig::default());
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| !n.is_variant));
    }

    #[test]
    fn test_blank_names_skipped() {
        let set = CandidateSet::from_pairs([("1", ""), ("2", "   ")]);
        assert!(NamePattern::build(&set, &LinkerConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_empty_set_builds_nothing() {
        let set = CandidateSet::default();
        assert!(NamePattern::build(&set, &LinkerConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let p = pattern(&[("1", "Rio+20 Summit"), ("2", "A.B Group")]);
        assert_eq!(literals(p.distinct_matches("At Rio+20 Summit and AxB Group")), vec!["Rio+20 Summit"]);
        assert_eq!(literals(p.distinct_matches("the A.B Group met")), vec!["A.B Group"]);
    }

    #[test]
    fn test_whole_words_only() {
        let p = pattern(&[("6", "Meeting")]);
        assert!(p.distinct_matches("Meetings were held").is_empty());
        assert!(p.distinct_matches("PreMeeting notes").is_empty());
        assert_eq!(literals(p.distinct_matches("The Meeting's agenda")), vec!["Meeting"]);
    }

    #[test]
    fn test_longest_name_wins_at_same_position() {
        let p = pattern(&[("1", "Climate"), ("2", "Climate Council")]);
        assert_eq!(
            literals(p.distinct_matches("The Climate Council met.")),
            vec!["Climate Council"]
        );
        // Falls back to the shorter name when the longer one is not whole-word
        assert_eq!(
            literals(p.distinct_matches("The Climate Councils met.")),
            vec!["Climate"]
        );
    }

    #[test]
    fn test_distinct_in_first_occurrence_order() {
        let p = pattern(&[("1", "Meeting"), ("2", "Council")]);
        let matches = p.distinct_matches("Council, Meeting, Council, meeting, Meeting");
        assert_eq!(
            matches,
            vec![
                ScanMatch { literal: "Council".into(), start: 0, end: 7 },
                ScanMatch { literal: "Meeting".into(), start: 9, end: 16 },
                ScanMatch { literal: "meeting".into(), start: 27, end: 34 },
            ]
        );
    }

    #[test]
    fn test_case_sensitive_without_variant() {
        let p = pattern(&[("4", "WTO")]);
        assert!(p.distinct_matches("the wto and the Wto").is_empty());
        assert_eq!(literals(p.distinct_matches("the WTO")), vec!["WTO"]);
    }

    #[test]
    fn test_size_limit_exceeded_is_error() {
        let set = CandidateSet::from_pairs((0..200).map(|i| (i.to_string(), format!("Name{i}"))));
        let config = LinkerConfig {
            pattern_size_limit: 16,
            ..LinkerConfig::default()
        };
        assert!(NamePattern::build(&set, &config).is_err());
    }
}
