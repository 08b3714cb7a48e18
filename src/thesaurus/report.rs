//! Structured results of thesaurus queries.

use serde::{Deserialize, Serialize};

use crate::lexicon::types::{LinkKind, SynsetId, Word, WordId};

/// One concept the resolved word belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptReport {
    pub synset: SynsetId,
    /// Absent when the store has no name row for the concept.
    pub name: Option<String>,
    /// Definitions in the requested language, in store order.
    pub definitions: Vec<String>,
    /// Other words in the concept, in store order. Never contains the
    /// resolved word itself.
    pub synonyms: Vec<Word>,
}

/// Synonym network of a lemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymReport {
    pub lemma: String,
    pub lang: String,
    /// The word the concepts were resolved for.
    pub word_id: WordId,
    /// Every word id whose lemma matched, in store order. Only the first
    /// is resolved.
    pub candidates: Vec<WordId>,
    pub concepts: Vec<ConceptReport>,
}

impl SynonymReport {
    /// Number of words whose lemma matched the query.
    pub fn match_count(&self) -> usize {
        self.candidates.len()
    }

    /// True when the lemma is a homograph and the other candidates were
    /// not resolved.
    pub fn has_multiple_matches(&self) -> bool {
        self.candidates.len() > 1
    }

    /// Candidates that were left unresolved.
    pub fn unresolved_candidates(&self) -> &[WordId] {
        self.candidates.get(1..).unwrap_or(&[])
    }
}

/// Outcome of a synonym lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SynonymLookup {
    /// No word has this lemma. This is a normal negative result.
    NotFound { lemma: String },
    Found(SynonymReport),
}

impl SynonymLookup {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SynonymLookup::NotFound { .. })
    }

    /// The concept reports, empty for [`SynonymLookup::NotFound`].
    pub fn concepts(&self) -> &[ConceptReport] {
        match self {
            SynonymLookup::NotFound { .. } => &[],
            SynonymLookup::Found(report) => &report.concepts,
        }
    }

    pub fn report(&self) -> Option<&SynonymReport> {
        match self {
            SynonymLookup::NotFound { .. } => None,
            SynonymLookup::Found(report) => Some(report),
        }
    }

    pub fn into_report(self) -> Option<SynonymReport> {
        match self {
            SynonymLookup::NotFound { .. } => None,
            SynonymLookup::Found(report) => Some(report),
        }
    }
}

/// Words belonging to one concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptMembers {
    pub synset: SynsetId,
    pub name: Option<String>,
    /// Language filter that was applied, if any.
    pub lang: Option<String>,
    pub words: Vec<Word>,
}

/// A concept reached through an outgoing link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedConcept {
    pub kind: LinkKind,
    pub target: SynsetId,
    pub target_name: Option<String>,
}

/// Outgoing links of one concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptLinks {
    pub synset: SynsetId,
    pub name: Option<String>,
    pub links: Vec<LinkedConcept>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(candidates: &[i64]) -> SynonymReport {
        SynonymReport {
            lemma: "ネコ".to_string(),
            lang: "jpn".to_string(),
            word_id: WordId(candidates[0]),
            candidates: candidates.iter().copied().map(WordId).collect(),
            concepts: Vec::new(),
        }
    }

    #[test]
    fn test_match_flags() {
        let single = report(&[1]);
        assert_eq!(single.match_count(), 1);
        assert!(!single.has_multiple_matches());
        assert!(single.unresolved_candidates().is_empty());

        let homograph = report(&[4, 9]);
        assert_eq!(homograph.match_count(), 2);
        assert!(homograph.has_multiple_matches());
        assert_eq!(homograph.unresolved_candidates(), &[WordId(9)]);
    }

    #[test]
    fn test_not_found_has_no_concepts() {
        let lookup = SynonymLookup::NotFound {
            lemma: "xyzzy123".to_string(),
        };
        assert!(lookup.is_not_found());
        assert!(lookup.concepts().is_empty());
        assert!(lookup.report().is_none());
    }

    #[test]
    fn test_lookup_json_is_tagged() {
        let lookup = SynonymLookup::NotFound {
            lemma: "xyzzy123".to_string(),
        };
        let value = serde_json::to_value(&lookup).unwrap();
        assert_eq!(value["status"], "not_found");
        assert_eq!(value["lemma"], "xyzzy123");

        let value = serde_json::to_value(SynonymLookup::Found(report(&[1]))).unwrap();
        assert_eq!(value["status"], "found");
        assert_eq!(value["word_id"], 1);
    }
}
