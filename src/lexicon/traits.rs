//! Store abstraction over the WordNet tables.

use crate::error::Result;
use crate::lexicon::types::{ConceptLink, StoreStatistics, SynsetId, Word, WordId};

/// Read-only access to a WordNet lexical store.
///
/// Every method is a single lookup that returns rows in the store's native
/// order. Implementations must never reorder results and never write.
/// Methods take `&mut self` because a store may hold a single connection
/// that is driven one query at a time.
pub trait LexicalStore: std::fmt::Debug {
    /// Ids of every word whose lemma equals `lemma` exactly.
    fn word_ids_by_lemma(&mut self, lemma: &str) -> Result<Vec<WordId>>;

    /// Concepts the word belongs to.
    fn synsets_of_word(&mut self, word_id: WordId) -> Result<Vec<SynsetId>>;

    /// Names recorded for a concept. Usually zero or one row.
    fn synset_names(&mut self, synset: &SynsetId) -> Result<Vec<String>>;

    /// Definitions of a concept in one language.
    fn definitions(&mut self, synset: &SynsetId, lang: &str) -> Result<Vec<String>>;

    /// Ids of the words in a concept, leaving out `exclude`.
    fn co_members(&mut self, synset: &SynsetId, exclude: WordId) -> Result<Vec<WordId>>;

    /// Rows of the `word` table with the given id.
    fn words_by_id(&mut self, word_id: WordId) -> Result<Vec<Word>>;

    /// Words in a concept, optionally restricted to one language.
    fn words_in_synset(&mut self, synset: &SynsetId, lang: Option<&str>) -> Result<Vec<Word>>;

    /// Outgoing links of a concept.
    fn links_from(&mut self, synset: &SynsetId) -> Result<Vec<ConceptLink>>;

    /// Table names and row counts.
    fn statistics(&mut self) -> Result<StoreStatistics>;
}

impl<S: LexicalStore + ?Sized> LexicalStore for Box<S> {
    fn word_ids_by_lemma(&mut self, lemma: &str) -> Result<Vec<WordId>> {
        self.as_mut().word_ids_by_lemma(lemma)
    }

    fn synsets_of_word(&mut self, word_id: WordId) -> Result<Vec<SynsetId>> {
        self.as_mut().synsets_of_word(word_id)
    }

    fn synset_names(&mut self, synset: &SynsetId) -> Result<Vec<String>> {
        self.as_mut().synset_names(synset)
    }

    fn definitions(&mut self, synset: &SynsetId, lang: &str) -> Result<Vec<String>> {
        self.as_mut().definitions(synset, lang)
    }

    fn co_members(&mut self, synset: &SynsetId, exclude: WordId) -> Result<Vec<WordId>> {
        self.as_mut().co_members(synset, exclude)
    }

    fn words_by_id(&mut self, word_id: WordId) -> Result<Vec<Word>> {
        self.as_mut().words_by_id(word_id)
    }

    fn words_in_synset(&mut self, synset: &SynsetId, lang: Option<&str>) -> Result<Vec<Word>> {
        self.as_mut().words_in_synset(synset, lang)
    }

    fn links_from(&mut self, synset: &SynsetId) -> Result<Vec<ConceptLink>> {
        self.as_mut().links_from(synset)
    }

    fn statistics(&mut self) -> Result<StoreStatistics> {
        self.as_mut().statistics()
    }
}
