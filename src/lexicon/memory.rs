//! In-memory lexical store for testing and embedding.

use crate::error::{Result, WnjaError};
use crate::lexicon::traits::LexicalStore;
use crate::lexicon::types::{ConceptLink, LinkKind, StoreStatistics, SynsetId, Word, WordId};

/// A lexical store held entirely in memory.
///
/// Rows are kept in insertion order, which plays the role of the native
/// order of a database table.
#[derive(Debug, Default, Clone)]
pub struct MemoryLexicon {
    words: Vec<Word>,
    senses: Vec<(SynsetId, WordId)>,
    synsets: Vec<(SynsetId, Option<String>)>,
    definitions: Vec<(SynsetId, String, String)>,
    links: Vec<ConceptLink>,
    closed: bool,
}

impl MemoryLexicon {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word<L: Into<String>, G: Into<String>>(&mut self, id: i64, lemma: L, lang: G) -> &mut Self {
        self.words.push(Word::new(id, lemma, lang));
        self
    }

    pub fn add_sense<S: Into<SynsetId>>(&mut self, synset: S, word_id: i64) -> &mut Self {
        self.senses.push((synset.into(), WordId(word_id)));
        self
    }

    pub fn add_synset<S: Into<SynsetId>>(&mut self, synset: S, name: Option<&str>) -> &mut Self {
        self.synsets.push((synset.into(), name.map(str::to_string)));
        self
    }

    pub fn add_definition<S: Into<SynsetId>>(&mut self, synset: S, lang: &str, def: &str) -> &mut Self {
        self.definitions
            .push((synset.into(), lang.to_string(), def.to_string()));
        self
    }

    pub fn add_link<S: Into<SynsetId>>(&mut self, source: S, target: S, code: &str) -> &mut Self {
        self.links.push(ConceptLink {
            source: source.into(),
            target: target.into(),
            kind: LinkKind::from_code(code),
        });
        self
    }

    /// Mark the store as closed. Every later query fails.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn check_closed(&self) -> Result<()> {
        if self.closed {
            Err(WnjaError::store_unavailable("memory lexicon is closed"))
        } else {
            Ok(())
        }
    }
}

impl LexicalStore for MemoryLexicon {
    fn word_ids_by_lemma(&mut self, lemma: &str) -> Result<Vec<WordId>> {
        self.check_closed()?;
        Ok(self
            .words
            .iter()
            .filter(|w| w.lemma == lemma)
            .map(|w| w.id)
            .collect())
    }

    fn synsets_of_word(&mut self, word_id: WordId) -> Result<Vec<SynsetId>> {
        self.check_closed()?;
        Ok(self
            .senses
            .iter()
            .filter(|(_, id)| *id == word_id)
            .map(|(synset, _)| synset.clone())
            .collect())
    }

    fn synset_names(&mut self, synset: &SynsetId) -> Result<Vec<String>> {
        self.check_closed()?;
        Ok(self
            .synsets
            .iter()
            .filter(|(id, _)| id == synset)
            .filter_map(|(_, name)| name.clone())
            .collect())
    }

    fn definitions(&mut self, synset: &SynsetId, lang: &str) -> Result<Vec<String>> {
        self.check_closed()?;
        Ok(self
            .definitions
            .iter()
            .filter(|(id, l, _)| id == synset && l == lang)
            .map(|(_, _, def)| def.clone())
            .collect())
    }

    fn co_members(&mut self, synset: &SynsetId, exclude: WordId) -> Result<Vec<WordId>> {
        self.check_closed()?;
        Ok(self
            .senses
            .iter()
            .filter(|(id, word_id)| id == synset && *word_id != exclude)
            .map(|(_, word_id)| *word_id)
            .collect())
    }

    fn words_by_id(&mut self, word_id: WordId) -> Result<Vec<Word>> {
        self.check_closed()?;
        Ok(self
            .words
            .iter()
            .filter(|w| w.id == word_id)
            .cloned()
            .collect())
    }

    fn words_in_synset(&mut self, synset: &SynsetId, lang: Option<&str>) -> Result<Vec<Word>> {
        self.check_closed()?;
        let mut members = Vec::new();
        for (_, word_id) in self.senses.iter().filter(|(id, _)| id == synset) {
            members.extend(
                self.words
                    .iter()
                    .filter(|w| w.id == *word_id)
                    .filter(|w| lang.is_none_or(|l| w.lang == l))
                    .cloned(),
            );
        }
        Ok(members)
    }

    fn links_from(&mut self, synset: &SynsetId) -> Result<Vec<ConceptLink>> {
        self.check_closed()?;
        Ok(self
            .links
            .iter()
            .filter(|link| &link.source == synset)
            .cloned()
            .collect())
    }

    fn statistics(&mut self) -> Result<StoreStatistics> {
        self.check_closed()?;
        Ok(StoreStatistics {
            tables: ["word", "sense", "synset", "synset_def", "synlink"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            words: self.words.len() as u64,
            senses: self.senses.len() as u64,
            synsets: self.synsets.len() as u64,
            definitions: self.definitions.len() as u64,
            links: self.links.len() as u64,
        })
    }
}
