//! Lemma to synonym-network resolution.

use log::{debug, warn};

use crate::error::Result;
use crate::lexicon::traits::LexicalStore;
use crate::lexicon::types::{SynsetId, WordId};
use crate::thesaurus::report::{ConceptReport, SynonymLookup, SynonymReport};

/// Resolves a lemma to the concepts it belongs to and the other words in
/// each concept.
///
/// The resolver owns the store handle it is given and keeps no other
/// state: every call re-reads the store.
///
/// # Examples
///
/// ```
/// use wnja::lexicon::MemoryLexicon;
/// use wnja::thesaurus::SynonymResolver;
///
/// let mut lexicon = MemoryLexicon::new();
/// lexicon
///     .add_word(1, "ネコ", "jpn")
///     .add_word(2, "猫", "jpn")
///     .add_sense("02121620-n", 1)
///     .add_sense("02121620-n", 2);
///
/// let mut resolver = SynonymResolver::new(lexicon);
/// let lookup = resolver.find_synonyms("ネコ", "jpn").unwrap();
/// assert_eq!(lookup.concepts()[0].synonyms[0].lemma, "猫");
/// ```
#[derive(Debug)]
pub struct SynonymResolver<S: LexicalStore> {
    store: S,
}

impl<S: LexicalStore> SynonymResolver<S> {
    pub fn new(store: S) -> Self {
        SynonymResolver { store }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give the store back to the caller.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Look up the synonym network of `lemma`.
    ///
    /// The lemma is matched exactly. When several words share it, the first
    /// in store order is resolved and the rest are listed in
    /// [`SynonymReport::candidates`]. Definitions are restricted to `lang`;
    /// synonyms are not.
    pub fn find_synonyms(&mut self, lemma: &str, lang: &str) -> Result<SynonymLookup> {
        let candidates = self.store.word_ids_by_lemma(lemma)?;
        let Some(&word_id) = candidates.first() else {
            debug!("'{lemma}' is not in the lexicon");
            return Ok(SynonymLookup::NotFound {
                lemma: lemma.to_string(),
            });
        };

        if candidates.len() > 1 {
            warn!(
                "'{lemma}' matches {} words; resolving word {word_id} only",
                candidates.len()
            );
        }

        let synsets = self.store.synsets_of_word(word_id)?;
        debug!("word {word_id} belongs to {} concepts", synsets.len());

        let mut concepts = Vec::with_capacity(synsets.len());
        for synset in synsets {
            concepts.push(self.concept_report(synset, word_id, lang)?);
        }

        Ok(SynonymLookup::Found(SynonymReport {
            lemma: lemma.to_string(),
            lang: lang.to_string(),
            word_id,
            candidates,
            concepts,
        }))
    }

    fn concept_report(&mut self, synset: SynsetId, word_id: WordId, lang: &str) -> Result<ConceptReport> {
        let name = self.store.synset_names(&synset)?.into_iter().next();
        let definitions = self.store.definitions(&synset, lang)?;

        let mut synonyms = Vec::new();
        for other in self.store.co_members(&synset, word_id)? {
            synonyms.extend(self.store.words_by_id(other)?);
        }

        Ok(ConceptReport {
            synset,
            name,
            definitions,
            synonyms,
        })
    }
}
