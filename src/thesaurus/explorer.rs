//! Concept-level browsing: members, taxonomy links and store statistics.

use log::debug;

use crate::error::Result;
use crate::lexicon::traits::LexicalStore;
use crate::lexicon::types::{StoreStatistics, SynsetId};
use crate::thesaurus::report::{ConceptLinks, ConceptMembers, LinkedConcept};

/// Read-only browsing of concepts in a lexical store.
#[derive(Debug)]
pub struct ConceptExplorer<S: LexicalStore> {
    store: S,
}

impl<S: LexicalStore> ConceptExplorer<S> {
    pub fn new(store: S) -> Self {
        ConceptExplorer { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Words in `synset`, restricted to `lang` when given.
    pub fn concept_members(&mut self, synset: &SynsetId, lang: Option<&str>) -> Result<ConceptMembers> {
        let name = self.store.synset_names(synset)?.into_iter().next();
        let words = self.store.words_in_synset(synset, lang)?;
        debug!("{synset}: {} members", words.len());

        Ok(ConceptMembers {
            synset: synset.clone(),
            name,
            lang: lang.map(str::to_string),
            words,
        })
    }

    /// Outgoing links of `synset`, each with the target's name.
    pub fn concept_links(&mut self, synset: &SynsetId) -> Result<ConceptLinks> {
        let name = self.store.synset_names(synset)?.into_iter().next();

        let mut links = Vec::new();
        for link in self.store.links_from(synset)? {
            let target_name = self.store.synset_names(&link.target)?.into_iter().next();
            links.push(LinkedConcept {
                kind: link.kind,
                target: link.target,
                target_name,
            });
        }

        Ok(ConceptLinks {
            synset: synset.clone(),
            name,
            links,
        })
    }

    pub fn statistics(&mut self) -> Result<StoreStatistics> {
        self.store.statistics()
    }
}
