//! # wnja
//!
//! Synonym lookup over the Japanese WordNet (`wnjpn.db`).
//!
//! ## Features
//!
//! - Exact lemma to concept resolution with definitions and synonyms
//! - Concept members and taxonomy links (hypernyms, hyponyms, ...)
//! - Read-only, parameterized access to the SQLite database
//! - Pluggable store backends, including an in-memory store for tests
//!
//! ```no_run
//! use wnja::lexicon::SqliteLexicon;
//! use wnja::thesaurus::SynonymResolver;
//!
//! fn main() -> wnja::error::Result<()> {
//!     let lexicon = SqliteLexicon::open("wordnet/wnjpn.db")?;
//!     let mut resolver = SynonymResolver::new(lexicon);
//!     for concept in resolver.find_synonyms("ネコ", "jpn")?.concepts() {
//!         for word in &concept.synonyms {
//!             println!("{}: {}", concept.synset, word.lemma);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod thesaurus;

pub mod prelude {
    pub use crate::config::WnjaConfig;
    pub use crate::error::{Result, WnjaError};
    pub use crate::lexicon::{LexicalStore, MemoryLexicon, SqliteLexicon, SynsetId, Word, WordId};
    pub use crate::thesaurus::{ConceptExplorer, SynonymLookup, SynonymReport, SynonymResolver};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
