//! Lexical store abstraction and its implementations.

pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use memory::MemoryLexicon;
pub use sqlite::SqliteLexicon;
pub use traits::LexicalStore;
pub use types::{ConceptLink, LinkKind, StoreStatistics, SynsetId, Word, WordId};
