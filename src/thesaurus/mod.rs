//! Synonym resolution and concept browsing over a lexical store.

pub mod explorer;
pub mod report;
pub mod resolver;

pub use explorer::ConceptExplorer;
pub use report::{
    ConceptLinks, ConceptMembers, ConceptReport, LinkedConcept, SynonymLookup, SynonymReport,
};
pub use resolver::SynonymResolver;
