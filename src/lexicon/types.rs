//! Entities of the WordNet lexical store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a row in the `word` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub i64);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a concept, e.g. `02121620-n`.
///
/// The trailing letter is the part of speech (`n`, `v`, `a`, `r`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynsetId(pub String);

impl SynsetId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        SynsetId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part-of-speech suffix of the identifier, if it has one.
    pub fn part_of_speech(&self) -> Option<char> {
        let (_, pos) = self.0.rsplit_once('-')?;
        let mut chars = pos.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SynsetId {
    fn from(id: &str) -> Self {
        SynsetId(id.to_string())
    }
}

/// A lemma in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub lemma: String,
    pub lang: String,
}

impl Word {
    pub fn new<L: Into<String>, G: Into<String>>(id: i64, lemma: L, lang: G) -> Self {
        Word {
            id: WordId(id),
            lemma: lemma.into(),
            lang: lang.into(),
        }
    }
}

/// Relation kinds stored in the `synlink.link` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Hypernym,
    Hyponym,
    InstanceHypernym,
    InstanceHyponym,
    Meronym,
    Holonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    Attribute,
    SimilarTo,
    Entails,
    Causes,
    SeeAlso,
    DomainCategory,
    DomainUsage,
    DomainRegion,
    InDomainCategory,
    InDomainUsage,
    InDomainRegion,
    Antonym,
    /// A code this crate does not know about, kept verbatim.
    Other(String),
}

impl LinkKind {
    /// Decode a `synlink.link` code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "hype" => LinkKind::Hypernym,
            "hypo" => LinkKind::Hyponym,
            "inst" => LinkKind::InstanceHypernym,
            "hasi" => LinkKind::InstanceHyponym,
            "mero" => LinkKind::Meronym,
            "holo" => LinkKind::Holonym,
            "mmem" => LinkKind::MemberMeronym,
            "msub" => LinkKind::SubstanceMeronym,
            "mprt" => LinkKind::PartMeronym,
            "hmem" => LinkKind::MemberHolonym,
            "hsub" => LinkKind::SubstanceHolonym,
            "hprt" => LinkKind::PartHolonym,
            "attr" => LinkKind::Attribute,
            "sim" => LinkKind::SimilarTo,
            "enta" => LinkKind::Entails,
            "caus" => LinkKind::Causes,
            "also" => LinkKind::SeeAlso,
            "dmnc" => LinkKind::DomainCategory,
            "dmnu" => LinkKind::DomainUsage,
            "dmnr" => LinkKind::DomainRegion,
            "dmtc" => LinkKind::InDomainCategory,
            "dmtu" => LinkKind::InDomainUsage,
            "dmtr" => LinkKind::InDomainRegion,
            "ants" => LinkKind::Antonym,
            other => LinkKind::Other(other.to_string()),
        }
    }

    /// The code as stored in the database.
    pub fn code(&self) -> &str {
        match self {
            LinkKind::Hypernym => "hype",
            LinkKind::Hyponym => "hypo",
            LinkKind::InstanceHypernym => "inst",
            LinkKind::InstanceHyponym => "hasi",
            LinkKind::Meronym => "mero",
            LinkKind::Holonym => "holo",
            LinkKind::MemberMeronym => "mmem",
            LinkKind::SubstanceMeronym => "msub",
            LinkKind::PartMeronym => "mprt",
            LinkKind::MemberHolonym => "hmem",
            LinkKind::SubstanceHolonym => "hsub",
            LinkKind::PartHolonym => "hprt",
            LinkKind::Attribute => "attr",
            LinkKind::SimilarTo => "sim",
            LinkKind::Entails => "enta",
            LinkKind::Causes => "caus",
            LinkKind::SeeAlso => "also",
            LinkKind::DomainCategory => "dmnc",
            LinkKind::DomainUsage => "dmnu",
            LinkKind::DomainRegion => "dmnr",
            LinkKind::InDomainCategory => "dmtc",
            LinkKind::InDomainUsage => "dmtu",
            LinkKind::InDomainRegion => "dmtr",
            LinkKind::Antonym => "ants",
            LinkKind::Other(code) => code,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            LinkKind::Hypernym => "hypernym",
            LinkKind::Hyponym => "hyponym",
            LinkKind::InstanceHypernym => "instance hypernym",
            LinkKind::InstanceHyponym => "instance hyponym",
            LinkKind::Meronym => "meronym",
            LinkKind::Holonym => "holonym",
            LinkKind::MemberMeronym => "member meronym",
            LinkKind::SubstanceMeronym => "substance meronym",
            LinkKind::PartMeronym => "part meronym",
            LinkKind::MemberHolonym => "member holonym",
            LinkKind::SubstanceHolonym => "substance holonym",
            LinkKind::PartHolonym => "part holonym",
            LinkKind::Attribute => "attribute",
            LinkKind::SimilarTo => "similar to",
            LinkKind::Entails => "entails",
            LinkKind::Causes => "causes",
            LinkKind::SeeAlso => "see also",
            LinkKind::DomainCategory => "domain (category)",
            LinkKind::DomainUsage => "domain (usage)",
            LinkKind::DomainRegion => "domain (region)",
            LinkKind::InDomainCategory => "in domain (category)",
            LinkKind::InDomainUsage => "in domain (usage)",
            LinkKind::InDomainRegion => "in domain (region)",
            LinkKind::Antonym => "antonym",
            LinkKind::Other(code) => code,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A directed relation between two concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptLink {
    pub source: SynsetId,
    pub target: SynsetId,
    pub kind: LinkKind,
}

/// Row counts and table names of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatistics {
    pub tables: Vec<String>,
    pub words: u64,
    pub senses: u64,
    pub synsets: u64,
    pub definitions: u64,
    pub links: u64,
}
