//! Concept browsing and statistics against a real SQLite database.

mod common;

use common::{SCHEMA, build_lexicon};
use wnja::lexicon::LinkKind;
use wnja::prelude::*;

const TAXONOMY_ROWS: &[&str] = &[
    "INSERT INTO word (wordid, lang, lemma) VALUES (1, 'jpn', 'サイン')",
    "INSERT INTO word (wordid, lang, lemma) VALUES (2, 'eng', 'sign')",
    "INSERT INTO word (wordid, lang, lemma) VALUES (3, 'jpn', '兆候')",
    "INSERT INTO word (wordid, lang, lemma) VALUES (4, 'jpn', 'コミュニケーション')",
    "INSERT INTO sense (synset, wordid) VALUES ('07125096-n', 3)",
    "INSERT INTO sense (synset, wordid) VALUES ('07125096-n', 2)",
    "INSERT INTO sense (synset, wordid) VALUES ('07125096-n', 1)",
    "INSERT INTO sense (synset, wordid) VALUES ('07128527-n', 4)",
    "INSERT INTO synset (synset, pos, name) VALUES ('07125096-n', 'n', 'sign')",
    "INSERT INTO synset (synset, pos, name) VALUES ('07128527-n', 'n', 'communication')",
    "INSERT INTO synlink (synset1, synset2, link) VALUES ('07125096-n', '07128527-n', 'hype')",
    "INSERT INTO synlink (synset1, synset2, link) VALUES ('07128527-n', '07125096-n', 'hypo')",
    "INSERT INTO synlink (synset1, synset2, link) VALUES ('07125096-n', '00000001-n', 'also')",
];

fn explorer_for(fixture: &common::Fixture) -> ConceptExplorer<SqliteLexicon> {
    ConceptExplorer::new(SqliteLexicon::open(&fixture.path).unwrap())
}

#[test]
fn test_concept_members_in_sense_order() -> Result<()> {
    let fixture = build_lexicon(TAXONOMY_ROWS);
    let mut explorer = explorer_for(&fixture);
    let synset = SynsetId::from("07125096-n");

    let members = explorer.concept_members(&synset, Some("jpn"))?;
    assert_eq!(members.name.as_deref(), Some("sign"));
    let lemmas: Vec<&str> = members.words.iter().map(|w| w.lemma.as_str()).collect();
    assert_eq!(lemmas, vec!["兆候", "サイン"]);

    let members = explorer.concept_members(&synset, None)?;
    let ids: Vec<i64> = members.words.iter().map(|w| w.id.0).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    explorer.into_store().close()
}

#[test]
fn test_concept_links_with_target_names() -> Result<()> {
    let fixture = build_lexicon(TAXONOMY_ROWS);
    let mut explorer = explorer_for(&fixture);

    let links = explorer.concept_links(&SynsetId::from("07125096-n"))?;
    assert_eq!(links.name.as_deref(), Some("sign"));
    assert_eq!(links.links.len(), 2);

    assert_eq!(links.links[0].kind, LinkKind::Hypernym);
    assert_eq!(links.links[0].target, SynsetId::from("07128527-n"));
    assert_eq!(links.links[0].target_name.as_deref(), Some("communication"));

    assert_eq!(links.links[1].kind, LinkKind::SeeAlso);
    assert_eq!(links.links[1].target_name, None);

    let reverse = explorer.concept_links(&SynsetId::from("07128527-n"))?;
    assert_eq!(reverse.links[0].kind, LinkKind::Hyponym);
    Ok(())
}

#[test]
fn test_statistics() -> Result<()> {
    let fixture = build_lexicon(TAXONOMY_ROWS);
    let mut explorer = explorer_for(&fixture);

    let stats = explorer.statistics()?;
    assert_eq!(stats.words, 4);
    assert_eq!(stats.senses, 4);
    assert_eq!(stats.synsets, 2);
    assert_eq!(stats.definitions, 0);
    assert_eq!(stats.links, 3);
    assert_eq!(stats.tables.len(), SCHEMA.len());
    assert!(stats.tables.iter().any(|t| t == "synlink"));
    Ok(())
}

#[test]
fn test_dropping_open_store_releases_connection() -> Result<()> {
    let fixture = build_lexicon(TAXONOMY_ROWS);
    {
        let mut explorer = explorer_for(&fixture);
        explorer.statistics()?;
    }
    // Reopening after an implicit close works and sees the same data.
    let mut explorer = explorer_for(&fixture);
    assert_eq!(explorer.statistics()?.words, 4);
    Ok(())
}
