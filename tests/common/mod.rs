//! Builds small WordNet-shaped SQLite databases for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

/// Table layout of `wnjpn.db`.
pub const SCHEMA: &[&str] = &[
    "CREATE TABLE word (wordid INTEGER PRIMARY KEY, lang TEXT, lemma TEXT, pron TEXT, pos TEXT)",
    "CREATE TABLE sense (synset TEXT, wordid INTEGER, lang TEXT, rank TEXT, lexid INTEGER, freq INTEGER, src TEXT)",
    "CREATE TABLE synset (synset TEXT, pos TEXT, name TEXT, src TEXT)",
    "CREATE TABLE synset_def (synset TEXT, lang TEXT, def TEXT, sid TEXT)",
    "CREATE TABLE synlink (synset1 TEXT, synset2 TEXT, link TEXT, src TEXT)",
];

/// The ネコ/猫 store plus a few extra rows.
pub const CAT_ROWS: &[&str] = &[
    "INSERT INTO word (wordid, lang, lemma, pos) VALUES (1, 'jpn', 'ネコ', 'n')",
    "INSERT INTO word (wordid, lang, lemma, pos) VALUES (2, 'jpn', '猫', 'n')",
    "INSERT INTO sense (synset, wordid, lang) VALUES ('02121620-n', 1, 'jpn')",
    "INSERT INTO sense (synset, wordid, lang) VALUES ('02121620-n', 2, 'jpn')",
    "INSERT INTO synset_def (synset, lang, def, sid) VALUES ('02121620-n', 'jpn', 'small domesticated carnivorous mammal', '0')",
];

/// A database file living in its own temporary directory.
pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

/// Create a database with the given statements applied in order.
pub fn build_database(statements: &[&str]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wnjpn.db");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(async {
        let mut conn = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();
        for statement in statements {
            sqlx::query(statement).execute(&mut conn).await.unwrap();
        }
        conn.close().await.unwrap();
    });

    Fixture { dir, path }
}

/// Create a full WordNet-shaped database holding `rows`.
pub fn build_lexicon(rows: &[&str]) -> Fixture {
    let statements: Vec<&str> = SCHEMA.iter().chain(rows.iter()).copied().collect();
    build_database(&statements)
}

/// Create a file that is not a SQLite database.
pub fn build_garbage_file() -> Fixture {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wnjpn.db");
    fs::write(&path, vec![b'x'; 4096]).unwrap();
    Fixture { dir, path }
}
