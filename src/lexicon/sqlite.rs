//! Read-only access to a WordNet SQLite database such as `wnjpn.db`.
//!
//! The driver is `sqlx`, which is async; the store owns a current-thread
//! Tokio runtime and blocks on each query so callers see a plain
//! synchronous API. Every query is parameterized.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tokio::runtime::{Builder, Runtime};

use crate::config::WnjaConfig;
use crate::error::{Result, WnjaError};
use crate::lexicon::traits::LexicalStore;
use crate::lexicon::types::{ConceptLink, LinkKind, StoreStatistics, SynsetId, Word, WordId};

const WORD_IDS_BY_LEMMA: &str = "SELECT wordid FROM word WHERE lemma = ?1";
const SYNSETS_OF_WORD: &str = "SELECT synset FROM sense WHERE wordid = ?1";
const SYNSET_NAMES: &str = "SELECT name FROM synset WHERE synset = ?1";
const DEFINITIONS: &str = "SELECT def FROM synset_def WHERE synset = ?1 AND lang = ?2";
const CO_MEMBERS: &str = "SELECT wordid FROM sense WHERE synset = ?1 AND wordid != ?2";
const WORDS_BY_ID: &str = "SELECT wordid, lemma, lang FROM word WHERE wordid = ?1";
const WORDS_IN_SYNSET: &str = "SELECT w.wordid, w.lemma, w.lang FROM sense s \
     JOIN word w ON w.wordid = s.wordid \
     WHERE s.synset = ?1 ORDER BY s.rowid";
const WORDS_IN_SYNSET_LANG: &str = "SELECT w.wordid, w.lemma, w.lang FROM sense s \
     JOIN word w ON w.wordid = s.wordid \
     WHERE s.synset = ?1 AND w.lang = ?2 ORDER BY s.rowid";
const LINKS_FROM: &str = "SELECT synset1, synset2, link FROM synlink WHERE synset1 = ?1";
const TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";
const COUNT_WORDS: &str = "SELECT COUNT(*) FROM word";
const COUNT_SENSES: &str = "SELECT COUNT(*) FROM sense";
const COUNT_SYNSETS: &str = "SELECT COUNT(*) FROM synset";
const COUNT_DEFINITIONS: &str = "SELECT COUNT(*) FROM synset_def";
const COUNT_LINKS: &str = "SELECT COUNT(*) FROM synlink";

/// A scoped, read-only connection to a WordNet SQLite file.
///
/// The connection is opened by [`SqliteLexicon::open`] and released by
/// [`SqliteLexicon::close`] or when the value is dropped.
pub struct SqliteLexicon {
    path: PathBuf,
    runtime: Runtime,
    conn: Option<SqliteConnection>,
}

impl SqliteLexicon {
    /// Open the database at `path` read-only.
    ///
    /// The file must already exist; it is never created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(WnjaError::store_unavailable(format!(
                "lexical database not found: {}",
                path.display()
            )));
        }

        let runtime = Builder::new_current_thread().enable_all().build()?;
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .read_only(true)
            .create_if_missing(false);
        let conn = runtime.block_on(options.connect()).map_err(|e| {
            WnjaError::store_unavailable(format!("failed to open '{}': {}", path.display(), e))
        })?;

        info!("Opened lexical database {}", path.display());
        Ok(SqliteLexicon {
            path,
            runtime,
            conn: Some(conn),
        })
    }

    /// Open the database named by a configuration.
    pub fn from_config(config: &WnjaConfig) -> Result<Self> {
        Self::open(config.require_database_path()?)
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection.
    pub fn close(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            self.runtime.block_on(conn.close())?;
            info!("Closed lexical database {}", self.path.display());
        }
        Ok(())
    }

    fn parts(&mut self) -> Result<(&Runtime, &mut SqliteConnection)> {
        match self.conn.as_mut() {
            Some(conn) => Ok((&self.runtime, conn)),
            None => Err(WnjaError::store_unavailable("connection is closed")),
        }
    }

    fn count(&mut self, query: &'static str) -> Result<u64> {
        let (runtime, conn) = self.parts()?;
        let count: i64 = runtime.block_on(sqlx::query_scalar(query).fetch_one(conn))?;
        Ok(count.max(0) as u64)
    }
}

impl fmt::Debug for SqliteLexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteLexicon")
            .field("path", &self.path)
            .field("open", &self.conn.is_some())
            .finish()
    }
}

impl Drop for SqliteLexicon {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("Failed to close {}: {}", self.path.display(), e);
        }
    }
}

impl LexicalStore for SqliteLexicon {
    fn word_ids_by_lemma(&mut self, lemma: &str) -> Result<Vec<WordId>> {
        debug!("word lookup: lemma={lemma}");
        let (runtime, conn) = self.parts()?;
        let ids: Vec<i64> = runtime.block_on(
            sqlx::query_scalar(WORD_IDS_BY_LEMMA)
                .bind(lemma)
                .fetch_all(conn),
        )?;
        Ok(ids.into_iter().map(WordId).collect())
    }

    fn synsets_of_word(&mut self, word_id: WordId) -> Result<Vec<SynsetId>> {
        debug!("sense lookup: wordid={word_id}");
        let (runtime, conn) = self.parts()?;
        let synsets: Vec<String> = runtime.block_on(
            sqlx::query_scalar(SYNSETS_OF_WORD)
                .bind(word_id.0)
                .fetch_all(conn),
        )?;
        Ok(synsets.into_iter().map(SynsetId).collect())
    }

    fn synset_names(&mut self, synset: &SynsetId) -> Result<Vec<String>> {
        let (runtime, conn) = self.parts()?;
        let names: Vec<Option<String>> = runtime.block_on(
            sqlx::query_scalar(SYNSET_NAMES)
                .bind(synset.as_str())
                .fetch_all(conn),
        )?;
        Ok(names.into_iter().flatten().collect())
    }

    fn definitions(&mut self, synset: &SynsetId, lang: &str) -> Result<Vec<String>> {
        let (runtime, conn) = self.parts()?;
        let defs: Vec<String> = runtime.block_on(
            sqlx::query_scalar(DEFINITIONS)
                .bind(synset.as_str())
                .bind(lang)
                .fetch_all(conn),
        )?;
        Ok(defs)
    }

    fn co_members(&mut self, synset: &SynsetId, exclude: WordId) -> Result<Vec<WordId>> {
        let (runtime, conn) = self.parts()?;
        let ids: Vec<i64> = runtime.block_on(
            sqlx::query_scalar(CO_MEMBERS)
                .bind(synset.as_str())
                .bind(exclude.0)
                .fetch_all(conn),
        )?;
        Ok(ids.into_iter().map(WordId).collect())
    }

    fn words_by_id(&mut self, word_id: WordId) -> Result<Vec<Word>> {
        let (runtime, conn) = self.parts()?;
        let rows: Vec<(i64, String, String)> = runtime.block_on(
            sqlx::query_as(WORDS_BY_ID)
                .bind(word_id.0)
                .fetch_all(conn),
        )?;
        Ok(rows
            .into_iter()
            .map(|(id, lemma, lang)| Word::new(id, lemma, lang))
            .collect())
    }

    fn words_in_synset(&mut self, synset: &SynsetId, lang: Option<&str>) -> Result<Vec<Word>> {
        let (runtime, conn) = self.parts()?;
        let rows: Vec<(i64, String, String)> = match lang {
            Some(lang) => runtime.block_on(
                sqlx::query_as(WORDS_IN_SYNSET_LANG)
                    .bind(synset.as_str())
                    .bind(lang)
                    .fetch_all(conn),
            )?,
            None => runtime.block_on(
                sqlx::query_as(WORDS_IN_SYNSET)
                    .bind(synset.as_str())
                    .fetch_all(conn),
            )?,
        };
        Ok(rows
            .into_iter()
            .map(|(id, lemma, lang)| Word::new(id, lemma, lang))
            .collect())
    }

    fn links_from(&mut self, synset: &SynsetId) -> Result<Vec<ConceptLink>> {
        let (runtime, conn) = self.parts()?;
        let rows: Vec<(String, String, String)> = runtime.block_on(
            sqlx::query_as(LINKS_FROM)
                .bind(synset.as_str())
                .fetch_all(conn),
        )?;
        Ok(rows
            .into_iter()
            .map(|(source, target, link)| ConceptLink {
                source: SynsetId(source),
                target: SynsetId(target),
                kind: LinkKind::from_code(&link),
            })
            .collect())
    }

    fn statistics(&mut self) -> Result<StoreStatistics> {
        let tables: Vec<String> = {
            let (runtime, conn) = self.parts()?;
            runtime.block_on(sqlx::query_scalar(TABLES).fetch_all(conn))?
        };

        Ok(StoreStatistics {
            tables,
            words: self.count(COUNT_WORDS)?,
            senses: self.count(COUNT_SENSES)?,
            synsets: self.count(COUNT_SYNSETS)?,
            definitions: self.count(COUNT_DEFINITIONS)?,
            links: self.count(COUNT_LINKS)?,
        })
    }
}
