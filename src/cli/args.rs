//! Command line argument parsing for the wnja CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DATABASE_ENV;

/// wnja - look up synonyms in the Japanese WordNet
#[derive(Parser, Debug, Clone)]
#[command(name = "wnja")]
#[command(about = "Look up synonyms and concepts in the Japanese WordNet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WnjaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Path to the WordNet SQLite database (e.g. wnjpn.db)
    #[arg(long = "db", value_name = "DB_PATH", env = DATABASE_ENV)]
    pub database: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WnjaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the synonyms of a lemma
    Synonyms(SynonymsArgs),

    /// List the words of a concept
    Members(MembersArgs),

    /// List the taxonomy links of a concept
    Links(LinksArgs),

    /// Show table names and row counts
    Stats,
}

/// Arguments for synonym lookup
#[derive(Parser, Debug, Clone)]
pub struct SynonymsArgs {
    /// Lemma to look up, matched exactly
    #[arg(value_name = "LEMMA")]
    pub lemma: String,

    /// Language of the definitions (default: from config, then "jpn")
    #[arg(short, long)]
    pub lang: Option<String>,
}

/// Arguments for listing concept members
#[derive(Parser, Debug, Clone)]
pub struct MembersArgs {
    /// Concept identifier, e.g. 02121620-n
    #[arg(value_name = "SYNSET")]
    pub synset: String,

    /// Only list words in this language (default: from config, then "jpn")
    #[arg(short, long)]
    pub lang: Option<String>,

    /// List words in every language
    #[arg(long, conflicts_with = "lang")]
    pub all_languages: bool,
}

/// Arguments for listing concept links
#[derive(Parser, Debug, Clone)]
pub struct LinksArgs {
    /// Concept identifier, e.g. 07125096-n
    #[arg(value_name = "SYNSET")]
    pub synset: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_synonyms_command() {
        let args = WnjaArgs::try_parse_from([
            "wnja",
            "--db",
            "wordnet/wnjpn.db",
            "synonyms",
            "ネコ",
            "--lang",
            "eng",
        ])
        .unwrap();

        assert_eq!(args.database, Some(PathBuf::from("wordnet/wnjpn.db")));
        if let Command::Synonyms(synonyms_args) = args.command {
            assert_eq!(synonyms_args.lemma, "ネコ");
            assert_eq!(synonyms_args.lang.as_deref(), Some("eng"));
        } else {
            panic!("Expected Synonyms command");
        }
    }

    #[test]
    fn test_members_command() {
        let args =
            WnjaArgs::try_parse_from(["wnja", "members", "00001740-n", "--all-languages"]).unwrap();

        if let Command::Members(members_args) = args.command {
            assert_eq!(members_args.synset, "00001740-n");
            assert!(members_args.all_languages);
            assert!(members_args.lang.is_none());
        } else {
            panic!("Expected Members command");
        }
    }

    #[test]
    fn test_members_language_flags_conflict() {
        let result = WnjaArgs::try_parse_from([
            "wnja",
            "members",
            "00001740-n",
            "--lang",
            "jpn",
            "--all-languages",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = WnjaArgs::try_parse_from(["wnja", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = WnjaArgs::try_parse_from(["wnja", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = WnjaArgs::try_parse_from(["wnja", "-vvv", "--quiet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            WnjaArgs::try_parse_from(["wnja", "--format", "json", "--pretty", "links", "07125096-n"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert!(matches!(args.command, Command::Links(_)));
    }

    #[test]
    fn test_missing_lemma_is_rejected() {
        assert!(WnjaArgs::try_parse_from(["wnja", "synonyms"]).is_err());
    }
}
