//! Command implementations for the wnja CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::WnjaConfig;
use crate::error::Result;
use crate::lexicon::{SqliteLexicon, SynsetId};
use crate::thesaurus::{ConceptExplorer, SynonymResolver};

/// Execute a CLI command.
pub fn execute_command(args: WnjaArgs) -> Result<()> {
    match &args.command {
        Command::Synonyms(synonyms_args) => find_synonyms(synonyms_args, &args),
        Command::Members(members_args) => list_members(members_args, &args),
        Command::Links(links_args) => list_links(links_args, &args),
        Command::Stats => show_stats(&args),
    }
}

/// Build the effective configuration: flag or env var, then config file,
/// then defaults.
pub fn load_config(cli_args: &WnjaArgs, lang: Option<String>) -> Result<WnjaConfig> {
    let base = match &cli_args.config {
        Some(path) => WnjaConfig::load_from_file(path)?,
        None => WnjaConfig::default(),
    };
    let config = base.merge(cli_args.database.clone(), lang);
    config.validate()?;
    Ok(config)
}

fn open_lexicon(config: &WnjaConfig) -> Result<SqliteLexicon> {
    info!("Opening lexicon: {}", config.require_database_path()?.display());
    SqliteLexicon::from_config(config)
}

/// Look up the synonyms of a lemma.
fn find_synonyms(args: &SynonymsArgs, cli_args: &WnjaArgs) -> Result<()> {
    let config = load_config(cli_args, args.lang.clone())?;
    let mut resolver = SynonymResolver::new(open_lexicon(&config)?);

    let lookup = resolver.find_synonyms(&args.lemma, &config.language)?;
    resolver.into_store().close()?;

    output_result(&lookup, cli_args)
}

/// List the words of a concept.
fn list_members(args: &MembersArgs, cli_args: &WnjaArgs) -> Result<()> {
    let config = load_config(cli_args, args.lang.clone())?;
    let mut explorer = ConceptExplorer::new(open_lexicon(&config)?);

    let lang = if args.all_languages {
        None
    } else {
        Some(config.language.as_str())
    };
    let members = explorer.concept_members(&SynsetId::new(args.synset.as_str()), lang)?;
    explorer.into_store().close()?;

    output_result(&members, cli_args)
}

/// List the outgoing links of a concept.
fn list_links(args: &LinksArgs, cli_args: &WnjaArgs) -> Result<()> {
    let config = load_config(cli_args, None)?;
    let mut explorer = ConceptExplorer::new(open_lexicon(&config)?);

    let links = explorer.concept_links(&SynsetId::new(args.synset.as_str()))?;
    explorer.into_store().close()?;

    output_result(&links, cli_args)
}

/// Show table names and row counts.
fn show_stats(cli_args: &WnjaArgs) -> Result<()> {
    let config = load_config(cli_args, None)?;
    let mut explorer = ConceptExplorer::new(open_lexicon(&config)?);

    let stats = explorer.statistics()?;
    explorer.into_store().close()?;

    output_result(&stats, cli_args)
}
