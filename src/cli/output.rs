//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, WnjaArgs};
use crate::error::Result;
use crate::lexicon::types::StoreStatistics;
use crate::thesaurus::report::{ConceptLinks, ConceptMembers, SynonymLookup};

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &WnjaArgs) -> Result<()> {
    let text = render(result, args.output_format, args.pretty)?;
    print!("{text}");
    Ok(())
}

/// Render a result without printing it.
pub fn render<T: Serialize + HumanOutput>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json => {
            let mut json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            json.push('\n');
            Ok(json)
        }
    }
}

fn heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"═".repeat(title.chars().count()));
    out.push('\n');
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn with_name(synset: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{synset} ({name})"),
        None => synset.to_string(),
    }
}

impl HumanOutput for SynonymLookup {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let report = match self {
            SynonymLookup::NotFound { lemma } => {
                line(&mut out, &format!("'{lemma}' is not in the lexicon."));
                return out;
            }
            SynonymLookup::Found(report) => report,
        };

        heading(&mut out, &format!("Synonyms of '{}'", report.lemma));
        if report.has_multiple_matches() {
            let others: Vec<String> = report
                .unresolved_candidates()
                .iter()
                .map(|id| id.to_string())
                .collect();
            line(
                &mut out,
                &format!(
                    "Note: {} words share this lemma; showing word {} (not shown: {})",
                    report.match_count(),
                    report.word_id,
                    others.join(", ")
                ),
            );
        }

        for (i, concept) in report.concepts.iter().enumerate() {
            out.push('\n');
            line(
                &mut out,
                &format!(
                    "Concept {}: {}",
                    i + 1,
                    with_name(concept.synset.as_str(), concept.name.as_deref())
                ),
            );
            line(&mut out, "─────────────");
            for (j, def) in concept.definitions.iter().enumerate() {
                line(&mut out, &format!("  Definition {}: {}", j + 1, def));
            }
            for (j, word) in concept.synonyms.iter().enumerate() {
                line(&mut out, &format!("  Synonym {}: {}", j + 1, word.lemma));
            }
        }

        if report.concepts.is_empty() {
            line(&mut out, "No concepts recorded for this word.");
        }
        out
    }
}

impl HumanOutput for ConceptMembers {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(
            &mut out,
            &format!(
                "Members of {}",
                with_name(self.synset.as_str(), self.name.as_deref())
            ),
        );
        for word in &self.words {
            line(&mut out, &format!("{}\t{}\t{}", word.id, word.lang, word.lemma));
        }
        line(&mut out, &format!("Total words: {}", self.words.len()));
        out
    }
}

impl HumanOutput for ConceptLinks {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(
            &mut out,
            &format!(
                "Links of {}",
                with_name(self.synset.as_str(), self.name.as_deref())
            ),
        );
        for link in &self.links {
            line(
                &mut out,
                &format!(
                    "{}: {}",
                    link.kind,
                    with_name(link.target.as_str(), link.target_name.as_deref())
                ),
            );
        }
        line(&mut out, &format!("Total links: {}", self.links.len()));
        out
    }
}

impl HumanOutput for StoreStatistics {
    fn render_human(&self) -> String {
        let mut out = String::new();
        heading(&mut out, "Lexicon Statistics:");
        line(&mut out, &format!("Tables: {}", self.tables.join(", ")));
        line(&mut out, &format!("Words: {}", self.words));
        line(&mut out, &format!("Senses: {}", self.senses));
        line(&mut out, &format!("Concepts: {}", self.synsets));
        line(&mut out, &format!("Definitions: {}", self.definitions));
        line(&mut out, &format!("Links: {}", self.links));
        out
    }
}
