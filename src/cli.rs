use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Privacy UI pattern catalog browser - validate, filter and inspect a catalog document
///
/// Examples:
///   # Check a catalog document
///   privcat validate catalog.json
///
///   # Patterns carrying both GDPR expectations (AND)
///   privcat filter catalog.json --gdpr GDPR-A12-Plain-Language-Notice --gdpr GDPR-A7-Consent-Visually-Distinct
///
///   # Free-text search combined with a heuristic
///   privcat filter catalog.json --search consent --heuristic "User control and freedom"
///
///   # Pattern detail page
///   privcat show catalog.json consent-toggle
///
///   # Browse GDPR tags grouped by article
///   privcat tags catalog.json
#[derive(Parser, Debug)]
#[command(name = "privcat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Every --gdpr, --ui and --heuristic value is required (AND)\n  \
    - Different facets are combined with AND\n  \
    - --search is a case-insensitive substring match over the pattern text\n\n\
Ordering:\n  \
    - Patterns are listed by their catalog sort order\n  \
    - Examples are listed in catalog order, each once")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Treat references to unknown patterns/examples as validation errors
    #[arg(long, global = true)]
    pub strict_references: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a catalog document and print a summary
    Validate {
        /// Path to the catalog JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List patterns and examples matching the given filters
    Filter {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a pattern with its GDPR basis, pitfalls and examples
    Show {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pattern slug, e.g. "consent-toggle"
        #[arg(value_name = "SLUG")]
        slug: String,
    },

    /// Show an example and the patterns it illustrates
    Example {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Example id, e.g. "ex-001"
        #[arg(value_name = "ID")]
        id: String,
    },

    /// List GDPR tags grouped by article with pattern counts
    Tags {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Required GDPR tag (can be specified multiple times)
    #[arg(short, long = "gdpr", value_name = "TAG")]
    pub gdpr_tags: Vec<String>,

    /// Required UI evidence tag (can be specified multiple times)
    #[arg(short, long = "ui", value_name = "TAG")]
    pub ui_evidence_tags: Vec<String>,

    /// Required heuristic consideration (can be specified multiple times)
    #[arg(short = 'H', long = "heuristic", value_name = "TEXT")]
    pub heuristics: Vec<String>,

    /// Generic facet filter (format: gdpr=TAG, ui=TAG or heuristic=TEXT)
    #[arg(short, long = "facet", value_name = "KEY=VALUE")]
    pub facets: Vec<String>,

    /// Free-text search over pattern descriptions
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,
}
