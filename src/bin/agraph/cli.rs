use std::path::PathBuf;

use atom_graph::ElementSymbol;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "agraph",
    about = "Bond graph construction from atomic coordinate tables",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a graph artifact from an atom table (CSV → JSON)
    #[command(visible_alias = "b")]
    Build(BuildArgs),

    /// Open or rebuild a dataset directory (raw/atoms.csv → processed/graph.json)
    #[command(visible_alias = "d")]
    Dataset(DatasetArgs),
}

impl Command {
    pub fn output_options(&self) -> &OutputOptions {
        match self {
            Command::Build(args) => &args.output,
            Command::Dataset(args) => &args.output,
        }
    }
}

/// Terminal output options shared by all commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Suppress banner, progress, and summary output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug; RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Graph construction settings shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Graph Construction")]
pub struct GraphOptions {
    /// TOML file with `threshold` and `vocabulary` keys
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum bonding distance (inclusive; overrides the config file)
    #[arg(
        short,
        long,
        value_name = "DIST",
        allow_hyphen_values = true
    )]
    pub threshold: Option<f64>,

    /// Known element symbols in one-hot order, comma separated (e.g. N,O,C)
    #[arg(long, value_name = "SYMBOLS", value_delimiter = ',')]
    pub vocab: Option<Vec<ElementSymbol>>,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Input atom table (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output graph artifact (stdout if omitted)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub graph: GraphOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Dataset root containing raw/atoms.csv
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Rebuild even if a matching processed artifact exists
    #[arg(short, long)]
    pub force: bool,

    #[command(flatten)]
    pub graph: GraphOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
