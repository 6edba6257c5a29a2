use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "rnadesign - design RNA sequences that satisfy a dot-bracket secondary structure.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for batch design.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Design one or more sequences for a dot-bracket structure.
    Design(DesignArgs),
    /// Report GC content, pairing, and pair energy for a sequence/structure pair.
    Info(InfoArgs),
    /// Check a dot-bracket structure and list every problem found.
    Check(CheckArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

/// Where the dot-bracket structure comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct StructureSource {
    /// Dot-bracket structure, e.g. '((.....))'.
    #[arg(short, long, value_name = "PATTERN")]
    pub structure: Option<String>,

    /// Read the structure from the first non-empty line of a file.
    #[arg(long, value_name = "PATH")]
    pub structure_file: Option<PathBuf>,
}

/// Arguments for the `design` subcommand.
#[derive(Args, Debug)]
pub struct DesignArgs {
    #[command(flatten)]
    pub source: StructureSource,

    /// Declared sequence length; must match the structure. Defaults to the structure length.
    #[arg(short = 'n', long, value_name = "INT")]
    pub length: Option<usize>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Preference Overrides ---
    /// Weight of G–C pairs relative to A–U pairs (e.g. 2.0 for 2:1).
    #[arg(short = 'g', long, value_name = "FLOAT", conflicts_with = "beta")]
    pub gc_preference: Option<f64>,

    /// Derive the pair preference from nominal pair energies with this Boltzmann beta (mol/kcal).
    #[arg(long, value_name = "FLOAT")]
    pub beta: Option<f64>,

    // --- Sampling Overrides ---
    /// Seed for reproducible designs. Design k of a batch uses SEED + k.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Number of independent designs to generate.
    #[arg(short = 'k', long, value_name = "INT")]
    pub count: Option<usize>,

    // --- Output ---
    /// Sort designs from most to least stable nominal pair energy.
    #[arg(long)]
    pub rank: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S design.count=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// RNA sequence over A, C, G, U.
    #[arg(long, required = true, value_name = "SEQ")]
    pub sequence: String,

    #[command(flatten)]
    pub source: StructureSource,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: StructureSource,
}
