/// NBT command-line tool: print and check uncompressed NBT files.
///
/// # Command overview
///
/// ```text
/// nbt <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Pretty-print the decoded tree of an NBT file
///   validate   Check an NBT file for structural correctness
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging (RUST_LOG overrides)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                 |
/// |------|-----------------------------------------|
/// | 0    | Success                                 |
/// | 1    | Error (I/O failure, invalid file, etc.) |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Inspect and validate NBT (named binary tag) files.
///
/// Input must already be decompressed; gzip'd files (such as `level.dat`)
/// need a `gunzip` first.
#[derive(Parser)]
#[command(name = "nbt", version, about = "NBT inspection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print the decoded tree of an NBT file.
    Inspect(InspectArgs),
    /// Check an NBT file for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `nbt inspect`.
///
/// ```text
/// ┌─────────────┬──────────────────────────────────────────────────────┐
/// │ Flag        │ Effect                                               │
/// ├─────────────┼──────────────────────────────────────────────────────┤
/// │ --compound  │ Wrap the root in a one-entry compound keyed by name  │
/// │ --indent N  │ Spaces per nesting level (default 2)                 │
/// │ --preview N │ String bytes shown before truncation (default 50)    │
/// └─────────────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the NBT file to inspect.
    pub file: PathBuf,

    /// Decode the root as a compound keyed by its name.
    #[arg(long)]
    pub compound: bool,

    /// Spaces of indentation per nesting level.
    #[arg(long, default_value_t = nbt_render::config::DEFAULT_INDENT_WIDTH)]
    pub indent: usize,

    /// Bytes of each string shown before the remainder is summarised.
    #[arg(long, default_value_t = nbt_render::config::DEFAULT_STRING_PREVIEW)]
    pub preview: usize,
}

/// Arguments for `nbt validate`.
///
/// Attempts a full decode of the file and reports either a set of success
/// checkmarks or a diagnostic error.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the NBT file to validate.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
