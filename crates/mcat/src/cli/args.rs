//! Clap argument definitions for the `mcat` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use mcat_catalogue::MediaType;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mcat")]
#[command(about = "Media catalogue - search films, music and television with logic")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Shared explain/debug flag.
#[derive(Args, Debug, Clone, Default)]
pub struct ExplainArgs {
    /// Show the generated formula and conditions without searching
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `mcat search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search criteria, e.g. 'title contains Star & rating >= 4'
    pub query: String,

    /// Catalogue file [default: from configuration]
    #[arg(short = 'c', long)]
    pub catalogue: Option<PathBuf>,

    /// Maximum results to print, 0 for all [default: from configuration]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only search one type of media (film, "audio track", "tv programme")
    #[arg(short = 't', long = "type")]
    pub media_type: Option<MediaType>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,

    #[command(flatten)]
    /// Explain/debug flags.
    pub explain: ExplainArgs,
}

/// Arguments for `mcat remove`.
#[derive(Args, Debug, Clone)]
pub struct RemoveCommand {
    /// Search criteria selecting the records to remove
    pub query: String,

    /// Catalogue file [default: from configuration]
    #[arg(short = 'c', long)]
    pub catalogue: Option<PathBuf>,

    /// Only consider one type of media (film, "audio track", "tv programme")
    #[arg(short = 't', long = "type")]
    pub media_type: Option<MediaType>,

    /// Remove every match
    #[arg(long, conflicts_with = "index")]
    pub all: bool,

    /// Remove only the match with this number in the listing
    #[arg(short = 'i', long)]
    pub index: Option<usize>,
}

/// Arguments for `mcat table`.
#[derive(Args, Debug, Clone)]
pub struct TableCommand {
    /// Formula over variables A-Z, e.g. '(X → Y) v (Z → ¬X)'
    pub formula: String,
}

/// Arguments for `mcat init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.mcat.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `mcat` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalogue and print matching media
    #[command(after_help = "\
QUERY SYNTAX:
  field op value                 One condition
  cond & cond                    Both conditions (also &&, and, ^)
  cond | cond                    Either condition (also ||, or, v)
  cond <implies> cond            If the first holds, so must the second (also ->)
  cond <reverse_implies> cond    If the second holds, so must the first (also <-)
  field !op value                Negated condition

  Conditions combine left to right without precedence. Quote values containing
  spaces. Run 'mcat operators' for the full operator list.

FIELDS:
  type title rating releaseyear duration studio director
  artist recordlabel series episode channel

EXAMPLES:
  mcat search 'type = film & duration > 2h'
  mcat search 'director = \"Michael Mann\" | artist contains Attack'
  mcat search 'title matches \"Star.*\" & rating >= 4'
  mcat search --explain 'type = film <implies> rating = 5'")]
    Search(SearchCommand),

    /// Remove matching media from the catalogue
    #[command(after_help = "\
A single match is removed directly. When several records match, they are listed
with numbers; rerun with --index N to remove one of them or --all to remove all.

EXAMPLES:
  mcat remove 'title = Heat'
  mcat remove 'director = \"Michael Mann\"' --all
  mcat remove 'rating < 2' --type film --index 1")]
    Remove(RemoveCommand),

    /// Print the truth table of a formula
    Table(TableCommand),

    /// List search operators and connectives
    Operators,

    /// Initialize mcat configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

impl Commands {
    /// Whether the command reads `.mcat.toml`.
    ///
    /// Commands that don't must keep working when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        matches!(
            self,
            Self::Search(_) | Self::Remove(_) | Self::Config | Self::Check
        )
    }
}

/// Parses CLI arguments, printing condensed help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help listing every subcommand on one line.
fn print_command_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: mcat [-v...] <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -v, --verbose  Increase log verbosity");
    println!("  -h, --help     Print help");
}
