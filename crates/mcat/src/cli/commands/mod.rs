//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod operators;
pub mod remove;
pub mod search;
pub mod table;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Remove(cmd) => remove::run(ctx, &cmd),
        Commands::Table(cmd) => table::run(&cmd),
        Commands::Operators => operators::run(),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
