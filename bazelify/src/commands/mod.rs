mod bake;
mod check;
mod completions;
mod info;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use info::InfoCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for bazelify_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "bazelify")]
#[command(version)]
#[command(about = "Generate Bazel BUILD files from a module graph")]
pub(crate) struct Cli {
    /// Log conversion decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Bazel workspace files from bazelify.toml
    Bake(BakeCommand),

    /// Validate bazelify.toml without generating files
    Check(CheckCommand),

    /// Show what a conversion would produce
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
