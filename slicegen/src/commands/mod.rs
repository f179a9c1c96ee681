mod check;
mod completions;
mod generate;
mod init;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for slicegen_config::Result<T> {
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
#[command(name = "slicegen")]
#[command(version)]
#[command(about = "Generate CRUD vertical slices from JSON entity definitions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CRUD vertical slice from an entity config
    Generate(GenerateCommand),

    /// Validate an entity config without generating code
    Check(CheckCommand),

    /// List entity configs in the config directory
    List(ListCommand),

    /// Create a starter entity config
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
