use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::*;

pub const HYPHEN: &str = "-";

/// The CLI interface for the nybble application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: NybbleCommand,

    #[clap(flatten)]
    pub verbosity: Verbosity,
}

/// The top-level commands supported by nybble.
#[derive(Debug, Subcommand)]
pub enum NybbleCommand {
    Read(read::Read),
    Decode(decode::Decode),
}

impl Command for NybbleCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Read(read) => read.handle(),
            Self::Decode(decode) => decode.handle(),
        }
    }
}
