use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;

pub const HYPHEN: &str = "-";

/// The CLI interface for the ottdadmin application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: OttdAdminCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

/// The top-level commands supported by ottdadmin.
#[derive(Debug, Subcommand)]
pub enum OttdAdminCommand {
    Date(date::Date),
    Snake(snake::Snake),
    Transcode(transcode::Transcode),
}

impl Command for OttdAdminCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Date(date) => date.handle(),
            Self::Snake(snake) => snake.handle(),
            Self::Transcode(transcode) => transcode.handle(),
        }
    }
}
