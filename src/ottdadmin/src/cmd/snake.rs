use clap::Args;
use ottdadmin_utils::case::camel_to_snake;

use super::Command;

/// Subcommand for converting camelCase names to snake_case.
#[derive(Debug, Args)]
pub struct Snake {
    /// The names to convert.
    #[clap(required = true)]
    names: Vec<String>,
}

impl Command for Snake {
    fn handle(self) -> eyre::Result<()> {
        for name in &self.names {
            println!("{}", camel_to_snake(name));
        }

        Ok(())
    }
}
