use clap::{Args, ValueEnum};
use ottdadmin_utils::date::GameDate;

use super::Command;

/// Subcommand for converting between game date codes and calendar dates.
#[derive(Debug, Args)]
pub struct Date {
    /// The direction of the conversion.
    #[clap(value_enum)]
    direction: Direction,

    /// The date code or `YYYY-MM-DD` date to convert.
    input: String,
}

/// The direction of a date conversion.
#[derive(Clone, Debug, ValueEnum)]
enum Direction {
    /// Converts a game date code into a calendar date.
    ToCalendar,
    /// Converts a calendar date into a game date code.
    ToGame,
}

impl Command for Date {
    fn handle(self) -> eyre::Result<()> {
        match self.direction {
            Direction::ToCalendar => {
                let date = GameDate(self.input.trim().parse()?);
                if !date.is_valid() {
                    log::warn!("Date code {} does not refer to a calendar day", date.0);
                }

                println!("{date}");
            }

            Direction::ToGame => {
                let date: GameDate = self.input.parse()?;
                log::debug!("Parsed '{}' as {}", self.input, date.to_date());

                println!("{}", date.0);
            }
        }

        Ok(())
    }
}
