use clap::{ArgAction, Args};

/// Logging options shared by every subcommand.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Raises how much diagnostic output is printed to stderr.
    ///
    /// By default only informational messages and warnings appear.
    /// `-v` adds parsing and conversion details, `-vv` also shows the
    /// per-type loggers created by the library.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Installs `simple_logger` as the process-wide logger.
    pub fn setup(self) -> eyre::Result<()> {
        simple_logger::init_with_level(self.level())?;
        Ok(())
    }

    fn level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}
