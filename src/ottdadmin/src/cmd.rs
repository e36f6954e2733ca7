pub mod date;
pub mod snake;
pub mod transcode;

/// Represents a command in the ottdadmin application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
