pub mod decode;
pub mod read;

/// Common functionality for all subcommands of the application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
