use crate::Cli;
use crate::CommandResult;

/// A subcommand that consumes its parsed args and reports a [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
