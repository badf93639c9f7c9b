use crate::Cli;
use crate::CommandResult;

/// A subcommand of `apollo-comps`. Failures are reported through the
/// returned [`CommandResult`] rather than a panic or an early exit.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
