mod generate;

use crate::Cli;
use crate::CommandResult;
pub(crate) use generate::GenerateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "apollo-comps")]
pub(crate) enum CommandEnum {
    /// Generate an ApolloComps file next to every queries.graphql file.
    Generate(Box<GenerateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await
        }
    }
}
