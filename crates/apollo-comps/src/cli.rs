use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    name = "apollo-comps",
    version,
    about = "Generates typed react-apollo components and hooks next to every \
            queries.graphql file.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log progress and debug detail to stderr.",
        long,
        short='v',
        conflicts_with="quiet",
    )]
    pub verbose: bool,

    #[arg(
        help="Only log errors. Warnings such as files without operations \
              are suppressed.",
        long,
        short='q',
    )]
    pub quiet: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
