use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libapollocomps::generate::GenerateOptions;
use libapollocomps::generate::GenerateSummary;
use libapollocomps::generate::Generator;
use libapollocomps::generate::DEFAULT_IGNORED_DIRS;
use libapollocomps::render::DeclarationStyle;
use libapollocomps::render::RenderTarget;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Only verify that every generated file is up to date; exit with \
             a failure if any is missing or stale. Nothing is written.",
        long,
    )]
    check: bool,

    #[arg(
        default_values_t=DEFAULT_IGNORED_DIRS.iter().map(|dir| dir.to_string()),
        help="Names of directories that are never scanned for query files.",
        long="ignore",
        value_delimiter=',',
    )]
    ignored_dirs: Vec<String>,

    #[arg(
        default_value=".",
        help="Directory to search for queries.graphql files.",
        long,
    )]
    root: PathBuf,

    #[arg(
        help="How wrappers are declared: `class` or `function`. Defaults to \
             `class` for flow and `function` for typescript.",
        long,
    )]
    style: Option<String>,

    #[arg(
        help="Language target to generate components for: `flow` or \
             `typescript`.",
        long,
        required=true,
    )]
    target: String,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let check = self.check;

        // Reject bad configuration before any file is looked at.
        let target = match self.target.parse::<RenderTarget>() {
            Ok(target) => target,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };
        let style = match self.style.as_deref().map(str::parse::<DeclarationStyle>) {
            None => None,
            Some(Ok(style)) => Some(style),
            Some(Err(e)) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let options = GenerateOptions::new(self.root, target)
            .with_check(check)
            .with_ignored_dirs(self.ignored_dirs)
            .with_style(style);
        let generator = match Generator::new(options) {
            Ok(generator) => generator,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };
        tracing::debug!(
            "Generating with the {:?} renderer under {:?}.",
            generator.renderer(),
            generator.options().root,
        );

        match generator.run().await {
            Ok(summary) if check => check_result(&summary),
            Ok(summary) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Generated {} files:\n",
                    "  * Wrote {} files.\n",
                    "  * Skipped {} files without operations.",
                ),
                output_utils::GREEN_CHECK,
                target,
                summary.written.len(),
                summary.skipped_empty.len(),
            )),
            Err(e) => CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        }
    }
}

fn check_result(summary: &GenerateSummary) -> CommandResult {
    if summary.stale.is_empty() {
        return CommandResult::stdout(format_args!(
            "{} All {} generated files are up to date.",
            output_utils::GREEN_CHECK,
            summary.up_to_date.len(),
        ));
    }

    CommandResult::stderr(format_args!(
        "{} {} generated files are out of date:\n{}",
        output_utils::RED_X,
        summary.stale.len(),
        summary.stale.iter()
            .map(|path| format!("  * {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n"),
    ))
}
