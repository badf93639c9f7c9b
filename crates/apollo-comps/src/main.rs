mod cli;
mod command;
mod command_result;
mod commands;
mod log_level;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var(log_level::LOG_LEVEL_ENV_VAR).ok();
    let choice = log_level::choose_log_level(
        cli.verbose,
        cli.quiet,
        env_val.as_deref(),
    );

    tracing_subscriber::fmt()
        .with_max_level(choice.level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
    tracing::trace!("Logging at `{}`.", choice.level);

    if let Some(rejected) = choice.rejected_env_value {
        tracing::warn!(
            "Ignoring `{}={rejected}`: not a log level. Using `{}`.",
            log_level::LOG_LEVEL_ENV_VAR,
            choice.level,
        );
    }
}
