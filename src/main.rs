use clap::Parser;
use insightflow::structs::cli::Cli;
use insightflow::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut runner = CommandRunner::new(cli.config);
    runner
        .run_command(cli.command)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
}
