//! Day Clock - Terminal hour clock for the tasks of the current hour

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use day_clock::cli::{self, Cli, Commands};
use day_clock::tui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("DAY_CLOCK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("day_clock=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "dayclock", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::List(args)) => cli::list::run(args).await,
        Some(Commands::Svg(args)) => cli::svg::run(args).await,
        None => tui::run().await,
    }
}
