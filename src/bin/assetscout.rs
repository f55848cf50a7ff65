use assetscout_core::cli::{self, Cli};
use assetscout_core::exit::ScoutExit;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ScoutExit {
    let cli = Cli::parse();

    let verbose = cli.command.as_ref().is_some_and(cli::Commands::verbose);
    init_tracing(verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(ScoutExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            ScoutExit::Error
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "assetscout=debug,assetscout_core=debug"
    } else {
        "assetscout=info,assetscout_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
