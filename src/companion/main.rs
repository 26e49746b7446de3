use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::setup::Cli;

/// Logs go to stderr so stdout stays clean for command output.
/// `RUST_LOG` wins over `--verbose` when both are given.
fn initialize_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "companion=debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    if let Err(e) = cli::commands::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
