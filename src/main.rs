use anyhow::Result;
use clap::Parser;
use linksnap::cli::Cli;
use linksnap::output;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli.run() {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
