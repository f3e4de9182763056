use clap::Parser;
use laserscene::cli::{run, Cli};
use laserscene::init_logging_with_default;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    init_logging_with_default(level)?;

    run(cli)
}
