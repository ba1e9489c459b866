#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use folio::Config;
use folio::app::dispatch;
use folio::cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.cache_dir {
        config.preview.cache_dir.clone_from(dir);
    }

    // Logs go to stderr so `--json` output on stdout stays parseable.
    let level = match cli.verbose {
        0 => config.log.max_level()?,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    dispatch(cli, config).await
}
