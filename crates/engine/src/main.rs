//! Holocron Engine - Main entry point.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use holocron_engine::api;
use holocron_engine::infrastructure::settings::{load_dotenv_from_repo_root, ExtractorSettings};
use holocron_engine::App;

fn main() -> anyhow::Result<()> {
    let cli = api::Cli::parse();
    load_dotenv_from_repo_root();

    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holocron_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = ExtractorSettings::from_env().context("loading extractor settings")?;
    tracing::debug!(
        strip_special_tokens = settings.strip_special_tokens,
        map_bounds = ?settings.map_bounds,
        max_input_bytes = settings.max_input_bytes,
        "Loaded settings"
    );

    let app = App::new(settings);
    api::run(&cli.command, &app, std::io::stdin().lock(), std::io::stdout())
        .with_context(|| format!("running {:?}", cli.command))?;

    Ok(())
}
