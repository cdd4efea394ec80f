use anyhow::Context;
use clap::Parser;

use scribe_relay::infrastructure::observability::{TracingConfig, init_tracing};
use scribe_relay::presentation::config::load_settings;
use scribe_relay::presentation::{Cli, Environment, build_dispatcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let environment: Environment = cli
        .env
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut settings = load_settings(environment).context("Failed to load settings")?;
    cli.apply(&mut settings);

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let dispatcher = build_dispatcher(&settings)?;
    tracing::debug!(registered = ?dispatcher.registered(), "Dispatcher ready");

    match dispatcher
        .run(&settings.provider, &settings.input.audio_path)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                provider = %outcome.provider,
                output = %outcome.output_path.display(),
                translated = outcome.translated,
                "Transcription run finished"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, provider = %settings.provider, "Transcription run failed");
            Err(e.into())
        }
    }
}
