use std::path::PathBuf;

use clap::Parser;

use super::config::Settings;

#[derive(Debug, Parser)]
#[command(name = "scribe-relay")]
#[command(about = "Send a local audio file to a transcription API and store the JSON response")]
pub struct Cli {
    /// Provider to use: dg, whisper or google.
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Audio file to transcribe.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory the JSON response is written to.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Translate non-English Deepgram transcripts.
    #[arg(long)]
    pub translate: bool,

    /// Settings environment: local, test or prod.
    #[arg(long, env = "APP_ENV", default_value = "local")]
    pub env: String,
}

impl Cli {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(provider) = &self.provider {
            settings.provider = provider.clone();
        }
        if let Some(input) = &self.input {
            settings.input.audio_path = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            settings.output.directory = output_dir.clone();
        }
        if self.translate {
            settings.translation.enabled = true;
        }
    }
}
