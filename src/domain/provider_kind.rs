use std::fmt;
use std::str::FromStr;

/// Transcription vendors the dispatcher knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Deepgram,
    Whisper,
    GoogleSpeech,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [Self::Deepgram, Self::Whisper, Self::GoogleSpeech];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deepgram => "dg",
            Self::Whisper => "whisper",
            Self::GoogleSpeech => "google",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transcription provider: {0:?}. Expected: dg, whisper, or google")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dg" | "deepgram" => Ok(Self::Deepgram),
            "whisper" | "openai" => Ok(Self::Whisper),
            "google" | "gcp" => Ok(Self::GoogleSpeech),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
