use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%3fZ";

/// How a provider wants its output file named.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputNaming {
    pub suffix: Option<String>,
    pub timestamped: bool,
}

impl OutputNaming {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn timestamped(suffix: impl Into<String>) -> Self {
        Self {
            suffix: Some(suffix.into()),
            timestamped: true,
        }
    }
}

/// Target file name for one run.
///
/// Timestamped names must never replace an earlier file. Two runs in the same
/// millisecond get the same name, so the writer falls back to [`OutputName::numbered`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName {
    stem: String,
    file_name: String,
    keep_existing: bool,
}

impl OutputName {
    /// `<base>[-<suffix>][-<timestamp>].json`
    pub fn new(base_name: &str, naming: &OutputNaming, now: DateTime<Utc>) -> Self {
        let mut name = base_name.to_string();
        if let Some(suffix) = naming.suffix.as_deref().filter(|s| !s.is_empty()) {
            name.push('-');
            name.push_str(suffix);
        }
        if naming.timestamped {
            name.push('-');
            name.push_str(&now.format(TIMESTAMP_FORMAT).to_string());
        }
        Self {
            file_name: format!("{name}.json"),
            stem: name,
            keep_existing: naming.timestamped,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.file_name
    }

    /// False for plain names, which overwrite the previous run's file.
    pub fn keep_existing(&self) -> bool {
        self.keep_existing
    }

    /// `<stem>-<n>.json`, used when a timestamped name is already taken.
    pub fn numbered(&self, n: u32) -> String {
        format!("{}-{n}.json", self.stem)
    }
}

impl std::fmt::Display for OutputName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name)
    }
}
