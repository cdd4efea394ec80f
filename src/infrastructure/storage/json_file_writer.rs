use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{ResultWriter, ResultWriterError};
use crate::domain::{OutputName, TranscriptionResult};

/// Writes each result as indented JSON under a fixed directory.
pub struct JsonFileWriter {
    directory: PathBuf,
}

impl JsonFileWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }

    /// Creates the file exclusively, moving to `<stem>-1.json`, `<stem>-2.json`, ...
    /// while the name is taken.
    async fn write_new(
        &self,
        name: &OutputName,
        json: &str,
    ) -> Result<PathBuf, ResultWriterError> {
        let mut attempt = 0u32;
        loop {
            let file_name = match attempt {
                0 => name.as_str().to_string(),
                n => name.numbered(n),
            };
            let path = self.directory.join(file_name);

            let opened = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;

            match opened {
                Ok(mut file) => {
                    let written = match file.write_all(json.as_bytes()).await {
                        Ok(()) => file.flush().await,
                        Err(e) => Err(e),
                    };
                    return match written {
                        Ok(()) => Ok(path),
                        Err(source) => Err(ResultWriterError::Write { path, source }),
                    };
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    tracing::debug!(path = %path.display(), "Output name taken, trying next");
                    attempt += 1;
                }
                Err(source) => return Err(ResultWriterError::Write { path, source }),
            }
        }
    }
}

#[async_trait]
impl ResultWriter for JsonFileWriter {
    async fn write(
        &self,
        result: &TranscriptionResult,
        name: &OutputName,
    ) -> Result<PathBuf, ResultWriterError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|source| ResultWriterError::CreateDir {
                path: self.directory.clone(),
                source,
            })?;

        let json = serde_json::to_string_pretty(result.as_value())?;

        let path = if name.keep_existing() {
            self.write_new(name, &json).await?
        } else {
            let path = self.directory.join(name.as_str());
            tokio::fs::write(&path, json)
                .await
                .map_err(|source| ResultWriterError::Write {
                    path: path.clone(),
                    source,
                })?;
            path
        };

        tracing::debug!(path = %path.display(), "Result file written");
        Ok(path)
    }
}
