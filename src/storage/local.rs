//! Local filesystem storage implementation.
//!
//! Keeps saved applications in a single JSON array file. Entries are keyed
//! by job URL: saving a posting again replaces the earlier entry.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::ApplicationPayload;
use crate::storage::{RecordSink, SaveReceipt};

/// Local filesystem storage backend.
#[derive(Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    /// Create a LocalStorage backed by the given JSON file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every saved application. A missing file is an empty store.
    pub async fn load_all(&self) -> Result<Vec<ApplicationPayload>> {
        match self.read_bytes().await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    /// Read bytes, returning None if file doesn't exist.
    async fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordSink for LocalStorage {
    async fn save(&self, payload: &ApplicationPayload) -> Result<SaveReceipt> {
        let mut entries = self.load_all().await?;

        let existing = (!payload.job_url.is_empty())
            .then(|| entries.iter().position(|e| e.job_url == payload.job_url))
            .flatten();

        let replaced = match existing {
            Some(idx) => {
                entries[idx] = payload.clone();
                true
            }
            None => {
                entries.push(payload.clone());
                false
            }
        };

        let bytes = serde_json::to_vec_pretty(&entries)?;
        self.write_bytes(&bytes).await?;

        log::info!(
            "Saved application for {} at {} ({} total)",
            payload.position,
            payload.company_name,
            entries.len()
        );

        Ok(SaveReceipt {
            location: self.path.display().to_string(),
            replaced,
        })
    }
}
