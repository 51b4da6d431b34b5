//! Destinations for application payloads.
//!
//! - `ApiClient`: posts to a running tracker server
//! - `LocalStorage`: keeps payloads in a JSON file on disk

pub mod api;
pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ApplicationPayload;

// Re-export for convenience
pub use api::ApiClient;
pub use local::LocalStorage;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    /// Where the payload ended up (endpoint URL or file path)
    pub location: String,

    /// Whether an existing entry was replaced
    pub replaced: bool,
}

/// Trait for application sinks.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist one application payload.
    async fn save(&self, payload: &ApplicationPayload) -> Result<SaveReceipt>;
}
