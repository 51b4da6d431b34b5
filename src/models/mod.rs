// src/models/mod.rs

//! Domain models for the job tracker.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod application;
mod config;
mod record;
mod site;

// Re-export all public types
pub use application::{ApplicationPayload, ApplicationStatus, RecordEdits};
pub use config::{ApiConfig, Config, ExtractorConfig, HttpConfig, StorageConfig};
pub use record::{Department, JobRecord};
pub use site::{CompanyRule, FallbackRules, SiteId, SiteRule, SiteSignature};
