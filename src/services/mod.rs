//! Service layer for the job tracker.
//!
//! This module contains the extraction engine:
//! - Page document abstraction (`PageDocument`)
//! - Site classification (`SiteClassifier`)
//! - Field and fallback resolution
//! - Post-processing
//! - The orchestrator (`Extractor`)
//! - Job page detection (`ActivityDetector`)

mod activity;
mod classifier;
mod document;
mod extractor;
pub mod fallback;
pub mod postprocess;
pub mod resolver;

pub use activity::ActivityDetector;
pub use classifier::{Classification, SiteClassifier};
pub use document::{HtmlDocument, PageDocument};
pub use extractor::Extractor;
