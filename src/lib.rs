// src/lib.rs

//! JobTracker Library
//!
//! Site-adaptive extraction of job application records from job-posting
//! pages, plus the clients that store or submit them.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::{Department, JobRecord};
pub use services::{Extractor, HtmlDocument, PageDocument};
