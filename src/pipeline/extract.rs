// src/pipeline/extract.rs

//! Batch extraction pipeline.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::Client;

use crate::error::Result;
use crate::models::{HttpConfig, JobRecord};
use crate::services::Extractor;
use crate::utils::http::fetch_page;

/// Summary of an extraction run.
#[derive(Debug, Default)]
pub struct ExtractOutcome {
    /// Records in input order (failed pages omitted)
    pub records: Vec<JobRecord>,
    pub page_total: usize,
    pub page_failures: usize,
}

/// Fetch every URL and extract a record from each page.
///
/// At most `http.max_concurrent` pages are in flight. Fetch failures are
/// logged and counted; they do not abort the run.
pub async fn run_extract(
    http: &HttpConfig,
    client: &Client,
    extractor: &Extractor,
    urls: &[String],
) -> Result<ExtractOutcome> {
    let delay = Duration::from_millis(http.request_delay_ms);
    let concurrency = http.max_concurrent.max(1);

    let mut outcome = ExtractOutcome {
        page_total: urls.len(),
        ..ExtractOutcome::default()
    };

    let mut page_stream = stream::iter(urls.iter().enumerate())
        .map(|(idx, url)| async move {
            let result = fetch_page(client, url).await;
            (idx, url, result)
        })
        .buffer_unordered(concurrency);

    let mut indexed = Vec::with_capacity(urls.len());
    while let Some((idx, url, result)) = page_stream.next().await {
        match result {
            Ok(html) => {
                let record = extractor.extract_html(url, &html);
                if record.is_blank() {
                    log::warn!("Could not extract job details from {}", url);
                } else {
                    log::info!(
                        "Extracted '{}' at '{}' from {}",
                        record.position,
                        record.company_name,
                        record.source
                    );
                }
                indexed.push((idx, record));
            }
            Err(error) => {
                outcome.page_failures += 1;
                log::warn!("Failed to fetch {}: {}", url, error);
            }
        }

        if delay.as_millis() > 0 {
            tokio::time::sleep(delay).await;
        }
    }

    indexed.sort_by_key(|(idx, _)| *idx);
    outcome.records = indexed.into_iter().map(|(_, record)| record).collect();
    Ok(outcome)
}

/// Extract a record from a saved HTML file.
pub async fn extract_file(
    extractor: &Extractor,
    url: &str,
    path: &std::path::Path,
) -> Result<JobRecord> {
    let html = tokio::fs::read_to_string(path).await?;
    Ok(extractor.extract_html(url, &html))
}
