// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::{CompanyRule, Config};

/// Validate configuration and report what it contains.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    let rules = &config.extractor.sites;
    let employer_sites = rules
        .iter()
        .filter(|r| matches!(r.company, CompanyRule::Constant(_)))
        .count();
    let selector_count: usize = rules.iter().map(|r| r.selectors().count()).sum();

    log::info!("✓ Config OK");
    log::info!("    User agent: {}", config.http.user_agent);
    log::info!("    Server: {}", config.api.server_url);
    log::info!(
        "    Sites: {} ({} single-employer), {} selectors",
        rules.len(),
        employer_sites,
        selector_count
    );
    log::info!(
        "    Job site patterns: {}",
        config.extractor.job_site_patterns.len()
    );
    Ok(())
}
