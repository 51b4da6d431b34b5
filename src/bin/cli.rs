//! JobTracker CLI
//!
//! Extracts job details from posting pages and saves them as applications.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobtracker::{
    config::{load_config, write_default_config},
    error::{AppError, Result},
    models::{CompanyRule, Config, JobRecord, RecordEdits},
    pipeline,
    services::{ActivityDetector, Extractor, SiteClassifier},
    storage::{ApiClient, LocalStorage, RecordSink},
    utils::http,
};

/// JobTracker - job application tracking from the command line
#[derive(Parser, Debug)]
#[command(name = "jobtracker", version, about = "Extract and track job applications")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "jobtracker.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract job details from one or more posting pages
    Extract {
        /// Posting page URLs
        #[arg(required = true)]
        urls: Vec<String>,

        /// Read the page from a saved HTML file instead of fetching it
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        /// Also save the extracted records to the local store
        #[arg(long)]
        save: bool,
    },

    /// Extract a posting and save it as an application
    Submit {
        /// Posting page URL
        url: String,

        /// Read the page from a saved HTML file instead of fetching it
        #[arg(long, value_name = "FILE")]
        html: Option<PathBuf>,

        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        notes: Option<String>,

        /// Save to the local store instead of the tracker server
        #[arg(long)]
        local: bool,
    },

    /// Check whether a URL is a recognized job posting page
    Check {
        url: String,
    },

    /// List the site registry
    Sites,

    /// Validate the configuration file
    Validate,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Extract one record, from a file if given, otherwise over HTTP.
async fn extract_one(
    config: &Config,
    extractor: &Extractor,
    url: &str,
    html: Option<PathBuf>,
) -> Result<JobRecord> {
    if let Some(path) = html {
        return pipeline::extract_file(extractor, url, &path).await;
    }

    let client = http::create_client(&config.http)?;
    let html = http::fetch_page(&client, url).await?;
    Ok(extractor.extract_html(url, &html))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Command::Init { force } = cli.command {
        write_default_config(&cli.config, force)?;
        log::info!("Default configuration written to {}", cli.config.display());
        return Ok(());
    }

    let config = load_config(&cli.config)?;
    let extractor = Extractor::new(config.extractor.clone());
    let storage = LocalStorage::new(&config.storage.records_file);

    match cli.command {
        Command::Extract { urls, html, save } => {
            let records = match html {
                Some(path) => {
                    if urls.len() != 1 {
                        return Err(AppError::validation("--html takes exactly one URL"));
                    }
                    vec![pipeline::extract_file(&extractor, &urls[0], &path).await?]
                }
                None => {
                    let client = http::create_client(&config.http)?;
                    let outcome =
                        pipeline::run_extract(&config.http, &client, &extractor, &urls).await?;
                    if outcome.page_failures > 0 {
                        log::warn!(
                            "{} of {} pages could not be fetched",
                            outcome.page_failures,
                            outcome.page_total
                        );
                    }
                    outcome.records
                }
            };

            print_json(&records)?;

            if save {
                for record in records.iter().filter(|r| !r.is_blank()) {
                    if let Err(e) =
                        pipeline::run_submit(&storage, record, &RecordEdits::default()).await
                    {
                        log::warn!("Not saved ({}): {}", record.url, e);
                    }
                }
            }
        }

        Command::Submit {
            url,
            html,
            company,
            position,
            location,
            department,
            notes,
            local,
        } => {
            let record = extract_one(&config, &extractor, &url, html).await?;
            if record.is_blank() {
                log::warn!("Could not extract job details from this page");
            }

            let edits = RecordEdits {
                company_name: company,
                position,
                location,
                department,
                notes,
            };

            let receipt = if local {
                pipeline::run_submit(&storage, &record, &edits).await?
            } else {
                let client = http::create_client(&config.http)?;
                let api = ApiClient::new(client, &config.api)?;
                let sink: &dyn RecordSink = &api;
                pipeline::run_submit(sink, &record, &edits).await?
            };

            log::info!("Application saved successfully! ({})", receipt.location);
            if receipt.replaced {
                log::info!("Replaced an earlier entry for {}", url);
            }
        }

        Command::Check { url } => {
            let detector = ActivityDetector::new(config.extractor.job_site_patterns.clone());
            let classification = SiteClassifier::from_rules(extractor.rules()).classify(&url);

            println!("{}", detector.tooltip(&url));
            println!("Job posting page: {}", detector.is_job_posting_page(&url));
            println!("Site: {} (source: {})", classification.site, classification.source);
        }

        Command::Sites => {
            for rule in extractor.rules() {
                let company = match &rule.company {
                    CompanyRule::Constant(name) => format!("always \"{name}\""),
                    CompanyRule::Selectors(list) => format!("{} selectors", list.len()),
                };
                println!(
                    "{:<18} {:<28} company: {}",
                    rule.site.to_string(),
                    rule.patterns.join(", "),
                    company
                );
            }
        }

        Command::Validate => {
            pipeline::run_validate(&config)?;
            log::info!("All validations passed!");
        }

        // Handled before the config is loaded
        Command::Init { .. } => {}
    }

    Ok(())
}
