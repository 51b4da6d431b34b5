//! Pipeline entry points for job tracker operations.
//!
//! - `run_extract`: Fetch pages and extract job records
//! - `run_submit`: Save an extracted record to a sink
//! - `run_validate`: Check configuration

pub mod extract;
pub mod submit;
pub mod validate;

pub use extract::{ExtractOutcome, extract_file, run_extract};
pub use submit::run_submit;
pub use validate::run_validate;
