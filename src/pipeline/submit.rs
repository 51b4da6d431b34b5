// src/pipeline/submit.rs

//! Submit an extracted record to a sink.

use chrono::{Local, NaiveDate};

use crate::error::Result;
use crate::models::{ApplicationPayload, JobRecord, RecordEdits};
use crate::storage::{RecordSink, SaveReceipt};

/// Apply the user's edits to a record and save it.
pub async fn run_submit(
    sink: &dyn RecordSink,
    record: &JobRecord,
    edits: &RecordEdits,
) -> Result<SaveReceipt> {
    submit_on(sink, record, edits, Local::now().date_naive()).await
}

async fn submit_on(
    sink: &dyn RecordSink,
    record: &JobRecord,
    edits: &RecordEdits,
    today: NaiveDate,
) -> Result<SaveReceipt> {
    let payload = ApplicationPayload::from_record(record, edits, today);
    payload.validate()?;

    log::info!("Saving application...");
    sink.save(&payload).await
}
