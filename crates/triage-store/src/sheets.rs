//! Backend B: the spreadsheet values API, called directly.
//!
//! Implements the low-level row operations — one batch range read for
//! header + target row, one batched cell write per submission — and
//! composes them with the core payload builders so both backends hand the
//! wizard identical shapes. All writes go through `values:batchUpdate`,
//! which keeps single-cell and multi-cell updates on one code path.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use triage_core::builder;
use triage_core::grid;
use triage_core::layout;
use triage_core::models::flag::YesNo;
use triage_core::models::payload::{Edit2Payload, PhasePayload, ViewPayload};
use triage_core::models::phase::Phase;
use triage_core::models::snapshot::RowSnapshot;

use crate::auth::ServiceAccountAuth;
use crate::error::StoreError;
use crate::http::{response_parts, unavailable};
use crate::store::{BoxFuture, RecordStore};
use crate::wire;

const VALUES_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const READ_TIMEOUT: Duration = Duration::from_secs(20);
const WRITE_TIMEOUT: Duration = Duration::from_secs(25);

pub struct SheetsStore {
    http: reqwest::Client,
    spreadsheet_id: String,
    sheet: String,
    auth: ServiceAccountAuth,
}

impl SheetsStore {
    pub fn new(spreadsheet_id: String, sheet: String, auth: ServiceAccountAuth) -> Self {
        Self {
            http: reqwest::Client::new(),
            spreadsheet_id,
            sheet,
            auth,
        }
    }

    /// Fetch row 1 and row N in one batch read.
    ///
    /// The value row is padded to the header length by [`RowSnapshot`]; an
    /// out-of-range row comes back without values and therefore reads as an
    /// all-empty record, never an error.
    pub async fn read_header_and_row(&self, row: u32) -> Result<RowSnapshot, StoreError> {
        const CONTEXT: &str = "values batchGet";

        let token = self.auth.bearer(&self.http).await?;
        let url = format!("{VALUES_BASE}/{}/values:batchGet", self.spreadsheet_id);
        let header_range = row_range(&self.sheet, 1);
        let target_range = row_range(&self.sheet, row);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .query(&[
                ("ranges", header_range.as_str()),
                ("ranges", target_range.as_str()),
                ("majorDimension", "ROWS"),
            ])
            .timeout(READ_TIMEOUT)
            .send()
            .await
            .map_err(|e| unavailable(CONTEXT, e))?;

        let parts = response_parts(response, CONTEXT).await?;
        let body = wire::decode(CONTEXT, parts.status, &parts.content_type, &parts.body)?;
        let batch: BatchGetResponse = serde_json::from_value(body)?;

        let mut ranges = batch.value_ranges.into_iter();
        let headers = row_strings(ranges.next());
        let values = row_strings(ranges.next());

        Ok(RowSnapshot::new(headers, values))
    }

    /// Resolve each flag label through the current header row and write the
    /// matching cells in one batch. Labels missing from the header row are
    /// skipped, tolerating header drift.
    pub async fn write_flag_cells(
        &self,
        row: u32,
        flags: &[(String, YesNo)],
    ) -> Result<(), StoreError> {
        let snapshot = self.read_header_and_row(row).await?;

        let mut data = Vec::new();
        for (label, value) in flags {
            match snapshot.headers().iter().position(|h| h == label) {
                Some(index) => data.push(UpdateRange {
                    range: cell_range(&self.sheet, &grid::col_letter(index + 1), row),
                    values: vec![vec![value.as_str().to_string()]],
                }),
                None => debug!(label = %label, "flag label not in header row, skipped"),
            }
        }

        let written = data.len();
        if !data.is_empty() {
            self.batch_update(data).await?;
        }
        info!(row, cells = written, "flag cells updated");

        Ok(())
    }

    /// Write the single classification cell in column V.
    pub async fn write_classification_cell(
        &self,
        row: u32,
        value: &str,
    ) -> Result<(), StoreError> {
        let update = UpdateRange {
            range: cell_range(&self.sheet, layout::CLASSIFICATION, row),
            values: vec![vec![value.to_string()]],
        };

        self.batch_update(vec![update]).await?;
        info!(row, "classification cell updated");

        Ok(())
    }

    async fn batch_update(&self, data: Vec<UpdateRange>) -> Result<(), StoreError> {
        const CONTEXT: &str = "values batchUpdate";

        let token = self.auth.bearer(&self.http).await?;
        let url = format!("{VALUES_BASE}/{}/values:batchUpdate", self.spreadsheet_id);
        let request = BatchUpdateRequest {
            value_input_option: "RAW",
            data,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&token)
            .json(&request)
            .timeout(WRITE_TIMEOUT)
            .send()
            .await
            .map_err(|e| unavailable(CONTEXT, e))?;

        let parts = response_parts(response, CONTEXT).await?;
        wire::decode(CONTEXT, parts.status, &parts.content_type, &parts.body)?;

        Ok(())
    }
}

impl RecordStore for SheetsStore {
    fn read(&self, row: u32, phase: Phase) -> BoxFuture<'_, Result<PhasePayload, StoreError>> {
        Box::pin(async move {
            let snapshot = self.read_header_and_row(row).await?;
            Ok(builder::build(&snapshot, phase)?)
        })
    }

    fn write_flags<'a>(
        &'a self,
        row: u32,
        flags: &'a [(String, YesNo)],
    ) -> BoxFuture<'a, Result<Edit2Payload, StoreError>> {
        Box::pin(async move {
            self.write_flag_cells(row, flags).await?;

            // Re-read so the follow-on payload reflects what the table now
            // holds, mirroring the script endpoint's `next` response.
            let snapshot = self.read_header_and_row(row).await?;
            Ok(builder::edit2(&snapshot)?)
        })
    }

    fn write_classification<'a>(
        &'a self,
        row: u32,
        value: &'a str,
    ) -> BoxFuture<'a, Result<ViewPayload, StoreError>> {
        Box::pin(async move {
            self.write_classification_cell(row, value).await?;

            let snapshot = self.read_header_and_row(row).await?;
            Ok(builder::view(&snapshot)?)
        })
    }
}

// ── Values API shapes ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchGetResponse {
    #[serde(default)]
    value_ranges: Vec<ValueRange>,
}

#[derive(Deserialize, Default)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateRequest {
    value_input_option: &'static str,
    data: Vec<UpdateRange>,
}

#[derive(Serialize)]
struct UpdateRange {
    range: String,
    values: Vec<Vec<String>>,
}

fn row_strings(range: Option<ValueRange>) -> Vec<String> {
    range
        .and_then(|r| r.values.into_iter().next())
        .unwrap_or_default()
        .iter()
        .map(wire::cell_text)
        .collect()
}

// ── A1 ranges ────────────────────────────────────────────────────────────────

/// Single-cell A1 range, e.g. `'Intake'!V3`.
pub fn cell_range(sheet: &str, col: &str, row: u32) -> String {
    format!("{}!{col}{row}", quote_sheet(sheet))
}

/// Whole-row A1 range, e.g. `'Intake'!3:3`.
pub fn row_range(sheet: &str, row: u32) -> String {
    format!("{}!{row}:{row}", quote_sheet(sheet))
}

/// Quote a sheet title for an A1 reference; embedded quotes are doubled.
pub fn quote_sheet(sheet: &str) -> String {
    format!("'{}'", sheet.replace('\'', "''"))
}
