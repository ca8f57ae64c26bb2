//! Backend A: the deployed script endpoint in front of the spreadsheet.
//!
//! Reads are `GET ?action=get&row=N&mode=M`; the two writes are
//! form-encoded POSTs (`action=update_lq`, `action=update_v`). When a
//! shared-secret token is configured it rides along on every request.
//! The endpoint computes the phase payloads server-side and echoes the
//! follow-on payload with each write, which is what makes the wizard's
//! inline phase-2 hop possible without a second read.

use std::time::Duration;

use serde_json::Value;
use tracing::info;

use triage_core::models::flag::YesNo;
use triage_core::models::payload::{Edit2Payload, PhasePayload, ViewPayload};
use triage_core::models::phase::Phase;

use crate::error::StoreError;
use crate::http::{response_parts, unavailable};
use crate::store::{BoxFuture, RecordStore};
use crate::wire;

const READ_TIMEOUT: Duration = Duration::from_secs(20);
const WRITE_TIMEOUT: Duration = Duration::from_secs(25);

pub struct AppsScriptStore {
    http: reqwest::Client,
    webapp_url: String,
    token: Option<String>,
}

impl AppsScriptStore {
    pub fn new(webapp_url: String, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webapp_url,
            token,
        }
    }

    async fn get_row(&self, row: u32, phase: Phase) -> Result<PhasePayload, StoreError> {
        const CONTEXT: &str = "GET action=get";

        let mut params = vec![
            ("action", "get".to_string()),
            ("row", row.to_string()),
            ("mode", phase.as_str().to_string()),
        ];
        if let Some(token) = &self.token {
            params.push(("token", token.clone()));
        }

        let response = self
            .http
            .get(&self.webapp_url)
            .query(&params)
            .timeout(READ_TIMEOUT)
            .send()
            .await
            .map_err(|e| unavailable(CONTEXT, e))?;

        let parts = response_parts(response, CONTEXT).await?;
        let body = wire::decode_ok(CONTEXT, parts.status, &parts.content_type, &parts.body)?;

        wire::get_payload(body, phase)
    }

    async fn post(
        &self,
        mut form: Vec<(&'static str, String)>,
        context: &'static str,
    ) -> Result<Value, StoreError> {
        if let Some(token) = &self.token {
            form.push(("token", token.clone()));
        }

        let response = self
            .http
            .post(&self.webapp_url)
            .form(&form)
            .timeout(WRITE_TIMEOUT)
            .send()
            .await
            .map_err(|e| unavailable(context, e))?;

        let parts = response_parts(response, context).await?;
        wire::decode_ok(context, parts.status, &parts.content_type, &parts.body)
    }
}

impl RecordStore for AppsScriptStore {
    fn read(&self, row: u32, phase: Phase) -> BoxFuture<'_, Result<PhasePayload, StoreError>> {
        Box::pin(async move { self.get_row(row, phase).await })
    }

    fn write_flags<'a>(
        &'a self,
        row: u32,
        flags: &'a [(String, YesNo)],
    ) -> BoxFuture<'a, Result<Edit2Payload, StoreError>> {
        Box::pin(async move {
            let lq: serde_json::Map<String, Value> = flags
                .iter()
                .map(|(label, value)| {
                    (label.clone(), Value::String(value.as_str().to_string()))
                })
                .collect();

            let form = vec![
                ("action", "update_lq".to_string()),
                ("row", row.to_string()),
                ("lq", serde_json::to_string(&lq)?),
            ];

            let body = self.post(form, "POST action=update_lq").await?;
            info!(row, flags = flags.len(), "flags persisted via script endpoint");

            wire::flags_payload(body)
        })
    }

    fn write_classification<'a>(
        &'a self,
        row: u32,
        value: &'a str,
    ) -> BoxFuture<'a, Result<ViewPayload, StoreError>> {
        Box::pin(async move {
            let form = vec![
                ("action", "update_v".to_string()),
                ("row", row.to_string()),
                ("value", value.to_string()),
            ];

            let body = self.post(form, "POST action=update_v").await?;
            info!(row, "classification persisted via script endpoint");

            wire::classification_payload(body)
        })
    }
}
