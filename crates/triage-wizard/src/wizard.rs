//! The phase state machine.
//!
//! One `Wizard` is shared across sessions; per-session state lives in
//! [`Session`]. Each method runs one synchronous sequence of
//! read → present → write → re-present to completion — no background work,
//! no retries, no rollback.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use triage_core::models::flag::YesNo;
use triage_core::models::nav::NavParams;
use triage_core::models::payload::{Edit1Payload, Edit2Payload, PhasePayload, ViewPayload};
use triage_core::models::phase::Phase;
use triage_core::models::priority::Priority;
use triage_store::store::RecordStore;

use crate::error::WizardError;
use crate::memo::ReadMemo;
use crate::session::Session;

/// How long an identical read (same row and phase) is served from memory.
pub const READ_MEMO_TTL: Duration = Duration::from_secs(10);

/// What one wizard step presents: the phase payload plus where navigation
/// stands. This is the value the service serializes to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Edit1 {
        nav: NavParams,
        payload: Edit1Payload,
    },
    Edit2 {
        nav: NavParams,
        payload: Edit2Payload,
        /// What the priority selector should preselect.
        selected: Priority,
        /// True when served from the post-submission buffer, not a read.
        buffered: bool,
    },
    View {
        nav: NavParams,
        payload: ViewPayload,
    },
}

pub struct Wizard {
    store: Arc<dyn RecordStore>,
    memo: ReadMemo,
}

impl Wizard {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_read_ttl(store, READ_MEMO_TTL)
    }

    /// Override the read-memo window; [`Wizard::new`] uses [`READ_MEMO_TTL`].
    pub fn with_read_ttl(store: Arc<dyn RecordStore>, ttl: Duration) -> Self {
        Self {
            store,
            memo: ReadMemo::new(ttl),
        }
    }

    /// Load the screen for the current navigation state.
    ///
    /// A buffered phase-2 payload short-circuits the read when it was built
    /// for this row and navigation hasn't moved on to the final view. A
    /// buffer built for a different row is bypassed, never shown.
    pub async fn load(&self, session: &Session, nav: NavParams) -> Result<Screen, WizardError> {
        if nav.mode != Phase::View {
            if let Some(buffered) = session.buffered() {
                if buffered.row == nav.row {
                    debug!(row = nav.row, "serving buffered phase-2 payload");
                    return Ok(Screen::Edit2 {
                        nav,
                        selected: buffered.payload.selector_default(),
                        payload: buffered.payload.clone(),
                        buffered: true,
                    });
                }
                debug!(
                    buffered_row = buffered.row,
                    row = nav.row,
                    "buffered payload is for another row, bypassing"
                );
            }
        }

        let payload = self.fetch(nav.row, nav.mode).await?;
        match (nav.mode, payload) {
            (Phase::Edit1, PhasePayload::Edit1(payload)) => Ok(Screen::Edit1 { nav, payload }),
            (Phase::Edit2, PhasePayload::Edit2(payload)) => Ok(Screen::Edit2 {
                nav,
                selected: payload.selector_default(),
                payload,
                buffered: false,
            }),
            (Phase::View, PhasePayload::View(payload)) => Ok(Screen::View { nav, payload }),
            (expected, other) => Err(WizardError::UnexpectedPayload {
                expected,
                got: other.phase(),
            }),
        }
    }

    /// Submit phase 1: persist the flags, then hold the store's follow-on
    /// payload so the phase-2 screen renders without another read.
    /// Navigation does not move.
    pub async fn submit_flags(
        &self,
        session: &mut Session,
        row: u32,
        flags: Vec<(String, YesNo)>,
    ) -> Result<Screen, WizardError> {
        let next = self
            .store
            .write_flags(row, &flags)
            .await
            .map_err(|source| WizardError::WriteFlags { source })?;
        info!(row, flags = flags.len(), "flags submitted");

        session.hold(row, next.clone());

        Ok(Screen::Edit2 {
            nav: NavParams::new(row, Phase::Edit1),
            selected: next.selector_default(),
            payload: next,
            buffered: true,
        })
    }

    /// Submit phase 2: persist the classification, clear any buffer, and
    /// present the final view inline. Navigation moves to `(row, view)`.
    pub async fn submit_classification(
        &self,
        session: &mut Session,
        row: u32,
        value: Priority,
    ) -> Result<Screen, WizardError> {
        let final_view = self
            .store
            .write_classification(row, value.as_str())
            .await
            .map_err(|source| WizardError::WriteClassification { source })?;
        info!(row, value = value.as_str(), "classification submitted");

        session.clear();

        Ok(Screen::View {
            nav: NavParams::new(row, Phase::View),
            payload: final_view,
        })
    }

    /// Restart triage for a row: drop any buffered state and point
    /// navigation back at phase 1.
    pub fn restart(&self, session: &mut Session, row: u32) -> NavParams {
        session.clear();
        info!(row, "triage restarted");
        NavParams::new(row, Phase::Edit1)
    }

    async fn fetch(&self, row: u32, phase: Phase) -> Result<PhasePayload, WizardError> {
        if let Some(payload) = self.memo.get(row, phase).await {
            debug!(row, %phase, "read served from memo");
            return Ok(payload);
        }

        let payload = self
            .store
            .read(row, phase)
            .await
            .map_err(|source| WizardError::Read { phase, source })?;

        self.memo.put(row, phase, payload.clone()).await;
        Ok(payload)
    }
}
