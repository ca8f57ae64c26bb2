use std::future::Future;
use std::pin::Pin;

use triage_core::models::flag::YesNo;
use triage_core::models::payload::{Edit2Payload, PhasePayload, ViewPayload};
use triage_core::models::phase::Phase;

use crate::error::StoreError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The read/write boundary to one row of the backing table.
///
/// Implemented by [`crate::apps_script::AppsScriptStore`] (deployed script
/// endpoint) and [`crate::sheets::SheetsStore`] (direct values API); the
/// wizard never learns which one it is talking to.
///
/// Methods return boxed futures for dyn compatibility.
pub trait RecordStore: Send + Sync {
    /// Fetch the payload for one phase of `row`.
    fn read(&self, row: u32, phase: Phase) -> BoxFuture<'_, Result<PhasePayload, StoreError>>;

    /// Persist the treatment flags, returning the follow-on phase-2
    /// payload. Labels unknown to the current header row are silently
    /// skipped.
    fn write_flags<'a>(
        &'a self,
        row: u32,
        flags: &'a [(String, YesNo)],
    ) -> BoxFuture<'a, Result<Edit2Payload, StoreError>>;

    /// Persist the classification cell, returning the final view payload.
    /// No value validation happens here; enumeration enforcement is the
    /// caller's job.
    fn write_classification<'a>(
        &'a self,
        row: u32,
        value: &'a str,
    ) -> BoxFuture<'a, Result<ViewPayload, StoreError>>;
}
