use thiserror::Error;

use triage_core::models::phase::Phase;
use triage_store::error::StoreError;

/// A wizard action that failed, tagged with the operation that triggered
/// it. Surfaced to the caller as-is; the wizard never retries and never
/// rolls back a partially completed batch write.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("read for {phase} failed: {source}")]
    Read { phase: Phase, source: StoreError },

    #[error("flags update failed: {source}")]
    WriteFlags { source: StoreError },

    #[error("classification update failed: {source}")]
    WriteClassification { source: StoreError },

    #[error("store returned a {got} payload for a {expected} read")]
    UnexpectedPayload { expected: Phase, got: Phase },
}
