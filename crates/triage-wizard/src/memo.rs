//! Short-lived memoization of identical reads.
//!
//! Absorbs accidental duplicate fetches of the same (row, phase) within a
//! small window. Not a consistency mechanism: writes neither consult nor
//! invalidate it, and entries simply age out.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use triage_core::models::payload::PhasePayload;
use triage_core::models::phase::Phase;

pub(crate) struct ReadMemo {
    ttl: Duration,
    entries: Mutex<HashMap<(u32, Phase), MemoEntry>>,
}

struct MemoEntry {
    at: Instant,
    payload: PhasePayload,
}

impl ReadMemo {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn get(&self, row: u32, phase: Phase) -> Option<PhasePayload> {
        let entries = self.entries.lock().await;
        entries
            .get(&(row, phase))
            .filter(|e| e.at.elapsed() < self.ttl)
            .map(|e| e.payload.clone())
    }

    pub(crate) async fn put(&self, row: u32, phase: Phase, payload: PhasePayload) {
        let mut entries = self.entries.lock().await;
        entries.retain(|_, e| e.at.elapsed() < self.ttl);
        entries.insert(
            (row, phase),
            MemoEntry {
                at: Instant::now(),
                payload,
            },
        );
    }
}
