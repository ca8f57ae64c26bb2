use triage_core::models::payload::Edit2Payload;

/// The phase-2 payload carried forward in memory after a flags submission,
/// so the follow-on screen renders without another read.
#[derive(Debug, Clone)]
pub struct BufferedNext {
    pub row: u32,
    pub payload: Edit2Payload,
}

/// Per-session wizard state.
///
/// The only thing a session holds is the buffered phase-2 handoff. It is
/// cleared after a successful classification write and on explicit restart;
/// a buffer built for one row is never presented for another.
#[derive(Debug, Default)]
pub struct Session {
    buffered: Option<BufferedNext>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffered(&self) -> Option<&BufferedNext> {
        self.buffered.as_ref()
    }

    pub(crate) fn hold(&mut self, row: u32, payload: Edit2Payload) {
        self.buffered = Some(BufferedNext { row, payload });
    }

    pub(crate) fn clear(&mut self) {
        self.buffered = None;
    }
}
