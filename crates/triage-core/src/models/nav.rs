use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Navigation state: which row and which wizard stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavParams {
    pub row: u32,
    pub mode: Phase,
}

impl NavParams {
    pub fn new(row: u32, mode: Phase) -> Self {
        Self { row, mode }
    }

    /// Parse navigation query parameters.
    ///
    /// Forgiving by contract: a missing, non-numeric, or below-1 `row`
    /// collapses to row 1; a missing or unknown `mode` collapses to
    /// [`Phase::Edit1`].
    pub fn from_query(row: Option<&str>, mode: Option<&str>) -> Self {
        let row = row
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|r| *r >= 1)
            .unwrap_or(1);
        let mode = mode.and_then(Phase::parse).unwrap_or(Phase::Edit1);
        Self { row, mode }
    }
}
