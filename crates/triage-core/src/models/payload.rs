use serde::{Deserialize, Serialize};

use super::field::FieldSet;
use super::flag::YesNo;
use super::phase::Phase;
use super::priority::Priority;

/// Phase-1 view: demographics plus the six treatment flags.
///
/// `flag_labels` and `flags` are parallel, in header order, and always
/// exactly six entries long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit1Payload {
    pub identity: FieldSet,
    pub flag_labels: Vec<String>,
    pub flags: Vec<YesNo>,
}

/// Phase-2 view: brief identity merged with the upstream fields, plus the
/// current classification as the raw cell value (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit2Payload {
    pub summary: FieldSet,
    pub classification: String,
}

impl Edit2Payload {
    /// What the priority selector should preselect: the stored value when
    /// it parses, otherwise the first allowed priority.
    pub fn selector_default(&self) -> Priority {
        Priority::parse(&self.classification).unwrap_or(Priority::ALL[0])
    }
}

/// Terminal read-only summary after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPayload {
    pub summary: FieldSet,
}

/// A payload for exactly one wizard phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PhasePayload {
    Edit1(Edit1Payload),
    Edit2(Edit2Payload),
    View(ViewPayload),
}

impl PhasePayload {
    pub fn phase(&self) -> Phase {
        match self {
            PhasePayload::Edit1(_) => Phase::Edit1,
            PhasePayload::Edit2(_) => Phase::Edit2,
            PhasePayload::View(_) => Phase::View,
        }
    }
}
