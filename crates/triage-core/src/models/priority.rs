use serde::{Deserialize, Serialize};

/// The triage classification written to column V.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Priority 1")]
    One,
    #[serde(rename = "Priority 2")]
    Two,
    #[serde(rename = "Priority 3")]
    Three,
}

impl Priority {
    /// Selector order. The first entry doubles as the default when the
    /// stored value is empty or unrecognized.
    pub const ALL: [Priority; 3] = [Priority::One, Priority::Two, Priority::Three];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::One => "Priority 1",
            Priority::Two => "Priority 2",
            Priority::Three => "Priority 3",
        }
    }

    /// Strict parse of a stored classification. An empty cell is a valid
    /// "unset" state and parses to `None`, as does anything outside the
    /// three allowed values.
    pub fn parse(value: &str) -> Option<Self> {
        Priority::ALL.into_iter().find(|p| p.as_str() == value)
    }
}
