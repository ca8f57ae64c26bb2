use std::fmt;

use serde::{Deserialize, Serialize};

/// A wizard stage, carried in the `mode` navigation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Edit1,
    Edit2,
    View,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Edit1 => "edit1",
            Phase::Edit2 => "edit2",
            Phase::View => "view",
        }
    }

    /// Parse a `mode` parameter. Unknown values are `None`; callers default
    /// to [`Phase::Edit1`].
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "edit1" => Some(Phase::Edit1),
            "edit2" => Some(Phase::Edit2),
            "view" => Some(Phase::View),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
