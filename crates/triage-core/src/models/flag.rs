use serde::{Deserialize, Serialize};

/// A treatment flag value, stored as the literal strings "Yes" and "No" in
/// the backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Normalize a stored cell value: any casing of "yes" reads as `Yes`,
    /// everything else (including blanks) as `No`.
    pub fn normalize(value: &str) -> Self {
        if value.eq_ignore_ascii_case("yes") {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}
