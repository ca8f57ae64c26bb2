/// A header row plus one value row from the backing table.
///
/// The value row is padded with empty strings up to the header length.
/// Short or missing rows are padded, never rejected — range reads on the
/// backing table behave this way and callers depend on it: an out-of-range
/// row reads as an all-empty record, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    headers: Vec<String>,
    values: Vec<String>,
}

impl RowSnapshot {
    pub fn new(headers: Vec<String>, mut values: Vec<String>) -> Self {
        if values.len() < headers.len() {
            values.resize(headers.len(), String::new());
        }
        Self { headers, values }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Cell value at a 1-based column index; empty when out of range.
    pub fn cell(&self, index: usize) -> &str {
        index
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}
