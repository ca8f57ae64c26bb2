//! Row projection: restrict a (headers, values) pair to a column range.

use crate::error::CoreError;
use crate::grid;
use crate::layout::ColRange;

/// Project the inclusive column `range` to ordered `(header, value)` pairs.
///
/// The range letters resolve through [`grid::col_index`]; each in-range
/// index that has a header emits its `header -> value` pair. Indices past
/// the end of the value row read as empty strings (blank trailing cells in
/// the source table are simply not returned by range reads). Fails only
/// when a range letter is malformed.
pub fn project(
    headers: &[String],
    values: &[String],
    range: ColRange,
) -> Result<Vec<(String, String)>, CoreError> {
    let start = grid::col_index(range.start)? - 1;
    let end = grid::col_index(range.end)? - 1;

    let mut pairs = Vec::new();
    for i in start..=end {
        let Some(header) = headers.get(i) else {
            continue;
        };
        let value = values.get(i).cloned().unwrap_or_default();
        pairs.push((header.clone(), value));
    }

    Ok(pairs)
}
