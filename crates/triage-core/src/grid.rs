//! Spreadsheet-style column addressing.
//!
//! Column labels are base-26 numerals with digits 'A'=1..'Z'=26 and no zero
//! digit, most significant first: A=1, Z=26, AA=27.

use crate::error::CoreError;

/// Convert a column label to its 1-based index.
///
/// Lowercase input is accepted and treated as uppercase. Empty or
/// non-alphabetic labels are caller bugs, surfaced as [`CoreError::InvalidColumn`].
pub fn col_index(label: &str) -> Result<usize, CoreError> {
    if label.is_empty() {
        return Err(CoreError::InvalidColumn(label.to_string()));
    }

    let mut index = 0usize;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(CoreError::InvalidColumn(label.to_string()));
        }
        let digit = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
        index = index * 26 + digit;
    }

    Ok(index)
}

/// Convert a 1-based column index to its letter label.
///
/// # Panics
///
/// Panics if `index` is zero — column indices start at 1.
pub fn col_letter(index: usize) -> String {
    assert!(index >= 1, "column index must be >= 1");

    let mut label = String::new();
    let mut n = index;
    while n > 0 {
        // Shift into a zero-based digit before dividing; the numeral system
        // has no zero digit, so plain base-26 division doesn't apply.
        n -= 1;
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }

    label
}
