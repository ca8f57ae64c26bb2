//! Phase payload construction from a row snapshot.
//!
//! Pure functions: the store layer fetches the snapshot, these shape it for
//! one wizard phase. Both store backends funnel through here (the script
//! endpoint computes the same shapes server-side; its client re-validates
//! flag counts with [`normalize_flags`]).

use crate::error::CoreError;
use crate::grid;
use crate::layout;
use crate::models::field::FieldSet;
use crate::models::flag::YesNo;
use crate::models::payload::{Edit1Payload, Edit2Payload, PhasePayload, ViewPayload};
use crate::models::phase::Phase;
use crate::models::snapshot::RowSnapshot;
use crate::projection::project;

/// Build the payload for `phase` from one row snapshot.
pub fn build(snapshot: &RowSnapshot, phase: Phase) -> Result<PhasePayload, CoreError> {
    Ok(match phase {
        Phase::Edit1 => PhasePayload::Edit1(edit1(snapshot)?),
        Phase::Edit2 => PhasePayload::Edit2(edit2(snapshot)?),
        Phase::View => PhasePayload::View(view(snapshot)?),
    })
}

/// Phase 1: full demographics plus the current flags.
pub fn edit1(snapshot: &RowSnapshot) -> Result<Edit1Payload, CoreError> {
    let identity = FieldSet::from_pairs(project(
        snapshot.headers(),
        snapshot.values(),
        layout::IDENTITY,
    )?);

    let flag_pairs = project(snapshot.headers(), snapshot.values(), layout::FLAGS)?;
    let (labels, values): (Vec<String>, Vec<String>) = flag_pairs.into_iter().unzip();
    let (flag_labels, flags) = normalize_flags(labels, &values)?;

    Ok(Edit1Payload {
        identity,
        flag_labels,
        flags,
    })
}

/// Phase 2: brief identity merged with the upstream fields, plus the raw
/// classification cell.
pub fn edit2(snapshot: &RowSnapshot) -> Result<Edit2Payload, CoreError> {
    let summary = brief_identity(snapshot)?.merge(FieldSet::from_pairs(project(
        snapshot.headers(),
        snapshot.values(),
        layout::UPSTREAM,
    )?));

    let classification = snapshot
        .cell(grid::col_index(layout::CLASSIFICATION)?)
        .to_string();

    Ok(Edit2Payload {
        summary,
        classification,
    })
}

/// Final view: brief identity merged with upstream fields and the
/// classification column.
pub fn view(snapshot: &RowSnapshot) -> Result<ViewPayload, CoreError> {
    let summary = brief_identity(snapshot)?.merge(FieldSet::from_pairs(project(
        snapshot.headers(),
        snapshot.values(),
        layout::UPSTREAM_FULL,
    )?));

    Ok(ViewPayload { summary })
}

/// Normalize flag columns to exactly [`layout::FLAG_COUNT`] entries.
///
/// When the projection doesn't yield all six columns (header drift, or a
/// truncated response from the script endpoint), the labels fall back to
/// the bare column letters and every flag reads as No.
pub fn normalize_flags(
    labels: Vec<String>,
    values: &[String],
) -> Result<(Vec<String>, Vec<YesNo>), CoreError> {
    let labels = if labels.len() == layout::FLAG_COUNT {
        labels
    } else {
        flag_letter_labels()?
    };

    let flags = if values.len() == layout::FLAG_COUNT {
        values.iter().map(|v| YesNo::normalize(v)).collect()
    } else {
        vec![YesNo::No; layout::FLAG_COUNT]
    };

    Ok((labels, flags))
}

/// The bare letter labels of the flag columns, L through Q.
fn flag_letter_labels() -> Result<Vec<String>, CoreError> {
    let start = grid::col_index(layout::FLAGS.start)?;
    Ok((start..start + layout::FLAG_COUNT)
        .map(grid::col_letter)
        .collect())
}

fn brief_identity(snapshot: &RowSnapshot) -> Result<FieldSet, CoreError> {
    Ok(FieldSet::from_pairs(project(
        snapshot.headers(),
        snapshot.values(),
        layout::IDENTITY_BRIEF,
    )?))
}
