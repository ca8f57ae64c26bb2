use serde::{Deserialize, Serialize};

/// One labeled cell value from a projected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// An ordered set of labeled values projected from one row.
///
/// Order follows the source columns. Serialized as a plain list so clients
/// can render fields in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(Vec<Field>);

impl FieldSet {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(label, value)| Field { label, value })
                .collect(),
        )
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.0.iter()
    }

    /// Append `other`, dropping any earlier entry that shares a label.
    /// Later entries win, so a merge of disjoint ranges stays in column
    /// order while collisions resolve toward the second set.
    pub fn merge(mut self, other: FieldSet) -> FieldSet {
        self.0.retain(|f| other.get(&f.label).is_none());
        self.0.extend(other.0);
        self
    }
}
