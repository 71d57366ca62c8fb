//! Chart data entries and the pure reducers that edit them
//!
//! An entry collection is an ordered `Vec`; insertion order is what the user
//! sees in the preview and the legend, so the reducers never sort or reorder.

use crate::{colors, ident::generate_id};
use serde::{Deserialize, Serialize};

/// A single editable data point (pie segment or bar)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    /// Stable identity, immutable after creation
    pub id: String,
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl DataEntry {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Label prefix used when creating entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Segment,
    Bar,
}

impl EntryKind {
    pub fn label_prefix(&self) -> &'static str {
        match self {
            Self::Segment => "Segment",
            Self::Bar => "Bar",
        }
    }
}

/// Partial update for a single entry
///
/// `id` is deliberately absent: identity is immutable after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub label: Option<String>,
    pub value: Option<f64>,
    pub color: Option<String>,
}

impl EntryPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn value(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::default()
        }
    }
}

// ============================================================================
// PURE REDUCERS
// ============================================================================

/// Append a new entry with a fresh id and placeholder styling
///
/// The default label counts from the current collection length, matching the
/// editor's "Segment N" / "Bar N" convention. Always succeeds.
pub fn add_entry(entries: &mut Vec<DataEntry>, kind: EntryKind) {
    let label = format!("{} {}", kind.label_prefix(), entries.len() + 1);
    entries.push(DataEntry::new(label, 10.0, colors::PLACEHOLDER));
}

/// Remove the entry matching `id`; silent no-op if the id is unknown
pub fn remove_entry(entries: &mut Vec<DataEntry>, id: &str) {
    entries.retain(|entry| entry.id != id);
}

/// Merge `patch` into the entry matching `id`
///
/// Other entries are untouched; the collection never changes size here.
/// Silent no-op if the id is unknown. No field validation happens at this
/// level; the editor guards input before it reaches the store.
pub fn update_entry(entries: &mut [DataEntry], id: &str, patch: EntryPatch) {
    if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
        if let Some(label) = patch.label {
            entry.label = label;
        }
        if let Some(value) = patch.value {
            entry.value = value;
        }
        if let Some(color) = patch.color {
            entry.color = color;
        }
    }
}

/// Seed entries created at session start
pub fn seed_entries(kind: EntryKind) -> Vec<DataEntry> {
    let values = [10.0, 20.0, 15.0];
    values
        .iter()
        .zip(colors::SEED)
        .enumerate()
        .map(|(i, (&value, color))| {
            DataEntry::new(format!("{} {}", kind.label_prefix(), i + 1), value, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DataEntry> {
        vec![
            DataEntry {
                id: "a".into(),
                label: "S1".into(),
                value: 10.0,
                color: "#03C171".into(),
            },
            DataEntry {
                id: "b".into(),
                label: "S2".into(),
                value: 0.0,
                color: "#0068CC".into(),
            },
        ]
    }

    #[test]
    fn test_add_appends_with_counted_label() {
        let mut entries = sample();
        add_entry(&mut entries, EntryKind::Segment);
        assert_eq!(entries.len(), 3);
        let added = entries.last().unwrap();
        assert_eq!(added.label, "Segment 3");
        assert_eq!(added.value, 10.0);
        assert_eq!(added.color, colors::PLACEHOLDER);
        assert!(added.id.starts_with('_'));
    }

    #[test]
    fn test_remove_by_id() {
        let mut entries = sample();
        remove_entry(&mut entries, "a");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "b");
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut entries = sample();
        let before = entries.clone();
        remove_entry(&mut entries, "nonexistent");
        assert_eq!(entries, before);
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let mut entries = sample();
        update_entry(&mut entries, "a", EntryPatch::value(42.5));
        assert_eq!(entries[0].value, 42.5);
        assert_eq!(entries[0].label, "S1");
        assert_eq!(entries[0].color, "#03C171");
    }

    #[test]
    fn test_update_leaves_ids_and_other_entries_untouched() {
        let mut entries = sample();
        update_entry(&mut entries, "a", EntryPatch::label("x"));
        assert_eq!(entries[0].id, "a");
        assert_eq!(entries[0].label, "x");
        assert_eq!(entries[1], sample()[1]);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut entries = sample();
        let before = entries.clone();
        update_entry(&mut entries, "nonexistent", EntryPatch::label("x"));
        assert_eq!(entries, before);
    }

    #[test]
    fn test_update_never_resizes() {
        let mut entries = sample();
        update_entry(&mut entries, "b", EntryPatch::color("#FFFFFF"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_seed_entries() {
        let pie = seed_entries(EntryKind::Segment);
        assert_eq!(pie.len(), 3);
        assert_eq!(pie[0].label, "Segment 1");
        assert_eq!(pie[1].value, 20.0);
        assert_eq!(pie[2].color, "#FF0000");

        let bars = seed_entries(EntryKind::Bar);
        assert_eq!(bars[0].label, "Bar 1");
    }
}
