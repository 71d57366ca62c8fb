//! # play-state
//!
//! Reactive configuration state for the PlayCharts editor. Thin
//! `RwSignal` wrappers around the pure reducers in `play-core`: every
//! mutation goes through a reducer so the preview and the code panel
//! re-derive from the same snapshot. State is handed down through props,
//! not through a global context.

use leptos::prelude::*;
use play_core::{
    BarStyles, ChartType, DataEntry, EntryKind, EntryPatch, PieOptions, PieStyles,
};

// ============================================================================
// PIE STATE
// ============================================================================

/// Reactive pie chart configuration
#[derive(Clone, Copy)]
pub struct PieState {
    pub segments: RwSignal<Vec<DataEntry>>,
    pub styles: RwSignal<PieStyles>,
    pub options: RwSignal<PieOptions>,
}

impl PieState {
    /// Seed defaults for a fresh session
    pub fn new() -> Self {
        Self {
            segments: RwSignal::new(play_core::seed_entries(EntryKind::Segment)),
            styles: RwSignal::new(PieStyles::default()),
            options: RwSignal::new(PieOptions::default()),
        }
    }

    /// Append a new segment with a fresh id and placeholder styling
    pub fn add_segment(&self) {
        self.segments
            .update(|segments| play_core::add_entry(segments, EntryKind::Segment));
    }

    /// Remove segment by id; no-op on unknown id
    pub fn remove_segment(&self, id: &str) {
        self.segments
            .update(|segments| play_core::remove_entry(segments, id));
    }

    /// Merge a partial update into the segment with `id`; no-op on unknown id
    pub fn update_segment(&self, id: &str, patch: EntryPatch) {
        self.segments
            .update(|segments| play_core::update_entry(segments, id, patch));
    }

    /// Shallow-merge style fields; always succeeds
    pub fn update_style(&self, apply: impl FnOnce(&mut PieStyles)) {
        self.styles.update(apply);
    }

    /// Shallow-merge option fields; always succeeds
    pub fn update_option(&self, apply: impl FnOnce(&mut PieOptions)) {
        self.options.update(apply);
    }
}

impl Default for PieState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// BAR STATE
// ============================================================================

/// Reactive bar chart configuration
#[derive(Clone, Copy)]
pub struct BarState {
    pub data: RwSignal<Vec<DataEntry>>,
    pub styles: RwSignal<BarStyles>,
}

impl BarState {
    /// Seed defaults for a fresh session
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(play_core::seed_entries(EntryKind::Bar)),
            styles: RwSignal::new(BarStyles::default()),
        }
    }

    /// Append a new bar with a fresh id and placeholder styling
    pub fn add_bar(&self) {
        self.data
            .update(|data| play_core::add_entry(data, EntryKind::Bar));
    }

    /// Remove bar by id; no-op on unknown id
    pub fn remove_bar(&self, id: &str) {
        self.data
            .update(|data| play_core::remove_entry(data, id));
    }

    /// Merge a partial update into the bar with `id`; no-op on unknown id
    pub fn update_bar(&self, id: &str, patch: EntryPatch) {
        self.data
            .update(|data| play_core::update_entry(data, id, patch));
    }

    /// Shallow-merge style fields; always succeeds
    pub fn update_style(&self, apply: impl FnOnce(&mut BarStyles)) {
        self.styles.update(apply);
    }
}

impl Default for BarState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// EDITOR STATE
// ============================================================================

/// Top-level editor state: the active chart type plus both slices.
///
/// Both slices live for the whole session so switching chart types keeps the
/// inactive configuration around. Everything is discarded when the page goes
/// away; there is no persistence.
#[derive(Clone, Copy)]
pub struct EditorState {
    pub chart_type: RwSignal<ChartType>,
    pub pie: PieState,
    pub bar: BarState,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            chart_type: RwSignal::new(ChartType::Pie),
            pie: PieState::new(),
            bar: BarState::new(),
        }
    }

    pub fn set_chart_type(&self, chart_type: ChartType) {
        tracing::debug!(?chart_type, "switching chart type");
        self.chart_type.set(chart_type);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
