//! # play-components
//!
//! Leptos UI components for the PlayCharts editor: the chart-type header,
//! the per-chart editor forms, the generated-code panel, and the preview
//! frame with image export. All state flows in through explicit props from
//! `play-state`; nothing here owns configuration.

pub mod app;
pub mod bar_editor;
pub mod code_panel;
pub mod controls;
pub mod export;
pub mod header;
pub mod pie_editor;
pub mod preview_header;

pub use app::*;
pub use bar_editor::*;
pub use code_panel::*;
pub use controls::*;
pub use header::*;
pub use pie_editor::*;
pub use preview_header::*;
