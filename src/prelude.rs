//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use engine_panel::prelude::*;
//! ```

// Core
pub use crate::core::config::PanelConfig;
pub use crate::core::errors::{EngineError, Result};

// Telemetry
pub use crate::telemetry::format::{display_value, format_value, OFF_LABEL};
pub use crate::telemetry::snapshot::{
    BoardInfo, EngineGroup, EngineReading, EngineSnapshot, EngineTree,
};

// Panel
pub use crate::panel::catalog::{build_layout, resolve, LayoutBuilder, MODEL_CATALOG};
pub use crate::panel::compact::{render_compact, render_compact_block};
pub use crate::panel::gauge_page::render_engine_page;
pub use crate::panel::layout::{fallback_layout, Layout, LayoutCell, LayoutRow};
pub use crate::panel::surface::{PageGeometry, Surface, TextSurface};
pub use crate::panel::theme::{AccessibilityProfile, Theme, ThemePalette};
