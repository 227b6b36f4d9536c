//! Resolved layout data consumed by the compact renderer.
//!
//! A [`Layout`] is rebuilt from the snapshot every tick; nothing here caches
//! or mutates across draw calls.

use crate::core::errors::Result;
use crate::telemetry::format::display_value;
use crate::telemetry::snapshot::EngineTree;

/// One label/value pair; column order within a row is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCell {
    /// Short display label, e.g. `"NVENC"` or `"DLA0c"`.
    pub label: String,
    /// Pre-formatted display string, e.g. `"614.4MHz"` or `"[OFF]"`.
    pub value: String,
}

impl LayoutCell {
    #[allow(missing_docs)]
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One display row, left to right.
pub type LayoutRow = Vec<LayoutCell>;

/// Full resolved arrangement, top to bottom.
pub type Layout = Vec<LayoutRow>;

/// Generic auto-layout: one row per group, one cell per engine, in snapshot
/// order. Used whenever no curated builder matches the board model.
pub fn fallback_layout(tree: &EngineTree) -> Result<Layout> {
    let mut layout = Layout::with_capacity(tree.len());
    for group in tree {
        let mut row = LayoutRow::with_capacity(group.len());
        for (name, reading) in &group.engines {
            row.push(LayoutCell::new(name.clone(), display_value(name, reading)?));
        }
        layout.push(row);
    }
    Ok(layout)
}
