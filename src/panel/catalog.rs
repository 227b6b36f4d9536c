//! Curated per-model layout catalog and resolver.
//!
//! Raw engine names differ across hardware families, and a naive alphabetical
//! dump would split logically paired engines (the two decode cores of a DLA
//! block, the two JPEG engines) across unrelated rows. Each known family
//! therefore gets a hand-curated builder that pins which group/engine keys
//! appear, how they pair per row, and the short labels shown for them.
//! Supporting a new board is one table entry plus one builder.

use crate::core::errors::{EngineError, Result};
use crate::panel::layout::{fallback_layout, Layout, LayoutCell};
use crate::telemetry::format::display_value;
use crate::telemetry::snapshot::{BoardInfo, EngineTree};

/// Pure layout builder keyed by a board-model substring.
pub type LayoutBuilder = fn(&EngineTree) -> Result<Layout>;

/// Ordered catalog of known hardware families. First match wins, so entries
/// go from most to least specific wherever substrings could overlap.
pub const MODEL_CATALOG: &[(&str, LayoutBuilder)] = &[
    ("agx orin", build_agx_orin),
    ("agx xavier", build_agx_xavier),
    ("jetson nano", build_jetson_nano),
];

/// Find the curated builder for a model string, if any.
///
/// Case-insensitive substring match over [`MODEL_CATALOG`] in declaration
/// order.
#[must_use]
pub fn resolve(model: &str) -> Option<LayoutBuilder> {
    let model = model.to_lowercase();
    MODEL_CATALOG
        .iter()
        .find(|(pattern, _)| model.contains(&pattern.to_lowercase()))
        .map(|(_, builder)| *builder)
}

/// Resolve and build the display layout for one tick.
///
/// Curated families get their curated arrangement; everything else falls back
/// to the generic one-row-per-group auto-layout. A curated builder that
/// dereferences a key missing from the snapshot surfaces
/// [`EngineError::EngineLookup`] — catalog curation and hardware discovery
/// are maintained independently, and a mismatch is a defect to report, not a
/// state to paper over.
pub fn build_layout(board: &BoardInfo, tree: &EngineTree) -> Result<Layout> {
    match resolve(&board.model) {
        Some(builder) => builder(tree),
        None => fallback_layout(tree),
    }
}

/// One curated cell: labeled display value of `group.engine`.
fn cell(tree: &EngineTree, group: &str, engine: &str, label: &str) -> Result<LayoutCell> {
    let reading = tree
        .get(group)
        .and_then(|g| g.get(engine))
        .ok_or_else(|| EngineError::lookup(group, engine))?;
    Ok(LayoutCell::new(label, display_value(engine, reading)?))
}

fn build_agx_orin(tree: &EngineTree) -> Result<Layout> {
    Ok(vec![
        vec![
            cell(tree, "APE", "APE", "APE")?,
            cell(tree, "PVA0", "PVA0_CPU_AXI", "PVA0a")?,
        ],
        vec![
            cell(tree, "DLA0", "DLA0_CORE", "DLA0c")?,
            cell(tree, "DLA1", "DLA1_CORE", "DLA1c")?,
        ],
        vec![
            cell(tree, "NVENC", "NVENC", "NVENC")?,
            cell(tree, "NVDEC", "NVDEC", "NVDEC")?,
        ],
        vec![
            cell(tree, "NVJPG", "NVJPG", "NVJPG")?,
            cell(tree, "NVJPG", "NVJPG1", "NVJPG1")?,
        ],
        vec![
            cell(tree, "SE", "SE", "SE")?,
            cell(tree, "VIC", "VIC", "VIC")?,
        ],
    ])
}

fn build_agx_xavier(tree: &EngineTree) -> Result<Layout> {
    Ok(vec![
        vec![
            cell(tree, "APE", "APE", "APE")?,
            cell(tree, "CVNAS", "CVNAS", "CVNAS")?,
        ],
        vec![
            cell(tree, "DLA0", "DLA0_CORE", "DLA0c")?,
            cell(tree, "DLA1", "DLA1_CORE", "DLA1c")?,
        ],
        vec![
            cell(tree, "NVENC", "NVENC", "NVENC")?,
            cell(tree, "NVDEC", "NVDEC", "NVDEC")?,
        ],
        vec![
            cell(tree, "NVJPG", "NVJPG", "NVJPG")?,
            cell(tree, "PVA0", "PVA0_AXI", "PVA0a")?,
        ],
        vec![
            cell(tree, "SE", "SE", "SE")?,
            cell(tree, "VIC", "VIC", "VIC")?,
        ],
    ])
}

fn build_jetson_nano(tree: &EngineTree) -> Result<Layout> {
    Ok(vec![
        vec![cell(tree, "APE", "APE", "APE")?],
        vec![
            cell(tree, "NVENC", "NVENC", "NVENC")?,
            cell(tree, "NVDEC", "NVDEC", "NVDEC")?,
        ],
        vec![
            cell(tree, "NVJPG", "NVJPG", "NVJPG")?,
            cell(tree, "SE", "SE", "SE")?,
        ],
    ])
}
