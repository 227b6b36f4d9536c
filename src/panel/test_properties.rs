//! Property-based tests for panel invariants.
//!
//! Uses `proptest` to verify the behaviors that hold for *any* input:
//! model resolution is case-insensitive and first-match, the fallback layout
//! mirrors snapshot shape, compact cells never overlap, and display-name
//! derivation is total.

use proptest::prelude::*;

use super::catalog::{resolve, MODEL_CATALOG};
use super::compact::render_compact;
use super::gauge_page::engine_display_name;
use super::layout::{fallback_layout, LayoutCell};
use super::surface::Surface;
use super::theme::{Style, Theme};
use crate::telemetry::snapshot::{EngineGroup, EngineReading, EngineTree};

// ──────────────────── strategies ────────────────────

/// Noise that cannot spell a catalog pattern: every pattern contains a space.
fn arb_noise() -> impl Strategy<Value = String> {
    "[0-9]{0,8}"
}

fn arb_unit() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("k".to_owned()),
        Just("M".to_owned()),
        Just("G".to_owned()),
        Just("%".to_owned()),
    ]
}

fn arb_reading() -> impl Strategy<Value = EngineReading> {
    (any::<bool>(), 0u64..10_000_000, arb_unit())
        .prop_map(|(status, curr, unit)| EngineReading::new(status, curr, unit))
}

fn arb_group() -> impl Strategy<Value = EngineGroup> {
    (
        "[A-Z]{2,6}",
        proptest::collection::vec(("[A-Z]{2,6}(_[A-Z0-9]{1,4}){0,2}", arb_reading()), 1..4),
    )
        .prop_map(|(name, engines)| EngineGroup { name, engines })
}

fn arb_tree() -> impl Strategy<Value = EngineTree> {
    proptest::collection::vec(arb_group(), 1..6).prop_map(EngineTree)
}

// ──────────────────── recording surface ────────────────────

/// Surface that records cell placements instead of drawing.
#[derive(Default)]
struct RecordingSurface {
    /// (row, col, rendered width) per name/value cell.
    cells: Vec<(u16, u16, usize)>,
}

impl Surface for RecordingSurface {
    fn hline(&mut self, _row: u16, _col: u16, _width: u16) {}

    fn text(&mut self, _row: u16, _col: u16, _content: &str, _style: Style) {}

    fn name_value(&mut self, row: u16, col: u16, label: &str, value: &str, _theme: &Theme) {
        self.cells
            .push((row, col, label.chars().count() + 2 + value.chars().count()));
    }

    fn linear_gauge(
        &mut self,
        _row: u16,
        _col: u16,
        _width: u16,
        _label: &str,
        _reading: &EngineReading,
        _theme: &Theme,
    ) {
    }
}

// ──────────────────── properties ────────────────────

proptest! {
    /// Any model string embedding a catalog pattern, in any character case,
    /// resolves to that pattern's builder.
    #[test]
    fn resolution_ignores_case_and_surrounding_text(
        entry in 0usize..3,
        prefix in arb_noise(),
        suffix in arb_noise(),
        seed in any::<u64>(),
    ) {
        let (pattern, builder) = MODEL_CATALOG[entry];
        let mangled: String = pattern
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if seed >> (i % 64) & 1 == 1 {
                    ch.to_ascii_uppercase()
                } else {
                    ch
                }
            })
            .collect();
        let model = format!("{prefix}{mangled}{suffix}");
        let resolved = resolve(&model);
        prop_assert!(resolved.is_some(), "{model:?} failed to resolve");
        prop_assert!(std::ptr::fn_addr_eq(resolved.unwrap(), builder));
    }

    /// Models containing no catalog pattern resolve to nothing.
    #[test]
    fn patternless_models_resolve_to_none(model in arb_noise()) {
        prop_assert!(resolve(&model).is_none());
    }

    /// The fallback layout has exactly one row per group and one cell per
    /// engine, labeled with the full engine key, in snapshot order.
    #[test]
    fn fallback_mirrors_snapshot_shape(tree in arb_tree()) {
        let layout = fallback_layout(&tree).unwrap();
        prop_assert_eq!(layout.len(), tree.len());
        for (row, group) in layout.iter().zip(tree.iter()) {
            prop_assert_eq!(row.len(), group.len());
            for (cell, (key, _)) in row.iter().zip(&group.engines) {
                prop_assert_eq!(&cell.label, key);
            }
        }
    }

    /// Compact cells within a row occupy disjoint column spans that stay
    /// inside the panel width, for any geometry.
    #[test]
    fn compact_cells_never_overlap(
        width in 1u16..=300,
        shape in proptest::collection::vec(1usize..=5, 1..=6),
    ) {
        let layout: Vec<Vec<LayoutCell>> = shape
            .iter()
            .map(|cells| (0..*cells).map(|i| LayoutCell::new(format!("E{i}"), "1MHz")).collect())
            .collect();
        let mut surface = RecordingSurface::default();
        let consumed = render_compact(&mut surface, 0, 0, width, &layout, &Theme::default());
        prop_assert_eq!(usize::from(consumed), layout.len() + 1);

        for (gidx, row) in layout.iter().enumerate() {
            let cells = u16::try_from(row.len()).unwrap();
            let cell_width = (width / cells).saturating_sub(1);
            let row_y = 1 + u16::try_from(gidx).unwrap();
            let mut placed: Vec<u16> = surface
                .cells
                .iter()
                .filter(|(r, _, _)| *r == row_y)
                .map(|(_, col, _)| *col)
                .collect();
            if cell_width == 0 {
                prop_assert!(placed.is_empty(), "degenerate row must not draw");
                continue;
            }
            placed.sort_unstable();
            prop_assert_eq!(placed.len(), row.len());
            for pair in placed.windows(2) {
                prop_assert!(
                    pair[1] - pair[0] > cell_width,
                    "cells at {} and {} overlap within width {cell_width}",
                    pair[0],
                    pair[1]
                );
            }
            let last = *placed.last().unwrap();
            prop_assert!(last + cell_width <= width, "last cell spills past the panel edge");
        }
    }

    /// Display-name derivation is total and loses only the group prefix.
    #[test]
    fn display_name_drops_at_most_the_prefix(
        key in "[A-Z]{1,6}(_[A-Z0-9]{1,4}){0,3}",
        group_len in 1usize..4,
    ) {
        let name = engine_display_name(&key, group_len);
        if group_len == 1 || !key.contains('_') {
            prop_assert_eq!(name, key);
        } else {
            let parts: Vec<&str> = key.split('_').collect();
            prop_assert_eq!(name, parts[1..].join(" "));
        }
    }
}
