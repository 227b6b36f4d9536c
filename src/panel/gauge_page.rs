//! Detail renderer: one horizontal gauge per engine, grouped by block.
//!
//! This page bypasses the curated catalog — in detail mode every group and
//! engine in the snapshot is shown, two terminal rows per group (label row +
//! gauge row), in snapshot order.

use crate::panel::surface::{PageGeometry, Surface};
use crate::panel::theme::Theme;
use crate::telemetry::snapshot::EngineTree;

/// Display name for an engine key within a group of `group_len` engines.
///
/// Keys encode an optional category prefix joined by `_` (`"DLA0_CORE"`).
/// When the group holds several engines and the key carries a prefix, the
/// prefix is dropped and the remainder joined by spaces; otherwise the full
/// key is the name. This is a naming convention of the telemetry source, not
/// a structural guarantee — pure string transform, no validation.
#[must_use]
pub fn engine_display_name(key: &str, group_len: usize) -> String {
    let parts: Vec<&str> = key.split('_').collect();
    if group_len > 1 && parts.len() > 1 {
        parts[1..].join(" ")
    } else {
        key.to_owned()
    }
}

/// Whether the group label row is drawn for this engine cell.
///
/// Grouping is only signaled when it is informative: several engines in the
/// group AND a prefixed key.
#[must_use]
pub fn shows_group_label(key: &str, group_len: usize) -> bool {
    group_len > 1 && key.contains('_')
}

/// Draw every engine group as labeled horizontal gauges.
///
/// Geometry comes from the external page-sizing capability each call; a
/// gauge area narrower than one cell skips drawing (transient resize state),
/// and the surface clips anything past the reported height.
pub fn render_engine_page<S: Surface>(
    surface: &mut S,
    geometry: PageGeometry,
    tree: &EngineTree,
    theme: &Theme,
) {
    let offset_x = 1u16;
    let gauge_width = geometry.width.saturating_sub(2);
    if gauge_width == 0 {
        return;
    }

    let mut row = geometry.first_row.saturating_add(2);
    for group in tree {
        let Ok(count) = u16::try_from(group.len()) else {
            continue;
        };
        if count == 0 {
            continue;
        }
        let cell_width = (gauge_width / count).saturating_sub(1);
        if cell_width == 0 {
            row = row.saturating_add(2);
            continue;
        }

        for (idx, (key, reading)) in group.engines.iter().enumerate() {
            let idx = u16::try_from(idx).unwrap_or(u16::MAX);
            let col = offset_x.saturating_add((cell_width + 1).saturating_mul(idx));
            if shows_group_label(key, group.len()) {
                surface.text(row, col, &group.name, theme.group_label_style());
            }
            let label = engine_display_name(key, group.len());
            surface.linear_gauge(
                row.saturating_add(1),
                col,
                cell_width,
                &label,
                reading,
                theme,
            );
        }
        row = row.saturating_add(2);
    }
}
