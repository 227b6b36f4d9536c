//! Compact renderer: dense label/value block for the overview context.

use crate::core::config::PanelConfig;
use crate::panel::layout::Layout;
use crate::panel::surface::Surface;
use crate::panel::theme::Theme;

/// Header label drawn over the separator line. 14 cells wide.
pub const HEADER_LABEL: &str = " [HW engines] ";

/// Draw the resolved layout as a headed label/value grid.
///
/// Rows render at `y + 1 + index`; the row budget consumed (header plus one
/// per layout row) is returned so the caller can reserve vertical space. An
/// empty layout draws nothing and consumes zero rows. Width is divided evenly
/// across each row's cells; degenerate geometry (zero width, zero-cell rows,
/// cells narrower than one column) skips drawing rather than faulting, since
/// a mid-resize terminal can transiently report any of those.
pub fn render_compact<S: Surface>(
    surface: &mut S,
    x: u16,
    y: u16,
    width: u16,
    layout: &Layout,
    theme: &Theme,
) -> u16 {
    if layout.is_empty() || width == 0 {
        return 0;
    }

    surface.hline(y, x + 1, width.saturating_sub(1));
    surface.text(
        y,
        x + width.saturating_sub(13) / 2,
        HEADER_LABEL,
        theme.header_style(),
    );
    draw_rows(surface, x, y.saturating_add(1), width, layout, theme);

    u16::try_from(layout.len()).unwrap_or(u16::MAX).saturating_add(1)
}

/// Config-driven entry point: honors the `compact.show_header` toggle.
///
/// With the header suppressed, rows start at `y` directly and the consumed
/// budget drops by one.
pub fn render_compact_block<S: Surface>(
    surface: &mut S,
    x: u16,
    y: u16,
    width: u16,
    layout: &Layout,
    config: &PanelConfig,
    theme: &Theme,
) -> u16 {
    if config.compact.show_header {
        return render_compact(surface, x, y, width, layout, theme);
    }
    if layout.is_empty() || width == 0 {
        return 0;
    }
    draw_rows(surface, x, y, width, layout, theme);
    u16::try_from(layout.len()).unwrap_or(u16::MAX)
}

fn draw_rows<S: Surface>(
    surface: &mut S,
    x: u16,
    base_y: u16,
    width: u16,
    layout: &Layout,
    theme: &Theme,
) {
    for (gidx, row) in layout.iter().enumerate() {
        let Ok(cells) = u16::try_from(row.len()) else {
            continue;
        };
        if cells == 0 {
            continue;
        }
        let cell_width = (width / cells).saturating_sub(1);
        if cell_width == 0 {
            continue;
        }
        let row_y = base_y.saturating_add(u16::try_from(gidx).unwrap_or(u16::MAX));
        for (idx, cell) in row.iter().enumerate() {
            let idx = u16::try_from(idx).unwrap_or(u16::MAX);
            surface.name_value(
                row_y,
                x + (cell_width + 1) * idx + 1,
                &cell.label,
                &cell.value,
                theme,
            );
        }
    }
}
