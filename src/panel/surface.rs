//! Drawing-capability seam between the panel core and the terminal layer.
//!
//! The core never owns a terminal: every renderer draws through [`Surface`],
//! and the embedding dashboard decides whether that is a curses window, a
//! widget-framework frame, or the in-crate [`TextSurface`] character grid.
//! `TextSurface` doubles as the headless path for golden-frame tests.

use crate::panel::theme::{Style, Theme};
use crate::telemetry::format::display_value;
use crate::telemetry::snapshot::EngineReading;

/// Screen geometry handed to a page draw call by the external page-sizing
/// capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageGeometry {
    /// Total terminal rows available.
    pub height: u16,
    /// Total terminal columns available.
    pub width: u16,
    /// First row usable by page content (below any chrome).
    pub first_row: u16,
}

#[allow(missing_docs)]
impl PageGeometry {
    #[must_use]
    pub const fn new(height: u16, width: u16, first_row: u16) -> Self {
        Self {
            height,
            width,
            first_row,
        }
    }
}

/// Terminal-cell drawing capabilities consumed by the renderers.
///
/// Implementations own clipping, color mapping, and gauge scaling; the
/// renderers only decide *where* things go.
pub trait Surface {
    /// Horizontal separator line of `width` cells.
    fn hline(&mut self, row: u16, col: u16, width: u16);

    /// Styled text run.
    fn text(&mut self, row: u16, col: u16, content: &str, style: Style);

    /// Compact `label: value` cell.
    fn name_value(&mut self, row: u16, col: u16, label: &str, value: &str, theme: &Theme);

    /// Horizontal utilization gauge for one engine. The gauge owns scaling
    /// against the reading's `max` and its own on/off presentation.
    fn linear_gauge(
        &mut self,
        row: u16,
        col: u16,
        width: u16,
        label: &str,
        reading: &EngineReading,
        theme: &Theme,
    );
}

/// Plain character-grid surface with clipped writes.
///
/// Styles are accepted and discarded; the grid carries glyphs only, which is
/// exactly what golden-frame assertions want to compare.
#[derive(Debug, Clone)]
pub struct TextSurface {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl TextSurface {
    /// Blank surface of the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; usize::from(width) * usize::from(height)],
        }
    }

    /// One row as a right-trimmed string.
    #[must_use]
    pub fn line(&self, row: u16) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = usize::from(row) * usize::from(self.width);
        let end = start + usize::from(self.width);
        let raw: String = self.cells[start..end].iter().collect();
        raw.trim_end().to_owned()
    }

    /// All rows, right-trimmed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|row| self.line(row)).collect()
    }

    fn put_str(&mut self, row: u16, col: u16, content: &str) {
        if row >= self.height {
            return;
        }
        for (offset, ch) in content.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                return;
            };
            let Some(cell_col) = col.checked_add(offset) else {
                return;
            };
            if cell_col >= self.width {
                return;
            }
            let idx = usize::from(row) * usize::from(self.width) + usize::from(cell_col);
            self.cells[idx] = ch;
        }
    }
}

impl Surface for TextSurface {
    fn hline(&mut self, row: u16, col: u16, width: u16) {
        let run: String = std::iter::repeat_n('─', usize::from(width)).collect();
        self.put_str(row, col, &run);
    }

    fn text(&mut self, row: u16, col: u16, content: &str, _style: Style) {
        self.put_str(row, col, content);
    }

    fn name_value(&mut self, row: u16, col: u16, label: &str, value: &str, _theme: &Theme) {
        self.put_str(row, col, &format!("{label}: {value}"));
    }

    fn linear_gauge(
        &mut self,
        row: u16,
        col: u16,
        width: u16,
        label: &str,
        reading: &EngineReading,
        _theme: &Theme,
    ) {
        if width == 0 {
            return;
        }
        self.put_str(row, col, &gauge_text(width, label, reading));
    }
}

/// Render a gauge as fixed-width text: `LABEL [|||   value]`.
fn gauge_text(width: u16, label: &str, reading: &EngineReading) -> String {
    let width = usize::from(width);
    let mut out = String::with_capacity(width);
    out.push_str(label);
    out.push(' ');

    let bar_span = width.saturating_sub(out.chars().count());
    if bar_span >= 2 {
        let inner = bar_span - 2;
        let value = if reading.status {
            display_value(label, reading).unwrap_or_else(|_| "?".to_owned())
        } else {
            "OFF".to_owned()
        };
        let filled = if reading.status {
            let ceiling = reading.max.filter(|max| *max > 0).unwrap_or(reading.curr.max(1));
            usize::try_from(u128::from(reading.curr) * inner as u128 / u128::from(ceiling).max(1))
                .unwrap_or(inner)
                .min(inner)
        } else {
            0
        };

        let mut bar: Vec<char> = (0..inner)
            .map(|i| if i < filled { '|' } else { ' ' })
            .collect();
        // Value overlays the right edge of the bar.
        let value_chars: Vec<char> = value.chars().collect();
        if value_chars.len() <= inner {
            let start = inner - value_chars.len();
            bar[start..].copy_from_slice(&value_chars);
        }
        out.push('[');
        out.extend(bar);
        out.push(']');
    }

    out.chars().take(width).collect()
}
