//! Shared theme tokens and accessibility hooks for panel rendering.
//!
//! Presentation state is never ambient: the resolved [`Theme`] travels as an
//! explicit parameter into every renderer call.

#![allow(missing_docs)]

use std::env;

use crate::core::config::PanelConfig;

/// Contrast profile used by theme token selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    Standard,
    High,
}

/// Color output mode for compatibility with `NO_COLOR` and terminal policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

/// Accessibility knobs consumed by theme primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityProfile {
    pub contrast: ContrastMode,
    pub color: ColorMode,
}

impl Default for AccessibilityProfile {
    fn default() -> Self {
        Self {
            contrast: ContrastMode::Standard,
            color: ColorMode::Enabled,
        }
    }
}

impl AccessibilityProfile {
    #[must_use]
    pub const fn new(contrast: ContrastMode, no_color: bool) -> Self {
        Self {
            contrast,
            color: if no_color {
                ColorMode::Disabled
            } else {
                ColorMode::Enabled
            },
        }
    }

    /// Honor the `NO_COLOR` convention on top of configured values.
    #[must_use]
    pub fn from_environment(contrast: ContrastMode) -> Self {
        let no_color = env::var_os("NO_COLOR").is_some();
        Self::new(contrast, no_color)
    }

    #[must_use]
    pub const fn no_color(self) -> bool {
        matches!(self.color, ColorMode::Disabled)
    }
}

/// Semantic token category independent of concrete color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticToken {
    Accent,
    Ok,
    Warning,
    Muted,
    Neutral,
}

/// Render-facing palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub token: SemanticToken,
    pub color_tag: &'static str,
}

impl PaletteEntry {
    const fn new(token: SemanticToken, color_tag: &'static str) -> Self {
        Self { token, color_tag }
    }
}

/// Shared semantic palette for the panel surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub accent: PaletteEntry,
    pub ok: PaletteEntry,
    pub warning: PaletteEntry,
    pub muted: PaletteEntry,
    pub neutral: PaletteEntry,
}

impl ThemePalette {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            accent: PaletteEntry::new(SemanticToken::Accent, "cyan"),
            ok: PaletteEntry::new(SemanticToken::Ok, "green"),
            warning: PaletteEntry::new(SemanticToken::Warning, "yellow"),
            muted: PaletteEntry::new(SemanticToken::Muted, "dark-grey"),
            neutral: PaletteEntry::new(SemanticToken::Neutral, "white"),
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            accent: PaletteEntry::new(SemanticToken::Accent, "bright-cyan"),
            ok: PaletteEntry::new(SemanticToken::Ok, "bright-green"),
            warning: PaletteEntry::new(SemanticToken::Warning, "bright-yellow"),
            muted: PaletteEntry::new(SemanticToken::Muted, "grey"),
            neutral: PaletteEntry::new(SemanticToken::Neutral, "bright-white"),
        }
    }

    #[must_use]
    pub const fn from_contrast(mode: ContrastMode) -> Self {
        match mode {
            ContrastMode::Standard => Self::standard(),
            ContrastMode::High => Self::high_contrast(),
        }
    }
}

/// Text attribute bundle handed to surfaces alongside content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub entry: PaletteEntry,
    pub bold: bool,
}

impl Style {
    #[must_use]
    pub const fn plain(entry: PaletteEntry) -> Self {
        Self { entry, bold: false }
    }

    #[must_use]
    pub const fn bold(entry: PaletteEntry) -> Self {
        Self { entry, bold: true }
    }
}

/// Full render theme (palette + accessibility profile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accessibility: AccessibilityProfile,
    pub palette: ThemePalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accessibility: AccessibilityProfile::default(),
            palette: ThemePalette::standard(),
        }
    }
}

impl Theme {
    /// Resolve a theme from validated configuration.
    #[must_use]
    pub fn for_config(config: &PanelConfig) -> Self {
        let contrast = if config.theme.contrast == "high" {
            ContrastMode::High
        } else {
            ContrastMode::Standard
        };
        let accessibility = AccessibilityProfile::new(contrast, config.theme.no_color);
        Self {
            palette: ThemePalette::from_contrast(contrast),
            accessibility,
        }
    }

    /// Bold header emphasis for the compact separator line.
    #[must_use]
    pub const fn header_style(&self) -> Style {
        Style::bold(self.palette.neutral)
    }

    /// Accent used for group labels above gauges.
    #[must_use]
    pub const fn group_label_style(&self) -> Style {
        Style::bold(self.palette.accent)
    }

    /// Label half of a compact name/value cell.
    #[must_use]
    pub const fn label_style(&self) -> Style {
        Style::bold(self.palette.neutral)
    }

    /// Value half of a compact name/value cell.
    #[must_use]
    pub const fn value_style(&self) -> Style {
        Style::plain(self.palette.neutral)
    }
}
