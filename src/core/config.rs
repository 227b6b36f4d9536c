//! Panel configuration: TOML file + smart defaults.
//!
//! Presentation knobs only. Nothing here touches hardware discovery or the
//! terminal lifecycle; the resolved [`crate::panel::theme::Theme`] is passed
//! explicitly into every render call instead of living in process globals.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use crate::core::errors::{EngineError, Result};

/// Full panel configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PanelConfig {
    pub theme: ThemeConfig,
    pub compact: CompactConfig,
}

/// Theme selection knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Contrast profile: `"standard"` or `"high"`.
    pub contrast: String,
    /// Disable color output regardless of terminal support.
    pub no_color: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            contrast: "standard".to_owned(),
            no_color: false,
        }
    }
}

/// Compact-block knobs for the overview context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompactConfig {
    /// Draw the separator + `[HW engines]` header above the block.
    pub show_header: bool,
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self { show_header: true }
    }
}

impl PanelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the theme layer cannot represent.
    pub fn validate(&self) -> Result<()> {
        match self.theme.contrast.as_str() {
            "standard" | "high" => Ok(()),
            other => Err(EngineError::InvalidConfig {
                details: format!("unknown contrast profile {other:?} (expected standard|high)"),
            }),
        }
    }
}
