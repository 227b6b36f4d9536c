//! Reading accessor: raw readings to display strings.
//!
//! Pure functions; same input always yields the same output. A reading whose
//! unit the formatter does not understand surfaces as a
//! [`EngineError::MalformedReading`] rather than being masked with a default.

use crate::core::errors::{EngineError, Result};
use crate::telemetry::snapshot::EngineReading;

/// Display string for an engine that is powered off.
pub const OFF_LABEL: &str = "[OFF]";

/// Frequency ladder used once a reading is normalized to Hz.
const HZ_LADDER: [(f64, &str); 3] = [
    (1_000_000_000.0, "GHz"),
    (1_000_000.0, "MHz"),
    (1_000.0, "kHz"),
];

/// Format a raw `(curr, unit)` pair into a human-readable value.
///
/// Frequencies arrive magnitude-scaled (`"k"` means kHz ticks) and are
/// re-scaled to the largest ladder unit; `"%"` passes through.
pub fn format_value(name: &str, curr: u64, unit: &str) -> Result<String> {
    let multiplier = match unit {
        "" => 1.0,
        "k" => 1_000.0,
        "M" => 1_000_000.0,
        "G" => 1_000_000_000.0,
        "%" => return Ok(format!("{curr}%")),
        other => {
            return Err(EngineError::MalformedReading {
                name: name.to_owned(),
                details: format!("unknown unit {other:?}"),
            });
        }
    };

    #[allow(clippy::cast_precision_loss)]
    let hz = curr as f64 * multiplier;
    for (div, label) in HZ_LADDER {
        if hz >= div {
            return Ok(format!("{}{label}", trim_decimal(hz / div)));
        }
    }
    Ok(format!("{}Hz", trim_decimal(hz)))
}

/// Display string for a reading: `"[OFF]"` when inactive, formatted value
/// otherwise.
pub fn display_value(name: &str, reading: &EngineReading) -> Result<String> {
    if reading.status {
        format_value(name, reading.curr, &reading.unit)
    } else {
        Ok(OFF_LABEL.to_owned())
    }
}

/// One decimal place, with a trailing `.0` stripped.
fn trim_decimal(value: f64) -> String {
    let rendered = format!("{value:.1}");
    rendered
        .strip_suffix(".0")
        .map_or(rendered.clone(), ToOwned::to_owned)
}
