//! Typed, read-only views of the per-tick engine snapshot.
//!
//! The snapshot arrives from an external telemetry provider as a JSON-shaped
//! tree: `board.model` plus a two-level mapping of engine groups to named
//! readings. Group and engine order carries meaning (it is the top-to-bottom /
//! left-to-right display order), so deserialization preserves document order
//! instead of going through a sorted or hashed map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::core::errors::Result;

/// One accelerator reading, immutable for the duration of a draw call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineReading {
    /// Whether the engine is powered/clocked at all.
    pub status: bool,
    /// Current value in `unit`-scaled ticks (frequencies arrive k-scaled).
    pub curr: u64,
    /// Magnitude unit: `""`, `"k"`, `"M"`, `"G"`, or `"%"`.
    pub unit: String,
    /// Lowest value the provider reports for this engine, if known.
    #[serde(default)]
    pub min: Option<u64>,
    /// Scaling ceiling for gauges, if known.
    #[serde(default)]
    pub max: Option<u64>,
}

#[allow(missing_docs)]
impl EngineReading {
    #[must_use]
    pub fn new(status: bool, curr: u64, unit: impl Into<String>) -> Self {
        Self {
            status,
            curr,
            unit: unit.into(),
            min: None,
            max: None,
        }
    }

    /// Same reading with a known scaling ceiling for gauges.
    #[must_use]
    pub fn with_max(mut self, max: u64) -> Self {
        self.max = Some(max);
        self
    }
}

/// A named cluster of related engines sharing a hardware block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineGroup {
    /// Group name, e.g. `"APE"` or `"DLA0"`.
    pub name: String,
    /// Engines in snapshot order; keys may carry a `_`-joined category prefix.
    pub engines: Vec<(String, EngineReading)>,
}

impl EngineGroup {
    /// Look up an engine by its raw key.
    #[must_use]
    pub fn get(&self, engine: &str) -> Option<&EngineReading> {
        self.engines
            .iter()
            .find(|(name, _)| name == engine)
            .map(|(_, reading)| reading)
    }

    /// Number of engines in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether the group carries no engines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

/// Ordered collection of all engine groups reported this tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineTree(pub Vec<EngineGroup>);

impl EngineTree {
    /// Look up a group by name.
    #[must_use]
    pub fn get(&self, group: &str) -> Option<&EngineGroup> {
        self.0.iter().find(|g| g.name == group)
    }

    /// Groups in snapshot order.
    pub fn iter(&self) -> std::slice::Iter<'_, EngineGroup> {
        self.0.iter()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot reported no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a EngineTree {
    type Item = &'a EngineGroup;
    type IntoIter = std::slice::Iter<'a, EngineGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// serde's derived map handling would round-trip through an unordered map and
// lose document order, so both map levels use explicit visitors.

struct OrderedReadings(Vec<(String, EngineReading)>);

impl<'de> Deserialize<'de> for OrderedReadings {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReadingsVisitor;

        impl<'de> Visitor<'de> for ReadingsVisitor {
            type Value = OrderedReadings;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of engine name to reading")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut engines = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, reading)) = access.next_entry::<String, EngineReading>()? {
                    engines.push((name, reading));
                }
                Ok(OrderedReadings(engines))
            }
        }

        deserializer.deserialize_map(ReadingsVisitor)
    }
}

impl<'de> Deserialize<'de> for EngineTree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TreeVisitor;

        impl<'de> Visitor<'de> for TreeVisitor {
            type Value = EngineTree;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of group name to engine map")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, readings)) = access.next_entry::<String, OrderedReadings>()? {
                    groups.push(EngineGroup {
                        name,
                        engines: readings.0,
                    });
                }
                Ok(EngineTree(groups))
            }
        }

        deserializer.deserialize_map(TreeVisitor)
    }
}

/// Board identification; only `model` participates in layout resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardInfo {
    /// Marketing model string, matched case-insensitively as a substring key.
    pub model: String,
}

/// Full per-tick input contract: board identity plus the engine tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineSnapshot {
    /// Board identity used for catalog resolution.
    pub board: BoardInfo,
    /// Engine groups in provider document order.
    pub engine: EngineTree,
}

impl EngineSnapshot {
    /// Parse a provider snapshot from its JSON wire form.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
