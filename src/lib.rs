#![forbid(unsafe_code)]

//! Engine Panel — hardware-accelerator utilization panel core for embedded
//! compute boards.
//!
//! Given a board model string and a per-tick snapshot of engine readings,
//! the crate:
//! 1. **Resolves a layout** — curated row pairings for known hardware
//!    families (AGX Orin / AGX Xavier / Jetson Nano), generic auto-layout for
//!    everything else.
//! 2. **Renders it** — as a dense label/value block (overview) or as
//!    per-engine horizontal gauges (detail page), through the
//!    [`panel::surface::Surface`] capability trait supplied by the embedding
//!    dashboard.
//!
//! Reading acquisition, the terminal lifecycle, input handling, and the
//! gauge-drawing primitive all live outside this crate.
//!
//! # Library usage
//!
//! ```rust,no_run
//! use engine_panel::prelude::*;
//!
//! # fn demo(raw: &str) -> engine_panel::core::errors::Result<()> {
//! let snapshot = EngineSnapshot::from_json_str(raw)?;
//! let layout = build_layout(&snapshot.board, &snapshot.engine)?;
//! let mut surface = TextSurface::new(80, 24);
//! let rows = render_compact(&mut surface, 0, 0, 80, &layout, &Theme::default());
//! # let _ = rows;
//! # Ok(())
//! # }
//! ```

pub mod prelude;

pub mod core;
pub mod panel;
pub mod telemetry;
