//! Layout resolution and rendering for the HW-engines panel.
//!
//! Stable seams: `catalog` decides *what* is shown for a board model,
//! `compact`/`gauge_page` decide *where* it goes, and [`surface::Surface`]
//! is the only way anything reaches the terminal.

pub mod catalog;
pub mod compact;
pub mod gauge_page;
pub mod layout;
pub mod surface;
pub mod theme;

#[cfg(test)]
mod test_golden;
#[cfg(test)]
mod test_properties;

pub use catalog::{build_layout, resolve};
pub use compact::{render_compact, render_compact_block};
pub use gauge_page::render_engine_page;
