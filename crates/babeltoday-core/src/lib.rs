//! Compatibility evaluator for babeltoday.
//!
//! This crate joins the preset and plugin catalogs into resolved presets and
//! computes, for every (row, browser) pair, a support determination: the
//! `SupportMatrix` that the report and CLI render. The evaluator is a pure
//! function of the loaded catalogs, with no I/O, no hidden state, and no
//! failure paths (missing or malformed data degrades to "unsupported").

pub mod cell;
pub mod matrix;
pub mod resolve;

pub use cell::{PluginCell, PresetCell, USE_PLUGIN};
pub use matrix::{PluginRow, PresetMatrix, SupportMatrix};
pub use resolve::{resolve_presets, ResolvedPlugin, ResolvedPreset};
