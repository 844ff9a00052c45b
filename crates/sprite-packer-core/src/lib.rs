//! Core library for packing sprites into a single sheet.
//!
//! - Algorithm: growing binary tree (first-fit search, split into right/down, grow right or down)
//! - Evaluation: four largest-first orderings (width, height, area, max side), run in parallel,
//!   tightest canvas wins with a fixed tie-break order
//! - Pipeline: `pack_layout` takes `(name, w, h)` items and returns a `Canvas`;
//!   `pack_images` (feature "image") also composites the sheet
//! - Data model is serde-serializable; JSON helpers live in `export`.
//!
//! Quick example:
//! ```
//! use sprite_packer_core::{PackerConfig, pack_layout};
//! # fn main() -> sprite_packer_core::Result<()> {
//! let items: Vec<(&str, u32, u32)> = vec![("hero", 64, 64), ("tile", 32, 32), ("banner", 128, 16)];
//! let canvas = pack_layout(items, PackerConfig::default())?;
//! println!("{}x{} via {}", canvas.width(), canvas.height(), canvas.heuristic);
//! # Ok(()) }
//! ```

#[cfg(feature = "image")]
pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod sequence;

#[cfg(feature = "image")]
pub use compositing::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{Heuristic, PackerConfig, PackerConfigBuilder};
    pub use crate::error::{Result, SpritePackerError};
    pub use crate::model::{Canvas, Item, PackStats, Placement, Rect};
    pub use crate::packer::PackingTree;
    pub use crate::pipeline::{CandidateSummary, PackReport};
    pub use crate::{pack_layout, pack_layout_report, pack_with};
    #[cfg(feature = "image")]
    pub use crate::{InputImage, PackOutput, pack_images};
}
