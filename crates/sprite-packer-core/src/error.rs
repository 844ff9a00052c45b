use crate::config::Heuristic;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpritePackerError {
    #[cfg(feature = "image")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Nothing to pack")]
    Empty,
    #[error("Invalid item {name:?}: {width}x{height} (name must be non-empty, sizes positive)")]
    InvalidItem {
        name: String,
        width: u32,
        height: u32,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Cannot place {name:?} ({width}x{height}) while packing {heuristic}")]
    PlacementImpossible {
        name: String,
        heuristic: Heuristic,
        width: u32,
        height: u32,
    },
    #[error("No image supplied for placement {0:?}")]
    MissingImage(String),
}

impl SpritePackerError {
    /// True for the input-contract violations (`Empty`, `InvalidItem`).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Empty | Self::InvalidItem { .. })
    }
}

pub type Result<T> = std::result::Result<T, SpritePackerError>;
