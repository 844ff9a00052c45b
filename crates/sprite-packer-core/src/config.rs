use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest accepted per-side margin in pixels.
pub const MAX_MARGIN: u32 = 100;

/// Input orderings tried by the evaluator.
///
/// Every ordering sorts largest-first; see [`crate::sequence`] for the exact keys.
/// The declaration order doubles as the tie-break priority when two orderings
/// waste the same area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Width, then height.
    ByWidth,
    /// Height, then width.
    ByHeight,
    /// Area, then height, then width.
    ByArea,
    /// Longer side, then shorter side, then height, then width.
    ByMax,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::ByWidth,
        Heuristic::ByHeight,
        Heuristic::ByArea,
        Heuristic::ByMax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Heuristic::ByWidth => "by_width",
            Heuristic::ByHeight => "by_height",
            Heuristic::ByArea => "by_area",
            Heuristic::ByMax => "by_max",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heuristic {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "width" | "by_width" | "bywidth" => Ok(Self::ByWidth),
            "height" | "by_height" | "byheight" => Ok(Self::ByHeight),
            "area" | "by_area" | "byarea" => Ok(Self::ByArea),
            "max" | "by_max" | "bymax" => Ok(Self::ByMax),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Pixels reserved on every side of each item.
    #[serde(default)]
    pub margin: u32,
    /// Orderings to evaluate, highest tie-break priority first.
    #[serde(default = "default_heuristics")]
    pub heuristics: Vec<Heuristic>,
    /// Evaluate orderings concurrently when feature "parallel" is on.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Fill colour for composited sheets; `None` leaves the sheet transparent.
    #[serde(default)]
    pub background: Option<[u8; 4]>,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            margin: 0,
            heuristics: default_heuristics(),
            parallel: default_parallel(),
            background: None,
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - `margin` exceeds [`MAX_MARGIN`]
    /// - `heuristics` is empty or lists the same ordering twice
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::SpritePackerError;

        if self.margin > MAX_MARGIN {
            return Err(SpritePackerError::InvalidConfig(format!(
                "margin ({}) must be between 0 and {}",
                self.margin, MAX_MARGIN
            )));
        }

        if self.heuristics.is_empty() {
            return Err(SpritePackerError::InvalidConfig(
                "at least one heuristic is required".into(),
            ));
        }

        for (i, h) in self.heuristics.iter().enumerate() {
            if self.heuristics[..i].contains(h) {
                return Err(SpritePackerError::InvalidConfig(format!(
                    "heuristic {} listed more than once",
                    h
                )));
            }
        }

        Ok(())
    }
}

fn default_heuristics() -> Vec<Heuristic> {
    Heuristic::ALL.to_vec()
}
fn default_parallel() -> bool {
    true
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn margin(mut self, v: u32) -> Self {
        self.cfg.margin = v;
        self
    }
    pub fn heuristics(mut self, v: Vec<Heuristic>) -> Self {
        self.cfg.heuristics = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn background(mut self, v: Option<[u8; 4]>) -> Self {
        self.cfg.background = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}

impl PackerConfig {
    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}
