use crate::config::Heuristic;
use crate::error::{Result, SpritePackerError};
use serde::{Deserialize, Serialize};

/// A named rectangle waiting to be placed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Rejects empty names and zero-sized items.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.width == 0 || self.height == 0 {
            return Err(SpritePackerError::InvalidItem {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl<K: Into<String>> From<(K, u32, u32)> for Item {
    fn from((name, width, height): (K, u32, u32)) -> Self {
        Item::new(name, width, height)
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge (`x + w`).
    pub fn x2(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge (`y + h`).
    pub fn y2(&self) -> u32 {
        self.y + self.h
    }
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
    /// Returns true if `r` is fully inside `self`.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.x2() <= self.x2() && r.y2() <= self.y2()
    }
    /// Returns true if the two rectangles share any pixel. Empty rects never intersect.
    pub fn intersects(&self, r: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && r.w > 0
            && r.h > 0
            && self.x < r.x2()
            && r.x < self.x2()
            && self.y < r.y2()
            && r.y < self.y2()
    }
}

/// Where one item ended up on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Item name as supplied by the caller.
    pub name: String,
    /// Position of the item in the caller's input list.
    pub index: usize,
    /// Item rectangle in canvas coordinates, margin excluded.
    pub frame: Rect,
}

/// Result of one packing run: the enclosing rectangle plus every placement.
///
/// `placements` is kept in processing order (after sorting). Use
/// [`Canvas::in_input_order`] or [`Canvas::get`] to look items up the way the
/// caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Root rectangle; always anchored at the origin.
    pub root: Rect,
    pub placements: Vec<Placement>,
    /// Ordering that produced this canvas.
    pub heuristic: Heuristic,
    /// Per-side margin the items were packed with.
    pub margin: u32,
}

impl Canvas {
    pub fn width(&self) -> u32 {
        self.root.w
    }

    pub fn height(&self) -> u32 {
        self.root.h
    }

    pub fn area(&self) -> u64 {
        self.root.area()
    }

    /// Area taken by items as the packer saw them, margins included.
    pub fn packed_area(&self) -> u64 {
        let m2 = 2 * self.margin as u64;
        self.placements
            .iter()
            .map(|p| (p.frame.w as u64 + m2) * (p.frame.h as u64 + m2))
            .sum()
    }

    /// Root area minus packed area; the ranking metric between heuristics.
    pub fn wasted_area(&self) -> u64 {
        self.area().saturating_sub(self.packed_area())
    }

    /// First placement with the given name.
    pub fn get(&self, name: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.name == name)
    }

    /// Placements re-ordered to match the caller's input list.
    pub fn in_input_order(&self) -> Vec<&Placement> {
        let mut out: Vec<&Placement> = self.placements.iter().collect();
        out.sort_by_key(|p| p.index);
        out
    }

    /// Computes packing statistics for this canvas.
    pub fn stats(&self) -> PackStats {
        let canvas_area = self.area();
        let used_area = self.packed_area();
        let occupancy = if canvas_area > 0 {
            used_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        PackStats {
            num_items: self.placements.len(),
            width: self.width(),
            height: self.height(),
            canvas_area,
            used_area,
            occupancy,
        }
    }
}

/// Statistics about canvas packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    pub num_items: usize,
    pub width: u32,
    pub height: u32,
    /// width * height of the root rectangle.
    pub canvas_area: u64,
    /// Sum of packed item areas (margins count as used).
    pub used_area: u64,
    /// used_area / canvas_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Canvas: {}x{}, Items: {}, Occupancy: {:.2}%, Total Area: {} px², Used Area: {} px²",
            self.width,
            self.height,
            self.num_items,
            self.occupancy * 100.0,
            self.canvas_area,
            self.used_area,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.canvas_area > 0 {
            (self.wasted_area() as f64 / self.canvas_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
