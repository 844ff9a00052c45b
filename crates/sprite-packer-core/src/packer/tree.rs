use crate::config::Heuristic;
use crate::error::{Result, SpritePackerError};
use crate::model::{Canvas, Item, Placement, Rect};
use tracing::trace;

/// Index of a node inside a [`PackingTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A region of the canvas.
///
/// A free node has no children. Splitting a node shrinks `rect` to the placed
/// item and hands the leftover space to `right` (beside the item, item height)
/// and `down` (below the item, full original width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackNode {
    pub rect: Rect,
    pub used: bool,
    pub right: Option<NodeId>,
    pub down: Option<NodeId>,
}

impl PackNode {
    fn free(rect: Rect) -> Self {
        Self {
            rect,
            used: false,
            right: None,
            down: None,
        }
    }
}

/// Binary partition of a canvas that grows right or down on demand.
#[derive(Debug, Clone)]
pub struct PackingTree {
    nodes: Vec<PackNode>,
    root: NodeId,
}

impl PackingTree {
    /// Starts with a single free root of `width x height` at the origin.
    /// Seed it with the first item's size so that item fits without growth.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            nodes: vec![PackNode::free(Rect::new(0, 0, width, height))],
            root: NodeId(0),
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> &PackNode {
        &self.nodes[self.root.0]
    }

    pub fn node(&self, id: NodeId) -> &PackNode {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[PackNode] {
        &self.nodes
    }

    fn alloc(&mut self, node: PackNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// First free node (depth-first, `right` before `down`) that can hold `w x h`.
    pub fn find_node(&self, w: u32, h: u32) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.used {
                // pushed in reverse so the right subtree is exhausted first
                if let Some(down) = node.down {
                    stack.push(down);
                }
                if let Some(right) = node.right {
                    stack.push(right);
                }
            } else if w <= node.rect.w && h <= node.rect.h {
                return Some(id);
            }
        }
        None
    }

    /// Places `w x h` in the top-left corner of free node `id` and returns its rectangle.
    pub fn split_node(&mut self, id: NodeId, w: u32, h: u32) -> Rect {
        let r = self.nodes[id.0].rect;
        debug_assert!(!self.nodes[id.0].used && w <= r.w && h <= r.h);
        let down = self.alloc(PackNode::free(Rect::new(r.x, r.y + h, r.w, r.h - h)));
        let right = self.alloc(PackNode::free(Rect::new(r.x + w, r.y, r.w - w, h)));
        let node = &mut self.nodes[id.0];
        node.used = true;
        node.down = Some(down);
        node.right = Some(right);
        node.rect.w = w;
        node.rect.h = h;
        node.rect
    }

    /// Enlarges the canvas so `w x h` fits, then places it.
    ///
    /// Growth keeps the canvas roughly square: it goes right when the canvas is
    /// already at least as tall as it would be wide, down in the mirrored case,
    /// and otherwise whichever direction is feasible (right first). Returns
    /// `None` when neither direction can host the item or the canvas size
    /// would overflow.
    pub fn grow_node(&mut self, w: u32, h: u32) -> Option<Rect> {
        let rw = self.root().rect.w;
        let rh = self.root().rect.h;

        let can_grow_down = w <= rw;
        let can_grow_right = h <= rh;
        let should_grow_right = can_grow_right && rh as u64 >= rw as u64 + w as u64;
        let should_grow_down = can_grow_down && rw as u64 >= rh as u64 + h as u64;

        if should_grow_right {
            self.grow_right(w, h)
        } else if should_grow_down {
            self.grow_down(w, h)
        } else if can_grow_right {
            self.grow_right(w, h)
        } else if can_grow_down {
            self.grow_down(w, h)
        } else {
            None
        }
    }

    fn grow_right(&mut self, w: u32, h: u32) -> Option<Rect> {
        let old = self.root;
        let old_rect = self.nodes[old.0].rect;
        let width = old_rect.w.checked_add(w)?;
        trace!(from_w = old_rect.w, to_w = width, h = old_rect.h, "grow right");
        let right = self.alloc(PackNode::free(Rect::new(old_rect.w, 0, w, old_rect.h)));
        self.root = self.alloc(PackNode {
            rect: Rect::new(0, 0, width, old_rect.h),
            used: true,
            right: Some(right),
            down: Some(old),
        });
        self.find_node(w, h).map(|id| self.split_node(id, w, h))
    }

    fn grow_down(&mut self, w: u32, h: u32) -> Option<Rect> {
        let old = self.root;
        let old_rect = self.nodes[old.0].rect;
        let height = old_rect.h.checked_add(h)?;
        trace!(w = old_rect.w, from_h = old_rect.h, to_h = height, "grow down");
        let down = self.alloc(PackNode::free(Rect::new(0, old_rect.h, old_rect.w, h)));
        self.root = self.alloc(PackNode {
            rect: Rect::new(0, 0, old_rect.w, height),
            used: true,
            right: Some(old),
            down: Some(down),
        });
        self.find_node(w, h).map(|id| self.split_node(id, w, h))
    }

    /// Search, then split or grow. `None` means the item could not be placed.
    pub fn insert(&mut self, w: u32, h: u32) -> Option<Rect> {
        match self.find_node(w, h) {
            Some(id) => Some(self.split_node(id, w, h)),
            None => self.grow_node(w, h),
        }
    }
}

/// Packs `items` in the order given by `order` (indices into `items`).
///
/// Items must already be validated and `order` non-empty. Each item is packed
/// inflated by `2 * margin`; reported frames exclude the margin.
pub fn pack_sequence(
    items: &[Item],
    order: &[usize],
    heuristic: Heuristic,
    margin: u32,
) -> Result<Canvas> {
    let impossible = |item: &Item| SpritePackerError::PlacementImpossible {
        name: item.name.clone(),
        heuristic,
        width: item.width,
        height: item.height,
    };
    let padded = |item: &Item| -> Result<(u32, u32)> {
        let m2 = margin.checked_mul(2).ok_or_else(|| impossible(item))?;
        let w = item.width.checked_add(m2).ok_or_else(|| impossible(item))?;
        let h = item.height.checked_add(m2).ok_or_else(|| impossible(item))?;
        Ok((w, h))
    };

    let first = order
        .first()
        .map(|&i| &items[i])
        .ok_or(SpritePackerError::Empty)?;
    let (w0, h0) = padded(first)?;
    let mut tree = PackingTree::new(w0, h0);

    let mut placements = Vec::with_capacity(order.len());
    for &idx in order {
        let item = &items[idx];
        let (w, h) = padded(item)?;
        let slot = tree.insert(w, h).ok_or_else(|| impossible(item))?;
        placements.push(Placement {
            name: item.name.clone(),
            index: idx,
            frame: Rect::new(slot.x + margin, slot.y + margin, item.width, item.height),
        });
    }

    Ok(Canvas {
        root: tree.root().rect,
        placements,
        heuristic,
        margin,
    })
}
