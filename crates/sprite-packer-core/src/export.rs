use crate::config::Heuristic;
use crate::model::Canvas;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Sheet-level metadata written next to the frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    /// Schema version for the JSON layouts below; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub heuristic: Heuristic,
    pub size: (u32, u32),
    pub margin: u32,
}

impl Meta {
    pub fn for_canvas(canvas: &Canvas) -> Self {
        Self {
            schema_version: "1".into(),
            app: "sprite-packer".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            heuristic: canvas.heuristic,
            size: (canvas.width(), canvas.height()),
            margin: canvas.margin,
        }
    }
}

/// Serialize the canvas as `{ frames: [...], meta }`, frames in input order.
pub fn to_json_array(canvas: &Canvas) -> Value {
    let frames: Vec<Value> = canvas
        .in_input_order()
        .into_iter()
        .map(|p| {
            json!({
                "name": p.name,
                "frame": {"x": p.frame.x, "y": p.frame.y, "w": p.frame.w, "h": p.frame.h},
            })
        })
        .collect();
    json!({ "frames": frames, "meta": Meta::for_canvas(canvas) })
}

/// Frames keyed by name: `{ frames: { name: { frame } }, meta }`.
/// When names repeat, the entry packed last wins.
pub fn to_json_hash(canvas: &Canvas) -> Value {
    let mut frames = serde_json::Map::new();
    for p in &canvas.placements {
        frames.insert(
            p.name.clone(),
            json!({
                "frame": {"x": p.frame.x, "y": p.frame.y, "w": p.frame.w, "h": p.frame.h},
            }),
        );
    }
    json!({ "frames": frames, "meta": Meta::for_canvas(canvas) })
}
