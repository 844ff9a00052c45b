//! Renders a packed canvas into a single RGBA sheet.

use crate::config::PackerConfig;
use crate::error::{Result, SpritePackerError};
use crate::model::{Canvas, Item};
use crate::pipeline::pack_layout;
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::instrument;

/// In-memory image to pack (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Winning layout and the composited sheet.
pub struct PackOutput {
    pub canvas: Canvas,
    pub rgba: RgbaImage,
}

impl PackOutput {
    /// Convenience method that delegates to `canvas.stats()`.
    pub fn stats(&self) -> crate::model::PackStats {
        self.canvas.stats()
    }
}

#[instrument(skip_all, fields(images = inputs.len()))]
/// Packs decoded images and draws them onto one sheet filled with `cfg.background`.
pub fn pack_images(inputs: Vec<InputImage>, cfg: PackerConfig) -> Result<PackOutput> {
    let background = cfg.background;
    let sources: Vec<RgbaImage> = inputs.iter().map(|i| i.image.to_rgba8()).collect();
    let items: Vec<Item> = inputs
        .iter()
        .zip(&sources)
        .map(|(inp, rgba)| Item::new(inp.key.clone(), rgba.width(), rgba.height()))
        .collect();

    let canvas = pack_layout(items, cfg)?;
    let rgba = compose(&canvas, &sources, background)?;
    Ok(PackOutput { canvas, rgba })
}

/// Draws `sources[p.index]` at every placement of `canvas`.
///
/// `sources` must be in the same order as the items the canvas was packed from.
pub fn compose(canvas: &Canvas, sources: &[RgbaImage], background: Option<[u8; 4]>) -> Result<RgbaImage> {
    let fill = Rgba(background.unwrap_or([0, 0, 0, 0]));
    let mut sheet = RgbaImage::from_pixel(canvas.width(), canvas.height(), fill);
    for p in &canvas.placements {
        let src = sources
            .get(p.index)
            .ok_or_else(|| SpritePackerError::MissingImage(p.name.clone()))?;
        blit_rgba(src, &mut sheet, p.frame.x, p.frame.y);
    }
    Ok(sheet)
}

/// Copies `src` into `sheet` with its top-left at (dx, dy), clipped to the sheet.
pub fn blit_rgba(src: &RgbaImage, sheet: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = sheet.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        if dy + yy >= ch {
            break;
        }
        for xx in 0..sw {
            if dx + xx >= cw {
                break;
            }
            sheet.put_pixel(dx + xx, dy + yy, *src.get_pixel(xx, yy));
        }
    }
}
