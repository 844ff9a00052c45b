use crate::config::{Heuristic, PackerConfig};
use crate::error::{Result, SpritePackerError};
use crate::model::{Canvas, Item};
use crate::packer::pack_sequence;
use crate::sequence;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of a single heuristic run, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub heuristic: Heuristic,
    pub width: u32,
    pub height: u32,
    pub wasted_area: u64,
}

/// Winning canvas plus what every configured heuristic produced.
#[derive(Debug, Clone)]
pub struct PackReport {
    pub canvas: Canvas,
    /// One entry per configured heuristic, in priority order.
    pub candidates: Vec<CandidateSummary>,
}

/// Packs `items` with every configured heuristic and returns the tightest canvas.
///
/// Notes:
/// - Inputs are validated before any tree is built; an empty list yields `Empty`.
/// - Ties on wasted area go to the heuristic listed first in `cfg.heuristics`.
/// - With feature "parallel" and `cfg.parallel`, heuristics run concurrently;
///   the choice does not depend on which run finishes first.
pub fn pack_layout<I: Into<Item>>(items: Vec<I>, cfg: PackerConfig) -> Result<Canvas> {
    pack_layout_report(items, cfg).map(|r| r.canvas)
}

/// Like [`pack_layout`] but also returns the per-heuristic summaries.
#[instrument(skip_all, fields(items = items.len()))]
pub fn pack_layout_report<I: Into<Item>>(items: Vec<I>, cfg: PackerConfig) -> Result<PackReport> {
    let items: Vec<Item> = items.into_iter().map(Into::into).collect();
    validate_inputs(&items, &cfg)?;

    let canvases = run_candidates(&items, &cfg)?;
    let candidates: Vec<CandidateSummary> = canvases
        .iter()
        .map(|c| CandidateSummary {
            heuristic: c.heuristic,
            width: c.width(),
            height: c.height(),
            wasted_area: c.wasted_area(),
        })
        .collect();
    for c in &candidates {
        debug!(
            heuristic = %c.heuristic,
            width = c.width,
            height = c.height,
            wasted = c.wasted_area,
            "candidate packed"
        );
    }

    let canvas = select_best(canvases).ok_or(SpritePackerError::Empty)?;
    debug!(heuristic = %canvas.heuristic, width = canvas.width(), height = canvas.height(), "selected");
    Ok(PackReport { canvas, candidates })
}

/// Packs `items` with a single heuristic, skipping the comparison step.
#[instrument(skip_all, fields(items = items.len(), heuristic = %heuristic))]
pub fn pack_with<I: Into<Item>>(
    items: Vec<I>,
    heuristic: Heuristic,
    cfg: &PackerConfig,
) -> Result<Canvas> {
    let items: Vec<Item> = items.into_iter().map(Into::into).collect();
    validate_inputs(&items, cfg)?;
    run_one(&items, heuristic, cfg.margin)
}

fn validate_inputs(items: &[Item], cfg: &PackerConfig) -> Result<()> {
    cfg.validate()?;
    if items.is_empty() {
        return Err(SpritePackerError::Empty);
    }
    items.iter().try_for_each(Item::validate)
}

fn run_one(items: &[Item], heuristic: Heuristic, margin: u32) -> Result<Canvas> {
    let order = sequence::order(items, heuristic);
    pack_sequence(items, &order, heuristic, margin)
}

/// Runs every configured heuristic; output order follows `cfg.heuristics`.
fn run_candidates(items: &[Item], cfg: &PackerConfig) -> Result<Vec<Canvas>> {
    #[cfg(feature = "parallel")]
    {
        if cfg.parallel {
            let results: Vec<Result<Canvas>> = cfg
                .heuristics
                .par_iter()
                .map(|&h| {
                    // each task packs its own copy of the items
                    let own: Vec<Item> = items.to_vec();
                    run_one(&own, h, cfg.margin)
                })
                .collect();
            // first failure in priority order, independent of scheduling
            return results.into_iter().collect();
        }
    }

    cfg.heuristics
        .iter()
        .map(|&h| run_one(items, h, cfg.margin))
        .collect()
}

/// Smallest waste wins; on equal waste the earlier candidate is kept.
fn select_best(canvases: Vec<Canvas>) -> Option<Canvas> {
    let mut best: Option<(Canvas, u64)> = None;
    for c in canvases {
        let waste = c.wasted_area();
        if best.as_ref().is_none_or(|(_, bw)| waste < *bw) {
            best = Some((c, waste));
        }
    }
    best.map(|x| x.0)
}
