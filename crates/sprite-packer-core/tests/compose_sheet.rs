#![cfg(feature = "image")]

use image::{DynamicImage, Rgba, RgbaImage};
use sprite_packer_core::error::SpritePackerError;
use sprite_packer_core::prelude::*;
use sprite_packer_core::compose;

fn solid(w: u32, h: u32, c: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba(c)))
}

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

#[test]
fn sprites_land_on_their_frames() {
    let inputs = vec![
        InputImage {
            key: "red".into(),
            image: solid(4, 4, RED),
        },
        InputImage {
            key: "blue".into(),
            image: solid(2, 2, BLUE),
        },
    ];
    let cfg = PackerConfig::builder().background(Some(GREEN)).build();
    let out = pack_images(inputs, cfg).expect("packs");

    assert_eq!(out.rgba.dimensions(), (out.canvas.width(), out.canvas.height()));
    for (name, colour) in [("red", RED), ("blue", BLUE)] {
        let f = out.canvas.get(name).expect("placed").frame;
        for y in f.y..f.y2() {
            for x in f.x..f.x2() {
                assert_eq!(out.rgba.get_pixel(x, y).0, colour, "{name} at ({x},{y})");
            }
        }
    }

    // anything outside the frames is background
    for (x, y, px) in out.rgba.enumerate_pixels() {
        let covered = out
            .canvas
            .placements
            .iter()
            .any(|p| x >= p.frame.x && x < p.frame.x2() && y >= p.frame.y && y < p.frame.y2());
        if !covered {
            assert_eq!(px.0, GREEN);
        }
    }
    assert_eq!(out.stats().num_items, 2);
}

#[test]
fn margins_stay_transparent() {
    let inputs = vec![InputImage {
        key: "red".into(),
        image: solid(3, 3, RED),
    }];
    let cfg = PackerConfig::builder().margin(1).build();
    let out = pack_images(inputs, cfg).expect("packs");
    assert_eq!(out.rgba.dimensions(), (5, 5));
    assert_eq!(out.rgba.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.rgba.get_pixel(1, 1).0, RED);
    assert_eq!(out.rgba.get_pixel(3, 3).0, RED);
    assert_eq!(out.rgba.get_pixel(4, 4).0, [0, 0, 0, 0]);
}

#[test]
fn empty_image_is_rejected() {
    let inputs = vec![InputImage {
        key: "void".into(),
        image: DynamicImage::ImageRgba8(RgbaImage::new(0, 0)),
    }];
    let result = pack_images(inputs, PackerConfig::default());
    assert!(matches!(result, Err(SpritePackerError::InvalidItem { .. })));
}

#[test]
fn compose_requires_every_source() {
    let canvas = pack_layout(vec![Item::new("a", 2, 2)], PackerConfig::default()).expect("packs");
    let result = compose(&canvas, &[], None);
    assert!(matches!(result, Err(SpritePackerError::MissingImage(name)) if name == "a"));
}
