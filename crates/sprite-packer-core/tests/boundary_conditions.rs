use sprite_packer_core::config::{Heuristic, PackerConfig};
use sprite_packer_core::error::SpritePackerError;
use sprite_packer_core::model::Item;
use sprite_packer_core::{pack_layout, pack_layout_report, pack_with};

/// Test empty input
#[test]
fn test_empty_input_pack_layout() {
    let inputs: Vec<Item> = vec![];
    let result = pack_layout(inputs, PackerConfig::default());
    match result {
        Err(e @ SpritePackerError::Empty) => assert!(e.is_invalid_input()),
        other => panic!("Expected Empty error, got {other:?}"),
    }
}

#[test]
fn test_empty_input_single_heuristic() {
    let inputs: Vec<(String, u32, u32)> = vec![];
    let result = pack_with(inputs, Heuristic::ByArea, &PackerConfig::default());
    assert!(matches!(result, Err(SpritePackerError::Empty)));
}

/// Test zero-sized items
#[test]
fn test_zero_width_item() {
    let inputs = vec![Item::new("ok", 10, 10), Item::new("flat", 0, 10)];
    match pack_layout(inputs, PackerConfig::default()) {
        Err(e @ SpritePackerError::InvalidItem { .. }) => {
            assert!(e.is_invalid_input());
            if let SpritePackerError::InvalidItem { name, width, height } = e {
                assert_eq!(name, "flat");
                assert_eq!((width, height), (0, 10));
            }
        }
        other => panic!("Expected InvalidItem error, got {other:?}"),
    }
}

#[test]
fn test_zero_height_item() {
    let inputs = vec![Item::new("thin", 10, 0)];
    let result = pack_layout_report(inputs, PackerConfig::default());
    assert!(matches!(result, Err(SpritePackerError::InvalidItem { .. })));
}

#[test]
fn test_empty_name_item() {
    let inputs = vec![Item::new("", 10, 10)];
    let result = pack_layout(inputs, PackerConfig::default());
    assert!(matches!(result, Err(SpritePackerError::InvalidItem { .. })));
}

/// Test configuration limits
#[test]
fn test_margin_too_large() {
    let cfg = PackerConfig {
        margin: 101,
        ..Default::default()
    };
    match cfg.validate() {
        Err(SpritePackerError::InvalidConfig(msg)) => assert!(msg.contains("margin")),
        other => panic!("Expected InvalidConfig error, got {other:?}"),
    }

    let cfg = PackerConfig {
        margin: 100,
        ..Default::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_no_heuristics() {
    let cfg = PackerConfig::builder().heuristics(vec![]).build();
    let result = pack_layout(vec![Item::new("a", 4, 4)], cfg);
    assert!(matches!(result, Err(SpritePackerError::InvalidConfig(_))));
}

#[test]
fn test_duplicate_heuristics() {
    let cfg = PackerConfig::builder()
        .heuristics(vec![Heuristic::ByArea, Heuristic::ByWidth, Heuristic::ByArea])
        .build();
    match cfg.validate() {
        Err(SpritePackerError::InvalidConfig(msg)) => assert!(msg.contains("by_area")),
        other => panic!("Expected InvalidConfig error, got {other:?}"),
    }
}

#[test]
fn test_config_defaults_from_json() {
    let cfg: PackerConfig = serde_json::from_str(r#"{"margin": 4}"#).expect("valid json");
    assert_eq!(cfg.margin, 4);
    assert_eq!(cfg.heuristics, Heuristic::ALL.to_vec());
    assert!(cfg.parallel);
    assert_eq!(cfg.background, None);

    let cfg: PackerConfig =
        serde_json::from_str(r#"{"heuristics": ["by_max", "by_width"], "parallel": false}"#)
            .expect("valid json");
    assert_eq!(cfg.heuristics, vec![Heuristic::ByMax, Heuristic::ByWidth]);
    assert!(!cfg.parallel);
}

/// Very thin items still pack
#[test]
fn test_extreme_aspect_ratios() {
    let inputs = vec![
        Item::new("hline", 1000, 1),
        Item::new("vline", 1, 1000),
        Item::new("dot", 1, 1),
    ];
    let canvas = pack_layout(inputs, PackerConfig::default()).expect("packs");
    assert_eq!(canvas.placements.len(), 3);
    assert!(canvas.area() >= 2001);
}
