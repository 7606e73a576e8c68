//! Integration tests for u-masonry-export.

use u_masonry_core::{LayoutEngine, Parameters};
use u_masonry_export::ExportDocument;

#[test]
fn test_write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wall.json");

    let params = Parameters::default().with_wall(2000.0, 800.0);
    let layout = LayoutEngine::with_seed(3).generate(&params).unwrap();
    let doc = ExportDocument::now(&params, &layout);
    doc.write_to(&path).unwrap();

    let restored = ExportDocument::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(restored.parameters, params);
    assert_eq!(restored.seed, 3);
    assert_eq!(restored.stones.len(), layout.stone_count);
    assert!(restored.created_at().is_some());
}

#[test]
fn test_export_leaves_layout_untouched() {
    let params = Parameters::default();
    let layout = LayoutEngine::default_config().generate(&params).unwrap();
    let before = layout.clone();

    let _doc = ExportDocument::now(&params, &layout);
    assert_eq!(layout, before);
}

#[test]
fn test_invalid_json_rejected() {
    assert!(ExportDocument::from_json("{\"version\": 1}").is_err());
}
