use super::*;

// =============================================================
// Modes and aspect ratios
// =============================================================

#[test]
fn layout_mode_toggles_between_both_modes() {
    assert_eq!(LayoutMode::TwoByTwo.toggled(), LayoutMode::ThreeByThree);
    assert_eq!(LayoutMode::ThreeByThree.toggled(), LayoutMode::TwoByTwo);
}

#[test]
fn aspect_ratio_toggles_and_labels() {
    assert_eq!(AspectRatio::Landscape.toggled(), AspectRatio::Portrait);
    assert_eq!(AspectRatio::Portrait.to_string(), "9:16");
    assert_eq!(AspectRatio::Landscape.css_class(), "wall--landscape");
}

#[test]
fn modes_serialize_with_their_labels() {
    assert_eq!(serde_json::to_string(&LayoutMode::ThreeByThree).unwrap_or_default(), "\"3x3\"");
    assert_eq!(serde_json::to_string(&AspectRatio::Landscape).unwrap_or_default(), "\"16:9\"");
}

// =============================================================
// LayoutSpec
// =============================================================

#[test]
fn round_up_to_rows_uses_column_multiples() {
    let spec = LayoutSpec { cells: 4, columns: 2 };
    assert_eq!(spec.round_up_to_rows(0), 0);
    assert_eq!(spec.round_up_to_rows(5), 6);
    assert_eq!(spec.round_up_to_rows(6), 6);
    assert_eq!(spec.rows(), 2);
}

// =============================================================
// LayoutTable
// =============================================================

#[test]
fn builtin_table_covers_every_combination() {
    let table = LayoutTable::builtin();
    assert_eq!(table.entries().len(), 4);
    assert_eq!(table.lookup(LayoutMode::TwoByTwo, AspectRatio::Landscape), LayoutSpec { cells: 4, columns: 2 });
    assert_eq!(table.lookup(LayoutMode::ThreeByThree, AspectRatio::Landscape), LayoutSpec { cells: 9, columns: 3 });
    assert_eq!(table.lookup(LayoutMode::TwoByTwo, AspectRatio::Portrait), LayoutSpec { cells: 8, columns: 4 });
    assert_eq!(table.lookup(LayoutMode::ThreeByThree, AspectRatio::Portrait), LayoutSpec { cells: 18, columns: 6 });
}

#[test]
fn builtin_table_matches_fallback() {
    assert_eq!(LayoutTable::builtin(), LayoutTable::fallback());
}

#[test]
fn from_json_rejects_ragged_rows() {
    let raw = r#"{ "layouts": [ { "mode": "2x2", "aspect": "16:9", "cells": 5, "columns": 2 } ] }"#;
    assert!(matches!(LayoutTable::from_json(raw), Err(LayoutError::RaggedRows { cells: 5, columns: 2, .. })));
}

#[test]
fn from_json_rejects_zero_columns() {
    let raw = r#"{ "layouts": [ { "mode": "3x3", "aspect": "9:16", "cells": 9, "columns": 0 } ] }"#;
    assert!(matches!(LayoutTable::from_json(raw), Err(LayoutError::ZeroColumns { .. })));
}

#[test]
fn from_json_rejects_missing_combination() {
    let raw = r#"{ "layouts": [
        { "mode": "2x2", "aspect": "16:9", "cells": 4, "columns": 2 },
        { "mode": "3x3", "aspect": "16:9", "cells": 9, "columns": 3 },
        { "mode": "2x2", "aspect": "9:16", "cells": 4, "columns": 4 }
    ] }"#;
    assert!(matches!(
        LayoutTable::from_json(raw),
        Err(LayoutError::Missing { mode: LayoutMode::ThreeByThree, aspect: AspectRatio::Portrait })
    ));
}

#[test]
fn from_json_rejects_duplicates() {
    let entry = LayoutEntry { mode: LayoutMode::TwoByTwo, aspect: AspectRatio::Landscape, cells: 4, columns: 2 };
    assert!(matches!(LayoutTable::from_entries(vec![entry, entry]), Err(LayoutError::Duplicate { .. })));
}

#[test]
fn from_json_rejects_garbage() {
    assert!(matches!(LayoutTable::from_json("not json"), Err(LayoutError::Parse(_))));
}

#[test]
fn custom_table_overrides_lookup() {
    let raw = r#"{ "layouts": [
        { "mode": "2x2", "aspect": "16:9", "cells": 6, "columns": 3 },
        { "mode": "3x3", "aspect": "16:9", "cells": 9, "columns": 3 },
        { "mode": "2x2", "aspect": "9:16", "cells": 4, "columns": 4 },
        { "mode": "3x3", "aspect": "9:16", "cells": 12, "columns": 6 }
    ] }"#;
    let Ok(table) = LayoutTable::from_json(raw) else {
        panic!("custom table should parse");
    };
    assert_eq!(table.lookup(LayoutMode::TwoByTwo, AspectRatio::Landscape), LayoutSpec { cells: 6, columns: 3 });
}

#[test]
fn fit_width_is_bounded_by_height() {
    let spec = LayoutSpec { cells: 4, columns: 2 };
    // Two 16:9 rows in 900px of height allow 2 * 800px of width.
    assert!((spec.fit_width(AspectRatio::Landscape, 1920.0, 900.0) - 1600.0).abs() < 1e-9);
    assert!((spec.fit_width(AspectRatio::Landscape, 1000.0, 900.0) - 1000.0).abs() < 1e-9);
}

#[test]
fn fit_width_handles_portrait_and_empty_viewport() {
    let spec = LayoutSpec { cells: 8, columns: 4 };
    // Two 9:16 rows in 1600px of height: each cell 450px wide, four columns.
    assert!((spec.fit_width(AspectRatio::Portrait, 4000.0, 1600.0) - 1800.0).abs() < 1e-9);
    assert_eq!(spec.fit_width(AspectRatio::Portrait, 0.0, 1600.0), 0.0);
}
