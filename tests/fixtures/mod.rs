//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use hextray::models::palette::{BLACK, GOLD, WHITE};
use hextray::models::{Hexagon, TileAddress};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Deterministic design: a mirrored gold rim tile, a black apex, two white tiles.
///
/// Counts: Gold 6, Black 1, White 2, Empty 285.
pub fn test_hexagon_painted() -> Hexagon {
    Hexagon::blank()
        .apply_edit(TileAddress::new(0, 6, 12), GOLD, true)
        .apply_edit(TileAddress::new(0, 0, 0), BLACK, false)
        .apply_edit(TileAddress::new(2, 3, 3), WHITE, false)
        .apply_edit(TileAddress::new(4, 5, 0), WHITE, false)
}

/// Writes raw content to `hexagon.json` in a fresh temp dir.
///
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn create_temp_design_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("hexagon.json");
    fs::write(&path, content).expect("Failed to write design file");
    (path, temp_dir)
}

/// Serializes `hexagon` into a temp design file.
pub fn create_temp_hexagon_file(hexagon: &Hexagon) -> (PathBuf, TempDir) {
    let json = hexagon.to_json().expect("Failed to serialize hexagon");
    create_temp_design_file(&json)
}

/// A blob with the right JSON structure but only five slices.
pub fn five_slice_blob() -> String {
    let json = Hexagon::blank().to_json().expect("Failed to serialize hexagon");
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["slices"].as_array_mut().unwrap().pop();
    value.to_string()
}
