//! Persistence through the designer's change hook.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use hextray::models::palette::{BLACK, GOLD};
use hextray::models::{Hexagon, Palette, TileAddress};
use hextray::services::{load_or_blank, Designer, FileStore, HexagonStore, MemoryStore};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn attach(designer: &mut Designer, store: Rc<MemoryStore>) {
    designer.subscribe(Box::new(move |hexagon| store.save(hexagon)));
}

#[test]
fn test_every_paint_is_saved() {
    let store = Rc::new(MemoryStore::new());
    let mut designer = Designer::new(load_or_blank(&store), Palette::standard());
    attach(&mut designer, Rc::clone(&store));

    designer.paint(TileAddress::new(0, 0, 0));
    designer.toggle_mirror();
    designer.paint(TileAddress::new(3, 4, 4));

    assert_eq!(store.save_count(), 2);
    assert_eq!(store.load().as_ref(), Some(designer.hexagon()));
}

#[test]
fn test_selection_changes_are_not_saved() {
    let store = Rc::new(MemoryStore::new());
    let mut designer = Designer::new(Hexagon::blank(), Palette::standard());
    attach(&mut designer, Rc::clone(&store));

    designer.select_color(2);
    designer.cycle_color();
    designer.toggle_mirror();

    assert_eq!(store.save_count(), 0);
    assert!(store.blob().is_none());
}

#[test]
fn test_restart_restores_design() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hexagon.json");

    {
        let store = FileStore::new(&path);
        let mut designer = Designer::new(load_or_blank(&store), Palette::standard());
        let sink = store.clone();
        designer.subscribe(Box::new(move |hexagon| sink.save(hexagon)));
        designer.select_color(1);
        designer.toggle_mirror();
        designer.paint(TileAddress::new(1, 2, 3));
    }

    let restored = load_or_blank(&FileStore::new(&path));
    assert_eq!(restored.count_tiles_of_color(BLACK), 6);
    for slice in 0..6 {
        assert_eq!(
            restored.tile(TileAddress::new(slice, 2, 3)).unwrap().color(),
            Some(BLACK)
        );
    }
}

#[test]
fn test_malformed_files_load_blank() {
    for content in ["", "null", "{\"slices\": 3}", "[1, 2, 3]", five_slice_blob().as_str()] {
        let (path, _temp_dir) = create_temp_design_file(content);
        let store = FileStore::new(&path);
        assert!(store.load().is_none(), "content: {content}");
        assert_eq!(load_or_blank(&store), Hexagon::blank());
    }
}

#[test]
fn test_bad_color_string_loads_blank() {
    let json = Hexagon::blank()
        .apply_edit(TileAddress::new(0, 1, 0), GOLD, false)
        .to_json()
        .unwrap()
        .replace("#EDBE62", "gold");
    let store = MemoryStore::with_blob(json);
    assert!(store.load().is_none());
}

#[test]
fn test_signed_color_string_loads_blank() {
    let json = Hexagon::blank()
        .apply_edit(TileAddress::new(3, 2, 1), GOLD, false)
        .to_json()
        .unwrap()
        .replace("#EDBE62", "+1+2+3");
    let (path, _temp_dir) = create_temp_design_file(&json);
    assert!(FileStore::new(&path).load().is_none());
}

#[test]
fn test_lowercase_colors_accepted() {
    let json = test_hexagon_painted().to_json().unwrap().to_lowercase();
    let store = MemoryStore::with_blob(json);
    assert_eq!(store.load(), Some(test_hexagon_painted()));
}

#[test]
fn test_saved_blob_uses_nested_arrays() {
    let (path, _temp_dir) = create_temp_hexagon_file(&test_hexagon_painted());
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let slices = value["slices"].as_array().unwrap();
    assert_eq!(slices.len(), 6);
    let levels = slices[0]["levels"].as_array().unwrap();
    assert_eq!(levels.len(), 7);
    for (j, level) in levels.iter().enumerate() {
        assert_eq!(level["tiles"].as_array().unwrap().len(), 2 * j + 1);
    }
    assert_eq!(levels[0]["tiles"][0], "#4A4246");
    assert_eq!(levels[1]["tiles"][0], "");
}

#[test]
fn test_failed_save_keeps_design_in_memory() {
    let temp_dir = TempDir::new().unwrap();
    let blocked = temp_dir.path().join("blocked");
    fs::create_dir(&blocked).unwrap();
    fs::write(blocked.join("keep"), "x").unwrap();

    let store = FileStore::new(&blocked);
    let saves = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&saves);

    let mut designer = Designer::new(Hexagon::blank(), Palette::standard());
    designer.subscribe(Box::new(move |hexagon| {
        store.save(hexagon);
        *counter.borrow_mut() += 1;
    }));
    designer.paint(TileAddress::new(0, 0, 0));

    assert_eq!(*saves.borrow(), 1);
    assert_eq!(designer.hexagon().count_tiles_of_color(GOLD), 1);
}
