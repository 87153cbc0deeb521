//! Edit, mirror, and hit-testing properties over every tile of the hexagon.

use hextray::models::palette::{BLACK, GOLD, WHITE};
use hextray::models::{tiles_in_level, Hexagon, TileAddress, LEVEL_COUNT, SLICE_COUNT};
use hextray::services::HexagonLayout;

mod fixtures;
use fixtures::*;

fn all_addresses() -> Vec<TileAddress> {
    let mut addresses = Vec::new();
    for slice in 0..SLICE_COUNT {
        for level in 0..LEVEL_COUNT {
            for tile in 0..tiles_in_level(level) {
                addresses.push(TileAddress::new(slice, level, tile));
            }
        }
    }
    addresses
}

#[test]
fn test_single_edit_changes_exactly_one_tile() {
    let blank = Hexagon::blank();
    for address in all_addresses() {
        let edited = blank.apply_edit(address, WHITE, false);
        let changed: Vec<TileAddress> = edited
            .tiles()
            .zip(blank.tiles())
            .filter(|((_, a), (_, b))| a != b)
            .map(|((addr, _), _)| addr)
            .collect();
        assert_eq!(changed, vec![address]);
    }
}

#[test]
fn test_mirror_edit_changes_same_position_in_all_slices() {
    let blank = Hexagon::blank();
    for address in all_addresses() {
        let edited = blank.apply_edit(address, GOLD, true);
        assert_eq!(edited.count_tiles_of_color(GOLD), 6, "{address:?}");
        for slice in 0..SLICE_COUNT {
            let mirrored = TileAddress::new(slice, address.level, address.tile);
            assert_eq!(edited.tile(mirrored).unwrap().color(), Some(GOLD));
        }
    }
}

#[test]
fn test_mirror_edit_from_any_slice_is_identical() {
    let base = test_hexagon_painted();
    let expected = base.apply_edit(TileAddress::new(0, 4, 7), BLACK, true);
    for slice in 1..SLICE_COUNT {
        assert_eq!(
            base.apply_edit(TileAddress::new(slice, 4, 7), BLACK, true),
            expected
        );
    }
}

#[test]
fn test_edits_leave_input_untouched_and_are_idempotent() {
    let base = test_hexagon_painted();
    let snapshot = base.clone();
    let once = base.apply_edit(TileAddress::new(5, 6, 0), WHITE, true);
    let twice = once.apply_edit(TileAddress::new(5, 6, 0), WHITE, true);

    assert_eq!(base, snapshot);
    assert_eq!(once, twice);
}

#[test]
fn test_fixture_counts() {
    let hexagon = test_hexagon_painted();
    assert_eq!(hexagon.count_tiles_of_color(GOLD), 6);
    assert_eq!(hexagon.count_tiles_of_color(BLACK), 1);
    assert_eq!(hexagon.count_tiles_of_color(WHITE), 2);
    assert_eq!(hexagon.count_empty_tiles(), 285);
}

#[test]
#[should_panic(expected = "tile address out of bounds")]
fn test_out_of_bounds_edit_panics() {
    let _ = Hexagon::blank().apply_edit(TileAddress::new(0, 2, 5), GOLD, false);
}

#[test]
fn test_hit_test_finds_every_tile_at_its_centroid() {
    let layout = HexagonLayout::default();
    for address in all_addresses() {
        let centroid = layout.shape(address).unwrap().centroid();
        assert_eq!(layout.hit_test(centroid), Some(address));
    }
}

#[test]
fn test_placed_tiles_carry_resolved_fills() {
    let layout = HexagonLayout::default();
    let placed = layout.placed_tiles(&test_hexagon_painted());
    assert_eq!(placed.len(), 294);

    let apex = placed
        .iter()
        .find(|p| p.address == TileAddress::new(0, 0, 0))
        .unwrap();
    assert_eq!(apex.fill, BLACK);

    let neutral = placed
        .iter()
        .filter(|p| p.fill == hextray::models::NEUTRAL_FILL)
        .count();
    assert_eq!(neutral, 285);
}
