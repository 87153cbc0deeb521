// Cursor navigation action handlers

use crate::models::{tiles_in_level, TileAddress, LEVEL_COUNT, SLICE_COUNT};
use crate::tui::AppState;
use anyhow::Result;

/// Previous tile in the same level; stays put at the first tile.
#[must_use]
pub const fn step_left(cursor: TileAddress) -> TileAddress {
    if cursor.tile > 0 {
        TileAddress::new(cursor.slice, cursor.level, cursor.tile - 1)
    } else {
        cursor
    }
}

/// Next tile in the same level; stays put at the last tile.
#[must_use]
pub const fn step_right(cursor: TileAddress) -> TileAddress {
    if cursor.tile + 1 < tiles_in_level(cursor.level) {
        TileAddress::new(cursor.slice, cursor.level, cursor.tile + 1)
    } else {
        cursor
    }
}

/// One level toward the center, keeping roughly the same column.
///
/// Level `j` is offset half a tile left of level `j + 1`, so the tile index
/// drops by one and is clamped into the smaller level.
#[must_use]
pub fn step_inward(cursor: TileAddress) -> TileAddress {
    if cursor.level == 0 {
        return cursor;
    }
    let level = cursor.level - 1;
    let tile = cursor
        .tile
        .saturating_sub(1)
        .min(tiles_in_level(level) - 1);
    TileAddress::new(cursor.slice, level, tile)
}

/// One level toward the rim, keeping the same column.
#[must_use]
pub const fn step_outward(cursor: TileAddress) -> TileAddress {
    if cursor.level + 1 >= LEVEL_COUNT {
        cursor
    } else {
        TileAddress::new(cursor.slice, cursor.level + 1, cursor.tile + 1)
    }
}

/// Same position in the next slice, wrapping after the sixth.
#[must_use]
pub const fn next_slice(cursor: TileAddress) -> TileAddress {
    cursor.in_slice((cursor.slice + 1) % SLICE_COUNT)
}

/// Same position in the previous slice, wrapping before the first.
#[must_use]
pub const fn previous_slice(cursor: TileAddress) -> TileAddress {
    cursor.in_slice((cursor.slice + SLICE_COUNT - 1) % SLICE_COUNT)
}

fn move_cursor(state: &mut AppState, step: impl Fn(TileAddress) -> TileAddress) -> Result<bool> {
    state.cursor = step(state.cursor);
    Ok(false)
}

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    move_cursor(state, step_inward)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    move_cursor(state, step_outward)
}

/// Handle navigate left action
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    move_cursor(state, step_left)
}

/// Handle navigate right action
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    move_cursor(state, step_right)
}

/// Handle next slice action
pub fn handle_next_slice(state: &mut AppState) -> Result<bool> {
    move_cursor(state, next_slice)?;
    state.set_status(format!("Slice {}", state.cursor.slice + 1));
    Ok(false)
}

/// Handle previous slice action
pub fn handle_previous_slice(state: &mut AppState) -> Result<bool> {
    move_cursor(state, previous_slice)?;
    state.set_status(format!("Slice {}", state.cursor.slice + 1));
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_right_clamp_to_level() {
        let first = TileAddress::new(0, 3, 0);
        assert_eq!(step_left(first), first);
        assert_eq!(step_right(first), TileAddress::new(0, 3, 1));

        let last = TileAddress::new(0, 3, 6);
        assert_eq!(step_right(last), last);
        assert_eq!(step_left(last), TileAddress::new(0, 3, 5));

        let apex = TileAddress::new(4, 0, 0);
        assert_eq!(step_left(apex), apex);
        assert_eq!(step_right(apex), apex);
    }

    #[test]
    fn test_inward_outward() {
        let apex = TileAddress::new(2, 0, 0);
        assert_eq!(step_inward(apex), apex);
        assert_eq!(step_outward(apex), TileAddress::new(2, 1, 1));
        assert_eq!(step_inward(TileAddress::new(2, 1, 1)), apex);

        let rim = TileAddress::new(2, 6, 12);
        assert_eq!(step_outward(rim), rim);
        assert_eq!(step_inward(rim), TileAddress::new(2, 5, 10));
        assert_eq!(step_inward(TileAddress::new(2, 5, 0)), TileAddress::new(2, 4, 0));
    }

    #[test]
    fn test_every_step_stays_valid() {
        let steps: [fn(TileAddress) -> TileAddress; 6] = [
            step_left,
            step_right,
            step_inward,
            step_outward,
            next_slice,
            previous_slice,
        ];
        for level in 0..LEVEL_COUNT {
            for tile in 0..tiles_in_level(level) {
                let cursor = TileAddress::new(5, level, tile);
                for step in steps {
                    assert!(step(cursor).is_valid(), "{cursor:?}");
                }
            }
        }
    }

    #[test]
    fn test_slices_wrap() {
        let cursor = TileAddress::new(5, 2, 3);
        assert_eq!(next_slice(cursor), TileAddress::new(0, 2, 3));
        assert_eq!(previous_slice(TileAddress::new(0, 2, 3)), cursor);
    }
}
