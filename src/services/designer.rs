//! Designer: single owner of the current design.
//!
//! The designer threads the hexagon through the pure model operations and
//! replaces it wholesale on every edit. Anything that needs to react to a new
//! grid (persistence, mostly) registers a change listener.

use tracing::debug;

use crate::models::{Hexagon, Palette, PaletteEntry, RgbColor, TileAddress};

/// Callback invoked with the new hexagon after every grid change.
pub type ChangeListener = Box<dyn FnMut(&Hexagon)>;

/// Current design plus the user's color and mirror selections.
pub struct Designer {
    hexagon: Hexagon,
    palette: Palette,
    selected: usize,
    mirror: bool,
    listeners: Vec<ChangeListener>,
}

impl Designer {
    /// Creates a designer around an existing hexagon.
    ///
    /// The first palette entry is selected and mirror mode is off.
    #[must_use]
    pub fn new(hexagon: Hexagon, palette: Palette) -> Self {
        Self {
            hexagon,
            palette,
            selected: 0,
            mirror: false,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for grid changes.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// The current design.
    #[must_use]
    pub const fn hexagon(&self) -> &Hexagon {
        &self.hexagon
    }

    /// The palette colors can be picked from.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the selected palette entry.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected palette entry.
    #[must_use]
    pub fn current_entry(&self) -> Option<&PaletteEntry> {
        self.palette.entry_at(self.selected)
    }

    /// Fill color of the selected palette entry.
    #[must_use]
    pub fn current_color(&self) -> Option<RgbColor> {
        self.current_entry().map(|entry| entry.fill)
    }

    /// Whether mirror mode is on.
    #[must_use]
    pub const fn mirror(&self) -> bool {
        self.mirror
    }

    /// Selects a palette entry. Returns false if `index` is out of range.
    pub fn select_color(&mut self, index: usize) -> bool {
        if index < self.palette.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Selects the next palette entry, wrapping around.
    pub fn cycle_color(&mut self) {
        if !self.palette.is_empty() {
            self.selected = (self.selected + 1) % self.palette.len();
        }
    }

    /// Flips mirror mode and returns the new state.
    pub fn toggle_mirror(&mut self) -> bool {
        self.mirror = !self.mirror;
        self.mirror
    }

    /// Addresses a paint at `address` would recolor in the current mode.
    #[must_use]
    pub fn paint_targets(&self, address: TileAddress) -> Vec<TileAddress> {
        Hexagon::edit_targets(address, self.mirror)
    }

    /// Paints `address` with the selected color, honoring mirror mode.
    ///
    /// Returns false without notifying if no color is selected.
    pub fn paint(&mut self, address: TileAddress) -> bool {
        let Some(color) = self.current_color() else {
            return false;
        };

        debug!(
            "Painting {:?} with {} (mirror: {})",
            address, color, self.mirror
        );
        let next = self.hexagon.apply_edit(address, color, self.mirror);
        self.replace(next);
        true
    }

    /// Clears the whole design.
    pub fn reset(&mut self) {
        self.replace(Hexagon::blank());
    }

    /// Tile count per palette entry for the current design.
    #[must_use]
    pub fn usage(&self) -> Vec<(&PaletteEntry, usize)> {
        self.palette.usage(&self.hexagon)
    }

    fn replace(&mut self, hexagon: Hexagon) {
        self.hexagon = hexagon;
        for listener in &mut self.listeners {
            listener(&self.hexagon);
        }
    }
}

impl std::fmt::Debug for Designer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Designer")
            .field("selected", &self.selected)
            .field("mirror", &self.mirror)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::palette::{BLACK, GOLD, WHITE};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn designer() -> Designer {
        Designer::new(Hexagon::blank(), Palette::standard())
    }

    #[test]
    fn test_defaults() {
        let designer = designer();
        assert_eq!(designer.current_color(), Some(GOLD));
        assert!(!designer.mirror());
        assert_eq!(designer.hexagon(), &Hexagon::blank());
    }

    #[test]
    fn test_select_and_cycle_color() {
        let mut designer = designer();
        assert!(designer.select_color(2));
        assert_eq!(designer.current_color(), Some(WHITE));
        assert!(!designer.select_color(3));
        assert_eq!(designer.selected_index(), 2);

        designer.cycle_color();
        assert_eq!(designer.current_color(), Some(GOLD));
        designer.cycle_color();
        assert_eq!(designer.current_color(), Some(BLACK));
    }

    #[test]
    fn test_paint_single_and_mirror() {
        let mut designer = designer();
        assert!(designer.paint(TileAddress::new(0, 3, 2)));
        assert_eq!(designer.hexagon().count_tiles_of_color(GOLD), 1);

        assert!(designer.toggle_mirror());
        designer.select_color(1);
        assert_eq!(designer.paint_targets(TileAddress::new(2, 5, 1)).len(), 6);
        designer.paint(TileAddress::new(2, 5, 1));
        assert_eq!(designer.hexagon().count_tiles_of_color(BLACK), 6);
        assert_eq!(designer.hexagon().count_tiles_of_color(GOLD), 1);

        let usage: Vec<usize> = designer.usage().into_iter().map(|(_, n)| n).collect();
        assert_eq!(usage, vec![1, 6, 0]);
    }

    #[test]
    fn test_listeners_see_every_grid_change() {
        let seen: Rc<RefCell<Vec<Hexagon>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut designer = designer();
        designer.subscribe(Box::new(move |h| sink.borrow_mut().push(h.clone())));

        designer.paint(TileAddress::new(1, 1, 1));
        // Selection changes leave the grid alone
        designer.cycle_color();
        designer.toggle_mirror();
        designer.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].count_tiles_of_color(GOLD), 1);
        assert_eq!(seen[1], Hexagon::blank());
    }
}
