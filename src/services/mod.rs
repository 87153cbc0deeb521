//! Service layer for business logic.
//!
//! Services sit between the pure models and the terminal front-end: shape
//! layout and hit testing, persistence, and ownership of the current design.

pub mod designer;
pub mod geometry;
pub mod storage;

// Re-export commonly used types and functions
pub use designer::{ChangeListener, Designer};
pub use geometry::{HexagonLayout, PlacedTile, ViewBox};
pub use storage::{load_or_blank, FileStore, HexagonStore, MemoryStore};
