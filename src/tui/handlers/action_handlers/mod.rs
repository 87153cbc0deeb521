//! Action handlers organized by category

/// Cursor movement within and across slices
pub mod navigation;

/// Painting, color selection, and mirror mode
pub mod painting;
