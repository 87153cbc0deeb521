//! Design persistence.
//!
//! Stores hand the hexagon back as the nested-array JSON blob it was saved as.
//! Loading never fails from the caller's point of view: a missing, unreadable,
//! or malformed blob is reported as "nothing saved". Saving is best-effort and
//! only logs failures; the in-memory design stays authoritative either way.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::models::Hexagon;

/// Persistence collaborator for the current design.
pub trait HexagonStore {
    /// Returns the saved design, or `None` if nothing usable was saved.
    fn load(&self) -> Option<Hexagon>;

    /// Saves the design. Failures are logged, never returned.
    fn save(&self, hexagon: &Hexagon);
}

impl<S: HexagonStore + ?Sized> HexagonStore for Rc<S> {
    fn load(&self) -> Option<Hexagon> {
        (**self).load()
    }

    fn save(&self, hexagon: &Hexagon) {
        (**self).save(hexagon);
    }
}

/// Loads the saved design, falling back to a blank hexagon.
pub fn load_or_blank(store: &impl HexagonStore) -> Hexagon {
    store.load().unwrap_or_else(Hexagon::blank)
}

/// Store backed by a JSON file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the given design file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the design file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the design file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn try_load(&self) -> Result<Option<Hexagon>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).context(format!(
                    "Failed to read design file: {}",
                    self.path.display()
                ))
            }
        };

        let hexagon = Hexagon::from_json(&content).context(format!(
            "Failed to parse design file: {}",
            self.path.display()
        ))?;
        Ok(Some(hexagon))
    }

    /// Writes the design file using temp file + rename.
    pub fn try_save(&self, hexagon: &Hexagon) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create design directory: {}",
                parent.display()
            ))?;
        }

        let content = hexagon.to_json()?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp design file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp design file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

impl HexagonStore for FileStore {
    fn load(&self) -> Option<Hexagon> {
        match self.try_load() {
            Ok(Some(hexagon)) => {
                debug!("Loaded design from {}", self.path.display());
                Some(hexagon)
            }
            Ok(None) => {
                debug!("No saved design at {}", self.path.display());
                None
            }
            Err(e) => {
                warn!("Ignoring saved design: {e:#}");
                None
            }
        }
    }

    fn save(&self, hexagon: &Hexagon) {
        match self.try_save(hexagon) {
            Ok(()) => debug!("Saved design to {}", self.path.display()),
            Err(e) => warn!("Failed to save design: {e:#}"),
        }
    }
}

/// In-memory store holding the serialized blob.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with raw (possibly malformed) content.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
            saves: RefCell::new(0),
        }
    }

    /// Current raw content.
    #[must_use]
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl HexagonStore for MemoryStore {
    fn load(&self) -> Option<Hexagon> {
        let blob = self.blob.borrow();
        let raw = blob.as_deref()?;
        match Hexagon::from_json(raw) {
            Ok(hexagon) => Some(hexagon),
            Err(e) => {
                warn!("Ignoring stored design: {e:#}");
                None
            }
        }
    }

    fn save(&self, hexagon: &Hexagon) {
        match hexagon.to_json() {
            Ok(json) => {
                *self.blob.borrow_mut() = Some(json);
                *self.saves.borrow_mut() += 1;
            }
            Err(e) => warn!("Failed to serialize design: {e:#}"),
        }
    }
}
