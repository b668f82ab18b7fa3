//! Persisted user preferences: footer open state and footer height.
//!
//! Writes are best-effort. Stores report failures, and the app view logs
//! and ignores them so a full disk or disabled storage never affects the UI.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Storage for the two footer preferences.
pub trait PreferenceStore {
    /// Stored open state, if any.
    fn footer_open(&self) -> Option<bool>;
    /// Stored preferred height, if any.
    fn footer_height(&self) -> Option<f64>;
    /// Persist the open state.
    fn save_footer_open(&mut self, open: bool) -> Result<(), ViewError>;
    /// Persist the preferred height.
    fn save_footer_height(&mut self, height: f64) -> Result<(), ViewError>;
}

/// Serialized preference record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Footer open state.
    pub footer_open: Option<bool>,
    /// Preferred footer height.
    pub footer_height: Option<f64>,
}

/// Preferences kept in a TOML file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl FilePreferenceStore {
    /// Open `path`. A missing or unreadable file starts from empty
    /// preferences.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = match Self::read(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::debug!("preferences at {} not loaded: {e}", path.display());
                Preferences::default()
            }
        };
        Self { path, prefs }
    }

    /// Backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path) -> Result<Preferences, ViewError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ViewError::Preferences(e.to_string()))
    }

    fn write(&self) -> Result<(), ViewError> {
        let content = toml::to_string_pretty(&self.prefs)
            .map_err(|e| ViewError::Preferences(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn footer_open(&self) -> Option<bool> {
        self.prefs.footer_open
    }

    fn footer_height(&self) -> Option<f64> {
        self.prefs.footer_height
    }

    fn save_footer_open(&mut self, open: bool) -> Result<(), ViewError> {
        self.prefs.footer_open = Some(open);
        self.write()
    }

    fn save_footer_height(&mut self, height: f64) -> Result<(), ViewError> {
        self.prefs.footer_height = Some(height);
        self.write()
    }
}

/// In-memory store. Clones share the same record, so a test can keep a
/// handle after moving a clone into the view.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    prefs: Rc<RefCell<Preferences>>,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `prefs`.
    #[must_use]
    pub fn with(prefs: Preferences) -> Self {
        Self {
            prefs: Rc::new(RefCell::new(prefs)),
            fail_writes: false,
        }
    }

    /// Store whose writes always fail, like storage over quota.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Current record.
    #[must_use]
    pub fn snapshot(&self) -> Preferences {
        *self.prefs.borrow()
    }

    fn check_writable(&self) -> Result<(), ViewError> {
        if self.fail_writes {
            Err(ViewError::Preferences("storage unavailable".to_owned()))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn footer_open(&self) -> Option<bool> {
        self.prefs.borrow().footer_open
    }

    fn footer_height(&self) -> Option<f64> {
        self.prefs.borrow().footer_height
    }

    fn save_footer_open(&mut self, open: bool) -> Result<(), ViewError> {
        self.check_writable()?;
        self.prefs.borrow_mut().footer_open = Some(open);
        Ok(())
    }

    fn save_footer_height(&mut self, height: f64) -> Result<(), ViewError> {
        self.check_writable()?;
        self.prefs.borrow_mut().footer_height = Some(height);
        Ok(())
    }
}
