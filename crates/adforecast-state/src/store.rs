//! Persistence for campaign settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::CampaignState;

/// File name of the stored campaign document.
const STATE_FILE: &str = "state.json";

/// Errors that can occur during state storage operations.
#[derive(Error, Debug)]
pub enum StateError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete a file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse state file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize campaign state: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// Result type for state operations.
pub type Result<T> = std::result::Result<T, StateError>;

/// Storage the campaign settings are loaded from and saved to.
pub trait StateStore {
    /// Loads the stored state, or the defaults if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored state exists but cannot be read.
    fn load(&self) -> Result<CampaignState>;

    /// Replaces the stored state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save(&self, state: &CampaignState) -> Result<()>;

    /// Removes the stored state so the next load returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored state cannot be removed.
    fn reset(&self) -> Result<()>;

    /// Loads the state, applies `change`, saves and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or saving fails.
    fn update<F>(&self, change: F) -> Result<CampaignState>
    where
        F: FnOnce(&mut CampaignState),
        Self: Sized,
    {
        let mut state = self.load()?;
        change(&mut state);
        self.save(&state)?;
        Ok(state)
    }
}

/// Stores the campaign as a JSON document on disk.
///
/// The document lives at `<base_path>/state.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding the state file.
    base_path: PathBuf,
    /// Full path of the state file.
    state_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| StateError::CreateDir {
                path: base_path.clone(),
                source: e,
            })?;
        }

        let state_path = base_path.join(STATE_FILE);
        Ok(Self {
            base_path,
            state_path,
        })
    }

    /// Returns the default directory for adforecast state.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/adforecast/`
    /// - macOS: `~/Library/Application Support/adforecast/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\adforecast\`
    ///
    /// Falls back to `~/.adforecast/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "adforecast").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Creates a store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the directory holding the state file.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the state file.
    #[must_use]
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<CampaignState> {
        if !self.state_path.exists() {
            debug!(path = %self.state_path.display(), "no stored state, using defaults");
            return Ok(CampaignState::default());
        }

        let content = fs::read_to_string(&self.state_path).map_err(|e| StateError::ReadFile {
            path: self.state_path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StateError::ParseJson {
            path: self.state_path.clone(),
            source: e,
        })
    }

    fn save(&self, state: &CampaignState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)?;
        debug!(path = %self.state_path.display(), "saving campaign state");

        fs::write(&self.state_path, json).map_err(|e| StateError::WriteFile {
            path: self.state_path.clone(),
            source: e,
        })
    }

    fn reset(&self) -> Result<()> {
        if !self.state_path.exists() {
            return Ok(());
        }

        debug!(path = %self.state_path.display(), "removing campaign state");
        fs::remove_file(&self.state_path).map_err(|e| StateError::DeleteFile {
            path: self.state_path.clone(),
            source: e,
        })
    }
}

/// Keeps the campaign in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<CampaignState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `state`.
    #[must_use]
    pub const fn with_state(state: CampaignState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }

    /// Returns true if a state has been saved.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<CampaignState> {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, state: &CampaignState) -> Result<()> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".adforecast")
}
