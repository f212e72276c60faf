use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use daily_core::{AskedMemory, ProblemId};
use daily_logging::{daily_debug, daily_info, daily_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("directory missing or not writable: {0}")]
    Dir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ensure directory exists; create if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::Dir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::Dir(format!("{} is not a directory", dir.display())));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::Dir(e.to_string()))?;
    }
    Ok(())
}

/// Writes a file by filling a sibling temp file and renaming it over the target,
/// so readers see either the old or the new content.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn write(&self, content: &[u8]) -> Result<(), PersistError> {
        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_dir(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.target).map_err(|e| PersistError::Io(e.error))?;
        Ok(())
    }
}

/// Persistence for the asked-problem history.
pub trait MemoryStore {
    /// Never fails: a missing or unreadable history is an empty history.
    fn load(&self) -> AskedMemory;
    /// Replaces whatever was stored before.
    fn save(&self, memory: &AskedMemory) -> Result<(), PersistError>;
}

/// History kept as a JSON array of problem ids.
///
/// Corrupt content is treated as "no history" so a damaged file cannot block
/// the daily run; the next save overwrites it. There is no locking: only one
/// process should own the file at a time.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MemoryStore for JsonFileStore {
    fn load(&self) -> AskedMemory {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                daily_debug!("No asked history at {:?}; starting fresh", self.path);
                return AskedMemory::new();
            }
            Err(err) => {
                daily_warn!("Failed to read asked history from {:?}: {}", self.path, err);
                return AskedMemory::new();
            }
        };

        match serde_json::from_str::<Vec<ProblemId>>(&content) {
            Ok(ids) => {
                daily_info!("Loaded {} asked ids from {:?}", ids.len(), self.path);
                AskedMemory::from(ids)
            }
            Err(err) => {
                daily_warn!(
                    "Ignoring corrupt asked history at {:?}: {}",
                    self.path,
                    err
                );
                AskedMemory::new()
            }
        }
    }

    fn save(&self, memory: &AskedMemory) -> Result<(), PersistError> {
        let content = serde_json::to_vec(memory.ids())?;
        AtomicFileWriter::new(self.path.clone()).write(&content)?;
        daily_debug!("Saved {} asked ids to {:?}", memory.len(), self.path);
        Ok(())
    }
}

/// Process-local store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    memory: RefCell<AskedMemory>,
    saves: RefCell<usize>,
}

impl InMemoryStore {
    pub fn new(memory: AskedMemory) -> Self {
        Self {
            memory: RefCell::new(memory),
            saves: RefCell::new(0),
        }
    }

    pub fn snapshot(&self) -> AskedMemory {
        self.memory.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl MemoryStore for InMemoryStore {
    fn load(&self) -> AskedMemory {
        self.snapshot()
    }

    fn save(&self, memory: &AskedMemory) -> Result<(), PersistError> {
        *self.memory.borrow_mut() = memory.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
