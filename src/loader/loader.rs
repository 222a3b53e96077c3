use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::errors::LoadError;
use crate::{vk_debug, vk_trace};

pub const UNIT_EXTENSION: &str = "vk";

/// A unit that passed the loaded-set check and is now executing.
#[derive(Debug)]
pub struct Unit {
    pub path: PathBuf,
    pub source: String,
}

#[derive(Debug)]
pub enum Begin {
    AlreadyLoaded(PathBuf),
    Fresh(Unit),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(PathBuf),
    AlreadyLoaded(PathBuf),
}

impl LoadOutcome {
    pub fn path(&self) -> &Path {
        match self {
            LoadOutcome::Loaded(p) | LoadOutcome::AlreadyLoaded(p) => p,
        }
    }
}

/// Run-once registry of units, keyed by canonical path.
///
/// Relative paths resolve against the directory of the unit currently on top
/// of the executing stack, or against `root` when nothing is executing.
pub struct ModuleLoader {
    root: PathBuf,
    loaded: HashSet<PathBuf>,
    order: Vec<PathBuf>,
    stack: Vec<PathBuf>,
}

impl ModuleLoader {
    pub fn new() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_root(root)
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            loaded: HashSet::new(),
            order: Vec::new(),
            stack: Vec::new(),
        }
    }

    pub fn current_unit(&self) -> Option<&Path> {
        self.stack.last().map(PathBuf::as_path)
    }

    pub fn base_dir(&self) -> &Path {
        self.current_unit()
            .and_then(Path::parent)
            .unwrap_or(self.root.as_path())
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf, LoadError> {
        let path = path.as_ref();
        let mut candidate = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        };

        if !candidate.is_file() && candidate.extension().is_none() {
            candidate.set_extension(UNIT_EXTENSION);
        }
        if !candidate.is_file() {
            return Err(LoadError::FileNotFound {
                path: self.base_dir().join(path),
            });
        }

        let resolved = fs::canonicalize(&candidate).map_err(|e| LoadError::Io {
            path: candidate.clone(),
            message: e.to_string(),
        })?;

        vk_trace!(
            "loader",
            "{} resolved to {}",
            path.display(),
            resolved.display()
        );
        Ok(resolved)
    }

    /// Marks the resolved unit as loaded and pushes it as the executing unit,
    /// unless it was already loaded.
    pub fn begin(&mut self, path: impl AsRef<Path>) -> Result<Begin, LoadError> {
        let resolved = self.resolve(path)?;

        if !self.loaded.insert(resolved.clone()) {
            vk_debug!("loader", "{} already loaded", resolved.display());
            return Ok(Begin::AlreadyLoaded(resolved));
        }

        let source = match fs::read_to_string(&resolved) {
            Ok(source) => source,
            Err(e) => {
                self.loaded.remove(&resolved);
                return Err(LoadError::Io {
                    path: resolved,
                    message: e.to_string(),
                });
            }
        };

        self.order.push(resolved.clone());
        self.stack.push(resolved.clone());
        Ok(Begin::Fresh(Unit {
            path: resolved,
            source,
        }))
    }

    /// Pops `unit` off the executing stack. A failed unit is forgotten so it
    /// does not count as loaded; whatever it already defined stays.
    pub fn finish(&mut self, unit: &Unit, succeeded: bool) {
        let popped = self.stack.pop();
        debug_assert_eq!(popped.as_deref(), Some(unit.path.as_path()));

        if !succeeded {
            self.loaded.remove(&unit.path);
            self.order.retain(|p| p != &unit.path);
        }
    }

    pub fn is_loaded(&self, resolved: &Path) -> bool {
        self.loaded.contains(resolved)
    }

    /// Loaded units in the order they started.
    pub fn loaded_paths(&self) -> &[PathBuf] {
        &self.order
    }
}

impl Default for ModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}
