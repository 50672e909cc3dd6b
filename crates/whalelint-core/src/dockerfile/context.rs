use std::path::{Path, PathBuf};

/// Read-only facts about the document being linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    /// Path of the build definition, used to resolve relative sources.
    pub path: PathBuf,
    /// The build context is not local, so local sources cannot be checked.
    pub is_remote: bool,
}

impl DocumentContext {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_remote: false,
        }
    }

    pub fn remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    /// Directory containing the document.
    pub fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Resolves `source` against the document directory unless absolute.
    pub fn resolve(&self, source: &str) -> PathBuf {
        let source = Path::new(source);
        if source.is_absolute() {
            source.to_path_buf()
        } else {
            self.directory().join(source)
        }
    }
}

/// Existence check at the filesystem boundary.
///
/// Implementations answer with a plain boolean; a failing lookup counts as
/// "does not exist".
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl PathProbe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }
}
