use std::fs;
use std::path::{Path, PathBuf};

use crate::dockerfile::context::DocumentContext;
use crate::error::{LintError, Result};

/// Raw document as read from disk.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    /// Absolute path of the document.
    pub path: PathBuf,
    pub text: String,
}

impl DocumentSource {
    pub fn context(&self, is_remote: bool) -> DocumentContext {
        DocumentContext::new(self.path.clone()).remote(is_remote)
    }
}

/// Reads a build definition and resolves its absolute path.
///
/// The path is made absolute without touching the filesystem, so relative
/// sources later resolve against the directory the user named.
pub fn read_document(path: &Path) -> Result<DocumentSource> {
    let io_error = |source| LintError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = fs::read_to_string(path).map_err(io_error)?;
    let absolute = std::path::absolute(path).map_err(io_error)?;

    Ok(DocumentSource {
        path: absolute,
        text,
    })
}
