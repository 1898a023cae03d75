use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A description read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDescription {
    pub text: String,
    pub source: String,
}

/// Load a description from a text file.
///
/// Line breaks become single spaces so a description spread over several
/// lines tokenizes like one typed on a single line.
pub fn load_description(path: impl AsRef<Path>) -> Result<LoadedDescription, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedDescription {
        text: content.lines().collect::<Vec<_>>().join(" "),
        source: format!("file:{}", path.display()),
    })
}
