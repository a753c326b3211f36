use crate::{models::Section, parsing::parse_sections};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown document from disk
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Read a markdown document and parse it into its section tree
pub fn parse_file(path: &Path) -> Result<Section, IoError> {
    let markdown = read_document(path)?;
    log::debug!("parsing {} ({} bytes)", path.display(), markdown.len());
    Ok(parse_sections(&markdown))
}
