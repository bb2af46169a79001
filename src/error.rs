//! Error types for the deckforge library.

use std::io;
use thiserror::Error;

/// Result type alias for deckforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or saving a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during directory creation or file write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error writing the ZIP container.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error serializing XML content.
    #[error("XML write error: {0}")]
    XmlWrite(String),

    /// A shape was given geometry that cannot be placed on the canvas.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlWrite(err.to_string())
    }
}
