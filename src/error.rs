use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type for transform parameter construction and XML processing
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was absent
    #[error("{0} must not be null")]
    NullArgument(&'static str),

    /// An untyped value was not a string where one is required
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Namespace prefix or URI cannot be written as an XML declaration
    #[error("Invalid namespace declaration: {0}")]
    InvalidNamespace(String),

    /// Indent character cannot be written as a single byte
    #[error("Indent character {0:?} is not ASCII")]
    InvalidIndent(char),

    /// Expected XML element not found in the input
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    /// Malformed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Failure while writing XML output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output or CDATA content was not valid UTF-8
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
