use std::path::PathBuf;

use crate::graph::GraphError;

/// Coarse classification of a [`GraphMLError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be opened or the output could not be written
    Io,
    /// The document is malformed or holds a value that cannot be parsed
    Format,
    /// An edge refers to a node that was never declared
    Reference,
}

/// Errors that can occur while reading or writing GraphML
#[derive(Debug, thiserror::Error)]
pub enum GraphMLError {
    /// Failed to open the input file
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to create the output file
    #[error("cannot create {}: {source}", path.display())]
    Create {
        /// Path that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O error while streaming
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error reported by the XML tokenizer while reading
    #[error("XML syntax error at byte {position}: {source}")]
    Syntax {
        /// Byte offset of the error
        position: u64,
        /// Tokenizer error
        source: quick_xml::Error,
    },

    /// Error from the XML layer outside of the read loop
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// UTF-8 encoding error in an attribute or text
    #[error("UTF-8 encoding error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    /// Required XML attribute is missing
    #[error("<{element}> at byte {position} is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Element name
        element: &'static str,
        /// Attribute name
        attribute: &'static str,
        /// Byte offset of the element
        position: u64,
    },

    /// Weight data is not a floating-point number
    #[error("invalid edge weight '{value}' in <data> at byte {position}")]
    InvalidWeight {
        /// The offending text
        value: String,
        /// Byte offset of the closing tag
        position: u64,
    },

    /// Elements appear in an order or nesting the reader cannot handle
    #[error("invalid GraphML structure at byte {position}: {message}")]
    InvalidStructure {
        /// What went wrong
        message: String,
        /// Byte offset where it was detected
        position: u64,
    },

    /// An edge names a node id never declared by a `<node>` element
    #[error("edge at byte {position} refers to undeclared node '{id}'")]
    UnknownNode {
        /// External node id from the document
        id: String,
        /// Byte offset of the closing edge tag
        position: u64,
    },

    /// The graph rejected a mutation
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

impl GraphMLError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Open { .. } | Self::Create { .. } | Self::IoError(_) => ErrorKind::Io,
            Self::XmlError(quick_xml::Error::Io(_))
            | Self::Syntax {
                source: quick_xml::Error::Io(_),
                ..
            } => ErrorKind::Io,
            Self::UnknownNode { .. } | Self::Graph(_) => ErrorKind::Reference,
            Self::Syntax { .. }
            | Self::XmlError(_)
            | Self::Utf8Error(_)
            | Self::MissingAttribute { .. }
            | Self::InvalidWeight { .. }
            | Self::InvalidStructure { .. } => ErrorKind::Format,
        }
    }

    pub(crate) fn structure(message: impl Into<String>, position: u64) -> Self {
        Self::InvalidStructure {
            message: message.into(),
            position,
        }
    }
}
