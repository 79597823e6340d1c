// src/domain/document.rs

/// The document currently focused in the host, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    /// File name without extension
    pub basename: String,
    pub content: String,
}

impl ActiveDocument {
    pub fn new(basename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            basename: basename.into(),
            content: content.into(),
        }
    }
}
