use bytes::Bytes;
use std::path::Path;

/// Document formats the extractor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
    Unsupported,
}

impl DocumentKind {
    /// Maps a dotted extension (`".pdf"`) to a kind. Matching is exact and
    /// case-sensitive.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            ".pdf" => DocumentKind::Pdf,
            ".docx" => DocumentKind::Word,
            _ => DocumentKind::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentKind::Unsupported)
    }
}

/// Dotted extension of the final path component, or an empty string.
///
/// Leading dots do not start an extension, so `.bashrc` has none.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub size: usize,
    pub content: Bytes,
}

impl UploadedDocument {
    pub fn new(name: String, content: Bytes) -> Self {
        let size = content.len();
        Self {
            name,
            size,
            content,
        }
    }

    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_extension(&self.extension())
    }
}
