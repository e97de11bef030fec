//! Read-only access to the source documents directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::backend::error::BackendError;
use crate::shared::validate_source_name;

/// Suffix of files offered for editing
pub const DOCUMENT_EXTENSION: &str = ".docx";

/// Content type served for source documents
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A source document loaded from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub content: Vec<u8>,
}

impl SourceDocument {
    pub fn content_type(&self) -> &'static str {
        DOCX_CONTENT_TYPE
    }

    /// Inline disposition hint carrying the filename
    pub fn content_disposition(&self) -> String {
        format!("inline; filename={}", self.name)
    }
}

/// Document Registry over a fixed source directory
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    files_dir: PathBuf,
}

impl DocumentRegistry {
    pub fn new(files_dir: impl Into<PathBuf>) -> Self {
        Self {
            files_dir: files_dir.into(),
        }
    }

    /// Lists document names in directory enumeration order.
    ///
    /// Entries whose names are not valid UTF-8 are skipped.
    pub async fn list_documents(&self) -> Result<Vec<String>, BackendError> {
        let mut entries = tokio::fs::read_dir(&self.files_dir)
            .await
            .map_err(|e| BackendError::storage(&self.files_dir, &e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| BackendError::storage(&self.files_dir, &e))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.ends_with(DOCUMENT_EXTENSION) {
                names.push(name);
            }
        }

        Ok(names)
    }

    /// Reads one source document by name.
    ///
    /// Unsafe names are rejected before the path is built.
    pub async fn fetch_document(&self, name: &str) -> Result<SourceDocument, BackendError> {
        validate_source_name(name)?;

        let path = self.files_dir.join(name);
        match tokio::fs::read(&path).await {
            Ok(content) => Ok(SourceDocument {
                name: name.to_string(),
                content,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BackendError::not_found(name)),
            Err(e) => Err(BackendError::storage(path, &e)),
        }
    }
}
