use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{DetailedError, SaveError};

/// Receives the error of every failed save.
pub type ErrorSink = Box<dyn FnMut(DetailedError)>;

/// A text buffer backed by a file.
///
/// Dirtiness is derived from the text itself: the document is dirty while
/// `content` differs from the text written by the last successful save.
/// An empty `file_path` makes saving a no-op.
pub struct Document {
    content: String,
    last_saved: String,
    file_path: PathBuf,
    error_sink: Option<ErrorSink>,
}

impl Document {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self::with_content(file_path, String::new())
    }

    /// Create a document whose initial text was already read from `file_path`.
    /// The text counts as saved.
    pub fn with_content(file_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            last_saved: content.clone(),
            content,
            file_path: file_path.into(),
            error_sink: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn set_error_sink(&mut self, sink: impl FnMut(DetailedError) + 'static) {
        self.error_sink = Some(Box::new(sink));
    }

    pub fn is_dirty(&self) -> bool {
        self.content != self.last_saved
    }

    /// Write the whole buffer to `file_path`, creating missing directories.
    ///
    /// Clean documents and documents without a path succeed without touching
    /// the filesystem. The file is truncated and rewritten in place, so a
    /// crash mid-write can leave it short.
    pub fn save(&mut self) -> Result<(), SaveError> {
        if !self.is_dirty() || self.file_path.as_os_str().is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| SaveError::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut file = File::create(&self.file_path).map_err(|source| SaveError::CreateFile {
            path: self.file_path.clone(),
            source,
        })?;

        file.write_all(self.content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| SaveError::Write {
                path: self.file_path.clone(),
                source,
            })?;
        drop(file);

        self.last_saved.clone_from(&self.content);
        Ok(())
    }

    /// Save and hand any failure to the error sink. Returns whether the save
    /// succeeded.
    pub fn save_and_report(&mut self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(err) => {
                if let Some(sink) = self.error_sink.as_mut() {
                    sink(DetailedError::from(&err));
                }
                false
            }
        }
    }
}

/// Save every document independently. A failure does not stop the sweep;
/// all failures are returned in document order.
pub fn save_all<'a>(documents: impl IntoIterator<Item = &'a mut Document>) -> Vec<SaveError> {
    documents
        .into_iter()
        .filter_map(|doc| doc.save().err())
        .collect()
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("file_path", &self.file_path)
            .field("len", &self.content.len())
            .field("dirty", &self.is_dirty())
            .finish_non_exhaustive()
    }
}
