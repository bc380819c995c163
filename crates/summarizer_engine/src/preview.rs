use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;

use client_logging::{client_debug, client_warn};
use summarizer_core::{Document, PreviewId};
use tempfile::NamedTempFile;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("preview io error: {0}")]
    Io(#[from] io::Error),
    #[error("preview path {0:?} cannot be addressed as a file url")]
    Unaddressable(PathBuf),
}

/// Local, revocable handles to selected documents.
///
/// Each live preview is a temporary copy of the document bytes addressed by a
/// `file://` URL. Revoking a preview deletes its copy; dropping the store
/// deletes every copy still alive.
#[derive(Debug, Default)]
pub struct PreviewStore {
    dir: Option<PathBuf>,
    live: HashMap<PreviewId, NamedTempFile>,
}

impl PreviewStore {
    /// Store backed by the system temp directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by a specific directory.
    pub fn in_dir(dir: PathBuf) -> Self {
        Self {
            dir: Some(dir),
            live: HashMap::new(),
        }
    }

    pub fn create(&mut self, id: PreviewId, document: &Document) -> Result<String, PreviewError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("preview-").suffix(".pdf");
        let mut file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(&document.bytes())?;
        file.flush()?;

        let path = std::path::absolute(file.path())?;
        let location = Url::from_file_path(&path)
            .map_err(|()| PreviewError::Unaddressable(path.clone()))?
            .to_string();

        if let Some(previous) = self.live.insert(id, file) {
            client_warn!("Preview {} was recreated; replacing {:?}", id, previous.path());
        }
        client_debug!("Preview {} for {} at {}", id, document.file_name(), location);
        Ok(location)
    }

    /// Deletes the preview copy. Returns `false` if the id was not live.
    pub fn revoke(&mut self, id: PreviewId) -> bool {
        match self.live.remove(&id) {
            Some(file) => {
                if let Err(err) = file.close() {
                    client_warn!("Failed to delete preview {}: {}", id, err);
                }
                true
            }
            None => false,
        }
    }

    pub fn revoke_all(&mut self) {
        let ids: Vec<PreviewId> = self.live.keys().copied().collect();
        for id in ids {
            self.revoke(id);
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: PreviewId) -> bool {
        self.live.contains_key(&id)
    }
}
