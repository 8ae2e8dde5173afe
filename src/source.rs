use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::SourceError;

/// Opaque handle to a picked or captured image. The workflow owns the handle
/// once set; only a derived base64 encoding ever leaves the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    path: PathBuf,
}

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Something that can produce an image on request: the gallery picker or the
/// camera. `Ok(None)` means the user backed out of the dialog.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn pick(&self) -> Result<Option<ImageRef>, SourceError>;

    /// Short name for log lines.
    fn name(&self) -> &'static str;
}
