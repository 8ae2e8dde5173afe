use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::SourceError;
use crate::source::{ImageRef, ImageSource};

/// File-chooser backed image source. Spawns the configured picker tool
/// (zenity by default, kdialog works too) and reads the chosen path from its
/// stdout. Dismissing the dialog exits nonzero, which we treat as a cancel.
pub struct GalleryPicker {
    command: String,
    args: Vec<String>,
}

impl GalleryPicker {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }
}

#[async_trait]
impl ImageSource for GalleryPicker {
    async fn pick(&self) -> Result<Option<ImageRef>, SourceError> {
        log::info!("Opening gallery picker: {}", self.command);

        let output = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| SourceError::Tool(format!("failed to spawn {}: {e}", self.command)))?;

        if !output.status.success() {
            log::debug!("Picker exited with {}, treating as cancel", output.status);
            return Ok(None);
        }

        let path = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        if path.as_os_str().is_empty() {
            return Ok(None);
        }
        if !path.is_file() {
            return Err(SourceError::Tool(format!(
                "picker returned a missing file: {}",
                path.display()
            )));
        }

        Ok(Some(ImageRef::new(path)))
    }

    fn name(&self) -> &'static str {
        "gallery"
    }
}
