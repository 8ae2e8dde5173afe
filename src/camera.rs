use std::path::PathBuf;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::SourceError;
use crate::source::{ImageRef, ImageSource};

/// Camera-backed image source. Shoots a still via an external capture tool
/// (fswebcam by default) into a temp file.
pub struct CameraCapture {
    command: String,
    args: Vec<String>,
    device: String,
    granted: AtomicBool,
}

impl CameraCapture {
    pub fn new(command: String, args: Vec<String>, device: String) -> Self {
        Self {
            command,
            args,
            device,
            granted: AtomicBool::new(false),
        }
    }

    /// Verify the camera device is accessible. Idempotent: once access has
    /// been confirmed, later calls return immediately.
    fn ensure_permission(&self) -> Result<(), SourceError> {
        if self.granted.load(Ordering::Relaxed) {
            return Ok(());
        }
        match std::fs::File::open(&self.device) {
            Ok(_) => {
                log::debug!("Camera device {} accessible", self.device);
                self.granted.store(true, Ordering::Relaxed);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Err(SourceError::PermissionDenied(self.device.clone()))
            }
            Err(e) => Err(SourceError::Io(e)),
        }
    }

    fn shot_path(&self) -> PathBuf {
        std::env::temp_dir().join(format!("ripecheck-shot-{}.jpg", std::process::id()))
    }
}

#[async_trait]
impl ImageSource for CameraCapture {
    async fn pick(&self) -> Result<Option<ImageRef>, SourceError> {
        self.ensure_permission()?;

        let shot = self.shot_path();
        log::info!("Capturing with {} to {}", self.command, shot.display());

        let status = Command::new(&self.command)
            .args(&self.args)
            .arg(&shot)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| SourceError::Tool(format!("failed to spawn {}: {e}", self.command)))?;

        if !status.success() {
            return Err(SourceError::Tool(format!(
                "{} exited with {status}",
                self.command
            )));
        }
        if !shot.is_file() {
            return Err(SourceError::Tool(format!(
                "{} wrote no image to {}",
                self.command,
                shot.display()
            )));
        }

        Ok(Some(ImageRef::new(shot)))
    }

    fn name(&self) -> &'static str {
        "camera"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_probe_is_idempotent() {
        let path = std::env::temp_dir().join(format!("ripecheck-cam-{}", std::process::id()));
        std::fs::write(&path, b"").unwrap();

        let camera = CameraCapture::new(
            "true".into(),
            vec![],
            path.to_string_lossy().into_owned(),
        );
        assert!(camera.ensure_permission().is_ok());

        // Granted once; removing the device no longer matters.
        std::fs::remove_file(&path).unwrap();
        assert!(camera.ensure_permission().is_ok());
    }

    #[test]
    fn missing_device_is_an_error() {
        let camera = CameraCapture::new("true".into(), vec![], "/nonexistent/video0".into());
        assert!(camera.ensure_permission().is_err());
    }
}
