use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// External tool used to pick an image from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            command: "zenity".into(),
            args: vec![
                "--file-selection".into(),
                "--title=Selecciona un plátano".into(),
                "--file-filter=*.jpg *.jpeg *.png".into(),
            ],
        }
    }
}

/// External capture tool plus the device it needs access to. The output file
/// is appended as the last argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    pub command: String,
    pub args: Vec<String>,
    pub device: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            command: "fswebcam".into(),
            args: vec![
                "-r".into(),
                "1280x720".into(),
                "--jpeg".into(),
                "95".into(),
                "--no-banner".into(),
            ],
            device: "/dev/video0".into(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Full URL of the prediction endpoint.
    pub endpoint: String,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            gallery: GalleryConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/ripecheck/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("ripecheck");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if the file is missing or invalid.
    /// `RIPECHECK_ENDPOINT` overrides the configured endpoint.
    pub fn load() -> Self {
        let path = Self::path();
        let mut config: Self = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        if let Ok(endpoint) = std::env::var("RIPECHECK_ENDPOINT") {
            config.endpoint = endpoint;
        }
        config
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }
}
