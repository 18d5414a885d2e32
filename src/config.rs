use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_PREDICT_URL: &str = "http://localhost:5000/predict";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_GALLERY_DIR: &str = "gallery";

#[derive(Debug, Deserialize, Default)]
struct ClassifierConfigFile {
    predict_url: Option<String>,
    feedback_url: Option<String>,
    timeout_secs: Option<u64>,
    gallery_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub predict_url: String,
    pub feedback_url: Option<String>,
    pub timeout: Duration,
    pub gallery_dir: PathBuf,
}

impl ClassifierConfig {
    /// Load configuration: optional JSON file named by `HERITAGE_CONFIG`,
    /// then env overrides, then validation.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("HERITAGE_CONFIG").ok();
        let file_cfg = match config_path.as_deref() {
            Some(path) => Some(read_config_file(Path::new(path))?),
            None => None,
        };
        let mut cfg = Self::from_file(file_cfg.unwrap_or_default());
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_file(file: ClassifierConfigFile) -> Self {
        Self {
            predict_url: file
                .predict_url
                .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string()),
            feedback_url: file.feedback_url,
            timeout: Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            gallery_dir: file
                .gallery_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GALLERY_DIR)),
        }
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("HERITAGE_PREDICT_URL") {
            if !url.trim().is_empty() {
                self.predict_url = url;
            }
        }
        if let Ok(url) = std::env::var("HERITAGE_FEEDBACK_URL") {
            if !url.trim().is_empty() {
                self.feedback_url = Some(url);
            }
        }
        if let Ok(dir) = std::env::var("HERITAGE_GALLERY_DIR") {
            if !dir.trim().is_empty() {
                self.gallery_dir = PathBuf::from(dir);
            }
        }
        if let Ok(secs) = std::env::var("HERITAGE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                anyhow!("HERITAGE_TIMEOUT_SECS must be an integer number of seconds")
            })?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(())
    }

    fn validate(&mut self) -> Result<()> {
        url::Url::parse(&self.predict_url)
            .map_err(|e| anyhow!("invalid predict_url '{}': {}", self.predict_url, e))?;
        if let Some(feedback_url) = &self.feedback_url {
            url::Url::parse(feedback_url)
                .map_err(|e| anyhow!("invalid feedback_url '{}': {}", feedback_url, e))?;
        }
        if self.timeout.as_secs() == 0 {
            return Err(anyhow!("timeout must be greater than zero"));
        }
        Ok(())
    }
}

fn read_config_file(path: &Path) -> Result<ClassifierConfigFile> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read config file {}: {}", path.display(), e))?;
    let cfg = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid config file {}: {}", path.display(), e))?;
    Ok(cfg)
}
