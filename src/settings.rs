// ABOUTME: Run configuration persisted as Settings.json
// ABOUTME: Lives under the download directory, decoupled from any UI

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "Settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "folderName")]
    pub folder_name: String,
    #[serde(rename = "downloadPath")]
    pub download_path: PathBuf,
}

impl Settings {
    pub fn settings_path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE_NAME)
    }

    /// Reads `Settings.json` from `dir`. A missing file is not an error.
    pub fn load(dir: &Path) -> Result<Option<Settings>> {
        let path = Self::settings_path(dir);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(Some(settings))
    }

    /// Writes `Settings.json` under the download directory, creating the
    /// directory first.
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.download_path)?;
        let path = Self::settings_path(&self.download_path);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}
