// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Defines all subcommands, global flags, and settings resolution

use crate::settings::Settings;
use crate::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DOWNLOAD_DIR: &str = "DownloadedDocs";

#[derive(Parser, Debug)]
#[command(name = "drivemd")]
#[command(about = "Export Google Docs from a Drive folder to local Markdown", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Bearer token (overrides token file/env)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Drive metadata API base URL
    #[arg(
        long,
        global = true,
        default_value = "https://www.googleapis.com/drive/v3"
    )]
    pub api_base: String,

    /// Docs export endpoint URL
    #[arg(
        long,
        global = true,
        default_value = "https://docs.google.com/feeds/download/documents/export/Export"
    )]
    pub export_base: String,

    /// Drive folder to export from (empty means the Drive root)
    #[arg(long, global = true)]
    pub folder: Option<String>,

    /// Local directory for exported Markdown files
    #[arg(long, global = true)]
    pub dest: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Export all documents in the folder (default)
    Export,

    /// List the folder's entries without downloading
    List,

    /// Persist the current folder/destination to Settings.json
    SaveSettings,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Export)
    }

    /// Merges `Settings.json` (if present under the destination) with the
    /// CLI flags; flags win over the file.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let dest = self
            .dest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR));

        let mut settings = Settings::load(&dest)?.unwrap_or_else(|| Settings {
            folder_name: String::new(),
            download_path: dest.clone(),
        });

        settings.download_path = dest;
        if let Some(folder) = &self.folder {
            settings.folder_name = folder.clone();
        }

        Ok(settings)
    }
}
