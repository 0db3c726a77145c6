// ABOUTME: Public library API for the drivemd exporter
// ABOUTME: Re-exports core modules for external use

pub mod api;
pub mod auth;
pub mod batch;
pub mod cli;
pub mod error;
pub mod export;
pub mod model;
pub mod progress;
pub mod settings;

pub use error::{Error, Result};
pub use model::{Classification, DriveFile, ExportJob};
pub use settings::Settings;
