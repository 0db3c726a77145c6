// ABOUTME: Batch driver: resolve folder, list children, export documents
// ABOUTME: Sequential one-at-a-time export with per-file fault isolation

use crate::api::DriveClient;
use crate::export::Exporter;
use crate::model::{classify, Classification, ExportJob, ROOT_FOLDER_ID};
use crate::progress::ProgressSink;
use crate::settings::Settings;
use crate::{Error, Result};
use std::fs;

/// Counters for one run. Per-file outcomes are logged as they complete;
/// no aggregate summary line is printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub exported: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub fn run_export(
    client: &DriveClient,
    exporter: &Exporter,
    settings: &Settings,
    progress: &dyn ProgressSink,
) -> Result<BatchReport> {
    let folder_id = if settings.folder_name.is_empty() {
        println!("No folder specified. Downloading from the Drive root.");
        ROOT_FOLDER_ID.to_string()
    } else {
        client
            .find_folder(&settings.folder_name)?
            .ok_or_else(|| Error::FolderNotFound(settings.folder_name.clone()))?
    };

    let files = client.list_children(&folder_id)?;
    if files.is_empty() {
        println!("No files found in the specified folder.");
        return Ok(BatchReport::default());
    }

    fs::create_dir_all(&settings.download_path)?;

    // Matches the reference tool: total counts every listed entry,
    // skipped ones included (see DESIGN.md).
    let total = files.len();
    let mut report = BatchReport::default();

    for (i, file) in files.into_iter().enumerate() {
        let job = ExportJob {
            index: i + 1,
            total,
            file,
        };

        match classify(&job.file) {
            Classification::Skipped => {
                println!(
                    "Skipping unsupported file: {} ({})",
                    job.file.name, job.file.mime_type
                );
                report.skipped += 1;
            }
            Classification::Exportable => {
                match exporter.export(&job, &settings.download_path, progress) {
                    Ok(_) => {
                        println!("Downloaded {} as markdown.", job.file.name);
                        report.exported += 1;
                    }
                    Err(e) => {
                        eprintln!("Failed to download {}: {}", job.file.name, e);
                        report.failed += 1;
                    }
                }
            }
        }
    }

    progress.clear();
    Ok(report)
}
