// ABOUTME: Serde data models for Drive API responses and export jobs
// ABOUTME: Tolerant parsing with only the fields the pipeline needs

use serde::{Deserialize, Serialize};

/// MIME type Drive assigns to native Google Docs documents.
pub const DOCUMENT_MIME_TYPE: &str = "application/vnd.google-apps.document";

/// MIME type Drive assigns to folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Alias Drive accepts for the root of My Drive.
pub const ROOT_FOLDER_ID: &str = "root";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Outcome of the export filter for one listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Exportable,
    Skipped,
}

/// Only native Google Docs can be exported to Markdown; everything else
/// (folders, sheets, uploads) is skipped.
pub fn classify(file: &DriveFile) -> Classification {
    if file.mime_type == DOCUMENT_MIME_TYPE {
        Classification::Exportable
    } else {
        Classification::Skipped
    }
}

/// One exportable entry plus its 1-based position in the batch.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub file: DriveFile,
    pub index: usize,
    pub total: usize,
}

impl ExportJob {
    pub fn fraction(&self) -> f64 {
        self.index as f64 / self.total as f64
    }

    pub fn message(&self) -> String {
        format!(
            "Downloading {} ({}/{})",
            self.file.name, self.index, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: &str) -> DriveFile {
        DriveFile {
            id: "f1".into(),
            name: "Spec".into(),
            mime_type: mime.into(),
        }
    }

    #[test]
    fn test_drive_file_deserialize() {
        let json = r#"{
            "id": "abc123",
            "name": "Spec",
            "mimeType": "application/vnd.google-apps.document",
            "extra_field": "ignored"
        }"#;
        let f: DriveFile = serde_json::from_str(json).unwrap();
        assert_eq!(f.id, "abc123");
        assert_eq!(f.mime_type, DOCUMENT_MIME_TYPE);
    }

    #[test]
    fn test_file_list_deserialize_empty() {
        let list: FileList = serde_json::from_str("{}").unwrap();
        assert!(list.files.is_empty());
    }

    #[test]
    fn test_classify_document() {
        assert_eq!(
            classify(&file(DOCUMENT_MIME_TYPE)),
            Classification::Exportable
        );
    }

    #[test]
    fn test_classify_everything_else_skipped() {
        for mime in [
            FOLDER_MIME_TYPE,
            "application/vnd.google-apps.spreadsheet",
            "image/png",
            "application/octet-stream",
            "",
        ] {
            assert_eq!(classify(&file(mime)), Classification::Skipped, "{mime}");
        }
    }

    #[test]
    fn test_export_job_fraction() {
        let job = ExportJob {
            file: file(DOCUMENT_MIME_TYPE),
            index: 2,
            total: 4,
        };
        assert_eq!(job.fraction(), 0.5);
        assert_eq!(job.message(), "Downloading Spec (2/4)");
    }
}
