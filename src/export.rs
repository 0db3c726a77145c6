// ABOUTME: Per-file export of a Google Doc to a local Markdown file
// ABOUTME: Streams the export endpoint response in fixed-size chunks

use crate::model::ExportJob;
use crate::progress::ProgressSink;
use crate::{Error, Result};
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Docs export endpoint; `?id=<fileId>&exportFormat=md` yields Markdown.
pub const DEFAULT_EXPORT_BASE: &str =
    "https://docs.google.com/feeds/download/documents/export/Export";

const CHUNK_SIZE: usize = 8192;

pub struct Exporter {
    client: Client,
    export_base: String,
    token: String,
}

impl Exporter {
    pub fn new(token: String, export_base: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Exporter {
            client,
            export_base: export_base.unwrap_or_else(|| DEFAULT_EXPORT_BASE.into()),
            token,
        })
    }

    /// Exports one document to `<name>.md` under `dest_dir`, overwriting any
    /// existing file. Reports `index / total` after each chunk. All failures
    /// come back as `Err`; the batch driver decides whether to continue.
    pub fn export(
        &self,
        job: &ExportJob,
        dest_dir: &Path,
        progress: &dyn ProgressSink,
    ) -> Result<PathBuf> {
        let mut response = self
            .client
            .get(&self.export_base)
            .query(&[("id", job.file.id.as_str()), ("exportFormat", "md")])
            .header("Authorization", format!("Bearer {}", self.token))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                endpoint: "export".into(),
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("export request failed")
                    .into(),
            });
        }

        fs::create_dir_all(dest_dir)?;
        let local_path = dest_dir.join(format!("{}.md", job.file.name));
        let mut out = File::create(&local_path)?;

        let message = job.message();
        let mut buffer = [0u8; CHUNK_SIZE];
        loop {
            let bytes_read = response.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            out.write_all(&buffer[..bytes_read])?;
            progress.report(job.fraction(), &message);
        }

        Ok(local_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_new_default_base() {
        let exporter = Exporter::new("token".into(), None).unwrap();
        assert_eq!(exporter.export_base, DEFAULT_EXPORT_BASE);
    }

    #[test]
    fn test_exporter_custom_base() {
        let exporter =
            Exporter::new("token".into(), Some("http://localhost:1234/export".into())).unwrap();
        assert_eq!(exporter.export_base, "http://localhost:1234/export");
    }
}
