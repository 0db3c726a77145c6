// ABOUTME: Blocking HTTP client for the Drive v3 metadata API
// ABOUTME: Handles auth headers, query building, and fail-fast errors

use crate::model::{DriveFile, FileList, FOLDER_MIME_TYPE};
use crate::{Error, Result};
use reqwest::blocking::Client;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://www.googleapis.com/drive/v3";
const LIST_FIELDS: &str = "files(id, name, mimeType)";

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.len() <= max_chars {
        return s.to_string();
    }

    // Find a valid UTF-8 boundary at or before max_chars
    let mut boundary = max_chars;
    while boundary > 0 && !s.is_char_boundary(boundary) {
        boundary -= 1;
    }

    if boundary == 0 {
        return String::new();
    }

    format!("{}...", &s[..boundary])
}

/// Drive query strings wrap values in single quotes.
fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

pub struct DriveClient {
    client: Client,
    base_url: String,
    token: String,
}

impl DriveClient {
    pub fn new(token: String, base_url: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(DriveClient {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_BASE.into()),
            token,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .header("User-Agent", "drivemd/0.1 (Rust)")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            let preview = truncate_str(&message, 100);
            return Err(Error::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                message: preview,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| {
            eprintln!("Failed to parse response from {}: {}", endpoint, e);
            eprintln!("Response body (first 500 chars): {}", truncate_str(&body, 500));
            Error::Parse(e)
        })
    }

    /// Finds a folder by exact name. Returns the id of the first match,
    /// or `None` when Drive reports no folder with that name.
    pub fn find_folder(&self, name: &str) -> Result<Option<String>> {
        let q = format!(
            "name = '{}' and mimeType = '{}'",
            escape_query_value(name),
            FOLDER_MIME_TYPE
        );

        let list: FileList = self.get(
            "/files",
            &[("q", q.as_str()), ("spaces", "drive"), ("fields", LIST_FIELDS)],
        )?;

        Ok(list.files.into_iter().next().map(|f| f.id))
    }

    /// Lists the immediate children of a folder. One round trip, no recursion.
    pub fn list_children(&self, folder_id: &str) -> Result<Vec<DriveFile>> {
        let q = format!("'{}' in parents", escape_query_value(folder_id));

        let list: FileList = self.get("/files", &[("q", q.as_str()), ("fields", LIST_FIELDS)])?;

        Ok(list.files)
    }
}
