// ABOUTME: Bearer token discovery with precedence chain
// ABOUTME: CLI flag → config token file → env var

use crate::{Error, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn resolve_token(cli_token: Option<String>) -> Result<String> {
    // 1. CLI flag
    if let Some(token) = cli_token {
        return Ok(token);
    }

    // 2. Token file under the config directory
    if let Some(token) = try_token_file()? {
        return Ok(token);
    }

    // 3. Environment variable
    if let Ok(token) = env::var("DRIVE_TOKEN") {
        return Ok(token);
    }

    Err(Error::Auth(
        "No bearer token found. Provide via --token, ~/.config/drivemd/token.json, or DRIVE_TOKEN env var".into(),
    ))
}

fn try_token_file() -> Result<Option<String>> {
    let config_home = env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = env::var("HOME").unwrap_or_default();
        format!("{}/.config", home)
    });

    let path = PathBuf::from(config_home).join("drivemd/token.json");
    parse_token_file(&path)
}

fn parse_token_file(path: &PathBuf) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;

    if let Some(access_token) = json.get("access_token").and_then(|v| v.as_str()) {
        return Ok(Some(access_token.to_string()));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_token_cli_precedence() {
        let token = resolve_token(Some("cli_token".into())).unwrap();
        assert_eq!(token, "cli_token");
    }

    #[test]
    fn test_parse_token_file_valid() {
        let temp = TempDir::new().unwrap();
        let token_path = temp.path().join("token.json");

        fs::write(&token_path, r#"{"access_token": "ya29.test123"}"#).unwrap();

        let token = parse_token_file(&token_path).unwrap();
        assert_eq!(token, Some("ya29.test123".into()));
    }

    #[test]
    fn test_parse_token_file_missing() {
        let temp = TempDir::new().unwrap();
        let token_path = temp.path().join("missing.json");

        let token = parse_token_file(&token_path).unwrap();
        assert!(token.is_none());
    }

    #[test]
    fn test_parse_token_file_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let token_path = temp.path().join("token.json");

        fs::write(&token_path, r#"{"refresh_token": "nope"}"#).unwrap();

        let token = parse_token_file(&token_path).unwrap();
        assert!(token.is_none());
    }
}
