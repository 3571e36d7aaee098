//! Pre-analysed layouts stored as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::{LayoutSource, OutlineEntry};
use crate::error::{Result, ScanError};
use crate::layout::{LAParams, LayoutPage};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct DumpFile {
    /// Hex SHA-256 of the password protecting the dump, if any.
    #[serde(default)]
    password_sha256: Option<String>,
    #[serde(default = "default_true")]
    extractable: bool,
    #[serde(default)]
    outline: Option<Vec<OutlineEntry>>,
    #[serde(default)]
    pages: Vec<LayoutPage>,
}

/// A document whose page layouts were serialized by an upstream analyser.
///
/// Layouts are already analysed, so [`LAParams`] have no effect.
#[derive(Debug, Clone)]
pub struct LayoutDump {
    path: PathBuf,
    extractable: bool,
    outline: Option<Vec<OutlineEntry>>,
    pages: Vec<LayoutPage>,
}

impl LayoutDump {
    /// Read and unlock the dump at `path`.
    pub fn open(path: impl AsRef<Path>, password: &str) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| ScanError::CannotOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&data, password, path)
    }

    /// Parse a dump held in memory.
    pub fn from_json(data: &[u8], password: &str) -> Result<Self> {
        Self::parse(data, password, Path::new("<memory>"))
    }

    fn parse(data: &[u8], password: &str, path: &Path) -> Result<Self> {
        let file: DumpFile = serde_json::from_slice(data).map_err(|e| ScanError::CannotOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if let Some(expected) = &file.password_sha256
            && !password_matches(password, expected)
        {
            return Err(ScanError::PasswordIncorrect);
        }

        debug!(
            path = %path.display(),
            pages = file.pages.len(),
            "opened layout dump"
        );

        Ok(Self {
            path: path.to_path_buf(),
            extractable: file.extractable,
            outline: file.outline,
            pages: file.pages,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn password_matches(password: &str, expected_hex: &str) -> bool {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest).eq_ignore_ascii_case(expected_hex.trim())
}

impl LayoutSource for LayoutDump {
    fn is_extractable(&self) -> bool {
        self.extractable
    }

    fn outlines(&self) -> Option<Vec<OutlineEntry>> {
        self.outline.clone()
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn analyze_page(&mut self, index: usize, _laparams: &LAParams) -> Result<LayoutPage> {
        let count = self.pages.len();
        let mut page = self
            .pages
            .get(index)
            .cloned()
            .ok_or(ScanError::PageOutOfRange { index, count })?;
        page.pageid = index + 1;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("secret")
    const SECRET_SHA256: &str = "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";

    #[test]
    fn test_password_protected_dump() {
        let json = format!(r#"{{"password_sha256": "{}", "pages": []}}"#, SECRET_SHA256);
        assert!(LayoutDump::from_json(json.as_bytes(), "secret").is_ok());
        let err = LayoutDump::from_json(json.as_bytes(), "").unwrap_err();
        assert!(matches!(err, ScanError::PasswordIncorrect));
    }

    #[test]
    fn test_unprotected_dump_ignores_password() {
        let dump = LayoutDump::from_json(br#"{"pages": [{"items": []}]}"#, "anything").unwrap();
        assert!(dump.is_extractable());
        assert_eq!(dump.page_count(), 1);
        assert!(dump.outlines().is_none());
    }

    #[test]
    fn test_malformed_dump_cannot_open() {
        let err = LayoutDump::from_json(b"{not json", "").unwrap_err();
        assert!(matches!(err, ScanError::CannotOpen { .. }));
    }

    #[test]
    fn test_analyze_page_numbers_from_one() {
        let mut dump =
            LayoutDump::from_json(br#"{"pages": [{"items": []}, {"items": []}]}"#, "").unwrap();
        let page = dump.analyze_page(1, &LAParams::default()).unwrap();
        assert_eq!(page.pageid, 2);
        let err = dump.analyze_page(2, &LAParams::default()).unwrap_err();
        assert!(matches!(err, ScanError::PageOutOfRange { index: 2, count: 2 }));
    }
}
