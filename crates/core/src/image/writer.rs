//! Image export: writes raw image streams into the images folder.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::sniff::sniff;
use crate::layout::LayoutImage;

/// Writes image streams found during a walk into one destination folder.
///
/// The folder is never created here. A missing folder, or any I/O failure,
/// makes the write report failure instead of returning an error.
#[derive(Debug, Clone)]
pub struct ImageWriter {
    outdir: PathBuf,
}

impl ImageWriter {
    pub fn new(outdir: impl AsRef<Path>) -> Self {
        Self {
            outdir: outdir.as_ref().to_path_buf(),
        }
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }

    /// Full path an exported filename resolves to.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.outdir.join(filename)
    }

    /// Write `data` to `outdir/filename`, replacing any existing file.
    pub fn save(&self, filename: &str, data: &[u8]) -> bool {
        if !self.outdir.is_dir() {
            debug!(dir = %self.outdir.display(), "images folder is not a directory");
            return false;
        }
        let path = self.path_for(filename);
        match fs::write(&path, data) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to write image");
                false
            }
        }
    }

    /// Export an image node found on `page_number` and return the saved
    /// filename, named `{page_number}_{name}{ext}`.
    ///
    /// Returns None when the node has no stream, the stream is not a
    /// recognised format, or the write fails.
    pub fn export_image(&self, image: &LayoutImage, page_number: usize) -> Option<String> {
        let data = image.get_rawdata()?;
        let ext = sniff(data).extension()?;
        let filename = format!("{}_{}{}", page_number, image.name, ext);
        self.save(&filename, data).then_some(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_into_missing_folder_fails_quietly() {
        let writer = ImageWriter::new("/nonexistent/layoutscan/images");
        assert!(!writer.save("x.png", b"data"));
    }

    #[test]
    fn test_export_without_stream_is_none() {
        let writer = ImageWriter::new(std::env::temp_dir());
        let img = LayoutImage::new((0.0, 0.0, 1.0, 1.0), "Im0", None);
        assert_eq!(writer.export_image(&img, 1), None);
    }
}
