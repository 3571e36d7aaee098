//! High-level API: open a document, walk its pages, collect the text.
//!
//! - [`LayoutScanner::get_pages`] - whole-document text, pages separated by a blank line
//! - [`LayoutScanner::get_toc`] - flattened outline
//! - [`extract_pages_text`] - per-page text from an already opened source

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::converter::{LayoutWalker, Strategy, walker_for};
use crate::document::{LayoutDump, LayoutSource};
use crate::error::Result;
use crate::image::ImageWriter;
use crate::layout::LAParams;

/// Separator placed between consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Options for page extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    /// Password for protected documents.
    pub password: String,

    /// Folder that receives extracted images. Must already exist.
    pub images_folder: PathBuf,

    /// Zero-indexed page numbers to extract. None means all pages.
    pub page_numbers: Option<Vec<usize>>,

    /// Maximum number of pages to extract. 0 means no limit.
    pub maxpages: usize,

    /// Handed to the layout analyser as is.
    pub laparams: LAParams,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            password: String::new(),
            images_folder: std::env::temp_dir(),
            page_numbers: None,
            maxpages: 0,
            laparams: LAParams::default(),
        }
    }
}

/// Reconstructs reading-order text from documents with a fixed strategy.
pub struct LayoutScanner {
    strategy: Strategy,
    walker: Box<dyn LayoutWalker + Send + Sync>,
}

impl std::fmt::Debug for LayoutScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutScanner")
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl LayoutScanner {
    /// Create a scanner from a strategy name (`one_column` or `two_columns`).
    pub fn new(strategy: &str) -> Result<Self> {
        Ok(Self::with_strategy(strategy.parse()?))
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            walker: walker_for(strategy),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn walker(&self) -> &dyn LayoutWalker {
        self.walker.as_ref()
    }

    /// Open the document at `path` and apply `f` to it.
    ///
    /// Returns None without calling `f` when the document forbids extraction.
    pub fn with_source<T, F>(
        &self,
        path: impl AsRef<Path>,
        password: &str,
        f: F,
    ) -> Result<Option<T>>
    where
        F: FnOnce(&mut LayoutDump) -> Result<T>,
    {
        let mut source = LayoutDump::open(path, password)?;
        if !source.is_extractable() {
            debug!(path = %source.path().display(), "document does not permit extraction");
            return Ok(None);
        }
        f(&mut source).map(Some)
    }

    /// Return the table of contents as (level, title) pairs.
    ///
    /// A document without an outline yields an empty list.
    pub fn get_toc(&self, path: impl AsRef<Path>, password: &str) -> Result<Vec<(u32, String)>> {
        let toc = self.with_source(path, password, |source| Ok(parse_toc(&*source)))?;
        Ok(toc.unwrap_or_default())
    }

    /// Process the pages of the document at `path` and return the entire text.
    pub fn get_pages(&self, path: impl AsRef<Path>, options: &ScanOptions) -> Result<String> {
        let pages = self.with_source(path, &options.password, |source| {
            self.extract_pages_text(source, options)
        })?;
        Ok(pages.unwrap_or_default().join(PAGE_SEPARATOR))
    }

    /// Walk the selected pages of an opened source, one string per page.
    pub fn extract_pages_text(
        &self,
        source: &mut dyn LayoutSource,
        options: &ScanOptions,
    ) -> Result<Vec<String>> {
        extract_pages_text(self.walker(), source, options)
    }
}

/// Flatten a source's outline to (level, title) pairs.
pub fn parse_toc(source: &dyn LayoutSource) -> Vec<(u32, String)> {
    source
        .outlines()
        .unwrap_or_default()
        .into_iter()
        .map(|entry| (entry.level, entry.title))
        .collect()
}

/// Walk the selected pages of `source` in order, one string per page.
///
/// Pages are analysed strictly one after another; the walker sees the
/// 1-based document page number regardless of page selection.
pub fn extract_pages_text(
    walker: &dyn LayoutWalker,
    source: &mut dyn LayoutSource,
    options: &ScanOptions,
) -> Result<Vec<String>> {
    let images = ImageWriter::new(&options.images_folder);
    let mut text_content = Vec::new();

    for page_idx in 0..source.page_count() {
        if let Some(ref nums) = options.page_numbers
            && !nums.contains(&page_idx)
        {
            continue;
        }

        if options.maxpages > 0 && text_content.len() >= options.maxpages {
            break;
        }

        let page = source.analyze_page(page_idx, &options.laparams)?;
        debug!(page = page_idx + 1, items = page.items.len(), "walking page");
        text_content.push(walker.walk(&page.items, page_idx + 1, &images));
    }

    Ok(text_content)
}

/// Extract the whole text of the document at `path` with the given strategy.
pub fn extract_text(
    path: impl AsRef<Path>,
    strategy: Strategy,
    options: &ScanOptions,
) -> Result<String> {
    LayoutScanner::with_strategy(strategy).get_pages(path, options)
}
