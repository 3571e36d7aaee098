//! Document sources: the layout analyser side of the pipeline.
//!
//! A [`LayoutSource`] is an opened document that can hand out one analysed
//! [`LayoutPage`] at a time, plus its outline. [`LayoutDump`] reads layouts
//! that an analyser has already serialized to JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{LAParams, LayoutPage};

mod dump;

pub use dump::LayoutDump;

/// One outline (bookmark) entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
}

/// An opened document whose pages can be analysed into layout trees.
pub trait LayoutSource {
    /// Whether the document permits text extraction.
    fn is_extractable(&self) -> bool {
        true
    }

    /// Outline entries in document order, or None when there is no outline.
    fn outlines(&self) -> Option<Vec<OutlineEntry>>;

    fn page_count(&self) -> usize;

    /// Analyse the page at zero-based `index`.
    ///
    /// Takes `&mut self`: analysis state belongs to the source and pages
    /// must be requested one after another.
    fn analyze_page(&mut self, index: usize, laparams: &LAParams) -> Result<LayoutPage>;
}
