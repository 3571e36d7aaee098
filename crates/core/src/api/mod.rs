//! Public entry points for text extraction.

pub mod high_level;

pub use high_level::{
    LayoutScanner, PAGE_SEPARATOR, ScanOptions, extract_pages_text, extract_text, parse_toc,
};
