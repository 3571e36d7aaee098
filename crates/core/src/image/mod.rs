//! Image export functionality module.
//!
//! Format detection by magic number plus writing raw streams to disk.

pub mod sniff;
pub mod writer;

pub use sniff::{ImageType, sniff};
pub use writer::ImageWriter;
