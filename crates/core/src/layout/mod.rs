//! Layout model: page trees, analysis parameters, and column grouping.

pub mod columns;
pub mod elements;
pub mod params;

pub use columns::{COLUMN_TOLERANCE, ColumnAccumulator, ColumnKey};
pub use elements::{Container, LayoutImage, LayoutNode, LayoutPage, TextRun};
pub use params::LAParams;
