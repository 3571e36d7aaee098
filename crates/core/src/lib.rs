//! layoutscan - reading-order text reconstruction from PDF layout trees.
//!
//! Pages arrive already analysed as trees of text runs, images and nested
//! containers. A [`converter::LayoutWalker`] turns each tree into text,
//! either in traversal order or regrouped into columns, and exports the
//! images it meets to a folder, leaving `<img />` markers in their place.

pub mod api;
pub mod converter;
pub mod document;
pub mod error;
pub mod image;
pub mod layout;
pub mod utils;

pub use api::high_level;

pub use error::{Result, ScanError};
