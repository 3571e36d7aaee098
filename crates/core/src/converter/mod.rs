//! Converters that turn a page's layout tree into reading-order text.
//!
//! Two strategies share the [`LayoutWalker`] interface:
//! - [`SingleColumn`] emits text in tree traversal order.
//! - [`MultiColumn`] groups the text of each node list into columns by
//!   horizontal position and emits the columns left to right.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::ScanError;
use crate::image::ImageWriter;
use crate::layout::{LayoutImage, LayoutNode};

mod multi;
mod single;

pub use multi::MultiColumn;
pub use single::SingleColumn;

/// Recombines one page's layout nodes into linear text.
///
/// Implementations must not keep state between calls: each page depends
/// only on its own nodes, its page number, and the images folder.
pub trait LayoutWalker {
    fn walk(&self, nodes: &[LayoutNode], page_number: usize, images: &ImageWriter) -> String;
}

/// Page shape selecting the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    OneColumn,
    TwoColumns,
}

impl Strategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::OneColumn => "one_column",
            Strategy::TwoColumns => "two_columns",
        }
    }
}

impl FromStr for Strategy {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one_column" => Ok(Strategy::OneColumn),
            "two_columns" => Ok(Strategy::TwoColumns),
            other => Err(ScanError::InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the walker for a strategy.
pub fn walker_for(strategy: Strategy) -> Box<dyn LayoutWalker + Send + Sync> {
    match strategy {
        Strategy::OneColumn => Box::new(SingleColumn),
        Strategy::TwoColumns => Box::new(MultiColumn),
    }
}

/// Export an image and build its inline `<img />` marker.
///
/// Failures are logged and yield None; the walk carries on.
pub(crate) fn image_marker(
    image: &LayoutImage,
    page_number: usize,
    images: &ImageWriter,
) -> Option<String> {
    match images.export_image(image, page_number) {
        Some(filename) => Some(format!(
            "<img src=\"{}\" />",
            images.path_for(&filename).display()
        )),
        None => {
            warn!(
                page = page_number,
                name = %image.name,
                "error saving image"
            );
            None
        }
    }
}
