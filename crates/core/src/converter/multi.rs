//! Multi-column walk: text grouped into columns per node list.

use super::{LayoutWalker, image_marker};
use crate::image::ImageWriter;
use crate::layout::{ColumnAccumulator, LayoutNode};

/// Groups the text runs of each node list into columns and emits them
/// left to right, after that list's images and nested containers.
///
/// Every container is clustered on its own; columns never merge across
/// nesting levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiColumn;

impl LayoutWalker for MultiColumn {
    fn walk(&self, nodes: &[LayoutNode], page_number: usize, images: &ImageWriter) -> String {
        let mut blocks: Vec<String> = Vec::new();
        let mut columns = ColumnAccumulator::new();

        for node in nodes {
            match node {
                LayoutNode::TextRun(run) => columns.absorb(run, run.get_text()),
                LayoutNode::Image(image) => {
                    if let Some(marker) = image_marker(image, page_number, images) {
                        blocks.push(marker);
                    }
                }
                LayoutNode::Container(container) => {
                    blocks.push(self.walk(&container.children, page_number, images));
                }
            }
        }

        blocks.extend(columns.finalize());
        blocks.join("\n")
    }
}
