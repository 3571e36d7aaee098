//! Single-column walk: text in traversal order.

use super::{LayoutWalker, image_marker};
use crate::image::ImageWriter;
use crate::layout::LayoutNode;

/// Emits every text run where it occurs in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleColumn;

impl LayoutWalker for SingleColumn {
    fn walk(&self, nodes: &[LayoutNode], page_number: usize, images: &ImageWriter) -> String {
        let mut blocks: Vec<String> = Vec::with_capacity(nodes.len());

        for node in nodes {
            match node {
                LayoutNode::TextRun(run) => blocks.push(run.get_text().to_string()),
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

        blocks.join("\n")
    }
}
