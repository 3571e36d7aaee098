//! Layout element types consumed by the converters.
//!
//! A page arrives from the layout analyser as a list of [`LayoutNode`]s:
//! - `TextRun`: a box or line of text
//! - `Image`: an embedded raster image, possibly with its raw stream
//! - `Container`: a nested region (PDF form XObject) holding more nodes
//!
//! Nodes are read-only once built. Container children keep the analyser's
//! emission order, which is not necessarily visual order.

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, Rect};

/// Implements HasBBox for a struct with a `bbox: Rect` field.
macro_rules! impl_has_bbox_field {
    ($type:ty) => {
        impl HasBBox for $type {
            fn x0(&self) -> f64 {
                self.bbox.0
            }
            fn y0(&self) -> f64 {
                self.bbox.1
            }
            fn x1(&self) -> f64 {
                self.bbox.2
            }
            fn y1(&self) -> f64 {
                self.bbox.3
            }
        }
    };
}

/// A run of text with its bounding box. The text may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub bbox: Rect,
    pub text: String,
}

impl TextRun {
    pub fn new(bbox: Rect, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }
}

/// An image placed on the page.
///
/// `stream` is `None` when the analyser could not hand over usable bytes
/// (unsupported or undecodable encoding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutImage {
    pub bbox: Rect,
    pub name: String,
    #[serde(default, with = "hex_stream", skip_serializing_if = "Option::is_none")]
    pub stream: Option<Vec<u8>>,
}

impl LayoutImage {
    pub fn new(bbox: Rect, name: impl Into<String>, stream: Option<Vec<u8>>) -> Self {
        Self {
            bbox,
            name: name.into(),
            stream,
        }
    }

    /// Raw stream bytes, treating an empty stream the same as a missing one.
    pub fn get_rawdata(&self) -> Option<&[u8]> {
        self.stream.as_deref().filter(|data| !data.is_empty())
    }
}

/// A composite region owning an ordered list of child nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub bbox: Rect,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

impl_has_bbox_field!(TextRun);
impl_has_bbox_field!(LayoutImage);
impl_has_bbox_field!(Container);

/// Represents any node that can appear in a page's layout tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutNode {
    TextRun(TextRun),
    Image(LayoutImage),
    Container(Container),
}

impl LayoutNode {
    pub fn text(bbox: Rect, text: impl Into<String>) -> Self {
        LayoutNode::TextRun(TextRun::new(bbox, text))
    }

    pub fn image(bbox: Rect, name: impl Into<String>, stream: Option<Vec<u8>>) -> Self {
        LayoutNode::Image(LayoutImage::new(bbox, name, stream))
    }

    pub fn container(bbox: Rect, children: Vec<LayoutNode>) -> Self {
        LayoutNode::Container(Container { bbox, children })
    }
}

impl HasBBox for LayoutNode {
    fn x0(&self) -> f64 {
        match self {
            LayoutNode::TextRun(t) => t.x0(),
            LayoutNode::Image(i) => i.x0(),
            LayoutNode::Container(c) => c.x0(),
        }
    }
    fn y0(&self) -> f64 {
        match self {
            LayoutNode::TextRun(t) => t.y0(),
            LayoutNode::Image(i) => i.y0(),
            LayoutNode::Container(c) => c.y0(),
        }
    }
    fn x1(&self) -> f64 {
        match self {
            LayoutNode::TextRun(t) => t.x1(),
            LayoutNode::Image(i) => i.x1(),
            LayoutNode::Container(c) => c.x1(),
        }
    }
    fn y1(&self) -> f64 {
        match self {
            LayoutNode::TextRun(t) => t.y1(),
            LayoutNode::Image(i) => i.y1(),
            LayoutNode::Container(c) => c.y1(),
        }
    }
}

/// The analysed layout of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// 1-based page number within the document.
    #[serde(default)]
    pub pageid: usize,
    #[serde(default)]
    pub items: Vec<LayoutNode>,
}

impl LayoutPage {
    pub fn new(pageid: usize, items: Vec<LayoutNode>) -> Self {
        Self { pageid, items }
    }
}

/// Image streams travel as hex strings in serialized layouts.
mod hex_stream {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|s| hex::decode(s.trim()).map_err(serde::de::Error::custom))
            .transpose()
    }
}
