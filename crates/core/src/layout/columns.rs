//! Tolerance-based grouping of text fragments into physical columns.
//!
//! Fragments are bucketed by the horizontal extent (x0, x1) of their bounding
//! box. A fragment joins the first existing bucket, in creation order, whose
//! key bounds both lie within `COLUMN_TOLERANCE` of the fragment's own bounds.
//! Keys are fixed by the fragment that opened the bucket and never move.

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::utils::{HasBBox, within_tolerance};

/// Relative tolerance applied independently to each bucket bound.
pub const COLUMN_TOLERANCE: f64 = 0.2;

/// Reference interval of one column bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnKey {
    pub x0: f64,
    pub x1: f64,
}

impl ColumnKey {
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }

    /// Whether an interval falls inside this key's tolerance bands.
    pub fn accepts(&self, x0: f64, x1: f64, pct: f64) -> bool {
        within_tolerance(x0, self.x0, pct) && within_tolerance(x1, self.x1, pct)
    }

    fn sort_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.x0), OrderedFloat(self.x1))
    }
}

/// Accumulates text fragments into column buckets for one node list.
///
/// Buckets are kept as an insertion-ordered list so that matching is
/// first-created-wins regardless of how close a later bucket might be.
#[derive(Debug, Clone)]
pub struct ColumnAccumulator {
    buckets: Vec<(ColumnKey, Vec<String>)>,
    pct: f64,
}

impl Default for ColumnAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnAccumulator {
    pub fn new() -> Self {
        Self::with_tolerance(COLUMN_TOLERANCE)
    }

    pub fn with_tolerance(pct: f64) -> Self {
        Self {
            buckets: Vec::new(),
            pct,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of buckets opened so far.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket keys in creation order.
    pub fn keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.buckets.iter().map(|(key, _)| key)
    }

    /// Adds a fragment positioned by `bbox`.
    pub fn absorb(&mut self, bbox: &impl HasBBox, text: &str) {
        let (x0, x1) = (bbox.x0(), bbox.x1());
        let pct = self.pct;
        match self
            .buckets
            .iter_mut()
            .find(|(key, _)| key.accepts(x0, x1, pct))
        {
            Some((_, fragments)) => fragments.push(text.to_string()),
            None => {
                trace!(x0, x1, "opening column bucket");
                self.buckets
                    .push((ColumnKey::new(x0, x1), vec![text.to_string()]));
            }
        }
    }

    /// Consumes the accumulator, returning one newline-joined block per
    /// bucket ordered by (x0, x1).
    pub fn finalize(mut self) -> Vec<String> {
        // Stable sort: identical keys keep creation order.
        self.buckets.sort_by_key(|(key, _)| key.sort_key());
        self.buckets
            .into_iter()
            .map(|(_, fragments)| fragments.join("\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Rect;

    fn span(x0: f64, x1: f64) -> Rect {
        (x0, 0.0, x1, 10.0)
    }

    #[test]
    fn test_key_is_not_recentered() {
        let mut acc = ColumnAccumulator::new();
        acc.absorb(&span(100.0, 200.0), "a");
        acc.absorb(&span(119.0, 239.0), "b");
        // 140 is within 20% of 119 but not of the original key 100.
        acc.absorb(&span(140.0, 239.0), "c");
        let keys: Vec<_> = acc.keys().copied().collect();
        assert_eq!(
            keys,
            vec![ColumnKey::new(100.0, 200.0), ColumnKey::new(140.0, 239.0)]
        );
    }

    #[test]
    fn test_empty_accumulator_finalizes_to_nothing() {
        assert!(ColumnAccumulator::new().finalize().is_empty());
    }
}
