//! Binary merge tree produced by agglomerative clustering.

use serde::Serialize;

/// Either a single vertex or the merge of two sub-trees.
///
/// Merge nodes carry no vertex of their own. `distance` is the linkage
/// distance at which the merge happened, or `None` when the two clusters
/// had no link at all and were joined only to complete the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dendrogram {
    Leaf {
        vertex: usize,
    },
    Merge {
        distance: Option<f64>,
        left: Box<Self>,
        right: Box<Self>,
    },
}

impl Dendrogram {
    #[must_use]
    pub const fn leaf(vertex: usize) -> Self {
        Self::Leaf { vertex }
    }

    #[must_use]
    pub fn merge(distance: Option<f64>, left: Self, right: Self) -> Self {
        Self::Merge {
            distance,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The vertex of a leaf; `None` for merge nodes.
    #[must_use]
    pub const fn vertex(&self) -> Option<usize> {
        match self {
            Self::Leaf { vertex } => Some(*vertex),
            Self::Merge { .. } => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Leaf { .. } => None,
            Self::Merge { left, right, .. } => Some((left, right)),
        }
    }

    /// Merge distance; `None` for leaves and forced merges.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        match self {
            Self::Leaf { .. } => None,
            Self::Merge { distance, .. } => *distance,
        }
    }

    /// Pre-order walk yielding `(depth, node)`, left sub-tree first.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Leaf vertices from left to right.
    pub fn leaves(&self) -> impl Iterator<Item = usize> + '_ {
        self.walk().filter_map(|(_, node)| node.vertex())
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.walk().filter(|(_, node)| node.vertex().is_none()).count()
    }

    /// Number of merge levels on the longest root-to-leaf path; 0 for a leaf.
    #[must_use]
    pub fn height(&self) -> usize {
        self.walk().map(|(depth, _)| depth).max().unwrap_or(0)
    }
}

// Chained merges nest one level per vertex, so unwind them without
// recursing.
impl Drop for Dendrogram {
    fn drop(&mut self) {
        let Self::Merge { left, right, .. } = self else {
            return;
        };
        let mut pending = vec![
            std::mem::replace(left.as_mut(), Self::leaf(0)),
            std::mem::replace(right.as_mut(), Self::leaf(0)),
        ];
        while let Some(mut node) = pending.pop() {
            if let Self::Merge { left, right, .. } = &mut node {
                pending.push(std::mem::replace(left.as_mut(), Self::leaf(0)));
                pending.push(std::mem::replace(right.as_mut(), Self::leaf(0)));
            }
        }
    }
}

/// Iterator returned by [`Dendrogram::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Dendrogram)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Dendrogram);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let Some((left, right)) = node.children() {
            self.stack.push((depth + 1, right));
            self.stack.push((depth + 1, left));
        }
        Some((depth, node))
    }
}
