//! Unbalanced binary search tree of word counts.

use std::cmp::Ordering;

use tracing::trace;

use super::rank::{WordFrequency, take_top};

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    word: String,
    count: u64,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(word: &str) -> Self {
        Self {
            word: word.to_owned(),
            count: 1,
            left: None,
            right: None,
        }
    }
}

/// Word → occurrence count, stored in an unbalanced BST.
///
/// Keys are compared with `str::cmp` (ordinal byte order). Each key appears
/// once; its count is at least 1.
#[derive(Debug, Default)]
pub struct FrequencyDictionary {
    root: Link,
    len: usize,
    total: u64,
}

impl FrequencyDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            len: 0,
            total: 0,
        }
    }

    /// Record one occurrence of `word` and return its updated count.
    pub fn insert(&mut self, word: &str) -> u64 {
        self.total += 1;

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match word.cmp(node.word.as_str()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    node.count += 1;
                    return node.count;
                }
            }
        }

        trace!(word, "new dictionary entry");
        *slot = Some(Box::new(Node::leaf(word)));
        self.len += 1;
        1
    }

    /// Occurrence count of `word`, or 0 if it was never inserted.
    #[must_use]
    pub fn find(&self, word: &str) -> u64 {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match word.cmp(node.word.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return node.count,
            };
        }
        0
    }

    /// Number of distinct words.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of all counts (total insertions).
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Length of the longest root-to-leaf path; 0 for an empty tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, level + 1));
            }
        }
        deepest
    }

    /// In-order traversal: words in ascending order with their counts.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// The `n` most frequent words.
    ///
    /// Ordered by descending count, then ascending word. The result has
    /// `min(n, self.len())` entries.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<WordFrequency> {
        let entries: Vec<WordFrequency> = self
            .iter()
            .map(|(word, count)| WordFrequency::new(word, count))
            .collect();
        take_top(entries, n)
    }
}

impl Drop for FrequencyDictionary {
    fn drop(&mut self) {
        // Unlink children before each node drops so a degenerate chain does
        // not recurse once per level.
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<'a> IntoIterator for &'a FrequencyDictionary {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`FrequencyDictionary`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.word.as_str(), node.count))
    }
}
