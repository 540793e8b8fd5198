//! Word-frequency dictionary.
//!
//! # Overview
//!
//! [`FrequencyDictionary`] counts occurrences of words in an unbalanced
//! binary search tree keyed by ordinal string comparison. Repeated
//! insertions bump the count of the existing node; new words become leaves.
//! The tree is never rebalanced, so a sorted insertion order produces a
//! chain. Every walk over the tree (lookup, insertion, traversal, teardown)
//! is iterative for that reason.
//!
//! [`FrequencyDictionary::top_n`] flattens the tree and ranks it with
//! [`rank_order`]: higher count first, then ascending word.
//!
//! ```rust
//! use bough_core::dict::FrequencyDictionary;
//!
//! let dict: FrequencyDictionary = ["the", "cat", "sat", "the", "cat", "the"]
//!     .into_iter()
//!     .collect();
//!
//! let top = dict.top_n(2);
//! assert_eq!(top[0].word, "the");
//! assert_eq!(top[0].count, 3);
//! assert_eq!(top[1].word, "cat");
//! ```

pub mod rank;
pub mod tree;

pub use rank::{WordFrequency, rank_order};
pub use tree::{FrequencyDictionary, Iter};
