//! Min-priority queue over vertex indices.
//!
//! `BinaryHeap` has no decrease-key, so [`VertexQueue::insert_or_update`]
//! pushes a fresh entry and remembers the vertex's current priority. Older
//! entries for the same vertex become stale and are discarded when they
//! reach the top of the heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    vertex: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the max-heap pops the smallest priority; ties go to the
    // lower vertex index.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Priority queue keyed by vertex index with decrease-key support.
#[derive(Debug, Clone, Default)]
pub struct VertexQueue {
    heap: BinaryHeap<Entry>,
    /// Live priority per vertex; `None` when the vertex is not queued.
    current: Vec<Option<f64>>,
    len: usize,
}

impl VertexQueue {
    /// Empty queue sized for vertices `0..vertex_count`.
    ///
    /// Larger indices are still accepted; the bookkeeping grows on demand.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(vertex_count),
            current: vec![None; vertex_count],
            len: 0,
        }
    }

    /// Queue `vertex` at `priority`, or lower its priority if it is already
    /// queued at a higher one. A higher `priority` for a queued vertex is
    /// ignored.
    pub fn insert_or_update(&mut self, vertex: usize, priority: f64) {
        if vertex >= self.current.len() {
            self.current.resize(vertex + 1, None);
        }
        match self.current[vertex] {
            Some(existing) if existing.total_cmp(&priority).is_le() => return,
            Some(_) => {}
            None => self.len += 1,
        }
        self.current[vertex] = Some(priority);
        self.heap.push(Entry { priority, vertex });
    }

    /// Remove and return the vertex with the smallest priority.
    pub fn dequeue_min(&mut self) -> Option<usize> {
        while let Some(Entry { priority, vertex }) = self.heap.pop() {
            let live = self.current[vertex]
                .is_some_and(|current| current.total_cmp(&priority).is_eq());
            if live {
                self.current[vertex] = None;
                self.len -= 1;
                return Some(vertex);
            }
        }
        None
    }

    /// Priority `vertex` is queued at, if it is queued.
    #[must_use]
    pub fn priority(&self, vertex: usize) -> Option<f64> {
        self.current.get(vertex).copied().flatten()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut VertexQueue) -> Vec<usize> {
        std::iter::from_fn(|| queue.dequeue_min()).collect()
    }

    #[test]
    fn dequeues_in_priority_order() {
        let mut q = VertexQueue::new(4);
        q.insert_or_update(0, 3.0);
        q.insert_or_update(1, 1.0);
        q.insert_or_update(2, 2.0);
        q.insert_or_update(3, 0.5);
        assert_eq!(q.len(), 4);
        assert_eq!(drain(&mut q), [3, 1, 2, 0]);
        assert!(q.is_empty());
    }

    #[test]
    fn decrease_key_discards_stale_entry() {
        let mut q = VertexQueue::new(3);
        q.insert_or_update(0, 5.0);
        q.insert_or_update(1, 4.0);
        q.insert_or_update(0, 1.0);
        assert_eq!(q.len(), 2);
        assert_eq!(q.priority(0), Some(1.0));
        assert_eq!(drain(&mut q), [0, 1]);
    }

    #[test]
    fn higher_priority_is_ignored() {
        let mut q = VertexQueue::new(2);
        q.insert_or_update(0, 1.0);
        q.insert_or_update(1, 2.0);
        q.insert_or_update(0, 9.0);
        assert_eq!(q.priority(0), Some(1.0));
        assert_eq!(drain(&mut q), [0, 1]);
    }

    #[test]
    fn requeue_after_dequeue() {
        let mut q = VertexQueue::new(1);
        q.insert_or_update(0, 2.0);
        assert_eq!(q.dequeue_min(), Some(0));
        assert_eq!(q.priority(0), None);
        q.insert_or_update(0, 7.0);
        assert_eq!(q.len(), 1);
        assert_eq!(q.dequeue_min(), Some(0));
        assert_eq!(q.dequeue_min(), None);
    }

    #[test]
    fn ties_break_by_vertex_and_indices_grow() {
        let mut q = VertexQueue::new(0);
        q.insert_or_update(5, 1.0);
        q.insert_or_update(2, 1.0);
        assert_eq!(drain(&mut q), [2, 5]);
    }
}
