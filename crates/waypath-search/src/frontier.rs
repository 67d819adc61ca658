//! Frontier (open set) implementations.
//!
//! Both frontiers extract the entry with the smallest priority and break ties
//! by insertion order, earliest first. Swapping one for the other therefore
//! never changes search results, only extraction cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An ordered multiset of `(item, priority)` entries.
///
/// Duplicate items are allowed; only relative priority matters.
pub trait Frontier<T> {
    /// Add an entry unconditionally.
    fn insert(&mut self, item: T, priority: f64);

    /// Remove and return an item with the smallest priority, or `None` if
    /// the frontier is empty.
    fn extract_min(&mut self) -> Option<T>;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries, keeping allocated storage.
    fn clear(&mut self);
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// priority first, and among equal priorities the smallest sequence number.
#[derive(Clone, Copy, Debug)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap frontier. O(log n) insertion and extraction.
#[derive(Debug, Clone)]
pub struct HeapFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for HeapFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HeapFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Number of entries the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }
}

impl<T> Frontier<T> for HeapFrontier<T> {
    #[inline]
    fn insert(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    #[inline]
    fn extract_min(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

// ---------------------------------------------------------------------------
// ScanFrontier
// ---------------------------------------------------------------------------

/// Unsorted list frontier with linear-scan extraction.
///
/// O(1) insertion, O(n) extraction. Fine for tiny graphs; prefer
/// [`HeapFrontier`] elsewhere.
#[derive(Debug, Clone)]
pub struct ScanFrontier<T> {
    elements: Vec<(T, f64)>,
}

impl<T> Default for ScanFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScanFrontier<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T> Frontier<T> for ScanFrontier<T> {
    #[inline]
    fn insert(&mut self, item: T, priority: f64) {
        self.elements.push((item, priority));
    }

    fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let mut best = 0;
        for (i, (_, p)) in self.elements.iter().enumerate().skip(1) {
            // Strictly less: the first entry found wins ties.
            if p.total_cmp(&self.elements[best].1) == Ordering::Less {
                best = i;
            }
        }
        // `remove`, not `swap_remove`: keeps insertion order for tie-breaks.
        Some(self.elements.remove(best).0)
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<char>>(f: &mut F) -> Vec<char> {
        let mut out = Vec::new();
        while let Some(c) = f.extract_min() {
            out.push(c);
        }
        out
    }

    fn fill<F: Frontier<char>>(f: &mut F) {
        f.insert('a', 3.0);
        f.insert('b', 1.0);
        f.insert('c', 2.0);
        f.insert('d', 1.0);
        f.insert('e', 0.5);
        f.insert('f', 2.0);
    }

    #[test]
    fn heap_extracts_in_priority_then_insertion_order() {
        let mut f = HeapFrontier::new();
        fill(&mut f);
        assert_eq!(f.len(), 6);
        assert_eq!(drain(&mut f), vec!['e', 'b', 'd', 'c', 'f', 'a']);
        assert!(f.is_empty());
    }

    #[test]
    fn scan_extracts_in_priority_then_insertion_order() {
        let mut f = ScanFrontier::new();
        fill(&mut f);
        assert_eq!(drain(&mut f), vec!['e', 'b', 'd', 'c', 'f', 'a']);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = HeapFrontier::new();
        f.insert('x', 4.0);
        f.insert('x', 2.0);
        assert_eq!(f.len(), 2);
        assert_eq!(f.extract_min(), Some('x'));
        assert_eq!(f.extract_min(), Some('x'));
        assert_eq!(f.extract_min(), None);
    }

    #[test]
    fn clear_empties_both() {
        let mut h = HeapFrontier::with_capacity(8);
        let mut s = ScanFrontier::new();
        fill(&mut h);
        fill(&mut s);
        h.clear();
        s.clear();
        assert!(h.is_empty());
        assert!(s.is_empty());
        assert_eq!(h.extract_min(), None);
        assert_eq!(s.extract_min(), None);
    }

    #[test]
    fn interleaved_operations_agree() {
        let mut h = HeapFrontier::new();
        let mut s = ScanFrontier::new();
        let ops: [(char, f64); 8] = [
            ('a', 5.0),
            ('b', 5.0),
            ('c', 1.0),
            ('d', 7.0),
            ('e', 1.0),
            ('f', 5.0),
            ('g', 0.0),
            ('h', 5.0),
        ];
        for (i, &(c, p)) in ops.iter().enumerate() {
            h.insert(c, p);
            s.insert(c, p);
            if i % 3 == 2 {
                assert_eq!(h.extract_min(), s.extract_min());
            }
        }
        assert_eq!(drain(&mut h), drain(&mut s));
    }
}
