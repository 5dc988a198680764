use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

const INVALID_POSITION: usize = usize::MAX;

/// Array-based binary min-heap over vertex ids, ordered by an external
/// key slice passed to each operation.
///
/// The heap never owns the keys: callers hand the same `keys` slice to
/// every call, where `keys[v]` is the current key of vertex `v` and
/// `None` means infinity (greater than every finite key). A vertex ->
/// heap-position map makes `decrease_key` lookup O(1).
///
/// Lowering a key without calling [`decrease_key`](Self::decrease_key)
/// afterwards leaves the heap out of order; raising a key is not
/// supported.
#[derive(Debug)]
pub struct IndexedMinHeap {
    /// Vertex ids in binary-heap layout (parent of i is (i-1)/2)
    heap: Vec<usize>,

    /// Position of each vertex in `heap`, or INVALID_POSITION if absent
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold vertex ids `0..capacity`
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            positions: vec![INVALID_POSITION; capacity],
        }
    }

    /// Returns the number of vertices currently in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap holds no vertices
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if `vertex` is currently in the heap
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions[vertex] != INVALID_POSITION
    }

    /// Inserts `vertex`, keyed by `keys[vertex]`, and sifts it up.
    ///
    /// The vertex must not already be in the heap.
    pub fn insert<W>(&mut self, vertex: usize, keys: &[Option<W>])
    where
        W: PrimInt + Signed + Debug,
    {
        assert!(
            !self.contains(vertex),
            "vertex {} inserted twice into the heap",
            vertex
        );

        let position = self.heap.len();
        self.heap.push(vertex);
        self.positions[vertex] = position;
        self.sift_up(position, keys);
    }

    /// Removes and returns the vertex with the smallest key.
    ///
    /// Panics if the heap is empty; extracting from an empty heap is a
    /// contract violation, not a recoverable condition.
    pub fn extract_min<W>(&mut self, keys: &[Option<W>]) -> usize
    where
        W: PrimInt + Signed + Debug,
    {
        assert!(!self.is_empty(), "extract_min called on an empty heap");

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let min = self.heap.pop().unwrap();
        self.positions[min] = INVALID_POSITION;

        if !self.is_empty() {
            self.sift_down(0, keys);
        }

        min
    }

    /// Restores heap order after the caller lowered `keys[vertex]`.
    ///
    /// Panics if the vertex is not in the heap.
    pub fn decrease_key<W>(&mut self, vertex: usize, keys: &[Option<W>])
    where
        W: PrimInt + Signed + Debug,
    {
        let position = self.positions[vertex];
        assert!(
            position != INVALID_POSITION,
            "decrease_key for vertex {} which is not in the heap",
            vertex
        );
        self.sift_up(position, keys);
    }

    fn sift_up<W>(&mut self, index: usize, keys: &[Option<W>])
    where
        W: PrimInt + Signed + Debug,
    {
        let mut current = index;

        while current > 0 {
            let parent = (current - 1) / 2;
            if !Self::key_less(keys, self.heap[current], self.heap[parent]) {
                break;
            }

            self.swap_entries(current, parent);
            current = parent;
        }
    }

    fn sift_down<W>(&mut self, index: usize, keys: &[Option<W>])
    where
        W: PrimInt + Signed + Debug,
    {
        let mut current = index;

        loop {
            let left = 2 * current + 1;
            let right = 2 * current + 2;

            if left >= self.heap.len() {
                break;
            }

            // Descend toward the smaller child, and only when that child
            // is strictly smaller; equal keys stay put.
            let mut smaller = left;
            if right < self.heap.len() && Self::key_less(keys, self.heap[right], self.heap[left]) {
                smaller = right;
            }

            if !Self::key_less(keys, self.heap[smaller], self.heap[current]) {
                break;
            }

            self.swap_entries(current, smaller);
            current = smaller;
        }
    }

    fn swap_entries(&mut self, first: usize, second: usize) {
        self.positions[self.heap[first]] = second;
        self.positions[self.heap[second]] = first;
        self.heap.swap(first, second);
    }

    /// Key comparison with `None` treated as infinity
    fn key_less<W>(keys: &[Option<W>], a: usize, b: usize) -> bool
    where
        W: PrimInt + Signed + Debug,
    {
        match (keys[a], keys[b]) {
            (Some(ka), Some(kb)) => ka < kb,
            (Some(_), None) => true,
            _ => false,
        }
    }
}
