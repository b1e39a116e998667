/// Index of the parent of the node at index `i`.
///
/// Pure index arithmetic, no bounds checking — callers validate against
/// the heap size. The root has no parent; `i` must be at least 1.
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Index of the left child of the node at index `i`.
pub fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of the node at index `i`.
pub fn right(i: usize) -> usize {
    2 * i + 2
}

/// Array-backed binary max-heap.
///
/// `heap_size` is the logical extent of heap-valid elements and may be
/// smaller than the backing array — during `heap_sort` the sorted tail
/// lives past `heap_size`. The array length never changes.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    array: Vec<T>,
    heap_size: usize,
}

impl<T: Ord> Heap<T> {
    /// Wrap an arbitrary sequence. `heap_size` starts at the full length,
    /// but the max-heap property does not hold until `build_max_heap`.
    pub fn new(array: Vec<T>) -> Self {
        let heap_size = array.len();
        Self { array, heap_size }
    }

    /// Length of the backing array.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Logical extent of heap-valid elements. Shrinks monotonically
    /// during `heap_sort`.
    pub fn heap_size(&self) -> usize {
        self.heap_size
    }

    pub fn as_slice(&self) -> &[T] {
        &self.array
    }

    pub fn into_vec(self) -> Vec<T> {
        self.array
    }

    /// Restore the max-heap property for the subtree rooted at `i`,
    /// assuming the subtrees under `left(i)` and `right(i)` already
    /// satisfy it.
    ///
    /// Iterative sift-down in O(1) auxiliary space. Comparisons are
    /// strict: a child equal to the parent (or equal to the already
    /// selected left child) never triggers a swap. `i` must be within
    /// the array.
    pub fn max_heapify(&mut self, mut i: usize) {
        loop {
            let l = left(i);
            let r = right(i);
            let mut largest = i;

            if l < self.heap_size && self.array[l] > self.array[largest] {
                largest = l;
            }
            if r < self.heap_size && self.array[r] > self.array[largest] {
                largest = r;
            }

            if largest == i {
                break;
            }
            self.array.swap(i, largest);
            i = largest;
        }
    }

    /// Convert the whole array into a max-heap, whatever its current
    /// order.
    ///
    /// Resets `heap_size` to the full length, then heapifies every
    /// non-leaf index in reverse level order — each subtree is valid
    /// before its ancestor is processed.
    pub fn build_max_heap(&mut self) {
        self.heap_size = self.array.len();
        for i in (0..self.array.len() / 2).rev() {
            self.max_heapify(i);
        }
    }

    /// Sort the array ascending, in place. O(n log n) time, O(1)
    /// auxiliary space, not stable.
    ///
    /// Repeatedly swaps the root maximum into the shrinking tail and
    /// re-heapifies the root. The loop never extracts index 0, so for a
    /// non-empty array `heap_size` ends at 1 (0 for an empty one).
    pub fn heap_sort(&mut self) {
        self.build_max_heap();
        for i in (1..self.array.len()).rev() {
            self.array.swap(0, i);
            self.heap_size -= 1;
            self.max_heapify(0);
        }
    }
}
