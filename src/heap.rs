//! Max-heap operations over a plain slice.
//!
//! The slice is viewed as a complete binary tree laid out level by level:
//! index `i` has its parent at `(i - 1) / 2` and its children at `2i + 1` and
//! `2i + 2`. Being a heap is a property of the slice contents, nothing wraps
//! or tracks it.

pub fn parent_index(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

pub fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

pub fn right_child_index(index: usize) -> usize {
    2 * index + 2
}

/// Moves `data[index]` down until neither child within `data[..size]` is
/// larger than it.
///
/// Both subtrees below `index` must already be max-heaps.
pub fn sift_down<T>(data: &mut [T], size: usize, index: usize)
where
    T: std::cmp::PartialOrd,
{
    debug_assert!(size <= data.len());
    let mut i = index;
    loop {
        let mut largest = i;
        let left = left_child_index(i);
        let right = right_child_index(i);
        if left < size && data[left] > data[largest] {
            largest = left;
        }
        if right < size && data[right] > data[largest] {
            largest = right;
        }
        if largest == i {
            return;
        }
        data.swap(i, largest);
        i = largest;
    }
}

/// Moves `data[index]` up towards the root while its parent is smaller.
pub fn sift_up<T>(data: &mut [T], index: usize)
where
    T: std::cmp::PartialOrd,
{
    let mut i = index;
    while i > 0 {
        let parent = parent_index(i);
        if data[parent] >= data[i] {
            return;
        }
        data.swap(parent, i);
        i = parent;
    }
}

/// Turns an arbitrary slice into a max-heap in O(n) by sifting down every
/// internal node, last one first.
pub fn build_heap_bottom_up<T>(data: &mut [T])
where
    T: std::cmp::PartialOrd,
{
    let l = data.len();
    trace_op!("build_heap_bottom_up", l);
    for i in (0..l / 2).rev() {
        sift_down(data, l, i);
    }
}

/// Turns an arbitrary slice into a max-heap in O(n log n) by inserting the
/// elements one at a time.
///
/// The result satisfies the heap property but its layout may differ from
/// [`build_heap_bottom_up`].
pub fn build_heap_top_down<T>(data: &mut [T])
where
    T: std::cmp::PartialOrd,
{
    trace_op!("build_heap_top_down", data.len());
    for i in 0..data.len() {
        sift_up(data, i);
    }
}

/// Sorts a max-heap in place into ascending order.
///
/// `data` must already be a max-heap. Anything else gives an unspecified
/// order, no check is made.
pub fn heap_sort<T>(data: &mut [T])
where
    T: std::cmp::PartialOrd,
{
    let l = data.len();
    trace_op!("heap_sort", l);
    let mut size = l;
    for i in (1..l).rev() {
        data.swap(0, i);
        size -= 1;
        sift_down(data, size, 0);
    }
}

/// Builds a heap bottom-up and then sorts it.
pub fn sort<T>(data: &mut [T])
where
    T: std::cmp::PartialOrd,
{
    build_heap_bottom_up(data);
    heap_sort(data);
}

pub fn is_max_heap<T>(data: &[T]) -> bool
where
    T: std::cmp::PartialOrd,
{
    is_max_heap_within(data, data.len())
}

/// Checks the max-heap property over the active region `data[..size]` only.
pub fn is_max_heap_within<T>(data: &[T], size: usize) -> bool
where
    T: std::cmp::PartialOrd,
{
    debug_assert!(size <= data.len());
    // every index past the root has a parent, so checking child against
    // parent covers both children of every node
    (1..size).all(|i| data[parent_index(i)] >= data[i])
}
