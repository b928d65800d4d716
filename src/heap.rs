//! Array-backed binary max-heap priority queue.

use core::fmt;

use crate::Priority;
use crate::storage::SlotBuf;

/// Capacity used when a heap is created with a requested capacity of zero.
pub const DEFAULT_CAPACITY: usize = 1;

/// A stored pairing of payload and priority.
struct Entry<T, P> {
    value: T,
    priority: P,
}

/// An array-backed binary max-heap of `(value, priority)` pairs.
///
/// Entries live in a contiguous buffer laid out as an implicit binary tree:
/// the children of the entry at index `i` sit at `2i + 1` and `2i + 2`, its
/// parent at `(i - 1) / 2`. The entry with the highest priority is always
/// at index 0.
///
/// Capacity is explicit and exact: [`with_capacity`](Self::with_capacity)
/// allocates precisely the requested number of slots, and a full heap grows
/// by half its current capacity plus one slot. The buffer never shrinks.
///
/// # Example
///
/// ```
/// use apex_heap::PriorityHeap;
///
/// let mut heap: PriorityHeap<&str> = PriorityHeap::new();
///
/// heap.push("flush caches", 5);
/// heap.push("compact log", 3);
/// heap.push("serve request", 8);
///
/// assert_eq!(heap.len(), 3);
/// assert_eq!(*heap.peek_max(), "serve request");
///
/// heap.extract_max();
/// assert_eq!(*heap.peek_max(), "flush caches");
/// ```
///
/// Priorities default to `u32`; any [`Priority`] type works, including
/// signed integers:
///
/// ```
/// use apex_heap::PriorityHeap;
///
/// let mut heap: PriorityHeap<&str, i64> = PriorityHeap::new();
/// heap.push("deferred", -10);
/// heap.push("urgent", 10);
///
/// assert_eq!(*heap.peek_max(), "urgent");
/// ```
pub struct PriorityHeap<T, P: Priority = u32> {
    buf: SlotBuf<Entry<T, P>>,
    len: usize,
}

impl<T, P: Priority> PriorityHeap<T, P> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Creates an empty heap with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap with exactly `capacity` slots.
    ///
    /// A requested capacity of zero is replaced by [`DEFAULT_CAPACITY`], so
    /// the buffer is never empty and the first push never reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            buf: SlotBuf::with_capacity(capacity),
            len: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the number of entries in the heap.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the heap holds no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the buffer holds, always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a reference to the value with the highest priority.
    ///
    /// Entries tied for the highest priority surface in an unspecified
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[inline]
    pub fn peek_max(&self) -> &T {
        assert!(self.len > 0, "peek_max on an empty heap");
        // Safety: len > 0, slot 0 is live
        unsafe { &self.buf.get_unchecked(0).value }
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Inserts `value` with the given priority.
    ///
    /// A full heap grows to `capacity + capacity / 2 + 1` slots before the
    /// entry is placed, so pushes cost O(log n) for the sift plus amortized
    /// O(1) for buffer growth.
    ///
    /// Equal priorities do not displace one another: the new entry stops
    /// sifting as soon as its parent's priority ties its own.
    pub fn push(&mut self, value: T, priority: P) {
        let capacity = self.capacity();
        if self.len == capacity {
            self.buf.grow(capacity + capacity / 2 + 1, self.len);
        }
        self.buf.write(self.len, Entry { value, priority });
        self.len += 1;
        self.sift_up(self.len - 1);
        debug_assert!(self.is_heap());
    }

    // ========================================================================
    // Extract
    // ========================================================================

    /// Removes the entry with the highest priority.
    ///
    /// The removed value is dropped, not returned; read it through
    /// [`peek_max`](Self::peek_max) first if it is still needed. When
    /// several entries tie for the highest priority, one of them goes.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn extract_max(&mut self) {
        assert!(self.len > 0, "extract_max on an empty heap");
        // Safety: len > 0, slot 0 is live
        let _removed = unsafe { self.buf.take(0) };
        self.len -= 1;
        if self.len > 0 {
            // The tail entry refills the root, then sinks to its place.
            self.buf.swap(0, self.len);
            self.sift_down(0);
        }
        debug_assert!(self.is_heap());
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes and drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        let live = self.len;
        self.len = 0;
        for i in 0..live {
            // Safety: slots 0..live held live values; each drops exactly once
            unsafe { self.buf.drop_slot(i) };
        }
    }

    // ========================================================================
    // Heap maintenance
    // ========================================================================

    /// Copies out the priority at slot `i`.
    ///
    /// # Safety
    ///
    /// Slot `i` must be live.
    #[inline]
    unsafe fn priority_at(&self, i: usize) -> P {
        // Safety: forwarded to the caller
        unsafe { self.buf.get_unchecked(i).priority }
    }

    /// Moves the entry at `pos` toward the root until its parent's priority
    /// is at least its own. The comparison is strict: an entry never climbs
    /// past a parent it ties with.
    fn sift_up(&mut self, mut pos: usize) {
        while pos != 0 {
            let parent = (pos - 1) / 2;
            // Safety: parent < pos < len, both live
            if unsafe { self.priority_at(parent) >= self.priority_at(pos) } {
                break;
            }
            self.buf.swap(parent, pos);
            pos = parent;
        }
    }

    /// Moves the entry at `pos` toward the leaves while any child's priority
    /// reaches it, swapping with the bigger child each step. The comparison
    /// is inclusive: an entry keeps sinking through children it ties with.
    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= self.len {
                break; // leaf
            }
            let right = left + 1;
            // The bigger child; the right one wins ties when both exist.
            // Safety: left < len, and right is only read when right < len
            let bigger = if right < self.len
                && unsafe { self.priority_at(right) >= self.priority_at(left) }
            {
                right
            } else {
                left
            };
            // Safety: pos and bigger are live
            if unsafe { self.priority_at(pos) > self.priority_at(bigger) } {
                break;
            }
            self.buf.swap(pos, bigger);
            pos = bigger;
        }
    }

    /// Verifies the heap-order invariant over the live prefix.
    fn is_heap(&self) -> bool {
        (1..self.len).all(|i| {
            // Safety: i and its parent are both < len
            unsafe { self.priority_at((i - 1) / 2) >= self.priority_at(i) }
        })
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl<T, P: Priority> Default for PriorityHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: Priority> Clone for PriorityHeap<T, P> {
    /// Deep-copies the live entries into an independent buffer of the same
    /// capacity.
    fn clone(&self) -> Self {
        let mut buf = SlotBuf::with_capacity(self.capacity());
        for i in 0..self.len {
            // Safety: slots 0..len of the source are live
            let entry = unsafe { self.buf.get_unchecked(i) };
            buf.write(
                i,
                Entry {
                    value: entry.value.clone(),
                    priority: entry.priority,
                },
            );
        }
        Self { buf, len: self.len }
    }
}

impl<T, P: Priority> Drop for PriorityHeap<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, P: Priority + fmt::Debug> fmt::Debug for PriorityHeap<T, P> {
    /// Renders the live entries in buffer order, root first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        for i in 0..self.len {
            // Safety: slots 0..len are live
            let entry = unsafe { self.buf.get_unchecked(i) };
            entries.entry(&(&entry.value, &entry.priority));
        }
        entries.finish()
    }
}
