//! Array-backed binary max-heap priority queue with explicit capacity.
//!
//! [`PriorityHeap`] stores `(value, priority)` pairs in a single contiguous
//! buffer and hands back the highest-priority value first. Push and extract
//! are O(log n); peek is O(1). Priority is a separate numeric field, not an
//! `Ord` impl on the payload, so the same value type can queue under
//! different orderings without wrapper types.
//!
//! # Design
//!
//! The heap is an implicit binary tree over an owned slice: the children of
//! index `i` live at `2i + 1` and `2i + 2`. Three rules are fixed and
//! observable:
//!
//! - **Exact capacity.** `with_capacity(n)` allocates exactly `n` slots and
//!   a full buffer grows to `capacity + capacity / 2 + 1`, nothing else.
//!   No doubling, no power-of-two rounding.
//! - **Strict sift-up.** A pushed entry stops below any parent whose
//!   priority ties its own, so existing entries are never displaced by
//!   newcomers of equal priority.
//! - **Inclusive sift-down.** After an extraction the relocated entry keeps
//!   sinking through equal-priority children until strictly above its
//!   remaining subtree.
//!
//! Contract breaches (`peek_max`/`extract_max` on an empty heap) panic
//! immediately rather than returning sentinels; every other operation is
//! total.
//!
//! # Quick Start
//!
//! ```
//! use apex_heap::PriorityHeap;
//!
//! let mut tasks: PriorityHeap<&str> = PriorityHeap::with_capacity(8);
//!
//! tasks.push("reindex", 5);
//! tasks.push("prefetch", 3);
//! tasks.push("serve query", 8);
//! tasks.push("rotate logs", 1);
//!
//! assert_eq!(*tasks.peek_max(), "serve query");
//!
//! tasks.extract_max();
//! assert_eq!(*tasks.peek_max(), "reindex");
//!
//! tasks.extract_max();
//! tasks.extract_max();
//! assert_eq!(*tasks.peek_max(), "rotate logs");
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | [`push`](PriorityHeap::push) | O(log n) | amortized O(1) buffer growth |
//! | [`peek_max`](PriorityHeap::peek_max) | O(1) | panics when empty |
//! | [`extract_max`](PriorityHeap::extract_max) | O(log n) | panics when empty |
//! | [`len`](PriorityHeap::len) / [`capacity`](PriorityHeap::capacity) | O(1) | |
//! | [`clear`](PriorityHeap::clear) | O(n) | keeps the allocation |
//! | `clone` | O(n) | deep copy of the live entries only |
//!
//! # Compared to `std::collections::BinaryHeap`
//!
//! | | `PriorityHeap` | `BinaryHeap` |
//! |-|----------------|--------------|
//! | Ordering | explicit numeric priority per entry | `Ord` on the element |
//! | Capacity | exact, 1.5x growth | `Vec` amortization |
//! | Equal priorities | defined sift behavior, position tie-break | unspecified |
//! | Removal | `extract_max` drops the value | `pop` returns `Option<T>` |
//!
//! Prefer `BinaryHeap` when the payload already has the ordering you want
//! and capacity policy does not matter. Prefer this crate when priority is
//! extrinsic to the value or the buffer footprint must be predictable.

#![warn(missing_docs)]

pub mod heap;
pub mod priority;
mod storage;

pub use heap::{DEFAULT_CAPACITY, PriorityHeap};
pub use priority::Priority;
