//! Numeric priority trait for heap ordering.
//!
//! [`Priority`] bounds the priority parameter of a
//! [`PriorityHeap`](crate::PriorityHeap): a totally ordered, cheaply
//! copyable numeric. Floats are deliberately excluded, since `f32`/`f64`
//! are not `Ord` (NaN breaks total order).

/// A totally ordered, copyable priority.
///
/// Priorities are compared with `Ord` and copied around during sift
/// operations, so the type should be small.
///
/// # Example
///
/// Newtypes work as priorities as long as they are `Copy + Ord`:
///
/// ```
/// use apex_heap::{Priority, PriorityHeap};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Urgency(u8);
///
/// impl Priority for Urgency {}
///
/// let mut heap: PriorityHeap<&str, Urgency> = PriorityHeap::new();
/// heap.push("nightly backup", Urgency(1));
/// heap.push("page the on-call", Urgency(250));
///
/// assert_eq!(*heap.peek_max(), "page the on-call");
/// ```
pub trait Priority: Copy + Ord {}

macro_rules! impl_priority_for_int {
    ($($ty:ty),*) => {
        $(
            impl Priority for $ty {}
        )*
    };
}

impl_priority_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
