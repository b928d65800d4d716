//! Backing storage for the heap's entry array.
//!
//! [`SlotBuf`] is a contiguous allocation of uninitialized slots with
//! explicit, exact capacity. Occupancy is tracked by the owning container,
//! which knows how many leading slots hold live values; the buffer itself
//! never reads or drops its contents except through the unsafe accessors.

use core::mem::MaybeUninit;
use core::ptr;

/// An owned array of possibly-uninitialized slots.
///
/// Unlike `Vec`, capacity is exact: the buffer holds precisely the requested
/// number of slots and reallocates only when told to. Dropping the buffer
/// frees the allocation without touching slot contents, so the owner must
/// drop live values itself.
pub(crate) struct SlotBuf<E> {
    slots: Box<[MaybeUninit<E>]>,
}

impl<E> SlotBuf<E> {
    /// Allocates a buffer of exactly `capacity` vacant slots.
    ///
    /// Allocation failure aborts through the global allocator's error hook.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Writes `value` into slot `i` without dropping any previous occupant.
    ///
    /// The caller is responsible for writing only into vacant slots; writing
    /// over a live value leaks it.
    #[inline]
    pub(crate) fn write(&mut self, i: usize, value: E) {
        self.slots[i].write(value);
    }

    /// Swaps slots `a` and `b` bitwise. Vacant and live slots swap alike.
    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    /// Returns a reference to the value in slot `i`.
    ///
    /// # Safety
    ///
    /// Slot `i` must be live.
    #[inline]
    pub(crate) unsafe fn get_unchecked(&self, i: usize) -> &E {
        // Safety: caller guarantees the slot holds a live value
        unsafe { self.slots[i].assume_init_ref() }
    }

    /// Moves the value out of slot `i`, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// Slot `i` must be live, and the caller must stop treating it as live.
    #[inline]
    pub(crate) unsafe fn take(&mut self, i: usize) -> E {
        // Safety: caller guarantees the slot holds a live value
        unsafe { self.slots[i].assume_init_read() }
    }

    /// Drops the value in slot `i` in place, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// Slot `i` must be live, and the caller must stop treating it as live.
    #[inline]
    pub(crate) unsafe fn drop_slot(&mut self, i: usize) {
        // Safety: caller guarantees the slot holds a live value
        unsafe { self.slots[i].assume_init_drop() }
    }

    /// Reallocates to `max(requested, live)` slots, moving the first `live`
    /// slots into the new buffer.
    ///
    /// The moved values stay live; nothing is dropped or cloned, and the
    /// clamp guarantees the live prefix always fits. No-op when the
    /// effective capacity already matches.
    pub(crate) fn grow(&mut self, requested: usize, live: usize) {
        debug_assert!(live <= self.capacity());

        let new_capacity = requested.max(live);
        if new_capacity == self.capacity() {
            return;
        }

        let mut fresh = Box::new_uninit_slice(new_capacity);
        // Safety: both regions are valid for `live` slots and do not
        // overlap. Copying `MaybeUninit` slots transfers ownership of the
        // live values without reading or dropping them; the old buffer is
        // then freed contents-untouched.
        unsafe {
            ptr::copy_nonoverlapping(self.slots.as_ptr(), fresh.as_mut_ptr(), live);
        }
        self.slots = fresh;
    }
}
