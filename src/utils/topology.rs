//! Single-step index wrapping on a torus.
//!
//! Both functions only handle offsets of one cell, which is all the Moore
//! neighborhood ever needs. Passing an index further out of range than that
//! is a logic error.

/// `idx + 1` wrapped into `[0, extent)`.
#[inline]
pub fn wrap_inc(idx: usize, extent: usize) -> usize {
    debug_assert!(idx < extent);
    if idx + 1 == extent {
        0
    } else {
        idx + 1
    }
}

/// `idx - 1` wrapped into `[0, extent)`.
#[inline]
pub fn wrap_dec(idx: usize, extent: usize) -> usize {
    debug_assert!(idx < extent);
    if idx == 0 {
        extent - 1
    } else {
        idx - 1
    }
}
