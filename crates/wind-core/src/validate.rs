// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Argument validation
//!
//! Sizes and positions handled by scrollers live in a coordinate system where
//! a size is in `[0, MAX]` and an offset (delta) is in `[-MAX, MAX]`. Anything
//! else is the result of a wrong computation somewhere upstream and is
//! rejected with a [`RangeError`].

use crate::error::RangeError;

/// Largest accepted size; enough for any bitmap or screen for years to come
pub const MAX: i32 = 1 << 20;

/// Check a size: `[0, MAX]`
#[inline]
pub fn check_size(value: i32) -> Result<(), RangeError> {
    check_size_wide(value.into())
}

/// Check a size held in a wide integer: `[0, MAX]`
pub fn check_size_wide(value: i64) -> Result<(), RangeError> {
    if value < 0 {
        Err(RangeError::Underflow(value))
    } else if value > i64::from(MAX) {
        Err(RangeError::Overflow(value))
    } else {
        Ok(())
    }
}

/// Check an offset (a delta): `[-MAX, MAX]`
pub fn check_offset(value: i32) -> Result<(), RangeError> {
    if value < -MAX {
        Err(RangeError::Underflow(value.into()))
    } else if value > MAX {
        Err(RangeError::Overflow(value.into()))
    } else {
        Ok(())
    }
}

/// Check `value >= 0`
#[inline]
pub fn check_positive_or_zero(value: i64) -> Result<(), RangeError> {
    if value < 0 {
        Err(RangeError::Negative(value))
    } else {
        Ok(())
    }
}

/// Check `value` is in `[lo, hi)`
///
/// The range itself must be non-empty: `lo >= hi` is an error regardless of
/// `value`.
pub fn check_in_range(value: i64, lo: i64, hi: i64) -> Result<(), RangeError> {
    if lo >= hi {
        return Err(RangeError::InvalidRange { lo, hi });
    }
    if value < lo || value >= hi {
        return Err(RangeError::OutOfRange { value, lo, hi });
    }
    Ok(())
}
