// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Linear projection between coordinate axes
//!
//! Converts a value from one coordinate axis into another, preserving its
//! ratio to the axis length:
//!
//! -   `project(1, 2, 30) == 15`
//! -   `project(15, 30, 2) == 1`
//!
//! The result is `round(to * value / from)` for `from > 0` and `0` otherwise.
//! The product is formed exactly (in `i128`) and rounded half away from zero
//! after the division. Negative `value` or `to` give a negative result.
//!
//! Three variants exist since a content size may not fit a pixel coordinate.

use crate::cast::Conv;

/// Divide, rounding half away from zero; requires `den > 0`
fn round_div(num: i128, den: i128) -> i128 {
    debug_assert!(den > 0);
    let q = num / den;
    let r = num % den;
    if 2 * r.abs() >= den { q + num.signum() } else { q }
}

fn project_exact(value: i128, from: i128, to: i128) -> i128 {
    if from > 0 {
        round_div(to * value, from)
    } else {
        0
    }
}

fn saturate_i32(x: i128) -> i32 {
    i32::conv(x.clamp(i32::MIN.into(), i32::MAX.into()))
}

fn saturate_i64(x: i128) -> i64 {
    i64::conv(x.clamp(i64::MIN.into(), i64::MAX.into()))
}

/// Project `value` from axis `from` onto axis `to` (pixel space)
#[inline]
pub fn project(value: i32, from: i32, to: i32) -> i32 {
    saturate_i32(project_exact(value.into(), from.into(), to.into()))
}

/// Project from a wide (content) axis onto a pixel axis
///
/// Used to compute thumb size and offset from a content size which may not
/// fit an `i32`.
#[inline]
pub fn project_from_wide(value: i64, from: i64, to: i32) -> i32 {
    saturate_i32(project_exact(value.into(), from.into(), to.into()))
}

/// Project from a pixel axis onto a wide (content) axis
///
/// Used to turn a thumb offset back into a content position.
#[inline]
pub fn project_to_wide(value: i32, from: i32, to: i64) -> i64 {
    saturate_i64(project_exact(value.into(), from.into(), to.into()))
}
