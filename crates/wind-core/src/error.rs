// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types
//!
//! Two kinds of failure exist. A [`RangeError`] is a rejected argument: the
//! call had no effect and the caller should not retry with the same value.
//! A [`ContractError`] is a defect in a [`ScrollModel`](crate::model::ScrollModel)
//! implementation (or in this crate); it is not recoverable.

use crate::validate::MAX;
use thiserror::Error;

/// A rejected argument
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// Value below the lower bound of a size or offset
    #[error("underflow: {0}")]
    Underflow(i64),
    /// Value above [`MAX`]
    #[error("overflow: {0} > {max}", max = MAX)]
    Overflow(i64),
    /// Value must be positive or zero
    #[error("can't be < 0: {0}")]
    Negative(i64),
    /// The bounds themselves are invalid: `lo >= hi`
    #[error("invalid exclusive range: [{lo};{hi})")]
    InvalidRange { lo: i64, hi: i64 },
    /// Value not in `[lo, hi)`
    #[error("out of range: {value} not in [{lo};{hi})")]
    OutOfRange { value: i64, lo: i64, hi: i64 },
}

/// A violated model contract
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractError {
    /// `ScrollModel::scroll_distinct_pixels` disagrees with the scroller's clamp
    #[error("model computed mid offset {model}, scroller holds {scroller}")]
    MidOffsetMismatch { model: i32, scroller: i32 },
    /// A notification or model access happened while one was in progress
    #[error("re-entrant notification: you have an event loop or wrong threading")]
    Reentrant,
    /// Distinct pixel count became negative
    #[error("distinct pixels < 0: {0}")]
    NegativeDistinctPixels(i32),
}

/// Scroll core error
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("validation failed")]
    Range(#[from] RangeError),
    #[error("scroll model contract violated")]
    Contract(#[from] ContractError),
}

impl Error {
    /// True for a contract violation
    #[inline]
    pub fn is_contract(&self) -> bool {
        matches!(self, Error::Contract(_))
    }

    /// True for a rejected argument
    #[inline]
    pub fn is_range(&self) -> bool {
        matches!(self, Error::Range(_))
    }
}

impl ContractError {
    /// Log and convert
    ///
    /// Contract violations are bugs; they are reported at error level where
    /// they are raised.
    pub(crate) fn raise(self) -> Error {
        log::error!("{self}");
        Error::Contract(self)
    }
}
