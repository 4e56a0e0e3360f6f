// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scroll models
//!
//! A scroll model is provided by the thing being scrolled around. It knows
//! three quantities, all in content units:
//!
//! -   `small_size`: the size of the visible window
//! -   `large_size`: the size of the whole content (0: unknown)
//! -   `small_position`: the position of the window within the content
//!
//! The [`Scroller`](crate::Scroller) asks the model for the thumb size and
//! offset and forwards scroll commands to it. The model reports changes made
//! by anyone else through its [`Notifier`].

mod common_model;
mod notifier;
mod table_model;

pub use common_model::CommonModel;
pub use notifier::{EventFlags, Notification, Notifier, Observer, ScrollEvent, SubscriptionId};
pub use table_model::TableModel;

use crate::error::Error;
use crate::scroller::Track;
use std::cell::RefCell;
use std::rc::Rc;

/// A model shared between its owner and a [`Scroller`](crate::Scroller)
pub type SharedModel = Rc<RefCell<dyn ScrollModel>>;

/// Wrap a model for sharing
#[inline]
pub fn share<M: ScrollModel + 'static>(model: M) -> Rc<RefCell<M>> {
    Rc::new(RefCell::new(model))
}

/// The contract between a scroll model and a [`Scroller`](crate::Scroller)
///
/// `scroller` is a read-only view of the scroller's geometry at the time of
/// the call. `local` is the space available to the thumb
/// ([`Track::local`]).
pub trait ScrollModel {
    /// Thumb size: `local * small_size / large_size`
    ///
    /// Return 0 when there is nothing to scroll (`small_size >= large_size`).
    /// Otherwise the result should be at least 1; the scroller raises it to
    /// its button size and caps it at `local`.
    fn compute_mid_size(&self, scroller: &Track, local: i32) -> i32;

    /// Thumb offset: `local * small_position / large_size`
    ///
    /// A negative result means the position is not known yet; the scroller
    /// uses 0. Results `>= distinct_pixels` are set to `distinct_pixels - 1`.
    fn compute_mid_offset(&self, scroller: &Track, local: i32) -> i32;

    /// Small step toward the start: `small_position -= 1`
    fn scroll_min_small(&mut self, scroller: &Track) -> Result<(), Error>;

    /// Small step toward the end: `small_position += 1`
    fn scroll_max_small(&mut self, scroller: &Track) -> Result<(), Error>;

    /// Page step toward the start: `small_position -= small_size`
    fn scroll_min_large(&mut self, scroller: &Track) -> Result<(), Error>;

    /// Page step toward the end: `small_position += small_size`
    fn scroll_max_large(&mut self, scroller: &Track) -> Result<(), Error>;

    /// The thumb was dragged by `delta` distinct pixels
    ///
    /// `|delta| <= distinct_pixels`. The scroller has already moved its
    /// thumb ([`Track::mid_offset`]); set
    /// `small_position = mid_offset * large_size / local` and return the thumb
    /// offset computed for the new position.
    ///
    /// The result must equal the scroller's mid offset after this call,
    /// otherwise the scroller reports
    /// [`ContractError::MidOffsetMismatch`](crate::error::ContractError::MidOffsetMismatch).
    fn scroll_distinct_pixels(&mut self, scroller: &Track, local: i32, delta: i32) -> Result<i32, Error>;

    /// Change notifications
    ///
    /// Notify [`Notification::SizeChanged`] when `small_size` or `large_size`
    /// changes and [`Notification::Scroll`] when `small_position` changes
    /// other than by [`ScrollModel::scroll_distinct_pixels`].
    fn notifier(&self) -> &Notifier;
}

/// The model of a scroller with nothing to scroll
///
/// The thumb fills all available space. Does nothing, never notifies.
#[derive(Debug, Default)]
pub struct DefaultModel {
    notifier: Notifier,
}

impl DefaultModel {
    /// Construct
    #[inline]
    pub fn new() -> Self {
        DefaultModel::default()
    }

    /// Construct, ready to share
    pub fn shared() -> SharedModel {
        Rc::new(RefCell::new(DefaultModel::new()))
    }
}

impl ScrollModel for DefaultModel {
    fn compute_mid_size(&self, _: &Track, local: i32) -> i32 {
        local
    }

    fn compute_mid_offset(&self, _: &Track, _: i32) -> i32 {
        0
    }

    fn scroll_min_small(&mut self, _: &Track) -> Result<(), Error> {
        Ok(())
    }

    fn scroll_max_small(&mut self, _: &Track) -> Result<(), Error> {
        Ok(())
    }

    fn scroll_min_large(&mut self, _: &Track) -> Result<(), Error> {
        Ok(())
    }

    fn scroll_max_large(&mut self, _: &Track) -> Result<(), Error> {
        Ok(())
    }

    fn scroll_distinct_pixels(&mut self, scroller: &Track, _: i32, _: i32) -> Result<i32, Error> {
        Ok(scroller.mid_offset())
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
