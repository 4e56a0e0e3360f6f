// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Bounded scroll model

use super::{Notification, Notifier, ScrollModel};
use crate::error::Error;
use crate::projection::project;
use crate::scroller::Track;
use crate::validate::{check_in_range, check_positive_or_zero, check_size};

/// Scroll model over content of known size
///
/// Use this for a classic scroll bar. Scroll commands at an edge do nothing
/// and notify nothing.
///
/// Changing either size moves `small_position` back to the last visible page
/// when it lies beyond it.
#[derive(Debug, Default)]
pub struct CommonModel {
    small_size: i32,
    large_size: i32,
    small_position: i32,
    notifier: Notifier,
}

impl CommonModel {
    /// Construct with the given visible and content sizes
    ///
    /// The position starts at 0.
    pub fn new(small_size: i32, large_size: i32) -> Result<Self, Error> {
        let mut model = CommonModel::default();
        model.set_small_size(small_size)?;
        model.set_large_size(large_size)?;
        Ok(model)
    }

    /// Visible size
    #[inline]
    pub fn small_size(&self) -> i32 {
        self.small_size
    }

    /// Set the visible size: `[0, MAX]`
    pub fn set_small_size(&mut self, value: i32) -> Result<(), Error> {
        check_size(value)?;
        if value != self.small_size {
            self.small_size = value;
            self.clamp_position();
            self.notifier.notify(&*self, Notification::SizeChanged)?;
        }
        Ok(())
    }

    /// Content size
    #[inline]
    pub fn large_size(&self) -> i32 {
        self.large_size
    }

    /// Set the content size: `>= 0`
    pub fn set_large_size(&mut self, value: i32) -> Result<(), Error> {
        check_positive_or_zero(value.into())?;
        if value != self.large_size {
            self.large_size = value;
            self.clamp_position();
            self.notifier.notify(&*self, Notification::SizeChanged)?;
        }
        Ok(())
    }

    /// Position of the visible window in the content
    #[inline]
    pub fn small_position(&self) -> i32 {
        self.small_position
    }

    /// Set the position: `[-1, large_size)`
    ///
    /// `-1` marks the position as not known yet.
    pub fn set_small_position(&mut self, value: i32) -> Result<(), Error> {
        check_in_range(value.into(), -1, self.large_size.into())?;
        if value != self.small_position {
            self.small_position = value;
            self.notify_scroll()?;
        }
        Ok(())
    }

    /// Start position of the last full page
    #[inline]
    pub fn last_visible_page(&self) -> i32 {
        if self.large_size > self.small_size {
            self.large_size - self.small_size
        } else {
            0
        }
    }

    fn clamp_position(&mut self) {
        let last = self.last_visible_page();
        if self.small_position > last {
            log::trace!("CommonModel: position {} -> {last}", self.small_position);
            self.small_position = last;
        }
    }

    fn notify_scroll(&self) -> Result<(), Error> {
        self.notifier.notify(self, Notification::Scroll(None))
    }
}

impl ScrollModel for CommonModel {
    fn compute_mid_size(&self, _: &Track, local: i32) -> i32 {
        // nothing to scroll, nothing to render; covers both 0/0 and 100/100
        if self.small_size >= self.large_size {
            return 0;
        }
        project(self.small_size, self.large_size, local).max(1)
    }

    fn compute_mid_offset(&self, _: &Track, local: i32) -> i32 {
        if self.small_position < 0 {
            return -1;
        }
        project(self.small_position, self.large_size, local)
    }

    fn scroll_min_small(&mut self, _: &Track) -> Result<(), Error> {
        if self.small_position > 0 {
            self.small_position -= 1;
            self.notify_scroll()?;
        }
        Ok(())
    }

    fn scroll_max_small(&mut self, _: &Track) -> Result<(), Error> {
        if self.small_position >= 0 && self.small_position < self.last_visible_page() {
            self.small_position += 1;
            self.notify_scroll()?;
        }
        Ok(())
    }

    fn scroll_min_large(&mut self, _: &Track) -> Result<(), Error> {
        let old = self.small_position;
        // snap to the first page
        self.small_position = (self.small_position - self.small_size).max(0);
        if old != self.small_position {
            self.notify_scroll()?;
        }
        Ok(())
    }

    fn scroll_max_large(&mut self, _: &Track) -> Result<(), Error> {
        let old = self.small_position;
        // snap to the last visible page
        self.small_position = self
            .small_position
            .saturating_add(self.small_size)
            .min(self.last_visible_page());
        if old != self.small_position {
            self.notify_scroll()?;
        }
        Ok(())
    }

    fn scroll_distinct_pixels(&mut self, scroller: &Track, local: i32, delta: i32) -> Result<i32, Error> {
        // a zero drag is a query: the position stays, even where the thumb was clamped
        if delta == 0 || self.large_size <= 0 {
            return Ok(scroller.mid_offset());
        }

        let old = self.small_position;
        self.small_position = project(scroller.mid_offset(), local, self.large_size);
        if old != self.small_position {
            self.notify_scroll()?;
        }
        Ok(scroller.clamp_offset(self.compute_mid_offset(scroller, local)))
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
