// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scroll model over streamed content

use super::{EventFlags, Notification, Notifier, ScrollEvent, ScrollModel};
use crate::cast::Conv;
use crate::error::Error;
use crate::projection::{project_from_wide, project_to_wide};
use crate::scroller::Track;
use crate::validate::{check_in_range, check_positive_or_zero, check_size};

/// Scroll model over content whose size may be unknown
///
/// Content size and position are `i64`, e.g. rows of a table backed by a
/// stream. While `large_size == 0` (size unknown) no position can be
/// computed; instead every scroll command notifies a
/// [`Notification::Scroll`] carrying a [`ScrollEvent`] which says where the
/// user wanted to go, so that the owner can fetch more content.
///
/// Otherwise this behaves like [`CommonModel`](super::CommonModel).
#[derive(Debug, Default)]
pub struct TableModel {
    small_size: i64,
    large_size: i64,
    small_position: i64,
    notifier: Notifier,
}

impl TableModel {
    /// Construct with the given visible and content sizes
    ///
    /// Use `large_size = 0` when the content size is not known.
    pub fn new(small_size: i32, large_size: i64) -> Result<Self, Error> {
        let mut model = TableModel::default();
        model.set_small_size(small_size)?;
        model.set_large_size(large_size)?;
        Ok(model)
    }

    /// Visible size
    #[inline]
    pub fn small_size(&self) -> i32 {
        // checked on assignment
        i32::conv(self.small_size)
    }

    /// Set the visible size: `[0, MAX]`
    pub fn set_small_size(&mut self, value: i32) -> Result<(), Error> {
        check_size(value)?;
        let value = i64::from(value);
        if value != self.small_size {
            self.small_size = value;
            self.clamp_position();
            self.notifier.notify(&*self, Notification::SizeChanged)?;
        }
        Ok(())
    }

    /// Content size; 0 when unknown
    #[inline]
    pub fn large_size(&self) -> i64 {
        self.large_size
    }

    /// Set the content size: `>= 0`
    pub fn set_large_size(&mut self, value: i64) -> Result<(), Error> {
        check_positive_or_zero(value)?;
        if value != self.large_size {
            self.large_size = value;
            self.clamp_position();
            self.notifier.notify(&*self, Notification::SizeChanged)?;
        }
        Ok(())
    }

    /// Position of the visible window in the content
    #[inline]
    pub fn small_position(&self) -> i64 {
        self.small_position
    }

    /// Set the position: `[-1, large_size)`
    pub fn set_small_position(&mut self, value: i64) -> Result<(), Error> {
        check_in_range(value, -1, self.large_size)?;
        if value != self.small_position {
            self.small_position = value;
            self.notify_scroll(None)?;
        }
        Ok(())
    }

    /// Start position of the last full page
    #[inline]
    pub fn last_visible_page(&self) -> i64 {
        if self.large_size > self.small_size {
            self.large_size - self.small_size
        } else {
            0
        }
    }

    /// True while the content size is unknown
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.large_size == 0
    }

    fn clamp_position(&mut self) {
        let last = self.last_visible_page();
        if self.small_position > last {
            log::trace!("TableModel: position {} -> {last}", self.small_position);
            self.small_position = last;
        }
    }

    fn notify_scroll(&self, event: Option<ScrollEvent>) -> Result<(), Error> {
        self.notifier.notify(self, Notification::Scroll(event))
    }

    fn notify_boundary(&self, flags: EventFlags) -> Result<(), Error> {
        log::debug!("TableModel: unknown content size, boundary event {flags:?}");
        self.notify_scroll(Some(ScrollEvent::new(flags)))
    }
}

impl ScrollModel for TableModel {
    fn compute_mid_size(&self, _: &Track, local: i32) -> i32 {
        if self.small_size >= self.large_size {
            return 0;
        }
        project_from_wide(self.small_size, self.large_size, local).max(1)
    }

    fn compute_mid_offset(&self, _: &Track, local: i32) -> i32 {
        if self.small_position < 0 {
            return -1;
        }
        project_from_wide(self.small_position, self.large_size, local)
    }

    fn scroll_min_small(&mut self, _: &Track) -> Result<(), Error> {
        if self.small_position > 0 {
            self.small_position -= 1;
            self.notify_scroll(None)
        } else if self.is_unbounded() {
            self.notify_boundary(EventFlags::MIN | EventFlags::SMALL)
        } else {
            Ok(())
        }
    }

    fn scroll_max_small(&mut self, _: &Track) -> Result<(), Error> {
        if self.small_position >= 0 && self.small_position < self.last_visible_page() {
            self.small_position += 1;
            self.notify_scroll(None)
        } else if self.is_unbounded() {
            self.notify_boundary(EventFlags::MAX | EventFlags::SMALL)
        } else {
            Ok(())
        }
    }

    fn scroll_min_large(&mut self, _: &Track) -> Result<(), Error> {
        if self.is_unbounded() {
            return self.notify_boundary(EventFlags::MIN | EventFlags::LARGE);
        }

        let old = self.small_position;
        self.small_position = (self.small_position - self.small_size).max(0);
        if old != self.small_position {
            self.notify_scroll(None)?;
        }
        Ok(())
    }

    fn scroll_max_large(&mut self, _: &Track) -> Result<(), Error> {
        if self.is_unbounded() {
            return self.notify_boundary(EventFlags::MAX | EventFlags::LARGE);
        }

        let old = self.small_position;
        self.small_position = self
            .small_position
            .saturating_add(self.small_size)
            .min(self.last_visible_page());
        if old != self.small_position {
            self.notify_scroll(None)?;
        }
        Ok(())
    }

    fn scroll_distinct_pixels(&mut self, scroller: &Track, local: i32, delta: i32) -> Result<i32, Error> {
        // a zero drag is a query: no position change and no boundary event
        if delta == 0 {
            return Ok(scroller.mid_offset());
        }
        if self.large_size <= 0 {
            self.notify_scroll(Some(ScrollEvent::distinct(delta)))?;
            // observers may have re-derived the thumb
            return Ok(scroller.mid_offset());
        }

        let old = self.small_position;
        self.small_position = project_to_wide(scroller.mid_offset(), local, self.large_size);
        if old != self.small_position {
            self.notify_scroll(None)?;
        }
        Ok(scroller.clamp_offset(self.compute_mid_offset(scroller, local)))
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
