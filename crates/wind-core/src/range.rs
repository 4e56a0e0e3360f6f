// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Table rows and columns
//!
//! All cells of a table row share one horizontal [`TableRange`]: the row
//! height. All cells of a column share one vertical range: the column width.
//! The range also holds the auto-size policy and in-cell alignment of its
//! cells.

use std::fmt;

bitflags! {
    /// Auto-size policy
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct SizePolicy: u8 {
        /// May get smaller, but never below the last size it grew to
        const SHRINK = 1 << 0;
        /// May get larger
        const GROW = 1 << 1;
    }
}

impl Default for SizePolicy {
    fn default() -> Self {
        SizePolicy::all()
    }
}

/// In-cell alignment
///
/// Columns use `Left`, `Center` or `Right`; rows use `Top`, `Center` or
/// `Bottom`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    Top,
    Left,
    Bottom,
    Right,
    #[default]
    Center,
}

/// Called with the size delta when a range's size changes
pub type SizeChangedHandler = Box<dyn FnMut(i32)>;

/// A table row or column
pub struct TableRange {
    size: i32,
    last_grown: i32,
    /// Apply [`Self::policy`] in [`Self::update_size`]
    pub auto_size: bool,
    /// Auto-size policy
    pub policy: SizePolicy,
    /// In-cell alignment
    pub alignment: Alignment,
    /// Content is sorted by this range
    pub sorted: bool,
    /// Range is selected
    pub selected: bool,
    header: bool,
    on_size_changed: Option<SizeChangedHandler>,
}

impl fmt::Debug for TableRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableRange")
            .field("size", &self.size)
            .field("last_grown", &self.last_grown)
            .field("auto_size", &self.auto_size)
            .field("policy", &self.policy)
            .field("alignment", &self.alignment)
            .field("sorted", &self.sorted)
            .field("selected", &self.selected)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl Default for TableRange {
    fn default() -> Self {
        TableRange::new()
    }
}

impl TableRange {
    /// Default size
    pub const DEFAULT_SIZE: i32 = 20;

    /// Construct with default size, auto-size off
    pub fn new() -> Self {
        TableRange {
            size: Self::DEFAULT_SIZE,
            last_grown: 0,
            auto_size: false,
            policy: SizePolicy::default(),
            alignment: Alignment::default(),
            sorted: false,
            selected: false,
            header: false,
            on_size_changed: None,
        }
    }

    /// Construct a header range
    pub fn header() -> Self {
        TableRange {
            header: true,
            ..TableRange::new()
        }
    }

    /// True for a header row or column
    #[inline]
    pub fn is_header(&self) -> bool {
        self.header
    }

    /// Size (row height or column width)
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Set size, reporting the delta to the size-changed handler
    pub fn set_size(&mut self, value: i32) {
        if value != self.size {
            let delta = value - self.size;
            self.size = value;
            log::trace!("TableRange::set_size: {value} (delta {delta})");
            if let Some(handler) = self.on_size_changed.as_mut() {
                handler(delta);
            }
        }
    }

    /// Set the size-changed handler
    pub fn on_size_changed(&mut self, handler: impl FnMut(i32) + 'static) {
        self.on_size_changed = Some(Box::new(handler));
    }

    /// Offer a new content size
    ///
    /// With [`Self::auto_size`] on, a smaller size is taken if the policy
    /// allows [shrinking](SizePolicy::SHRINK), but not below the size last
    /// grown to; a larger size is taken if the policy allows
    /// [growing](SizePolicy::GROW). Returns the new size, or `new_size`
    /// unchanged if nothing applied.
    pub fn update_size(&mut self, new_size: i32) -> i32 {
        if self.auto_size {
            if new_size < self.size && self.policy.contains(SizePolicy::SHRINK) {
                let size = new_size.max(self.last_grown);
                self.set_size(size);
                return size;
            } else if new_size > self.size && self.policy.contains(SizePolicy::GROW) {
                self.last_grown = new_size;
                self.set_size(new_size);
                return new_size;
            }
        }
        new_size
    }
}
