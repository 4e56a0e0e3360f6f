// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The scroller: thumb geometry of a scroll bar
//!
//! ```text
//!            Min       NB1          Mid     NB2   Max
//! track:  [<<<<<]..............[#########].....[>>>>>]  size
//!
//!         |     |<-mid_offset->|         |     |     |
//!         |size |              |mid_size |     |size |
//!         |     |<------------local------------->|     |
//!         |<------------------length------------------>|
//!
//! distinct_pixels = local - mid_size
//! ```
//!
//! The end buttons (`Min`, `Max`) are square: their extent along the track is
//! the scroll bar thickness `size`. They only take space while
//! `min_max_visible` is set.

use crate::error::{ContractError, Error};
use crate::model::{DefaultModel, Notification, Observer, ScrollModel, SharedModel, SubscriptionId};
use crate::validate::{check_offset, check_size};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Scroller geometry
///
/// This is what a [`ScrollModel`] sees of the scroller it is bound to. All
/// values are in pixels.
///
/// Invariants:
///
/// -   `distinct_pixels >= 0`
/// -   `mid_offset` is in `[0, distinct_pixels)`, or 0 when
///     `distinct_pixels == 0`
#[derive(Debug)]
pub struct Track {
    size: Cell<i32>,
    length: Cell<i32>,
    min_max_visible: Cell<bool>,
    local: Cell<i32>,
    mid_size: Cell<i32>,
    mid_offset: Cell<i32>,
    distinct_pixels: Cell<i32>,
    deriving: Cell<bool>,
    fault: Cell<Option<ContractError>>,
}

impl Default for Track {
    fn default() -> Self {
        Track {
            size: Cell::new(0),
            length: Cell::new(0),
            min_max_visible: Cell::new(true),
            local: Cell::new(0),
            mid_size: Cell::new(0),
            mid_offset: Cell::new(0),
            distinct_pixels: Cell::new(0),
            deriving: Cell::new(false),
            fault: Cell::new(None),
        }
    }
}

/// Clears the derivation flag, including on early return
struct DeriveGuard<'a>(&'a Cell<bool>);

impl Drop for DeriveGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Track {
    /// Thickness; also the extent of each end button
    #[inline]
    pub fn size(&self) -> i32 {
        self.size.get()
    }

    /// Total length
    #[inline]
    pub fn length(&self) -> i32 {
        self.length.get()
    }

    /// Whether the end buttons take space
    #[inline]
    pub fn min_max_visible(&self) -> bool {
        self.min_max_visible.get()
    }

    /// Space available to the thumb
    #[inline]
    pub fn local(&self) -> i32 {
        self.local.get()
    }

    /// Thumb length
    #[inline]
    pub fn mid_size(&self) -> i32 {
        self.mid_size.get()
    }

    /// Thumb offset from the end of the `Min` button
    #[inline]
    pub fn mid_offset(&self) -> i32 {
        self.mid_offset.get()
    }

    /// Number of distinct thumb positions
    #[inline]
    pub fn distinct_pixels(&self) -> i32 {
        self.distinct_pixels.get()
    }

    /// Run a derivation step
    ///
    /// Entering while another derivation is in progress means a model
    /// notified from inside one of its `compute_*` methods. This is recorded
    /// and reported by the outermost derivation, since the model in between
    /// may not propagate it.
    fn derive(
        &self,
        model: &dyn ScrollModel,
        step: impl FnOnce(&Self, &dyn ScrollModel) -> Result<(), Error>,
    ) -> Result<(), Error> {
        if self.deriving.replace(true) {
            self.fault.set(Some(ContractError::Reentrant));
            return Err(ContractError::Reentrant.raise());
        }
        let _guard = DeriveGuard(&self.deriving);

        let result = step(self, model);
        match self.fault.take() {
            Some(fault) => Err(Error::Contract(fault)),
            None => result,
        }
    }

    /// Re-derive everything after a geometry or model change
    ///
    /// With `model_changed == false` nothing happens unless `local` changed.
    fn update(&self, model: &dyn ScrollModel, model_changed: bool) -> Result<(), Error> {
        self.derive(model, |track, model| track.update_local(model, model_changed))
    }

    /// Re-derive the thumb offset only
    fn update_offset(&self, model: &dyn ScrollModel) -> Result<(), Error> {
        self.derive(model, |track, model| {
            track.update_mid_offset(model);
            Ok(())
        })
    }

    fn update_local(&self, model: &dyn ScrollModel, model_changed: bool) -> Result<(), Error> {
        let reserved = if self.min_max_visible() { 2 * self.size() } else { 0 };
        let length = self.length();
        let local = if length >= reserved { length - reserved } else { 0 };

        if local != self.local() || model_changed {
            log::trace!("Track::update_local: local={local}, model_changed={model_changed}");
            self.local.set(local);
            self.update_mid_size(model);
            // shrinking may leave local < mid_size; distinct pixels can't go negative
            if local >= self.mid_size() {
                self.update_distinct_pixels()?;
            }
            self.update_mid_offset(model);
        }
        Ok(())
    }

    /// Thumb size: 0, or clamped to `[size, local]`
    ///
    /// Always computed from the model's current answer, so the result does
    /// not depend on the order in which `size` and `length` were set.
    fn update_mid_size(&self, model: &dyn ScrollModel) {
        let local = self.local();
        let t = model.compute_mid_size(self, local);
        let mid_size = if t == 0 {
            0
        } else if t < self.size() {
            self.size()
        } else if t > local {
            local
        } else {
            t
        };
        self.mid_size.set(mid_size);
    }

    fn update_distinct_pixels(&self) -> Result<(), Error> {
        let dp = self.local() - self.mid_size();
        if dp < 0 {
            return Err(ContractError::NegativeDistinctPixels(dp).raise());
        }
        self.distinct_pixels.set(dp);
        Ok(())
    }

    fn update_mid_offset(&self, model: &dyn ScrollModel) {
        let dp = self.distinct_pixels();
        let offset = if dp > 0 {
            let mut t = model.compute_mid_offset(self, self.local());
            if t < 0 {
                // position not known yet
                log::debug!("Track::update_mid_offset: model offset {t} -> 0");
                t = 0;
            }
            if t >= dp { dp - 1 } else { t }
        } else {
            0
        };
        self.mid_offset.set(offset);
    }

    /// Clamp a thumb offset to `[0, distinct_pixels)`, or 0
    ///
    /// Models use this on the offset they return from
    /// [`ScrollModel::scroll_distinct_pixels`].
    pub fn clamp_offset(&self, value: i32) -> i32 {
        let dp = self.distinct_pixels();
        let value = if value >= dp { dp - 1 } else { value };
        value.max(0)
    }
}

fn observer(track: &Rc<Track>) -> Observer {
    let track: Weak<Track> = Rc::downgrade(track);
    Rc::new(
        move |model: &dyn ScrollModel, notification: &Notification| -> Result<(), Error> {
            match track.upgrade() {
                Some(track) => {
                    log::trace!("Scroller: model notified {notification:?}");
                    track.update(model, true)
                }
                None => Ok(()),
            }
        },
    )
}

fn reentrant<T>(_: T) -> Error {
    ContractError::Reentrant.raise()
}

/// A scroll bar without the bar
///
/// The scroller holds the geometry of a scroll bar ([`Track`]) and keeps it
/// consistent with a [`ScrollModel`] provided by the thing being scrolled.
/// It does no rendering and handles no input: a renderer reads the geometry
/// and an input handler calls the `scroll_*` methods.
///
/// The model is shared ([`SharedModel`]); its owner may change it at any
/// time and the scroller follows through the model's notifications.
/// A scroller starts with a [`DefaultModel`], which gives a thumb filling all
/// available space.
///
/// Geometry setters validate their argument against `[0, MAX]`
/// ([`crate::validate::MAX`]); on error nothing is changed.
pub struct Scroller {
    track: Rc<Track>,
    model: SharedModel,
    subscription: SubscriptionId,
}

impl Default for Scroller {
    fn default() -> Self {
        Scroller::new()
    }
}

impl fmt::Debug for Scroller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scroller")
            .field("track", &*self.track)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

impl Drop for Scroller {
    fn drop(&mut self) {
        self.detach();
    }
}

impl Scroller {
    /// Construct with all-zero geometry and a [`DefaultModel`]
    pub fn new() -> Self {
        let track = Rc::new(Track::default());
        let model = DefaultModel::new();
        let subscription = model.notifier().subscribe(observer(&track));
        Scroller {
            track,
            model: Rc::new(RefCell::new(model)),
            subscription,
        }
    }

    /// Construct, bound to `model`
    pub fn with_model(model: SharedModel) -> Result<Self, Error> {
        let mut scroller = Scroller::new();
        scroller.set_model(model)?;
        Ok(scroller)
    }

    /// Read-only geometry view, as seen by the model
    #[inline]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Thickness; also the extent of each end button
    #[inline]
    pub fn size(&self) -> i32 {
        self.track.size()
    }

    /// Set thickness: `[0, MAX]`
    ///
    /// Does not change `length`; 0 leaves nothing to render.
    pub fn set_size(&mut self, value: i32) -> Result<(), Error> {
        check_size(value)?;
        if value != self.track.size() {
            let model = self.model.try_borrow().map_err(reentrant)?;
            self.track.size.set(value);
            // size bounds the thumb even when local is unchanged
            self.track.update(&*model, true)?;
        }
        Ok(())
    }

    /// Total length
    #[inline]
    pub fn length(&self) -> i32 {
        self.track.length()
    }

    /// Set total length: `[0, MAX]`
    pub fn set_length(&mut self, value: i32) -> Result<(), Error> {
        check_size(value)?;
        if value != self.track.length() {
            let model = self.model.try_borrow().map_err(reentrant)?;
            self.track.length.set(value);
            self.track.update(&*model, false)?;
        }
        Ok(())
    }

    /// Whether the end buttons take space (default: true)
    #[inline]
    pub fn min_max_visible(&self) -> bool {
        self.track.min_max_visible()
    }

    /// Show or hide the end buttons
    pub fn set_min_max_visible(&mut self, value: bool) -> Result<(), Error> {
        if value != self.track.min_max_visible() {
            let model = self.model.try_borrow().map_err(reentrant)?;
            self.track.min_max_visible.set(value);
            self.track.update(&*model, false)?;
        }
        Ok(())
    }

    /// Thumb offset: `[0, distinct_pixels)`, or 0
    #[inline]
    pub fn mid_offset(&self) -> i32 {
        self.track.mid_offset()
    }

    /// Move the thumb
    ///
    /// Out of range values are clamped. The model is not told; use
    /// [`Self::scroll_distinct_pixels`] to scroll by dragging.
    pub fn set_mid_offset(&mut self, value: i32) {
        if value != self.track.mid_offset() {
            self.track.mid_offset.set(self.track.clamp_offset(value));
        }
    }

    /// Thumb length, from [`ScrollModel::compute_mid_size`]
    #[inline]
    pub fn mid_size(&self) -> i32 {
        self.track.mid_size()
    }

    /// Number of distinct thumb positions: `local - mid_size`
    #[inline]
    pub fn distinct_pixels(&self) -> i32 {
        self.track.distinct_pixels()
    }

    /// Space available to the thumb
    #[inline]
    pub fn local(&self) -> i32 {
        self.track.local()
    }

    /// The bound model
    #[inline]
    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    /// Bind to `model`
    ///
    /// Unsubscribes from the previous model and re-derives all geometry, even
    /// when `model` is the model already bound.
    pub fn set_model(&mut self, model: SharedModel) -> Result<(), Error> {
        let subscription = model
            .try_borrow()
            .map_err(reentrant)?
            .notifier()
            .subscribe(observer(&self.track));
        self.detach();
        self.model = model;
        self.subscription = subscription;
        log::debug!("Scroller::set_model: {subscription:?}");
        let model = self.model.try_borrow().map_err(reentrant)?;
        self.track.update(&*model, true)
    }

    /// Bind to a fresh [`DefaultModel`]
    pub fn clear_model(&mut self) -> Result<(), Error> {
        self.set_model(DefaultModel::shared())
    }

    /// Scroll one unit toward the start
    pub fn scroll_min_small(&mut self) -> Result<(), Error> {
        self.delegate(|model, track| model.scroll_min_small(track))
    }

    /// Scroll one unit toward the end
    pub fn scroll_max_small(&mut self) -> Result<(), Error> {
        self.delegate(|model, track| model.scroll_max_small(track))
    }

    /// Scroll one page toward the start
    pub fn scroll_min_large(&mut self) -> Result<(), Error> {
        self.delegate(|model, track| model.scroll_min_large(track))
    }

    /// Scroll one page toward the end
    pub fn scroll_max_large(&mut self) -> Result<(), Error> {
        self.delegate(|model, track| model.scroll_max_large(track))
    }

    /// Drag the thumb by `delta` pixels: `[-MAX, MAX]`
    ///
    /// The thumb moves (clamped) and the model is asked for the matching
    /// position. The model is called even when the thumb does not move.
    ///
    /// A model computing a thumb offset other than the scroller's is a
    /// [`ContractError::MidOffsetMismatch`].
    pub fn scroll_distinct_pixels(&mut self, delta: i32) -> Result<(), Error> {
        check_offset(delta)?;
        let mut model = self.model.try_borrow_mut().map_err(reentrant)?;
        let track = &*self.track;

        let offset = track.clamp_offset(track.mid_offset() + delta);
        track.mid_offset.set(offset);

        let t = model.scroll_distinct_pixels(track, track.local(), delta)?;
        let mid_offset = track.mid_offset();
        if t != mid_offset {
            return Err(ContractError::MidOffsetMismatch {
                model: t,
                scroller: mid_offset,
            }
            .raise());
        }
        Ok(())
    }

    fn delegate(
        &mut self,
        f: impl FnOnce(&mut dyn ScrollModel, &Track) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let mut model = self.model.try_borrow_mut().map_err(reentrant)?;
        f(&mut *model, &*self.track)?;
        self.track.update_offset(&*model)
    }

    fn detach(&self) {
        match self.model.try_borrow() {
            Ok(model) => {
                model.notifier().unsubscribe(self.subscription);
            }
            // the observer only holds a weak reference; it goes quiet once the track is dropped
            Err(_) => log::warn!("Scroller: model busy, can't unsubscribe {:?}", self.subscription),
        }
    }
}
