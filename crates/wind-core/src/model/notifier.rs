// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Model notifications

use super::ScrollModel;
use crate::error::{ContractError, Error};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

bitflags! {
    /// What happened at a scroll boundary
    ///
    /// Combinations used: `MIN | SMALL`, `MAX | SMALL`, `MIN | LARGE`,
    /// `MAX | LARGE` and `DISTINCT`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct EventFlags: u8 {
        /// A thumb drag, by [`ScrollEvent::amount`] distinct pixels
        const DISTINCT = 1 << 0;
        /// Toward the start
        const MIN = 1 << 1;
        /// Toward the end
        const MAX = 1 << 2;
        /// One unit step
        const SMALL = 1 << 3;
        /// One page step
        const LARGE = 1 << 4;
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        EventFlags::empty()
    }
}

/// A scroll request the model could not resolve to a position
///
/// Fired by models with unknown content size so that the content owner can,
/// for example, load more data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollEvent {
    /// What happened
    pub flags: EventFlags,
    /// The amount of the thing that happened (drag delta for `DISTINCT`)
    pub amount: i32,
}

impl ScrollEvent {
    /// Construct with zero amount
    #[inline]
    pub fn new(flags: EventFlags) -> Self {
        ScrollEvent { flags, amount: 0 }
    }

    /// Construct a `DISTINCT` event
    #[inline]
    pub fn distinct(amount: i32) -> Self {
        ScrollEvent {
            flags: EventFlags::DISTINCT,
            amount,
        }
    }
}

/// A model change
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    /// The visible size or the content size changed
    SizeChanged,
    /// The position changed (not as a result of a scroller drag computation),
    /// or a boundary event occurred
    Scroll(Option<ScrollEvent>),
}

/// Observer callback
///
/// Receives the notifying model. An error is propagated to whoever caused the
/// notification.
pub type Observer = Rc<dyn Fn(&dyn ScrollModel, &Notification) -> Result<(), Error>>;

/// Subscription identifier, returned by [`Notifier::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct SubscriptionId(u64);

/// Observer registry of a model
///
/// Delivery is synchronous, in subscription order. Notifying while a
/// notification is being delivered is refused with
/// [`ContractError::Reentrant`].
#[derive(Default)]
pub struct Notifier {
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_id: Cell<u64>,
    dispatching: Cell<bool>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.len())
            .field("dispatching", &self.dispatching.get())
            .finish()
    }
}

/// Clears the dispatch flag, including on early return
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Notifier {
    /// Construct with no observers
    #[inline]
    pub fn new() -> Self {
        Notifier::default()
    }

    /// Number of observers
    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    /// True when nobody is listening
    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// True while a notification is being delivered
    #[inline]
    pub fn is_dispatching(&self) -> bool {
        self.dispatching.get()
    }

    /// Add an observer
    pub fn subscribe(&self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        log::trace!("Notifier::subscribe: {id:?}");
        id
    }

    /// Remove an observer
    ///
    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let len = observers.len();
        observers.retain(|(i, _)| *i != id);
        observers.len() != len
    }

    /// Deliver `notification` from `model` to all observers
    ///
    /// Stops at (and returns) the first observer error. Observers may
    /// subscribe or unsubscribe while being notified; changes apply from the
    /// next notification.
    pub fn notify(&self, model: &dyn ScrollModel, notification: Notification) -> Result<(), Error> {
        if self.dispatching.replace(true) {
            return Err(ContractError::Reentrant.raise());
        }
        let _guard = DispatchGuard(&self.dispatching);

        log::trace!("Notifier::notify: {notification:?}");
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(model, &notification)?;
        }
        Ok(())
    }
}
