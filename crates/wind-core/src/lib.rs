// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Wind scroll core
//!
//! The state machine behind a scroll bar: a [`Scroller`] holds the geometry
//! of the bar (length, thickness, thumb size and offset) and keeps it
//! consistent with a [`ScrollModel`](model::ScrollModel) which describes what
//! is being scrolled. Rendering and input handling are left to the caller.
//!
//! ```
//! use wind_core::Scroller;
//! use wind_core::model::{CommonModel, share};
//!
//! let model = share(CommonModel::new(50, 150)?);
//! let mut scroller = Scroller::with_model(model.clone())?;
//! scroller.set_size(10)?;
//! scroller.set_length(70)?;
//! assert_eq!(scroller.mid_size(), 17);
//!
//! scroller.scroll_max_large()?;
//! assert_eq!(model.borrow().small_position(), 50);
//! # Ok::<(), wind_core::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate bitflags;

pub extern crate easy_cast as cast;

pub mod error;
pub mod model;
pub mod projection;
pub mod range;
mod scroller;
pub mod validate;

pub use error::{ContractError, Error, RangeError};
pub use scroller::{Scroller, Track};
