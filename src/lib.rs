// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Wind: scroll bars without the bar
//!
//! This, the main Wind crate, is merely a wrapper over [`wind_core`]. All its
//! items are re-exported directly (e.g. [`wind::Scroller`](crate::Scroller)).
//!
//! A [`Scroller`] is the geometry of a custom-drawn scroll bar: track length,
//! thickness, thumb size and thumb offset. A [`ScrollModel`](model::ScrollModel)
//! provided by the scrolled content decides what the thumb means:
//!
//! -   [`model::CommonModel`] for content of known size
//! -   [`model::TableModel`] for streamed content whose size may be unknown
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is
//! re-exported as `wind::cast`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use wind_core::*;
