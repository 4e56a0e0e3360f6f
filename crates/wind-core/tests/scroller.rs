// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

use wind_core::model::{CommonModel, Notifier, ScrollModel, share};
use wind_core::validate::MAX;
use wind_core::{ContractError, Error, Scroller, Track};

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test model: fixed or minimal thumb, fixed offset
struct Stub {
    /// Thumb size; negative: the scroller's `size`
    mid_size: i32,
    mid_offset: i32,
    /// Added to the offset returned from a drag
    bias: i32,
    drags: usize,
    notifier: Notifier,
}

impl Stub {
    fn min_thumb() -> Self {
        Stub {
            mid_size: -1,
            mid_offset: 0,
            bias: 0,
            drags: 0,
            notifier: Notifier::new(),
        }
    }
}

impl ScrollModel for Stub {
    fn compute_mid_size(&self, scroller: &Track, _: i32) -> i32 {
        if self.mid_size < 0 { scroller.size() } else { self.mid_size }
    }
    fn compute_mid_offset(&self, _: &Track, _: i32) -> i32 {
        self.mid_offset
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
        self.drags += 1;
        Ok(scroller.mid_offset() + self.bias)
    }
    fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

#[test]
fn default_model_never_scrolls() {
    init_log();
    for (size, length) in [(0, 0), (10, 15), (10, 100), (50, 100), (4321, 131072), (MAX, MAX)] {
        let mut s = Scroller::new();
        s.set_size(size).unwrap();
        s.set_length(length).unwrap();
        assert_eq!(s.distinct_pixels(), 0, "size={size}, length={length}");
        assert_eq!(s.mid_offset(), 0);
    }
}

#[test]
fn size_alone() {
    for x in [0, 1, 10, 4321, 131072] {
        let mut s = Scroller::new();
        s.set_size(x).unwrap();
        assert_eq!(s.size(), x);
        assert_eq!(s.distinct_pixels(), 0);
        assert_eq!(s.length(), 0);
        assert_eq!(s.mid_offset(), 0);
    }
}

#[test]
fn invalid_geometry() {
    init_log();
    let model = share(CommonModel::new(50, 150).unwrap());
    let mut s = Scroller::with_model(model).unwrap();
    s.set_size(10).unwrap();
    s.set_length(70).unwrap();
    s.scroll_max_large().unwrap();
    let before = format!("{:?}", s.track());

    for x in [-1, -10, i32::MIN, MAX + 1, i32::MAX] {
        assert!(s.set_size(x).unwrap_err().is_range());
        assert!(s.set_length(x).unwrap_err().is_range());
    }
    assert_eq!(format!("{:?}", s.track()), before);
}

#[test]
fn mid_offset_clamps() {
    let mut s = Scroller::with_model(share(Stub::min_thumb())).unwrap();
    s.set_length(100).unwrap();
    s.set_size(10).unwrap();
    assert_eq!(s.mid_size(), 10);
    assert_eq!(s.distinct_pixels(), 70);

    for x in [0, 10, 69] {
        s.set_mid_offset(x);
        assert_eq!(s.mid_offset(), x);
    }
    for (x, expected) in [(-1, 0), (70, 69), (-10, 0), (71, 69), (i32::MIN, 0), (i32::MAX, 69)] {
        s.set_mid_offset(x);
        assert_eq!(s.mid_offset(), expected, "set_mid_offset({x})");
    }

    s.set_size(34).unwrap();
    assert_eq!(s.distinct_pixels(), 0);
    s.set_mid_offset(10);
    assert_eq!(s.mid_offset(), 0);
}

#[test]
fn drag_by_zero() {
    init_log();
    let mut s = Scroller::new();
    s.scroll_distinct_pixels(0).unwrap();
    assert_eq!(s.mid_offset(), 0);

    let model = share(Stub::min_thumb());
    let mut s = Scroller::with_model(model.clone()).unwrap();
    s.set_size(10).unwrap();
    s.set_length(100).unwrap();
    for offset in [0, 35, 69] {
        s.set_mid_offset(offset);
        s.scroll_distinct_pixels(0).unwrap();
        assert_eq!(s.mid_offset(), offset);
    }
    assert_eq!(model.borrow().drags, 3);
}

#[test]
fn drag() {
    let mut s = Scroller::with_model(share(Stub::min_thumb())).unwrap();
    s.set_size(10).unwrap();
    s.set_length(100).unwrap();

    let mut expected = 0;
    for delta in [0, -1, 1, -10, 10, 4321, -4321] {
        s.scroll_distinct_pixels(delta).unwrap();
        expected = (expected + delta).clamp(0, 69);
        assert_eq!(s.mid_offset(), expected, "delta={delta}");
    }

    for delta in [MAX + 1, -MAX - 1, i32::MAX, i32::MIN] {
        assert!(s.scroll_distinct_pixels(delta).unwrap_err().is_range());
    }
    assert_eq!(s.mid_offset(), 0);
}

#[test]
fn drag_mismatch() {
    init_log();
    let mut stub = Stub::min_thumb();
    stub.bias = 1;
    let mut s = Scroller::with_model(share(stub)).unwrap();
    s.set_size(10).unwrap();
    s.set_length(100).unwrap();

    let err = s.scroll_distinct_pixels(5).unwrap_err();
    assert_eq!(
        err,
        Error::Contract(ContractError::MidOffsetMismatch {
            model: 6,
            scroller: 5
        })
    );
    assert!(err.is_contract());
}

#[test]
fn order_independence() {
    for (small, large) in [(5, 100), (20, 100), (1, 3), (0, 10)] {
        for (size, length) in [(10, 20), (10, 100), (3, 1000)] {
            let mut a = Scroller::with_model(share(CommonModel::new(small, large).unwrap())).unwrap();
            a.set_size(size).unwrap();
            a.set_length(length).unwrap();

            let mut b = Scroller::with_model(share(CommonModel::new(small, large).unwrap())).unwrap();
            b.set_length(length).unwrap();
            b.set_size(size).unwrap();

            assert_eq!(a.mid_size(), b.mid_size(), "model {small}/{large}, {size}x{length}");
        }
    }
}

#[test]
fn min_max_visible() {
    let mut s = Scroller::new();
    s.set_length(10).unwrap();
    s.set_size(10).unwrap();
    assert_eq!(s.local(), 0);
    assert_eq!(s.mid_size(), 0);

    s.set_min_max_visible(false).unwrap();
    assert_eq!((s.size(), s.length()), (10, 10));
    assert_eq!(s.mid_size(), 10);
    assert_eq!(s.distinct_pixels(), 0);

    s.set_min_max_visible(true).unwrap();
    assert_eq!((s.size(), s.length()), (10, 10));
    assert_eq!(s.mid_size(), 0);

    let mut s = Scroller::with_model(share(Stub::min_thumb())).unwrap();
    s.set_size(10).unwrap();
    s.set_length(100).unwrap();
    assert_eq!(s.local(), 80);
    s.set_min_max_visible(false).unwrap();
    assert_eq!(s.local(), 100);
    assert_eq!(s.distinct_pixels(), 90);
    s.set_min_max_visible(true).unwrap();
    assert_eq!(s.distinct_pixels(), 70);
}

#[test]
fn mid_size() {
    init_log();
    let model = share(CommonModel::new(20, 100).unwrap());
    let mut s = Scroller::with_model(model.clone()).unwrap();
    s.set_size(10).unwrap();
    s.set_length(100).unwrap();
    assert_eq!(s.local(), 80);
    assert_eq!(s.mid_size(), 16);
    assert_eq!(s.distinct_pixels(), 64);

    // nothing to scroll
    model.borrow_mut().set_large_size(19).unwrap();
    assert_eq!(s.mid_size(), 0);
    model.borrow_mut().set_large_size(20).unwrap();
    assert_eq!(s.mid_size(), 0);

    // raised to the button size
    model.borrow_mut().set_large_size(200).unwrap();
    assert_eq!(s.mid_size(), 10);
    assert_eq!(s.distinct_pixels(), 70);

    // capped at local
    let mut stub = Stub::min_thumb();
    stub.mid_size = 1000;
    s.set_model(share(stub)).unwrap();
    assert_eq!(s.mid_size(), 80);
    assert_eq!(s.distinct_pixels(), 0);
}

#[test]
fn page_steps() {
    init_log();
    let model = share(CommonModel::new(50, 150).unwrap());
    let mut s = Scroller::with_model(model.clone()).unwrap();
    s.set_size(10).unwrap();
    s.set_length(70).unwrap();
    assert_eq!(s.local(), 50);
    assert_eq!(s.mid_size(), 17);
    assert_eq!(s.distinct_pixels(), 33);

    for (position, offset) in [(50, 17), (100, 32), (100, 32)] {
        s.scroll_max_large().unwrap();
        assert_eq!(model.borrow().small_position(), position);
        assert_eq!(s.mid_offset(), offset);
    }
    assert_eq!(s.mid_offset(), s.distinct_pixels() - 1);

    for (position, offset) in [(50, 17), (0, 0), (0, 0)] {
        s.scroll_min_large().unwrap();
        assert_eq!(model.borrow().small_position(), position);
        assert_eq!(s.mid_offset(), offset);
    }
}

#[test]
fn unit_steps() {
    let model = share(CommonModel::new(50, 150).unwrap());
    let mut s = Scroller::with_model(model.clone()).unwrap();
    s.set_size(10).unwrap();
    s.set_length(70).unwrap();

    s.scroll_min_small().unwrap();
    assert_eq!(model.borrow().small_position(), 0);
    for _ in 0..3 {
        s.scroll_max_small().unwrap();
    }
    assert_eq!(model.borrow().small_position(), 3);
    assert_eq!(s.mid_offset(), 1);

    model.borrow_mut().set_small_position(100).unwrap();
    assert_eq!(s.mid_offset(), 32);
    s.scroll_max_small().unwrap();
    assert_eq!(model.borrow().small_position(), 100);
    s.scroll_min_small().unwrap();
    assert_eq!(model.borrow().small_position(), 99);
}

#[test]
fn drag_round_trip() {
    let model = share(CommonModel::new(50, 150).unwrap());
    let mut s = Scroller::with_model(model.clone()).unwrap();
    s.set_size(10).unwrap();
    s.set_length(70).unwrap();

    s.scroll_distinct_pixels(10).unwrap();
    assert_eq!(s.mid_offset(), 10);
    assert_eq!(model.borrow().small_position(), 30);

    s.scroll_distinct_pixels(100).unwrap();
    assert_eq!(s.mid_offset(), 32);
    assert_eq!(model.borrow().small_position(), 96);

    s.scroll_distinct_pixels(-MAX).unwrap();
    assert_eq!(s.mid_offset(), 0);
    assert_eq!(model.borrow().small_position(), 0);
}

#[test]
fn coarse_content() {
    init_log();
    // fewer content units than pixels: not every thumb offset has a position
    let model = share(CommonModel::new(2, 10).unwrap());
    let mut s = Scroller::with_model(model).unwrap();
    s.set_min_max_visible(false).unwrap();
    s.set_length(100).unwrap();
    assert_eq!(s.mid_size(), 20);
    assert_eq!(s.distinct_pixels(), 80);

    let err = s.scroll_distinct_pixels(3).unwrap_err();
    assert_eq!(
        err,
        Error::Contract(ContractError::MidOffsetMismatch {
            model: 0,
            scroller: 3
        })
    );
}

#[test]
fn unknown_position() {
    let model = share(CommonModel::new(50, 150).unwrap());
    let mut s = Scroller::with_model(model.clone()).unwrap();
    s.set_size(10).unwrap();
    s.set_length(70).unwrap();
    model.borrow_mut().set_small_position(100).unwrap();
    assert_eq!(s.mid_offset(), 32);

    model.borrow_mut().set_small_position(-1).unwrap();
    assert_eq!(s.mid_offset(), 0);
}
