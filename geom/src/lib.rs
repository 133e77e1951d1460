#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Small 2D geometric primitives for polygon triangulation, on top of euclid.
//!
//! This crate is reexported in [gon](../gon/index.html).
//!
//! It provides the f32 point and vector types used by the rest of the
//! workspace, the cyclic index arithmetic used to step around polygon rings,
//! directed-angle helpers for sweep geometry, and a borrowed [`Polygon`]
//! view with signed area and winding queries.
//!
//! [`Polygon`]: polygon/struct.Polygon.html

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport euclid so that the tessellation crate and its users agree on the
// underlying types.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod polygon;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use core::f32::consts::PI;

/// Alias for `euclid::default::Point2D<f32>`.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for `euclid::default::Vector2D<f32>`.
pub type Vector = euclid::default::Vector2D<f32>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Wraps `index` into `[0, len)` by whole steps of `len`.
///
/// This is how the triangulation code steps around ring boundaries, so it
/// must accept indices one full turn or more outside of the range.
/// `len` must be positive.
#[inline]
pub fn wrap(mut index: i32, len: i32) -> i32 {
    debug_assert!(len > 0);
    while index >= len {
        index -= len;
    }
    while index < 0 {
        index += len;
    }

    index
}

/// Reduces an angle in radians into `[0, 2π)`.
#[inline]
pub fn wrap_angle(mut angle: f32) -> f32 {
    const TAU: f32 = 2.0 * PI;
    while angle >= TAU {
        angle -= TAU;
    }
    while angle < 0.0 {
        angle += TAU;
    }

    angle
}

/// The direction of `v` as an angle in `(-π, π]`, measured from the positive
/// x axis.
#[inline]
pub fn directed_angle(v: Vector) -> f32 {
    v.y.atan2(v.x)
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(0, 4), 0);
    assert_eq!(wrap(3, 4), 3);
    assert_eq!(wrap(4, 4), 0);
    assert_eq!(wrap(9, 4), 1);
    assert_eq!(wrap(-1, 4), 3);
    assert_eq!(wrap(-5, 4), 3);
}

#[test]
fn test_wrap_angle() {
    fn assert_almost_eq(a: f32, b: f32) {
        if (a - b).abs() > 0.0001 {
            panic!("assert almost equal: {} != {}", a, b);
        }
    }

    assert_almost_eq(wrap_angle(0.0), 0.0);
    assert_almost_eq(wrap_angle(3.0 * PI), PI);
    assert_almost_eq(wrap_angle(-PI * 0.5), 1.5 * PI);
    assert_almost_eq(wrap_angle(2.0 * PI), 0.0);
}

#[test]
fn test_directed_angle() {
    fn assert_almost_eq(a: f32, b: f32) {
        if (a - b).abs() > 0.0001 {
            panic!("assert almost equal: {} != {}", a, b);
        }
    }

    assert_almost_eq(directed_angle(vector(1.0, 0.0)), 0.0);
    assert_almost_eq(directed_angle(vector(0.0, 1.0)), PI * 0.5);
    assert_almost_eq(directed_angle(vector(-1.0, 0.0)), PI);
    assert_almost_eq(directed_angle(vector(0.0, -1.0)), -PI * 0.5);
    assert_almost_eq(directed_angle(vector(1.0, 1.0)), PI * 0.25);
}
