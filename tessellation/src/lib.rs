#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Triangulation of simple 2D polygons into indexed triangle lists.
//!
//! This crate is reexported in [gon](../gon/index.html).
//!
//! ## Overview
//!
//! The input is a single simple polygon given as an ordered ring of
//! vertices. The triangulation proceeds in two phases: the ring is first
//! partitioned into y-monotone sub-rings, then each sub-ring is swept from
//! its leftmost to its rightmost vertex and triangulated. An n-vertex ring
//! always produces exactly `n - 2` triangles, referenced by `3 * (n - 2)`
//! indices into the input ring.
//!
//! The most useful types of this crate are:
//!
//! * [`InterleavedBuffers`](struct.InterleavedBuffers.html) - Packs the
//!   triangulation and per-vertex attributes into the interleaved vertex
//!   buffer and element buffer that a `glDrawElements`-style renderer
//!   consumes.
//! * [`PolygonTessellator`](struct.PolygonTessellator.html) - The underlying
//!   triangulator, emitting triangles through a
//!   [`GeometryBuilder`](geometry_builder/trait.GeometryBuilder.html) for
//!   callers that assemble their own output.
//!
//! The tessellator never creates vertices: every emitted index refers to a
//! vertex of the input ring, so geometry builders only receive triangles.
//!
//! Rings may be oriented either way; the orientation is derived from the
//! ring's signed area. Polygons with holes and self-intersecting polygons
//! are not supported. The input is not validated beyond its orientation,
//! and triangulating a non-simple polygon produces unspecified (but
//! memory-safe) output.
//!
//! ## Example
//!
//! ```
//! use gon_tessellation::InterleavedBuffers;
//! use gon_tessellation::geom::point;
//!
//! let ring = [
//!     point(0.0, 0.0),
//!     point(1.0, 0.0),
//!     point(1.0, 1.0),
//!     point(0.0, 1.0),
//! ];
//!
//! let buffers = InterleavedBuffers::new(&ring, 3).unwrap();
//! let counts = buffers.counts();
//!
//! // Two triangles over the four input vertices.
//! assert_eq!(counts.vertices, 4);
//! assert_eq!(counts.indices, 6);
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use gon_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
pub mod geometry_builder;
mod interleaved;
mod monotone;
mod partition;
mod tessellate;

#[cfg(test)]
mod tessellation_tests;

#[doc(inline)]
pub use crate::error::*;

#[doc(inline)]
pub use crate::geometry_builder::{Count, GeometryBuilder, NoOutput};

#[doc(inline)]
pub use crate::interleaved::{Counts, InterleavedBuffers};

#[doc(inline)]
pub use crate::tessellate::PolygonTessellator;

type Index = u32;

/// A vertex index into the ring being triangulated.
///
/// Unlike the tessellators of libraries that synthesize vertices, the ids
/// emitted here always refer to vertices of the caller's input ring, in
/// input order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexId(pub Index);

impl VertexId {
    pub const INVALID: VertexId = VertexId(u32::MAX);

    pub fn offset(self) -> Index {
        self.0
    }

    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    pub fn from_usize(v: usize) -> Self {
        VertexId(v as Index)
    }
}

impl From<VertexId> for u32 {
    fn from(v: VertexId) -> Self {
        v.0
    }
}

impl From<VertexId> for usize {
    fn from(v: VertexId) -> Self {
        v.0 as usize
    }
}
