//! Triangulation of simple 2D polygons into GPU-ready vertex and index
//! buffers.
//!
//! # Crates
//!
//! * **gon_tessellation** - The triangulation kernel: y-monotone
//!   partitioning, monotone sweep triangulation, and interleaved buffer
//!   packing.
//! * **gon_geom** - The small geometric vocabulary the kernel is written
//!   in: f32 points and vectors on top of euclid, cyclic index arithmetic,
//!   directed angles, and a borrowed polygon ring view.
//!
//! This meta-crate (`gon`) reexports the other gon crates for convenience.
//!
//! # Example
//!
//! Triangulating a quad and packing a color per vertex next to the
//! positions:
//!
//! ```
//! use gon::tessellation::InterleavedBuffers;
//! use gon::geom::point;
//!
//! fn main() {
//!     let ring = [
//!         point(0.0, 0.0),
//!         point(1.0, 0.0),
//!         point(1.0, 1.0),
//!         point(0.0, 1.0),
//!     ];
//!     let colors = [
//!         1.0, 0.0, 0.0, //
//!         0.0, 1.0, 0.0, //
//!         0.0, 0.0, 1.0, //
//!         1.0, 1.0, 1.0, //
//!     ];
//!
//!     let mut buffers = InterleavedBuffers::new(&ring, 6).unwrap();
//!     buffers.set_attribute(3, 3, &colors).unwrap();
//!
//!     // The buffers are ready to be uploaded to the GPU and drawn with
//!     // the equivalent of glDrawElements.
//!     let counts = buffers.counts();
//!     println!(
//!         " -- {} vertices {} indices",
//!         counts.vertices,
//!         counts.indices,
//!     );
//! }
//! ```
//!
//! The vertex buffer interleaves one row of `stride` floats per vertex
//! (position at columns 0..3, attributes above), and the element buffer
//! holds `3 * (n - 2)` indices into the ring: an n-vertex polygon always
//! triangulates into exactly `n - 2` triangles.
//!
//! Callers that assemble their own output instead of the interleaved
//! layout can drive
//! [`PolygonTessellator`](../gon_tessellation/struct.PolygonTessellator.html)
//! with a custom
//! [`GeometryBuilder`](../gon_tessellation/geometry_builder/index.html).

pub use gon_geom;
pub use gon_tessellation;

pub use gon_geom as geom;
pub use gon_tessellation as tessellation;
