//! Tools to help with assembling index buffers.
//!
//! The triangulators in this crate only ever reference vertices of the
//! caller's input ring, so the output interface boils down to receiving
//! triangles. The [`GeometryBuilder`](trait.GeometryBuilder.html) trait
//! separates the triangulation algorithms from the representation of the
//! resulting geometry: [`InterleavedBuffers`](../struct.InterleavedBuffers.html)
//! writes triangles into a flat element buffer, while custom implementations
//! can stream them into mapped GPU memory, deduplicate them, or simply count
//! them ([`NoOutput`](struct.NoOutput.html)).

use crate::VertexId;

use core::ops::Add;

/// An interface separating the triangulation algorithms from the assembly of
/// the resulting index buffer.
pub trait GeometryBuilder {
    /// Called at the beginning of a generation.
    ///
    /// `end_geometry` must be called before `begin_geometry` is called again.
    fn begin_geometry(&mut self) {}

    /// Called at the end of a generation.
    ///
    /// Returns the number of triangles and indices added since the last call
    /// to `begin_geometry`.
    fn end_geometry(&mut self) -> Count;

    /// Insert a triangle made of vertices of the input ring.
    ///
    /// This method can only be called between `begin_geometry` and
    /// `end_geometry`.
    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId);

    /// Called instead of `end_geometry` if an error occurred while producing
    /// the geometry.
    ///
    /// The implementation is expected to discard the geometry that was
    /// generated since the last time `begin_geometry` was called, and to
    /// remain in a usable state.
    fn abort_geometry(&mut self) {}
}

/// Number of triangles and indices added during a triangulation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Count {
    pub triangles: u32,
    pub indices: u32,
}

impl Add for Count {
    type Output = Count;
    fn add(self, other: Count) -> Count {
        Count {
            triangles: self.triangles + other.triangles,
            indices: self.indices + other.indices,
        }
    }
}

/// A geometry builder that does not output any geometry.
///
/// Mostly useful for testing, and for counting the triangles a polygon would
/// produce without materializing them.
#[derive(Default)]
pub struct NoOutput {
    count: Count,
}

impl NoOutput {
    pub fn new() -> Self {
        NoOutput {
            count: Count::default(),
        }
    }
}

impl GeometryBuilder for NoOutput {
    fn begin_geometry(&mut self) {
        self.count = Count::default();
    }

    fn end_geometry(&mut self) -> Count {
        self.count
    }

    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        debug_assert!(a != b);
        debug_assert!(a != c);
        debug_assert!(b != c);
        debug_assert!(a != VertexId::INVALID);
        debug_assert!(b != VertexId::INVALID);
        debug_assert!(c != VertexId::INVALID);
        self.count.triangles += 1;
        self.count.indices += 3;
    }
}
