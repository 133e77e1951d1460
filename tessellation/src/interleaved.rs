use crate::error::{PreconditionError, TriangulationError};
use crate::geom::polygon::Polygon;
use crate::geom::Point;
use crate::geometry_builder::{Count, GeometryBuilder};
use crate::tessellate::PolygonTessellator;
use crate::VertexId;

use alloc::vec;
use alloc::vec::Vec;
use core::mem;

/// The interleaved vertex buffer and element buffer of a triangulated
/// polygon, laid out for `glBufferData` / `glVertexAttribPointer` style
/// consumption.
///
/// The vertex buffer holds one row of `stride` floats per input vertex.
/// Columns 0..3 are the position (x, y, 0); the columns above that hold
/// whatever per-vertex attributes the caller attaches with
/// [`set_attribute`](#method.set_attribute), and stay zero otherwise. The
/// element buffer holds the `3 * (n - 2)` triangle indices produced by the
/// triangulation, which only depend on the positions: attaching or changing
/// attributes never changes it.
///
/// Both buffers are owned by this object and borrowed read-only by the
/// caller for upload.
///
/// ## Example
///
/// ```
/// use gon_tessellation::InterleavedBuffers;
/// use gon_tessellation::geom::point;
///
/// let ring = [point(0.0, 0.0), point(2.0, 0.0), point(0.0, 2.0)];
///
/// let mut buffers = InterleavedBuffers::new(&ring, 5).unwrap();
/// buffers
///     .set_attribute(3, 2, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0])
///     .unwrap();
///
/// // One row of 5 floats per vertex: x, y, 0, u, v.
/// assert_eq!(buffers.vertices().len(), 15);
/// assert_eq!(buffers.vertices()[3..5], [0.0, 0.0]);
/// assert_eq!(buffers.indices().len(), 3);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct InterleavedBuffers {
    vertices: Vec<f32>,
    indices: Vec<u32>,
    stride: usize,
}

/// Sizes of the buffers of an [`InterleavedBuffers`](struct.InterleavedBuffers.html).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Counts {
    /// Number of vertices in the vertex buffer.
    pub vertices: usize,
    /// Number of indices in the element buffer.
    pub indices: usize,
    /// Byte size of the vertex buffer.
    pub vertex_buffer_bytes: usize,
    /// Byte size of the element buffer.
    pub index_buffer_bytes: usize,
}

impl InterleavedBuffers {
    /// Triangulates `ring` and packs its vertices into an interleaved buffer
    /// of `stride` floats per vertex.
    ///
    /// `stride` must be at least 3 (the position columns); the requirements
    /// on the ring itself are those of
    /// [`PolygonTessellator::tessellate`](struct.PolygonTessellator.html#method.tessellate).
    /// On error no buffer is produced.
    pub fn new(ring: &[Point], stride: usize) -> Result<Self, TriangulationError> {
        if stride < 3 {
            return Err(PreconditionError::StrideTooSmall.into());
        }

        let mut writer = ElementWriter {
            indices: Vec::with_capacity(3 * ring.len().saturating_sub(2)),
            first_index: 0,
            budget: 3 * ring.len().saturating_sub(2),
        };
        PolygonTessellator::new().tessellate(Polygon { points: ring }, &mut writer)?;

        let mut vertices = vec![0.0; ring.len() * stride];
        for (i, p) in ring.iter().enumerate() {
            vertices[i * stride] = p.x;
            vertices[i * stride + 1] = p.y;
            // Column 2 (z) stays zero.
        }

        Ok(InterleavedBuffers {
            vertices,
            indices: writer.indices,
            stride,
        })
    }

    /// Writes a per-vertex attribute column of `width` floats at column
    /// `offset` of every row.
    ///
    /// `column` holds the attribute values row after row, `width` floats per
    /// vertex. The slice `offset..offset + width` must fit between the
    /// position columns and the end of the row, and the column must provide
    /// exactly one row per vertex; otherwise nothing is written. Setting the
    /// same slice again overwrites it, the last write winning.
    pub fn set_attribute(
        &mut self,
        offset: usize,
        width: usize,
        column: &[f32],
    ) -> Result<&mut Self, TriangulationError> {
        if offset < 3 {
            return Err(PreconditionError::AttributeOverlapsPosition.into());
        }
        if offset + width > self.stride {
            return Err(PreconditionError::AttributeOutOfBounds.into());
        }
        if column.len() != self.num_vertices() * width {
            return Err(PreconditionError::AttributeLengthMismatch.into());
        }
        if width == 0 {
            return Ok(self);
        }

        for (row, values) in column.chunks_exact(width).enumerate() {
            let start = row * self.stride + offset;
            self.vertices[start..start + width].copy_from_slice(values);
        }

        Ok(self)
    }

    /// Read-only view over the interleaved vertex buffer.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Read-only view over the element buffer.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of floats per vertex.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Element and byte counts of both buffers, as consumed by
    /// `glBufferData` and `glDrawElements`.
    pub fn counts(&self) -> Counts {
        Counts {
            vertices: self.num_vertices(),
            indices: self.indices.len(),
            vertex_buffer_bytes: self.vertices.len() * mem::size_of::<f32>(),
            index_buffer_bytes: self.indices.len() * mem::size_of::<u32>(),
        }
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len() / self.stride
    }
}

/// Writes triangles straight into the element buffer under construction.
struct ElementWriter {
    indices: Vec<u32>,
    first_index: usize,
    budget: usize,
}

impl GeometryBuilder for ElementWriter {
    fn begin_geometry(&mut self) {
        self.first_index = self.indices.len();
    }

    fn end_geometry(&mut self) -> Count {
        let indices = self.indices.len() - self.first_index;
        Count {
            triangles: (indices / 3) as u32,
            indices: indices as u32,
        }
    }

    fn abort_geometry(&mut self) {
        self.indices.truncate(self.first_index);
    }

    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        debug_assert!(a != b);
        debug_assert!(a != c);
        debug_assert!(b != c);
        debug_assert!(a != VertexId::INVALID);
        debug_assert!(b != VertexId::INVALID);
        debug_assert!(c != VertexId::INVALID);
        debug_assert!(self.indices.len() + 3 <= self.budget);
        self.indices.push(a.offset());
        self.indices.push(b.offset());
        self.indices.push(c.offset());
    }
}
