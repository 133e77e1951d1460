use crate::error::{PreconditionError, TriangulationError, TriangulationResult};
use crate::geom::polygon::Polygon;
use crate::geom::Point;
use crate::geometry_builder::GeometryBuilder;
use crate::monotone::MonotoneTessellator;
use crate::partition::MonotonePartitioner;

use alloc::vec::Vec;

/// A triangulator for simple 2D polygons.
///
/// The polygon is partitioned into y-monotone sub-rings which are then swept
/// and triangulated one by one; an n-vertex ring produces exactly `n - 2`
/// triangles whose indices refer to the input ring. The tessellator owns the
/// transient partitioning state and can be reused across calls.
///
/// ## Example
///
/// ```
/// use gon_tessellation::{NoOutput, PolygonTessellator};
/// use gon_tessellation::geom::polygon::Polygon;
/// use gon_tessellation::geom::point;
///
/// let points = [
///     point(0.0, 0.0),
///     point(2.0, 0.0),
///     point(2.0, 1.0),
///     point(1.0, 1.0),
///     point(1.0, 2.0),
///     point(0.0, 2.0),
/// ];
///
/// let mut tess = PolygonTessellator::new();
/// let count = tess
///     .tessellate(Polygon { points: &points }, &mut NoOutput::new())
///     .unwrap();
///
/// assert_eq!(count.triangles, 4);
/// ```
pub struct PolygonTessellator {
    partitioner: MonotonePartitioner,
    monotone: MonotoneTessellator,
    monotone_rings: Vec<Vec<u32>>,
}

impl PolygonTessellator {
    /// Constructor.
    pub fn new() -> Self {
        PolygonTessellator {
            partitioner: MonotonePartitioner::new(),
            monotone: MonotoneTessellator::new(),
            monotone_rings: Vec::new(),
        }
    }

    /// Triangulates `polygon`, emitting the triangles into `output`.
    ///
    /// The ring may be oriented either way and must be simple; it is not
    /// validated beyond the preconditions below. Every error path calls
    /// `abort_geometry` instead of `end_geometry`, so `output` never
    /// observes partial geometry.
    pub fn tessellate(
        &mut self,
        polygon: Polygon<Point>,
        output: &mut dyn GeometryBuilder,
    ) -> TriangulationResult {
        output.begin_geometry();

        match self.tessellate_impl(polygon, output) {
            Ok(()) => {
                let count = output.end_geometry();
                debug_assert_eq!(count.indices as usize, 3 * (polygon.points.len() - 2));
                Ok(count)
            }
            Err(error) => {
                output.abort_geometry();
                Err(error)
            }
        }
    }

    fn tessellate_impl(
        &mut self,
        polygon: Polygon<Point>,
        output: &mut dyn GeometryBuilder,
    ) -> Result<(), TriangulationError> {
        let points = polygon.points;

        if points.len() < 3 {
            return Err(PreconditionError::TooFewVertices.into());
        }
        for p in points {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(PreconditionError::PositionNotFinite.into());
            }
        }
        let winding = match polygon.winding() {
            Some(winding) => winding,
            None => return Err(TriangulationError::DegenerateGeometry),
        };

        self.monotone_rings.clear();
        self.partitioner
            .partition(points, winding, &mut self.monotone_rings);

        for ring in &self.monotone_rings {
            let _emitted = self.monotone.tessellate(ring, points, winding, output);
            debug_assert_eq!(_emitted, ring.len() - 2);
        }

        Ok(())
    }
}

impl Default for PolygonTessellator {
    fn default() -> Self {
        Self::new()
    }
}
