use crate::geom::polygon::Polygon;
use crate::geom::{point, Point};
use crate::geometry_builder::{Count, GeometryBuilder};
use crate::{
    InterleavedBuffers, NoOutput, PolygonTessellator, PreconditionError, TriangulationError,
    VertexId,
};

use alloc::vec::Vec;
use core::f32::consts::PI;

/// Collects emitted triangles into a flat index list.
struct TriangleList {
    indices: Vec<u32>,
}

impl GeometryBuilder for TriangleList {
    fn end_geometry(&mut self) -> Count {
        Count {
            triangles: (self.indices.len() / 3) as u32,
            indices: self.indices.len() as u32,
        }
    }

    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        self.indices.push(a.offset());
        self.indices.push(b.offset());
        self.indices.push(c.offset());
    }
}

fn tessellate(points: &[Point]) -> Result<Vec<u32>, TriangulationError> {
    let mut builder = TriangleList {
        indices: Vec::new(),
    };
    PolygonTessellator::new().tessellate(Polygon { points }, &mut builder)?;
    Ok(builder.indices)
}

fn triangle_area(a: Point, b: Point, c: Point) -> f32 {
    0.5 * (b - a).cross(c - a).abs()
}

fn covered_area(points: &[Point], indices: &[u32]) -> f32 {
    let mut area = 0.0;
    for triangle in indices.chunks_exact(3) {
        area += triangle_area(
            points[triangle[0] as usize],
            points[triangle[1] as usize],
            points[triangle[2] as usize],
        );
    }

    area
}

fn strictly_inside(p: Point, a: Point, b: Point, c: Point, epsilon: f32) -> bool {
    let d1 = (b - a).cross(p - a);
    let d2 = (c - b).cross(p - b);
    let d3 = (a - c).cross(p - c);

    (d1 > epsilon && d2 > epsilon && d3 > epsilon)
        || (d1 < -epsilon && d2 < -epsilon && d3 < -epsilon)
}

/// Samples points over the polygon's bounding box and checks that no two
/// triangles claim the same point. The sequence is a fixed linear
/// congruential generator so that failures reproduce.
fn check_no_overlap(points: &[Point], indices: &[u32]) {
    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let extent = (max.x - min.x).max(max.y - min.y).max(1.0);
    let epsilon = extent * extent * 1e-6;

    let mut state: u32 = 0x12345678;
    let mut next = || {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        (state >> 8) as f32 / (1 << 24) as f32
    };

    for _ in 0..1000 {
        let sample = point(
            min.x + (max.x - min.x) * next(),
            min.y + (max.y - min.y) * next(),
        );
        let mut containing = 0;
        for triangle in indices.chunks_exact(3) {
            if strictly_inside(
                sample,
                points[triangle[0] as usize],
                points[triangle[1] as usize],
                points[triangle[2] as usize],
                epsilon,
            ) {
                containing += 1;
            }
        }
        assert!(
            containing <= 1,
            "{:?} is inside {} triangles",
            sample,
            containing
        );
    }
}

/// Tessellates `points` and checks the triangle count, the index range,
/// vertex coverage, the covered area and pairwise non-overlap.
fn check_triangulation(points: &[Point]) -> Vec<u32> {
    let n = points.len();
    let indices = tessellate(points).unwrap();

    assert_eq!(indices.len(), 3 * (n - 2));
    for &index in &indices {
        assert!((index as usize) < n);
    }
    for vertex in 0..n as u32 {
        assert!(
            indices.contains(&vertex),
            "vertex {} is not referenced",
            vertex
        );
    }

    let polygon_area = Polygon { points }.signed_area().abs();
    let area = covered_area(points, &indices);
    assert!(
        (area - polygon_area).abs() <= 1e-3 * polygon_area.max(1.0),
        "covered {} of {}",
        area,
        polygon_area
    );

    check_no_overlap(points, &indices);

    indices
}

/// The polygon of the original renderer demo, wound clockwise.
fn demo_polygon() -> Vec<Point> {
    alloc::vec![
        point(0.0, 0.0),
        point(144.0, 0.0),
        point(144.0, -72.0),
        point(72.0, -72.0),
        point(120.0, -48.0),
        point(48.0, -12.0),
        point(24.0, -24.0),
        point(72.0, -48.0),
        point(24.0, -72.0),
        point(0.0, -72.0),
    ]
}

#[test]
fn unit_square() {
    let points = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    let indices = check_triangulation(&points);
    assert_eq!(indices.len(), 6);

    let buffers = InterleavedBuffers::new(&points, 3).unwrap();
    assert_eq!(buffers.indices(), &indices[..]);
    assert_eq!(buffers.vertices().len(), 12);

    let counts = buffers.counts();
    assert_eq!(counts.vertices, 4);
    assert_eq!(counts.indices, 6);
    assert_eq!(counts.vertex_buffer_bytes, 12 * 4);
    assert_eq!(counts.index_buffer_bytes, 6 * 4);
}

#[test]
fn right_triangle() {
    let points = [point(0.0, 0.0), point(2.0, 0.0), point(0.0, 2.0)];
    let indices = check_triangulation(&points);

    assert_eq!(indices.len(), 3);
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, alloc::vec![0, 1, 2]);
    assert_eq!(covered_area(&points, &indices), 2.0);
}

#[test]
fn l_shape() {
    let points = [
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 2.0),
        point(0.0, 2.0),
    ];
    let indices = check_triangulation(&points);
    assert_eq!(indices.len() / 3, 4);
    assert!((covered_area(&points, &indices) - 3.0).abs() < 1e-4);
}

#[test]
fn demo_polygon_triangulation() {
    let points = demo_polygon();
    let indices = check_triangulation(&points);

    assert_eq!(indices.len() / 3, 8);
    assert_eq!(indices.len(), 24);
    assert!((covered_area(&points, &indices) - 7776.0).abs() < 1.0);
}

#[test]
fn demo_polygon_reversed() {
    let mut points = demo_polygon();
    points.reverse();
    let indices = check_triangulation(&points);
    assert_eq!(indices.len() / 3, 8);
}

#[test]
fn demo_polygon_with_colors() {
    let points = demo_polygon();
    let colors: Vec<f32> = alloc::vec![
        0.2, 0.0, 0.8, //
        0.2, 0.0, 0.8, //
        1.0, 0.0, 0.8, //
        1.0, 1.0, 0.0, //
        1.0, 0.0, 0.8, //
        1.0, 0.0, 0.8, //
        1.0, 0.0, 0.8, //
        1.0, 0.0, 0.8, //
        1.0, 0.0, 0.8, //
        1.0, 0.0, 0.8, //
    ];

    let plain = InterleavedBuffers::new(&points, 3).unwrap();
    let mut buffers = InterleavedBuffers::new(&points, 6).unwrap();
    buffers.set_attribute(3, 3, &colors).unwrap();

    let vertices = buffers.vertices();
    assert_eq!(vertices.len(), 60);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(vertices[i * 6], p.x);
        assert_eq!(vertices[i * 6 + 1], p.y);
        assert_eq!(vertices[i * 6 + 2], 0.0);
        assert_eq!(&vertices[i * 6 + 3..i * 6 + 6], &colors[i * 3..i * 3 + 3]);
    }

    // Attributes are transparent to the triangulation.
    assert_eq!(buffers.indices(), plain.indices());
}

#[test]
fn regular_twelve_gon() {
    let mut points = Vec::new();
    for i in 0..12 {
        let angle = 2.0 * PI * i as f32 / 12.0;
        points.push(point(angle.cos(), angle.sin()));
    }
    let indices = check_triangulation(&points);
    assert_eq!(indices.len() / 3, 10);

    let expected = 12.0 / 2.0 * (2.0 * PI / 12.0).sin();
    let area = covered_area(&points, &indices);
    assert!((area - expected).abs() < 0.01 * expected);
}

#[test]
fn attribute_idempotence() {
    let points = [point(0.0, 0.0), point(3.0, 0.0), point(0.0, 3.0)];
    let column = [1.0, 2.0, 3.0];

    let mut buffers = InterleavedBuffers::new(&points, 4).unwrap();
    buffers.set_attribute(3, 1, &column).unwrap();
    let first: Vec<f32> = buffers.vertices().to_vec();

    buffers.set_attribute(3, 1, &column).unwrap();
    assert_eq!(buffers.vertices(), &first[..]);
    assert_eq!(buffers.vertices().len(), first.len());
}

#[test]
fn attribute_overwrite_takes_last_value() {
    let points = [point(0.0, 0.0), point(3.0, 0.0), point(0.0, 3.0)];

    let mut buffers = InterleavedBuffers::new(&points, 4).unwrap();
    buffers.set_attribute(3, 1, &[1.0, 1.0, 1.0]).unwrap();
    buffers.set_attribute(3, 1, &[2.0, 2.0, 2.0]).unwrap();

    for i in 0..3 {
        assert_eq!(buffers.vertices()[i * 4 + 3], 2.0);
    }
}

#[test]
fn precondition_errors() {
    assert_eq!(
        tessellate(&[point(0.0, 0.0), point(1.0, 0.0)]),
        Err(TriangulationError::Precondition(
            PreconditionError::TooFewVertices
        )),
    );

    assert_eq!(
        tessellate(&[point(0.0, 0.0), point(f32::NAN, 0.0), point(0.0, 1.0)]),
        Err(TriangulationError::Precondition(
            PreconditionError::PositionNotFinite
        )),
    );

    let square = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    assert_eq!(
        InterleavedBuffers::new(&square, 2).err(),
        Some(TriangulationError::Precondition(
            PreconditionError::StrideTooSmall
        )),
    );
}

#[test]
fn degenerate_geometry_is_rejected() {
    let collinear = [point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)];
    assert_eq!(
        tessellate(&collinear),
        Err(TriangulationError::DegenerateGeometry),
    );
    assert_eq!(
        InterleavedBuffers::new(&collinear, 3).err(),
        Some(TriangulationError::DegenerateGeometry),
    );
}

#[test]
fn attribute_errors_leave_the_buffer_untouched() {
    let points = [point(0.0, 0.0), point(3.0, 0.0), point(0.0, 3.0)];
    let mut buffers = InterleavedBuffers::new(&points, 6).unwrap();
    let before: Vec<f32> = buffers.vertices().to_vec();

    assert_eq!(
        buffers.set_attribute(2, 1, &[0.0, 0.0, 0.0]).err(),
        Some(TriangulationError::Precondition(
            PreconditionError::AttributeOverlapsPosition
        )),
    );
    assert_eq!(
        buffers.set_attribute(4, 3, &[0.0; 9]).err(),
        Some(TriangulationError::Precondition(
            PreconditionError::AttributeOutOfBounds
        )),
    );
    assert_eq!(
        buffers.set_attribute(3, 2, &[0.0; 5]).err(),
        Some(TriangulationError::Precondition(
            PreconditionError::AttributeLengthMismatch
        )),
    );

    assert_eq!(buffers.vertices(), &before[..]);
}

#[test]
fn failed_tessellation_aborts_the_output() {
    struct Recorder {
        aborted: bool,
    }

    impl GeometryBuilder for Recorder {
        fn end_geometry(&mut self) -> Count {
            panic!("the tessellation is expected to fail");
        }

        fn add_triangle(&mut self, _a: VertexId, _b: VertexId, _c: VertexId) {
            panic!("no geometry expected");
        }

        fn abort_geometry(&mut self) {
            self.aborted = true;
        }
    }

    let collinear = [point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0)];
    let mut output = Recorder { aborted: false };
    assert_eq!(
        PolygonTessellator::new().tessellate(Polygon { points: &collinear }, &mut output),
        Err(TriangulationError::DegenerateGeometry),
    );
    assert!(output.aborted);

    let mut output = Recorder { aborted: false };
    assert_eq!(
        PolygonTessellator::new().tessellate(
            Polygon {
                points: &[point(0.0, 0.0), point(1.0, 0.0)],
            },
            &mut output,
        ),
        Err(TriangulationError::Precondition(
            PreconditionError::TooFewVertices
        )),
    );
    assert!(output.aborted);
}

#[test]
fn tessellator_is_reusable() {
    let mut tess = PolygonTessellator::new();

    let square = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    let mut output = NoOutput::new();
    let count = tess
        .tessellate(Polygon { points: &square }, &mut output)
        .unwrap();
    assert_eq!(count.triangles, 2);

    let points = demo_polygon();
    let mut output = NoOutput::new();
    let count = tess
        .tessellate(Polygon { points: &points }, &mut output)
        .unwrap();
    assert_eq!(count.triangles, 8);
    assert_eq!(count.indices, 24);
}

#[test]
fn spiky_comb_polygon() {
    // Several split and merge vertices in one ring, both orientations.
    let mut points = alloc::vec![
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 6.0),
        point(8.0, 6.0),
        point(9.0, 3.0),
        point(6.0, 5.0),
        point(5.0, 2.0),
        point(4.0, 5.0),
        point(2.0, 3.0),
        point(1.0, 6.0),
        point(0.0, 6.0),
    ];
    points.reverse();
    check_triangulation(&points);
    points.reverse();
    check_triangulation(&points);
}
