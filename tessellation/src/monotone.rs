use crate::geom::polygon::Winding;
use crate::geom::{directed_angle, wrap, wrap_angle, Point};
use crate::geometry_builder::GeometryBuilder;
use crate::VertexId;

use alloc::vec::Vec;
use core::f32::consts::PI;

/// Which of the two monotone chains a swept vertex lies on.
///
/// `Top` is the chain walked in +polygon direction from the leftmost vertex,
/// `Bottom` the one walked in -polygon direction.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Side {
    Top,
    Bottom,
}

#[derive(Copy, Clone, Debug)]
struct ChainVertex {
    position: usize,
    side: Side,
}

/// Generates a triangulation from a y-monotone ring (used internally by the
/// `PolygonTessellator`).
///
/// The sweep walks both chains at once from the leftmost vertex, keeping the
/// vertices that could not be triangulated yet on a stack. The stack never
/// contains the vertex currently being processed: it is pushed only once its
/// step completes, and the rightmost vertex consumes the whole stack.
pub(crate) struct MonotoneTessellator {
    stack: Vec<ChainVertex>,
}

impl MonotoneTessellator {
    pub fn new() -> Self {
        MonotoneTessellator {
            stack: Vec::with_capacity(16),
        }
    }

    /// Appends the `k - 2` triangles of the y-monotone ring `ring` (`k`
    /// vertex indices into `points`) to `output`.
    ///
    /// Walking `ring` from its leftmost to its rightmost vertex along either
    /// chain must yield non-decreasing x coordinates. `winding` is the
    /// orientation of the ring; sub-rings inherit it from the polygon they
    /// were partitioned out of.
    ///
    /// Returns the number of triangles emitted.
    pub fn tessellate(
        &mut self,
        ring: &[u32],
        points: &[Point],
        winding: Winding,
        output: &mut dyn GeometryBuilder,
    ) -> usize {
        let k = ring.len();
        debug_assert!(k >= 3);

        let pt = |position: usize| points[ring[position] as usize];

        // Leftmost and rightmost ring positions, earlier position on ties.
        let mut start = 0;
        let mut end = 0;
        for i in 1..k {
            if pt(i).x < pt(start).x {
                start = i;
            } else if pt(i).x > pt(end).x {
                end = i;
            }
        }

        let mut top = start;
        let mut bot = start;
        let mut previous = ChainVertex {
            position: start,
            side: Side::Top,
        };
        let mut emitted = 0;

        self.stack.clear();
        self.stack.push(previous);

        // One step per remaining vertex, advancing whichever cursor's next
        // vertex comes first. The guards on `end` keep either cursor from
        // running past the rightmost vertex, so it is reached by the last
        // step and no vertex is visited twice.
        for _ in 0..k - 1 {
            let top_next = wrap(top as i32 + 1, k as i32) as usize;
            let bot_next = wrap(bot as i32 - 1, k as i32) as usize;

            let current;
            if (pt(top_next).x < pt(bot_next).x || bot == end) && top != end {
                top = top_next;
                current = ChainVertex {
                    position: top,
                    side: Side::Top,
                };
            } else {
                bot = bot_next;
                current = ChainVertex {
                    position: bot,
                    side: Side::Bottom,
                };
            }

            if current.side != previous.side || current.position == end {
                // The sweep switched chains (or closed the ring at the
                // rightmost vertex): `current` sees every stack vertex
                // across the polygon, forming a fan.
                for i in 0..self.stack.len() - 1 {
                    let mut a = self.stack[i];
                    let mut b = self.stack[i + 1];
                    if pt(b.position).y < pt(a.position).y {
                        core::mem::swap(&mut a, &mut b);
                    }
                    output.add_triangle(
                        VertexId(ring[current.position]),
                        VertexId(ring[a.position]),
                        VertexId(ring[b.position]),
                    );
                    emitted += 1;
                }
                self.stack.clear();
                self.stack.push(previous);
            } else {
                // Same chain: clip ears for as long as the bend at the stack
                // top turns into the polygon interior.
                while self.stack.len() > 1 {
                    let p = self.stack[self.stack.len() - 1];
                    let pp = self.stack[self.stack.len() - 2];
                    let theta_back = directed_angle(pt(pp.position) - pt(p.position));
                    let theta_fwd = directed_angle(pt(current.position) - pt(p.position));
                    let sweep = match (current.side, winding) {
                        (Side::Top, Winding::Negative) | (Side::Bottom, Winding::Positive) => {
                            theta_fwd - theta_back
                        }
                        (Side::Top, Winding::Positive) | (Side::Bottom, Winding::Negative) => {
                            theta_back - theta_fwd
                        }
                    };
                    if wrap_angle(sweep) >= PI {
                        break;
                    }

                    match current.side {
                        Side::Top => output.add_triangle(
                            VertexId(ring[current.position]),
                            VertexId(ring[pp.position]),
                            VertexId(ring[p.position]),
                        ),
                        Side::Bottom => output.add_triangle(
                            VertexId(ring[current.position]),
                            VertexId(ring[p.position]),
                            VertexId(ring[pp.position]),
                        ),
                    }
                    emitted += 1;
                    self.stack.pop();
                }
            }

            self.stack.push(current);
            previous = current;
        }

        debug_assert_eq!(emitted, k - 2);

        emitted
    }
}

#[cfg(test)]
use crate::geom::point;
#[cfg(test)]
use crate::geometry_builder::NoOutput;

#[cfg(test)]
fn tessellate_monotone_ring(points: &[Point]) -> usize {
    use crate::geom::polygon::Polygon;

    let ring: Vec<u32> = (0..points.len() as u32).collect();
    let winding = Polygon { points }.winding().unwrap();
    let mut output = NoOutput::new();
    output.begin_geometry();
    let emitted = MonotoneTessellator::new().tessellate(&ring, points, winding, &mut output);
    assert_eq!(output.end_geometry().triangles as usize, emitted);

    emitted
}

#[test]
fn test_monotone_triangle() {
    let triangles = tessellate_monotone_ring(&[
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(0.0, 2.0),
    ]);
    assert_eq!(triangles, 1);
}

#[test]
fn test_monotone_square_both_windings() {
    let ccw = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    let cw = [
        point(0.0, 0.0),
        point(0.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 0.0),
    ];
    assert_eq!(tessellate_monotone_ring(&ccw), 2);
    assert_eq!(tessellate_monotone_ring(&cw), 2);
}

#[test]
fn test_monotone_zig_zag() {
    // Monotone in x but with reflex bends on both chains.
    let triangles = tessellate_monotone_ring(&[
        point(0.0, 0.0),
        point(1.0, -1.0),
        point(2.0, -0.5),
        point(3.0, -2.0),
        point(4.0, 0.0),
        point(3.0, 2.0),
        point(2.0, 0.5),
        point(1.0, 1.0),
    ]);
    assert_eq!(triangles, 6);
}

#[test]
fn test_monotone_l_shape() {
    // Not convex, but both chains are monotone in x.
    let triangles = tessellate_monotone_ring(&[
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 2.0),
        point(0.0, 2.0),
    ]);
    assert_eq!(triangles, 4);
}
