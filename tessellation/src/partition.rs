use crate::geom::polygon::Winding;
use crate::geom::{directed_angle, wrap, wrap_angle, Point};

use alloc::collections::VecDeque;
use alloc::vec::Vec;

const NONE: u32 = u32::MAX;

/// One node of the transient sweep ring built for each partition attempt.
///
/// `prev`/`next` follow polygon order while `left`/`right` thread the same
/// nodes in ascending x order. Nodes are addressed by their ring position,
/// so the whole ring lives in one flat array that is cleared between
/// attempts.
#[derive(Copy, Clone, Debug)]
struct SweepNode {
    prev: u32,
    next: u32,
    left: u32,
    right: u32,
}

/// Cuts a polygon ring into y-monotone sub-rings (used internally by the
/// `PolygonTessellator`).
///
/// Rings are taken off a work list one at a time. A ring either gets split
/// in two along a diagonal from a split or merge vertex, in which case both
/// halves go back on the list, or reaches the rightmost vertex without any
/// valid diagonal and is emitted as monotone. Every split strictly shrinks
/// the rings involved, so the list always drains.
pub(crate) struct MonotonePartitioner {
    queue: VecDeque<Vec<u32>>,
    nodes: Vec<SweepNode>,
    x_order: Vec<u32>,
}

impl MonotonePartitioner {
    pub fn new() -> Self {
        MonotonePartitioner {
            queue: VecDeque::new(),
            nodes: Vec::new(),
            x_order: Vec::new(),
        }
    }

    /// Partitions the full ring over `points` into y-monotone sub-rings of
    /// vertex indices, appended to `output` in discovery order.
    ///
    /// The union of the sub-rings covers exactly the input polygon; the two
    /// endpoints of each inserted diagonal are the only vertices shared
    /// between sub-rings.
    pub fn partition(&mut self, points: &[Point], winding: Winding, output: &mut Vec<Vec<u32>>) {
        debug_assert!(points.len() >= 3);

        self.queue.clear();
        self.queue.push_back((0..points.len() as u32).collect());

        while let Some(ring) = self.queue.pop_front() {
            if !self.split_once(&ring, points, winding) {
                output.push(ring);
            }
        }
    }

    /// Attempts one partitioning sweep over `ring`. Returns true if a
    /// diagonal was inserted (both halves are enqueued), false if the ring
    /// is monotone.
    fn split_once(&mut self, ring: &[u32], points: &[Point], winding: Winding) -> bool {
        let m = ring.len();
        if m == 3 {
            return false;
        }

        let pt = |position: u32| points[ring[position as usize] as usize];

        // Extrema of the ring, earlier ring position on ties.
        let mut leftmost = 0;
        let mut rightmost = 0;
        for i in 1..m as u32 {
            if pt(i).x < pt(leftmost).x {
                leftmost = i;
            } else if pt(i).x > pt(rightmost).x {
                rightmost = i;
            }
        }

        // Thread the sweep ring: polygon order through `prev`/`next`,
        // ascending (x, y, position) through `left`/`right`.
        self.nodes.clear();
        for position in 0..m as i32 {
            self.nodes.push(SweepNode {
                prev: wrap(position - 1, m as i32) as u32,
                next: wrap(position + 1, m as i32) as u32,
                left: NONE,
                right: NONE,
            });
        }

        self.x_order.clear();
        self.x_order.extend(0..m as u32);
        self.x_order.sort_unstable_by(|&a, &b| {
            (pt(a).x, pt(a).y, a)
                .partial_cmp(&(pt(b).x, pt(b).y, b))
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        for w in self.x_order.windows(2) {
            self.nodes[w[0] as usize].right = w[1];
            self.nodes[w[1] as usize].left = w[0];
        }

        // Walk the x-sorted chain from the leftmost vertex. Split vertices
        // (both polygon neighbors to the right) connect to their nearest
        // x-predecessor, merge vertices (both neighbors to the left) to
        // their nearest x-successor; the first connector whose diagonal
        // enters the interior cuts the ring in two.
        let mut current = leftmost;
        for _ in 0..m {
            let node = self.nodes[current as usize];
            let x = pt(current).x;

            let connector = if x > pt(leftmost).x && x < pt(node.prev).x && x < pt(node.next).x {
                node.left
            } else if x < pt(rightmost).x && x > pt(node.prev).x && x > pt(node.next).x {
                node.right
            } else {
                NONE
            };

            // A diagonal joins non-adjacent vertices; connectors that are
            // polygon neighbors of `current` (possible when x coordinates
            // tie) are skipped, which also keeps both halves of a split at
            // three or more vertices.
            if connector != NONE
                && connector != node.prev
                && connector != node.next
                && diagonal_enters_interior(
                    pt(current),
                    pt(node.prev),
                    pt(node.next),
                    pt(connector),
                    winding,
                )
            {
                self.split_ring(ring, current, connector);
                return true;
            }

            if current == rightmost {
                break;
            }
            current = node.right;
        }

        false
    }

    /// Cuts `ring` along the diagonal between ring positions `v` and `c`,
    /// enqueueing both halves. With `a` the smaller and `b` the larger
    /// position, the first half is `ring[a..=b]` and the second wraps
    /// forward from `b` around to `a`; each half keeps both diagonal
    /// endpoints and the ring's orientation.
    fn split_ring(&mut self, ring: &[u32], v: u32, c: u32) {
        let a = v.min(c) as usize;
        let b = v.max(c) as usize;

        let first = ring[a..=b].to_vec();

        let mut second = Vec::with_capacity(ring.len() - (b - a) + 1);
        second.extend_from_slice(&ring[b..]);
        second.extend_from_slice(&ring[..=a]);

        debug_assert!(first.len() >= 3);
        debug_assert!(second.len() >= 3);
        self.queue.push_back(first);
        self.queue.push_back(second);
    }
}

/// Whether the ray from `v` towards `c` enters the polygon interior, given
/// the directions of v's polygon neighbors `p` (previous) and `q` (next).
///
/// The interior wedge at `v` spans counter-clockwise from the outgoing edge
/// to the incoming one for a positive ring, and the other way around for a
/// negative ring.
fn diagonal_enters_interior(v: Point, p: Point, q: Point, c: Point, winding: Winding) -> bool {
    let theta_p = directed_angle(p - v);
    let theta_n = directed_angle(q - v);
    let theta_c = directed_angle(c - v);

    match winding {
        Winding::Negative => wrap_angle(theta_c - theta_p) < wrap_angle(theta_n - theta_p),
        Winding::Positive => wrap_angle(theta_c - theta_n) < wrap_angle(theta_p - theta_n),
    }
}
