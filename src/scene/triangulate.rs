//! Polygon triangulation.
//!
//! Polygon fill consumes this as a black box: a simple polygon goes in, a
//! flat list of triangle vertices (three per triangle) comes out. Ear
//! clipping is enough for the simple, non-self-intersecting polygons the
//! scene model carries.

use kurbo::Point;

/// Triangulate a simple polygon into a flat triangle-vertex list.
///
/// The output length is a multiple of three. Polygons with fewer than three
/// vertices produce an empty list; degenerate inputs (collinear rings,
/// self-intersections) produce the ears that could be clipped and drop the
/// rest.
pub fn triangulate(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut area2 = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        area2 += p.x * q.y - q.x * p.y;
    }
    let ccw = area2 > 0.0;

    let mut ring: Vec<usize> = (0..n).collect();
    let mut out = Vec::with_capacity(3 * (n - 2));

    while ring.len() > 3 {
        let m = ring.len();
        let mut clipped = false;
        for i in 0..m {
            let ip = ring[(i + m - 1) % m];
            let ic = ring[i];
            let inx = ring[(i + 1) % m];
            let (prev, cur, next) = (points[ip], points[ic], points[inx]);

            let turn = (cur - prev).cross(next - cur);
            let convex = if ccw { turn > 0.0 } else { turn < 0.0 };
            if !convex {
                continue;
            }

            let blocked = ring.iter().any(|&j| {
                j != ip && j != ic && j != inx && point_in_triangle(points[j], prev, cur, next)
            });
            if blocked {
                continue;
            }

            out.extend([prev, cur, next]);
            ring.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            // no ear left: degenerate ring, keep what was clipped so far
            return out;
        }
    }

    out.extend([points[ring[0]], points[ring[1]], points[ring[2]]]);
    out
}

/// Strict interior test; points on an edge do not count as inside.
fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d0 = (b - a).cross(p - a);
    let d1 = (c - b).cross(p - b);
    let d2 = (a - c).cross(p - c);
    (d0 > 0.0 && d1 > 0.0 && d2 > 0.0) || (d0 < 0.0 && d1 < 0.0 && d2 < 0.0)
}
