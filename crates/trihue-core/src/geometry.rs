//! Hue-wheel and saturation/value triangle geometry
//!
//! The selection surface is a hue ring with an inscribed triangle. The
//! triangle rotates with the hue so its pure-hue vertex always points at
//! the ring position of the current hue; the other two vertices are the
//! black and white corners. Mapping between a 2-D point and (saturation,
//! value) goes through barycentric weights over those three vertices, and
//! the forward and inverse mappings are exact inverses of each other so a
//! picker does not jitter near edges.
//!
//! All state here is derived per call; vertices are computed fresh whenever
//! the hue changes and never persisted across a hue change.

/// A 2-D point on the selection surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A saturation/value pair, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SatVal {
    /// Saturation
    pub s: f64,
    /// Value
    pub v: f64,
}

impl SatVal {
    /// Create a new saturation/value pair, clamped to [0, 1]
    #[inline]
    pub fn new(s: f64, v: f64) -> Self {
        Self {
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }
}

/// The three triangle vertices, tagged by role
///
/// `hue` is the pure-hue corner (S=1, V=1), `black` the V=0 corner, `white`
/// the S=0, V=1 corner. Named fields keep the role/weight pairing fixed
/// regardless of traversal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleVertices {
    /// Pure-hue vertex (S=1, V=1)
    pub hue: Point,
    /// Black vertex (V=0)
    pub black: Point,
    /// White vertex (S=0, V=1)
    pub white: Point,
}

/// Which part of the wheel a point falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelRegion {
    /// Inside the hue ring band
    Ring,
    /// Inside the inner disc holding the triangle
    Triangle,
    /// Beyond the outer ring radius
    Outside,
}

/// Geometry of the hue ring and inscribed triangle
///
/// `radius` is the inner edge of the ring; the triangle's vertices sit at
/// `radius - padding` from the center. The defaults mirror a 450px wheel:
/// center (225, 225), ring 165..220, padding 30.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    /// Center of the wheel
    pub center: Point,
    /// Inner radius of the hue ring
    pub radius: f64,
    /// Outer radius of the hue ring
    pub outer_radius: f64,
    /// Distance from the ring's inner edge to a triangle vertex
    pub padding: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            center: Point::new(225.0, 225.0),
            radius: 165.0,
            outer_radius: 220.0,
            padding: 30.0,
        }
    }
}

/// Barycentric denominators below this are treated as a degenerate triangle
const DEGENERATE_EPSILON: f64 = 1e-10;

impl WheelGeometry {
    /// Create a wheel geometry
    pub fn new(center: Point, radius: f64, outer_radius: f64, padding: f64) -> Self {
        Self {
            center,
            radius,
            outer_radius,
            padding,
        }
    }

    /// Triangle vertices for the given hue
    ///
    /// Three points at 120° intervals on the circle of radius
    /// `radius - padding`, with the pure-hue vertex at the ring angle of
    /// the hue itself, so the triangle tracks the hue marker as it rotates.
    pub fn triangle_vertices(&self, hue_degrees: f64) -> TriangleVertices {
        let r = self.radius - self.padding;
        let base = hue_degrees.to_radians();
        let third = std::f64::consts::TAU / 3.0;

        let at = |angle: f64| {
            Point::new(
                self.center.x + r * angle.cos(),
                self.center.y + r * angle.sin(),
            )
        };

        TriangleVertices {
            hue: at(base),
            black: at(base + third),
            white: at(base + 2.0 * third),
        }
    }

    /// Map a point to saturation/value through barycentric weights
    ///
    /// Points outside the triangle are clamped onto it: each weight is
    /// clamped to [0, 1] and the triple renormalized to sum 1 before being
    /// read as a color. A numerically degenerate triangle (near-zero area)
    /// returns `current` unchanged rather than dividing by ~0; if all
    /// clamped weights vanish the result is S=0, V=0.
    pub fn point_to_sv(
        &self,
        vertices: &TriangleVertices,
        point: Point,
        current: SatVal,
    ) -> SatVal {
        let p0 = vertices.hue;
        let p1 = vertices.black;
        let p2 = vertices.white;

        let v0 = (p1.x - p0.x, p1.y - p0.y);
        let v1 = (p2.x - p0.x, p2.y - p0.y);
        let v2 = (point.x - p0.x, point.y - p0.y);

        let dot00 = v0.0 * v0.0 + v0.1 * v0.1;
        let dot01 = v0.0 * v1.0 + v0.1 * v1.1;
        let dot02 = v0.0 * v2.0 + v0.1 * v2.1;
        let dot11 = v1.0 * v1.0 + v1.1 * v1.1;
        let dot12 = v1.0 * v2.0 + v1.1 * v2.1;

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom.abs() < DEGENERATE_EPSILON {
            return current;
        }

        let inv = 1.0 / denom;
        // weight for the black vertex
        let u = (dot11 * dot02 - dot01 * dot12) * inv;
        // weight for the white vertex
        let w_white = (dot00 * dot12 - dot01 * dot02) * inv;
        // weight for the pure-hue vertex
        let w_hue = 1.0 - u - w_white;

        let mut w_hue = w_hue.clamp(0.0, 1.0);
        let u = u.clamp(0.0, 1.0);
        let mut w_white = w_white.clamp(0.0, 1.0);

        let total = w_hue + u + w_white;
        if total > 0.0 {
            w_hue /= total;
            w_white /= total;
        } else {
            return SatVal { s: 0.0, v: 0.0 };
        }

        let chroma = w_hue + w_white;
        let s = if chroma > 0.0 { w_hue / chroma } else { 0.0 };
        SatVal { s, v: chroma }
    }

    /// Map saturation/value to the corresponding triangle point
    ///
    /// Weights: pure-hue `v*s`, white `v*(1-s)`, black the remainder. Exact
    /// inverse of [`WheelGeometry::point_to_sv`] for s, v in [0, 1] up to
    /// floating rounding.
    pub fn sv_to_point(&self, vertices: &TriangleVertices, sv: SatVal) -> Point {
        let w_hue = sv.v * sv.s;
        let w_white = sv.v * (1.0 - sv.s);
        let w_black = 1.0 - w_hue - w_white;

        Point::new(
            vertices.hue.x * w_hue + vertices.black.x * w_black + vertices.white.x * w_white,
            vertices.hue.y * w_hue + vertices.black.y * w_black + vertices.white.y * w_white,
        )
    }

    /// Whether a point lies inside the triangle (boundary counts as inside)
    pub fn point_in_triangle(&self, vertices: &TriangleVertices, point: Point) -> bool {
        let sign = |a: Point, b: Point, c: Point| {
            (a.x - c.x) * (b.y - c.y) - (b.x - c.x) * (a.y - c.y)
        };

        let d1 = sign(point, vertices.hue, vertices.black);
        let d2 = sign(point, vertices.black, vertices.white);
        let d3 = sign(point, vertices.white, vertices.hue);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

        !(has_neg && has_pos)
    }

    /// Angle of a point on the ring, in degrees normalized to [0, 360)
    pub fn ring_point_to_angle(&self, point: Point) -> f64 {
        let dy = point.y - self.center.y;
        let dx = point.x - self.center.x;
        dy.atan2(dx).to_degrees().rem_euclid(360.0)
    }

    /// Point on the ring at the given angle and radius
    ///
    /// Same angle convention as [`WheelGeometry::ring_point_to_angle`].
    pub fn angle_to_ring_point(&self, angle_degrees: f64, ring_radius: f64) -> Point {
        let rad = angle_degrees.to_radians();
        Point::new(
            self.center.x + ring_radius * rad.cos(),
            self.center.y + ring_radius * rad.sin(),
        )
    }

    /// Classify a point by the wheel's radial bands
    pub fn hit_test(&self, point: Point) -> WheelRegion {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > self.outer_radius {
            WheelRegion::Outside
        } else if distance >= self.radius {
            WheelRegion::Ring
        } else {
            WheelRegion::Triangle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn wheel() -> WheelGeometry {
        WheelGeometry::default()
    }

    #[test]
    fn test_vertices_on_inner_circle() {
        let w = wheel();
        let verts = w.triangle_vertices(0.0);
        let r = w.radius - w.padding;
        for p in [verts.hue, verts.black, verts.white] {
            let dx = p.x - w.center.x;
            let dy = p.y - w.center.y;
            assert!(
                ((dx * dx + dy * dy).sqrt() - r).abs() < EPSILON,
                "vertex {:?} not at radius {}",
                p,
                r
            );
        }
    }

    #[test]
    fn test_hue_vertex_tracks_ring_angle() {
        let w = wheel();
        for hue in [0.0, 45.0, 133.7, 270.0, 359.9] {
            let verts = w.triangle_vertices(hue);
            let angle = w.ring_point_to_angle(verts.hue);
            assert!(
                (angle - hue).abs() < 1e-6 || (angle - hue).abs() > 359.9,
                "hue {} vertex landed at ring angle {}",
                hue,
                angle
            );
        }
    }

    #[test]
    fn test_vertex_sv_roles() {
        let w = wheel();
        let verts = w.triangle_vertices(30.0);
        let current = SatVal::new(0.5, 0.5);

        let at_hue = w.point_to_sv(&verts, verts.hue, current);
        assert!((at_hue.s - 1.0).abs() < 1e-6 && (at_hue.v - 1.0).abs() < 1e-6);

        let at_black = w.point_to_sv(&verts, verts.black, current);
        assert!(at_black.v.abs() < 1e-6);

        let at_white = w.point_to_sv(&verts, verts.white, current);
        assert!(at_white.s.abs() < 1e-6 && (at_white.v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sv_roundtrip() {
        let w = wheel();
        let sentinel = SatVal::new(0.123, 0.456);
        for hue in [0.0, 60.0, 200.0] {
            let verts = w.triangle_vertices(hue);
            let mut s = 0.0;
            while s <= 1.0 {
                let mut v = 0.05; // v=0 collapses every s onto the black vertex
                while v <= 1.0 {
                    let point = w.sv_to_point(&verts, SatVal { s, v });
                    let back = w.point_to_sv(&verts, point, sentinel);
                    assert!(
                        (back.s - s).abs() < 1e-6 && (back.v - v).abs() < 1e-6,
                        "roundtrip failed at hue={} s={} v={} -> {:?}",
                        hue,
                        s,
                        v,
                        back
                    );
                    v += 0.05;
                }
                s += 0.05;
            }
        }
    }

    #[test]
    fn test_outside_point_clamps() {
        let w = wheel();
        let verts = w.triangle_vertices(0.0);
        let far = Point::new(w.center.x + w.radius * 10.0, w.center.y);
        let sv = w.point_to_sv(&verts, far, SatVal::new(0.5, 0.5));
        assert!((0.0..=1.0).contains(&sv.s));
        assert!((0.0..=1.0).contains(&sv.v));
    }

    #[test]
    fn test_degenerate_triangle_returns_current() {
        let w = WheelGeometry::new(Point::new(0.0, 0.0), 1.0, 2.0, 1.0);
        // radius == padding collapses all vertices onto the center
        let verts = w.triangle_vertices(0.0);
        let current = SatVal::new(0.3, 0.7);
        let sv = w.point_to_sv(&verts, Point::new(0.5, 0.5), current);
        assert_eq!(sv, current);
    }

    #[test]
    fn test_point_in_triangle_basic() {
        let w = wheel();
        let verts = TriangleVertices {
            hue: Point::new(0.0, -10.0),
            black: Point::new(-10.0, 10.0),
            white: Point::new(10.0, 10.0),
        };
        assert!(w.point_in_triangle(&verts, Point::new(0.0, 5.0)));
        assert!(!w.point_in_triangle(&verts, Point::new(100.0, 100.0)));
        // vertices count as inside
        for p in [verts.hue, verts.black, verts.white] {
            assert!(w.point_in_triangle(&verts, p));
        }
    }

    #[test]
    fn test_ring_angle_roundtrip() {
        let w = wheel();
        for angle in [0.0, 90.0, 180.0, 271.5, 359.0] {
            let p = w.angle_to_ring_point(angle, 192.5);
            let back = w.ring_point_to_angle(p);
            assert!(
                (back - angle).abs() < 1e-9,
                "angle {} came back as {}",
                angle,
                back
            );
        }
    }

    #[test]
    fn test_hit_test_bands() {
        let w = wheel();
        assert_eq!(w.hit_test(w.center), WheelRegion::Triangle);
        assert_eq!(
            w.hit_test(Point::new(w.center.x + 192.5, w.center.y)),
            WheelRegion::Ring
        );
        assert_eq!(
            w.hit_test(Point::new(w.center.x + 300.0, w.center.y)),
            WheelRegion::Outside
        );
    }
}
