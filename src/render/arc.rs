//! Annular sector path generation.
//!
//! Petals and category rings are annular sectors with optional pad angle and
//! rounded corners. The construction is d3-shape's `arc()`: pad the sector by
//! a constant linear gap (pad radius = √(r0² + r1²)), restrict the corner
//! radius so corners fit the sector, then trace outer ring clockwise and inner
//! ring back, replacing each corner with a tangent circle.
//!
//! Angles are measured clockwise from 12 o'clock, the convention the layout
//! uses throughout.

use glam::{DVec2, dvec2};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::path::PathData;
use crate::types::Radians;

const EPSILON: f64 = 1e-12;

fn asin(x: f64) -> f64 {
    if x >= 1.0 {
        FRAC_PI_2
    } else if x <= -1.0 {
        -FRAC_PI_2
    } else {
        x.asin()
    }
}

fn acos(x: f64) -> f64 {
    if x > 1.0 {
        0.0
    } else if x < -1.0 {
        PI
    } else {
        x.acos()
    }
}

/// Intersection of lines p0-p1 and p2-p3, `None` when (nearly) parallel.
fn intersect(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Option<DVec2> {
    let d10 = p1 - p0;
    let d32 = p3 - p2;
    let t = d32.y * d10.x - d32.x * d10.y;
    if t * t < EPSILON {
        return None;
    }
    let t = (d32.x * (p0.y - p2.y) - d32.y * (p0.x - p2.x)) / t;
    Some(p0 + d10 * t)
}

/// A corner circle tangent to the radial edge p0-p1 and to the ring of
/// radius `r1`.
struct CornerTangent {
    /// Corner circle center
    center: DVec2,
    /// From the center to the tangent point on the radial edge
    to_edge: DVec2,
    /// From the center to the tangent point on the ring
    to_ring: DVec2,
}

impl CornerTangent {
    fn new(p0: DVec2, p1: DVec2, r1: f64, rc: f64, cw: bool) -> Self {
        let d01 = p0 - p1;
        let lo = (if cw { rc } else { -rc }) / d01.length();
        let offset = dvec2(lo * d01.y, -lo * d01.x);
        let p11 = p0 + offset;
        let p10 = p1 + offset;
        let mid = (p11 + p10) / 2.0;
        let d = p10 - p11;
        let d2 = d.length_squared();
        let r = r1 - rc;
        let cross = p11.x * p10.y - p10.x * p11.y;
        let disc = (if d.y < 0.0 { -1.0 } else { 1.0 }) * (r * r * d2 - cross * cross).max(0.0).sqrt();

        let c0 = dvec2((cross * d.y - d.x * disc) / d2, (-cross * d.x - d.y * disc) / d2);
        let c1 = dvec2((cross * d.y + d.x * disc) / d2, (-cross * d.x + d.y * disc) / d2);

        // The closer of the two candidates
        let center = if (c0 - mid).length_squared() > (c1 - mid).length_squared() {
            c1
        } else {
            c0
        };

        Self {
            center,
            to_edge: -offset,
            to_ring: center * (r1 / r - 1.0),
        }
    }

    fn edge_point(&self) -> DVec2 {
        self.center + self.to_edge
    }

    fn edge_angle(&self) -> f64 {
        self.to_edge.y.atan2(self.to_edge.x)
    }

    fn ring_angle(&self) -> f64 {
        self.to_ring.y.atan2(self.to_ring.x)
    }

    /// Angle of the ring tangent point as seen from the origin
    fn ring_point_angle(&self) -> f64 {
        let p = self.center + self.to_ring;
        p.y.atan2(p.x)
    }
}

/// An annular sector centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: Radians,
    pub end_angle: Radians,
    /// Total angular gap split between both sides, measured at the pad radius
    pub pad_angle: Radians,
    pub corner_radius: f64,
}

impl ArcShape {
    pub fn new(inner_radius: f64, outer_radius: f64, start_angle: Radians, end_angle: Radians) -> Self {
        Self {
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            pad_angle: Radians::ZERO,
            corner_radius: 0.0,
        }
    }

    pub fn with_pad_angle(mut self, pad_angle: Radians) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Closed path data, coordinates rounded to `digits` decimals.
    pub fn path(&self, digits: u32) -> String {
        self.build(PathData::new(digits)).z().into_string()
    }

    // Negated comparisons keep NaN radii and angles on the degenerate branches
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn build(&self, path: PathData) -> PathData {
        let (mut r0, mut r1) = (self.inner_radius, self.outer_radius);
        let a0 = self.start_angle.raw() - FRAC_PI_2;
        let a1 = self.end_angle.raw() - FRAC_PI_2;
        let da = (a1 - a0).abs();
        let cw = a1 > a0;

        if r1 < r0 {
            std::mem::swap(&mut r0, &mut r1);
        }

        // A point
        if !(r1 > EPSILON) {
            return path.m(DVec2::ZERO);
        }

        // A circle or annulus
        if da > TAU - EPSILON {
            let mut path = path
                .m(polar(r1, a0))
                .arc(DVec2::ZERO, r1, a0, a1, !cw);
            if r0 > EPSILON {
                path = path.m(polar(r0, a1)).arc(DVec2::ZERO, r0, a1, a0, cw);
            }
            return path;
        }

        let (mut a01, mut a11, mut a00, mut a10) = (a0, a1, a0, a1);
        let (mut da0, mut da1) = (da, da);
        let ap = self.pad_angle.raw() / 2.0;
        let rp = if ap > EPSILON { (r0 * r0 + r1 * r1).sqrt() } else { 0.0 };
        let rc = ((r1 - r0).abs() / 2.0).min(self.corner_radius);
        let (mut rc0, mut rc1) = (rc, rc);

        if rp > EPSILON {
            let sign = if cw { 1.0 } else { -1.0 };
            let p0 = asin(rp / r0 * ap.sin());
            let p1 = asin(rp / r1 * ap.sin());
            da0 -= p0 * 2.0;
            if da0 > EPSILON {
                a00 += p0 * sign;
                a10 -= p0 * sign;
            } else {
                da0 = 0.0;
                a00 = (a0 + a1) / 2.0;
                a10 = a00;
            }
            da1 -= p1 * 2.0;
            if da1 > EPSILON {
                a01 += p1 * sign;
                a11 -= p1 * sign;
            } else {
                da1 = 0.0;
                a01 = (a0 + a1) / 2.0;
                a11 = a01;
            }
        }

        let outer_start = polar(r1, a01);
        let outer_end = polar(r1, a11);
        let inner_start = polar(r0, a00);
        let inner_end = polar(r0, a10);

        // Restrict the corner radius so the corners fit inside the sector; if
        // the radial edges do not meet, the sector is too small for corners.
        if rc > EPSILON && da < PI {
            match intersect(outer_start, inner_start, outer_end, inner_end) {
                Some(oc) => {
                    let a = outer_start - oc;
                    let b = outer_end - oc;
                    let kc = 1.0 / (acos(a.dot(b) / (a.length() * b.length())) / 2.0).sin();
                    let lc = oc.length();
                    rc0 = rc.min((r0 - lc) / (kc - 1.0));
                    rc1 = rc.min((r1 - lc) / (kc + 1.0));
                }
                None => {
                    rc0 = 0.0;
                    rc1 = 0.0;
                }
            }
        }

        let mut path = if !(da1 > EPSILON) {
            // Collapsed to a line
            path.m(outer_start)
        } else if rc1 > EPSILON {
            let t0 = CornerTangent::new(inner_start, outer_start, r1, rc1, cw);
            let t1 = CornerTangent::new(outer_end, inner_end, r1, rc1, cw);
            let path = path.m(t0.edge_point());
            if rc1 < rc {
                // Corners merged
                path.arc(t0.center, rc1, t0.edge_angle(), t1.edge_angle(), !cw)
            } else {
                path.arc(t0.center, rc1, t0.edge_angle(), t0.ring_angle(), !cw)
                    .arc(DVec2::ZERO, r1, t0.ring_point_angle(), t1.ring_point_angle(), !cw)
                    .arc(t1.center, rc1, t1.ring_angle(), t1.edge_angle(), !cw)
            }
        } else {
            path.m(outer_start).arc(DVec2::ZERO, r1, a01, a11, !cw)
        };

        if !(r0 > EPSILON) || !(da0 > EPSILON) {
            path = path.l(inner_end);
        } else if rc0 > EPSILON {
            let t0 = CornerTangent::new(inner_end, outer_end, r0, -rc0, cw);
            let t1 = CornerTangent::new(outer_start, inner_start, r0, -rc0, cw);
            path = path.l(t0.edge_point());
            if rc0 < rc {
                path = path.arc(t0.center, rc0, t0.edge_angle(), t1.edge_angle(), !cw);
            } else {
                path = path
                    .arc(t0.center, rc0, t0.edge_angle(), t0.ring_angle(), !cw)
                    .arc(DVec2::ZERO, r0, t0.ring_point_angle(), t1.ring_point_angle(), cw)
                    .arc(t1.center, rc0, t1.ring_angle(), t1.edge_angle(), !cw);
            }
        } else {
            path = path.arc(DVec2::ZERO, r0, a10, a00, cw);
        }
        path
    }
}

fn polar(r: f64, a: f64) -> DVec2 {
    dvec2(r * a.cos(), r * a.sin())
}
