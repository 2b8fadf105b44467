use crate::point::{Point3, SpherePoint as _};

/// Most seam-only refinement levels worth asking for.
pub const MAX_EXTRA_DETAIL: u32 = 2;

/// Shape of the seam groove.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeamParams {
    /// Angular half-width of the seam, also its depth relative to the unit
    /// radius.
    pub radius: f64,
    /// Additional subdivision levels spent only on triangles touching a seam.
    pub extra_detail: u32,
}

impl Default for SeamParams {
    fn default() -> Self {
        Self {
            radius: 0.022,
            extra_detail: 1,
        }
    }
}

impl SeamParams {
    /// Returns the params with `extra_detail` clamped to the supported range,
    /// warning when the clamp kicks in.
    pub fn sanitized(self) -> Self {
        if self.extra_detail > MAX_EXTRA_DETAIL {
            log::warn!(
                "Seam detail {} is too deep, clamping to {}",
                self.extra_detail,
                MAX_EXTRA_DETAIL
            );
        }
        self.clamped()
    }

    fn clamped(self) -> Self {
        Self {
            extra_detail: self.extra_detail.min(MAX_EXTRA_DETAIL),
            ..self
        }
    }

    /// Radial scale for a point `angle` away from the seam plane, or `None`
    /// if the point is outside of the seam.
    ///
    /// The profile is a circular arc: `1 - R` on the seam line, back to 1 at
    /// the seam boundary.
    pub fn shrink(&self, angle: f64) -> Option<f64> {
        let r = self.radius;
        if angle < r {
            let d = angle - r;
            Some(1.0 - r + (r * r - d * d).max(0.0).sqrt())
        } else {
            None
        }
    }
}

/// One output triangle with its flat normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
    pub normal: Point3,
}

/// Where a triangle stands in the recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    /// Uniform refinement with this many levels left. `from_level` never
    /// builds a zero count; `Subdividing(0)` splits once, like
    /// `Subdividing(1)`.
    Subdividing(u32),
    /// Base level reached: this many seam-only levels left before the
    /// shrink gets applied.
    SeamDetail(u32),
}

/// What to do with a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Split into four and continue in the given regime.
    Split(Regime),
    /// Output the triangle.
    Emit { shrink_applied: bool },
}

impl Regime {
    /// Maps a signed detail level to a regime. Levels at or below zero count
    /// down through the seam-only range; anything past the floor is the
    /// floor.
    pub fn from_level(level: i32, extra_detail: u32) -> Self {
        if level > 0 {
            Self::Subdividing(level as u32)
        } else {
            let below = level.unsigned_abs();
            Self::SeamDetail(extra_detail.saturating_sub(below))
        }
    }

    fn next(self, extra_detail: u32) -> Self {
        match self {
            Self::Subdividing(n) if n <= 1 => Self::SeamDetail(extra_detail),
            Self::Subdividing(n) => Self::Subdividing(n - 1),
            Self::SeamDetail(n) => Self::SeamDetail(n.saturating_sub(1)),
        }
    }

    /// Decides the fate of a triangle. `extra_detail` is the seam-only depth
    /// entered once uniform refinement runs out.
    pub fn action(self, near_seam: bool, extra_detail: u32) -> Action {
        match self {
            Self::Subdividing(_) => Action::Split(self.next(extra_detail)),
            Self::SeamDetail(0) => Action::Emit {
                shrink_applied: true,
            },
            Self::SeamDetail(_) if near_seam => Action::Split(self.next(extra_detail)),
            Self::SeamDetail(_) => Action::Emit {
                shrink_applied: false,
            },
        }
    }
}

/// Normal of the plane holding the seam along the face edge `(a, b)`.
pub fn seam_normal(a: Point3, b: Point3) -> Point3 {
    a.cross(b).normalize()
}

/// Recursively splits the triangle `(a, b, c)` and emits the leaves, denting
/// them near the seam plane given by `seam_normal`.
///
/// `level` is the number of uniform splits; triangles touching the seam are
/// refined `params.extra_detail` times more. Detail past
/// [`MAX_EXTRA_DETAIL`] is clamped silently; call [`SeamParams::sanitized`]
/// once up front to get it reported.
pub fn subdivide<F>(
    level: i32,
    a: Point3,
    b: Point3,
    c: Point3,
    seam_normal: Point3,
    params: &SeamParams,
    emit: &mut F,
) where
    F: FnMut(&Triangle),
{
    let params = params.clamped();
    let regime = Regime::from_level(level, params.extra_detail);
    subdivide_in(regime, [a, b, c], seam_normal, &params, emit);
}

fn subdivide_in<F>(
    regime: Regime,
    corners: [Point3; 3],
    seam_normal: Point3,
    params: &SeamParams,
    emit: &mut F,
) where
    F: FnMut(&Triangle),
{
    let shrink = match regime {
        Regime::Subdividing(_) => [None; 3],
        Regime::SeamDetail(_) => corners.map(|p| params.shrink(p.seam_angle(seam_normal))),
    };
    let near_seam = shrink.iter().any(Option::is_some);

    match regime.action(near_seam, params.extra_detail) {
        Action::Split(next) => {
            let [a, b, c] = corners;
            let ab = a.midpoint_to(b);
            let ac = a.midpoint_to(c);
            let bc = b.midpoint_to(c);
            for child in [[a, ab, ac], [b, ab, bc], [c, ac, bc], [ab, ac, bc]] {
                subdivide_in(next, child, seam_normal, params, emit);
            }
        }
        Action::Emit { shrink_applied } => {
            let mut vertices = corners;
            if shrink_applied {
                for (v, coef) in vertices.iter_mut().zip(shrink) {
                    *v *= coef.unwrap_or(1.0);
                }
            }
            let [a, b, c] = vertices;
            emit(&Triangle {
                vertices,
                normal: a.facet_normal(b, c),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn collect(level: i32, corners: [Point3; 3], normal: Point3, params: &SeamParams) -> Vec<Triangle> {
        let mut out = Vec::new();
        let [a, b, c] = corners;
        subdivide(level, a, b, c, normal, params, &mut |t: &Triangle| out.push(*t));
        out
    }

    fn polar_triangle() -> [Point3; 3] {
        [
            Point3::new(0.0, 1.0, 0.1).normalize(),
            Point3::new(0.1, 1.0, -0.1).normalize(),
            Point3::new(-0.1, 1.0, -0.1).normalize(),
        ]
    }

    #[test]
    fn regime_from_level() {
        assert_eq!(Regime::from_level(5, 1), Regime::Subdividing(5));
        assert_eq!(Regime::from_level(0, 1), Regime::SeamDetail(1));
        assert_eq!(Regime::from_level(-1, 1), Regime::SeamDetail(0));
        assert_eq!(Regime::from_level(-7, 2), Regime::SeamDetail(0));
        assert_eq!(Regime::from_level(0, 0), Regime::SeamDetail(0));
    }

    #[test]
    fn subdividing_ignores_seam() {
        for near in [false, true] {
            assert_eq!(
                Regime::Subdividing(2).action(near, 1),
                Action::Split(Regime::Subdividing(1))
            );
            assert_eq!(
                Regime::Subdividing(1).action(near, 2),
                Action::Split(Regime::SeamDetail(2))
            );
        }
    }

    #[test]
    fn zero_uniform_levels_split_once() {
        assert_eq!(
            Regime::Subdividing(0).action(false, 1),
            Action::Split(Regime::SeamDetail(1))
        );
    }

    #[test]
    fn deep_seam_detail_is_clamped() {
        let center = Point3::Y;
        let a = Point3::new(0.3, 1.0, 0.0).normalize();
        let b = Point3::new(0.0, 1.0, 0.3).normalize();
        let normal = seam_normal(a, b);
        let deep = SeamParams {
            extra_detail: 9,
            ..SeamParams::default()
        };
        let max = SeamParams {
            extra_detail: MAX_EXTRA_DETAIL,
            ..deep
        };
        let out = collect(1, [center, a, b], normal, &deep);
        assert_eq!(out, collect(1, [center, a, b], normal, &max));
        assert_eq!(deep.clamped(), max);
    }

    #[test]
    fn seam_detail_splits_only_near_seam() {
        assert_eq!(
            Regime::SeamDetail(1).action(true, 1),
            Action::Split(Regime::SeamDetail(0))
        );
        assert_eq!(
            Regime::SeamDetail(1).action(false, 1),
            Action::Emit {
                shrink_applied: false
            }
        );
        for near in [false, true] {
            assert_eq!(
                Regime::SeamDetail(0).action(near, 1),
                Action::Emit {
                    shrink_applied: true
                }
            );
        }
    }

    #[test]
    fn shrink_profile() {
        let params = SeamParams::default();
        let r = params.radius;
        assert_abs_diff_eq!(params.shrink(0.0).unwrap(), 1.0 - r, epsilon = 1e-15);
        assert_eq!(params.shrink(r), None);
        assert_eq!(params.shrink(0.5), None);
        let mut prev = 0.0;
        for i in 0..100 {
            let coef = params.shrink(r * i as f64 / 100.0).unwrap();
            assert!(coef.is_finite());
            assert!(coef >= prev && coef <= 1.0, "step {}: {}", i, coef);
            prev = coef;
        }
        assert!(prev > 1.0 - r / 2.0);
    }

    #[test]
    fn sanitized_clamps_detail() {
        let params = SeamParams {
            radius: 0.01,
            extra_detail: 9,
        };
        assert_eq!(params.sanitized().extra_detail, MAX_EXTRA_DETAIL);
        assert_eq!(params.sanitized().radius, 0.01);
    }

    #[test]
    fn leaf_away_from_seam_is_emitted_as_is() {
        let corners = polar_triangle();
        let [a, b, c] = corners;
        let own_normal = (b - a).cross(c - a).normalize();
        let out = collect(0, corners, own_normal, &SeamParams::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].vertices, corners);
        assert!(out[0].normal.abs_diff_eq(own_normal, 1e-12));
        assert!(out[0].normal.dot(a) > 0.0);
    }

    #[test]
    fn uniform_split_counts() {
        let corners = polar_triangle();
        for (level, count) in [(1, 4), (2, 16), (3, 64)] {
            assert_eq!(collect(level, corners, Point3::Y, &SeamParams::default()).len(), count);
        }
        let out = collect(2, corners, Point3::Y, &SeamParams::default());
        for t in out.iter() {
            for v in t.vertices.iter() {
                assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn seam_edge_gets_extra_detail_and_dent() {
        let center = Point3::Y;
        let a = Point3::new(0.3, 1.0, 0.0).normalize();
        let b = Point3::new(0.0, 1.0, 0.3).normalize();
        let normal = seam_normal(a, b);
        let params = SeamParams::default();

        let out = collect(0, [center, a, b], normal, &params);
        assert_eq!(out.len(), 4);
        let min_len = out
            .iter()
            .flat_map(|t| t.vertices.iter())
            .map(|v| v.length())
            .fold(f64::INFINITY, f64::min);
        assert_abs_diff_eq!(min_len, 1.0 - params.radius, epsilon = 1e-6);
        // the center is far away from the seam and stays put
        assert!(out.iter().any(|t| t.vertices.contains(&center)));

        let flat = SeamParams {
            extra_detail: 0,
            ..params
        };
        let out = collect(0, [center, a, b], normal, &flat);
        assert_eq!(out.len(), 1);
        assert_abs_diff_eq!(out[0].vertices[1].length(), 1.0 - params.radius, epsilon = 1e-6);
        assert_eq!(out[0].vertices[0], center);
    }
}
