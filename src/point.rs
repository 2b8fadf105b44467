/// Points are plain double precision glam vectors. Construction keeps them on
/// the unit sphere; the seam shrink is the only thing that moves them inside.
pub type Point3 = glam::DVec3;

/// Sphere-oriented helpers on top of the glam vector API.
pub trait SpherePoint: Sized {
    /// Midpoint of the chord, pushed back onto the unit sphere.
    fn midpoint_to(self, other: Self) -> Self;

    /// Point at `fraction` along the chord towards `other`, normalized.
    ///
    /// This is chord interpolation, not a geodesic one: 1/3 of the chord does
    /// not land at 1/3 of the arc.
    fn lerp_on_sphere(self, other: Self, fraction: f64) -> Self;

    /// Angle between this point and the plane with the given unit `normal`.
    fn seam_angle(self, normal: Self) -> f64;

    /// Unit normal of the triangle `(self, b, c)`, oriented away from the
    /// origin.
    fn facet_normal(self, b: Self, c: Self) -> Self;
}

impl SpherePoint for Point3 {
    fn midpoint_to(self, other: Self) -> Self {
        (self + other).normalize()
    }

    fn lerp_on_sphere(self, other: Self, fraction: f64) -> Self {
        self.lerp(other, fraction).normalize()
    }

    fn seam_angle(self, normal: Self) -> f64 {
        self.dot(normal).abs().min(1.0).asin()
    }

    fn facet_normal(self, b: Self, c: Self) -> Self {
        let n = (self - b).cross(self - c).normalize();
        if self.dot(n) < 0.0 {
            -n
        } else {
            n
        }
    }
}

/// Index of the first point in `points[start..]` closer than `threshold`
/// (squared distance) to `from`.
pub(crate) fn find_closest(
    from: Point3,
    start: usize,
    points: &[Point3],
    threshold: f64,
) -> Option<usize> {
    points
        .get(start..)?
        .iter()
        .position(|p| from.distance_squared(*p) < threshold)
        .map(|offset| start + offset)
}

/// All indices at or after `start` whose points are within `threshold` of
/// `from`, in ascending order.
pub(crate) fn neighbors(
    from: Point3,
    start: usize,
    points: &[Point3],
    threshold: f64,
) -> impl Iterator<Item = usize> + '_ {
    std::iter::successors(find_closest(from, start, points, threshold), move |&i| {
        find_closest(from, i + 1, points, threshold)
    })
}
