use crate::{
    error::{GeometryError, Result},
    point::Point3,
    shape::{Icosahedron, FACE_COUNT, VERTEX_COUNT},
};

/// Squared distance below which a trisection point belongs to the face
/// anchored at a given point.
pub const PERIMETER_THRESHOLD: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceKind {
    /// Anchored at an icosahedron vertex.
    Pentagon,
    /// Anchored at an icosahedron face center.
    Hexagon,
}

impl FaceKind {
    pub fn corner_count(self) -> usize {
        match self {
            Self::Pentagon => 5,
            Self::Hexagon => 6,
        }
    }

    /// Squared distance below which two perimeter points of this kind of
    /// face are consecutive corners.
    pub fn adjacency_threshold(self) -> f64 {
        match self {
            Self::Pentagon => 0.4,
            Self::Hexagon => 0.2,
        }
    }
}

/// A panel of the ball.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    /// Centroid on the unit sphere.
    pub center: Point3,
    /// Corners in perimeter order; the last one connects back to the first.
    pub ordered_vertices: Vec<Point3>,
}

impl Face {
    /// Perimeter edges, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        let n = self.ordered_vertices.len();
        (0..n).map(move |i| (self.ordered_vertices[i], self.ordered_vertices[(i + 1) % n]))
    }
}

/// Truncated icosahedron: 12 pentagons and 20 hexagons.
#[derive(Clone, Debug, PartialEq)]
pub struct SoccerBall {
    pub pentagons: Vec<Face>,
    pub hexagons: Vec<Face>,
}

impl SoccerBall {
    /// Derives the whole ball from the icosahedron. Always produces the same
    /// result.
    pub fn build() -> Result<Self> {
        let ico = Icosahedron::new();
        let centers = ico.face_centers()?;
        let corners = ico.trisection_points()?;

        let pentagons = assemble_faces(FaceKind::Pentagon, &ico.vertices, &corners)?;
        let hexagons = assemble_faces(FaceKind::Hexagon, &centers, &corners)?;
        log::info!(
            "Built soccer ball: {} pentagons, {} hexagons, {} corners",
            pentagons.len(),
            hexagons.len(),
            corners.len()
        );
        debug_assert_eq!(pentagons.len(), VERTEX_COUNT);
        debug_assert_eq!(hexagons.len(), FACE_COUNT);

        Ok(Self {
            pentagons,
            hexagons,
        })
    }

    /// All faces, pentagons first.
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.pentagons.iter().chain(self.hexagons.iter())
    }
}

/// Builds one face of `kind` around each anchor.
pub fn assemble_faces(kind: FaceKind, anchors: &[Point3], corners: &[Point3]) -> Result<Vec<Face>> {
    anchors
        .iter()
        .enumerate()
        .map(|(index, &center)| {
            let mut perimeter = corners
                .iter()
                .copied()
                .filter(|p| center.distance_squared(*p) < PERIMETER_THRESHOLD)
                .collect::<Vec<_>>();
            if perimeter.len() != kind.corner_count() {
                return Err(GeometryError::PerimeterCount {
                    kind,
                    anchor: index,
                    found: perimeter.len(),
                });
            }

            let threshold = kind.adjacency_threshold();
            order_perimeter(&mut perimeter, threshold);
            if let Some(position) = find_gap(&perimeter, threshold) {
                return Err(GeometryError::OpenPerimeter {
                    kind,
                    anchor: index,
                    position,
                });
            }

            log::debug!("{:?} #{} centered at {:?}", kind, index, center);
            Ok(Face {
                kind,
                center,
                ordered_vertices: perimeter,
            })
        })
        .collect()
}

/// Greedily reorders `points` so consecutive ones are within `threshold`.
///
/// Whenever the successor of a point is too far away, the first later point
/// that is close enough is swapped into its place.
pub fn order_perimeter(points: &mut [Point3], threshold: f64) {
    for cnt in 0..points.len().saturating_sub(1) {
        let anchor = points[cnt];
        if anchor.distance_squared(points[cnt + 1]) <= threshold {
            continue;
        }
        let found = points[cnt + 2..]
            .iter()
            .position(|p| anchor.distance_squared(*p) <= threshold);
        if let Some(offset) = found {
            points.swap(cnt + 1, cnt + 2 + offset);
        }
    }
}

/// Position `i` of the first pair `(i, i + 1)`, taken cyclically, that is
/// farther apart than `threshold`.
fn find_gap(points: &[Point3], threshold: f64) -> Option<usize> {
    let n = points.len();
    (0..n).find(|&i| points[i].distance_squared(points[(i + 1) % n]) > threshold)
}
