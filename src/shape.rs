use crate::{
    error::{GeometryError, Result},
    point::{neighbors, Point3, SpherePoint as _},
};

/// Squared distance below which two icosahedron vertices share an edge.
///
/// Edges are about 1.106 long (squared); the next closest pair is at 2.894.
pub const EDGE_THRESHOLD: f64 = 1.2;

pub const VERTEX_COUNT: usize = 12;
pub const FACE_COUNT: usize = 20;
pub const EDGE_COUNT: usize = 30;
pub const TRISECTION_COUNT: usize = 2 * EDGE_COUNT;

/// Regular icosahedron inscribed in the unit sphere, with a vertex at the
/// north pole.
#[derive(Clone, Debug, PartialEq)]
pub struct Icosahedron {
    pub vertices: [Point3; VERTEX_COUNT],
}

impl Default for Icosahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl Icosahedron {
    pub fn new() -> Self {
        // Pole, then a ring of five at colatitude atan(2), then the antipodes.
        let beta = 2.0f64.atan();
        let mut vertices = [Point3::ZERO; VERTEX_COUNT];
        vertices[0] = Point3::Y;
        for i in 1..=5 {
            let alpha = 0.4 * std::f64::consts::PI * (i - 1) as f64;
            vertices[i] = Point3::new(
                beta.sin() * alpha.cos(),
                beta.cos(),
                beta.sin() * alpha.sin(),
            );
        }
        for i in 6..VERTEX_COUNT {
            vertices[i] = -vertices[i - 6];
        }
        Self { vertices }
    }

    /// Indices of the vertices sharing an edge with vertex `index`; empty for
    /// an index past the last vertex.
    pub fn neighbors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .get(index)
            .into_iter()
            .flat_map(move |&from| neighbors(from, 0, &self.vertices, EDGE_THRESHOLD))
            .filter(move |&i| i != index)
    }

    /// Vertex index pairs `(i, j)` with `i < j` for every edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..VERTEX_COUNT).flat_map(move |i| {
            neighbors(self.vertices[i], i + 1, &self.vertices, EDGE_THRESHOLD).map(move |j| (i, j))
        })
    }

    /// Centers of the 20 triangular faces, projected onto the sphere.
    ///
    /// These become the anchors of the hexagons.
    pub fn face_centers(&self) -> Result<[Point3; FACE_COUNT]> {
        let v = &self.vertices;
        let adjacent = |i: usize, j: usize| v[i].distance_squared(v[j]) < EDGE_THRESHOLD;

        let mut centers = Vec::with_capacity(FACE_COUNT);
        for i in 0..VERTEX_COUNT {
            for j in i + 1..VERTEX_COUNT {
                if !adjacent(i, j) {
                    continue;
                }
                for k in j + 1..VERTEX_COUNT {
                    if adjacent(i, k) && adjacent(j, k) {
                        centers.push((v[i] + v[j] + v[k]).normalize());
                    }
                }
            }
        }

        log::debug!("Found {} icosahedron face centers", centers.len());
        <[Point3; FACE_COUNT]>::try_from(centers)
            .map_err(|centers| GeometryError::FaceCenterCount {
                found: centers.len(),
            })
    }

    /// The two points trisecting every edge, pushed onto the sphere.
    ///
    /// The result is an unordered bag; these are the vertices of the
    /// truncated icosahedron.
    pub fn trisection_points(&self) -> Result<[Point3; TRISECTION_COUNT]> {
        let points = self
            .edges()
            .flat_map(|(i, j)| {
                let (a, b) = (self.vertices[i], self.vertices[j]);
                [a.lerp_on_sphere(b, 1.0 / 3.0), a.lerp_on_sphere(b, 2.0 / 3.0)]
            })
            .collect::<Vec<_>>();

        log::debug!("Found {} edge trisection points", points.len());
        <[Point3; TRISECTION_COUNT]>::try_from(points)
            .map_err(|points| GeometryError::TrisectionCount {
                found: points.len(),
            })
    }
}
