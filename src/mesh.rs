use crate::{
    ball::{FaceKind, SoccerBall},
    subdivide::{seam_normal, subdivide, SeamParams, Triangle},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TessellationConfig {
    /// Uniform subdivision levels per face triangle.
    pub detail_level: i32,
    pub seam: SeamParams,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            detail_level: 5,
            seam: SeamParams::default(),
        }
    }
}

/// Interleaved vertex, ready to be uploaded as raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Zeroable, bytemuck::Pod)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(
        position: impl Into<mint::Vector3<f32>>,
        normal: impl Into<mint::Vector3<f32>>,
    ) -> Self {
        let position: mint::Vector3<f32> = position.into();
        let normal: mint::Vector3<f32> = normal.into();
        Self {
            position: position.into(),
            normal: normal.into(),
        }
    }
}

/// Triangle lists for both kinds of panel, three vertices per triangle.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub pentagons: Vec<Vertex>,
    pub hexagons: Vec<Vertex>,
}

impl Mesh {
    pub fn panel(&self, kind: FaceKind) -> &[Vertex] {
        match kind {
            FaceKind::Pentagon => &self.pentagons,
            FaceKind::Hexagon => &self.hexagons,
        }
    }

    pub fn triangle_count(&self) -> usize {
        (self.pentagons.len() + self.hexagons.len()) / 3
    }
}

impl SoccerBall {
    /// Emits every triangle of the seamed ball.
    ///
    /// Each face is fanned from its center over its perimeter edges, and
    /// every fan triangle is subdivided against the seam of its outer edge.
    pub fn tessellate<F>(&self, config: &TessellationConfig, mut emit: F)
    where
        F: FnMut(FaceKind, &Triangle),
    {
        let config = TessellationConfig {
            seam: config.seam.sanitized(),
            ..*config
        };
        for face in self.faces() {
            let mut sink = |t: &Triangle| emit(face.kind, t);
            for (a, b) in face.edges() {
                subdivide(
                    config.detail_level,
                    face.center,
                    a,
                    b,
                    seam_normal(a, b),
                    &config.seam,
                    &mut sink,
                );
            }
        }
    }

    pub fn to_mesh(&self, config: &TessellationConfig) -> Mesh {
        let mut mesh = Mesh::default();
        self.tessellate(config, |kind, triangle| {
            let list = match kind {
                FaceKind::Pentagon => &mut mesh.pentagons,
                FaceKind::Hexagon => &mut mesh.hexagons,
            };
            let normal = triangle.normal.as_vec3();
            list.extend(
                triangle
                    .vertices
                    .iter()
                    .map(|p| Vertex::new(p.as_vec3(), normal)),
            );
        });
        log::info!(
            "Tessellated at detail {}: {} pentagon and {} hexagon triangles",
            config.detail_level,
            mesh.pentagons.len() / 3,
            mesh.hexagons.len() / 3
        );
        mesh
    }
}
