//! Procedural soccer ball: a truncated icosahedron derived from the
//! icosahedron, tessellated with dented seams along the panel edges.

mod ball;
mod error;
mod mesh;
mod point;
mod shape;
mod subdivide;

pub use ball::{
    assemble_faces, order_perimeter, Face, FaceKind, SoccerBall, PERIMETER_THRESHOLD,
};
pub use error::{GeometryError, Result};
pub use mesh::{Mesh, TessellationConfig, Vertex};
pub use point::{Point3, SpherePoint};
pub use shape::{Icosahedron, EDGE_THRESHOLD};
pub use subdivide::{
    seam_normal, subdivide, Action, Regime, SeamParams, Triangle, MAX_EXTRA_DETAIL,
};
