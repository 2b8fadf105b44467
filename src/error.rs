use crate::FaceKind;

/// Failures of the geometry construction.
///
/// Each variant means the adjacency tolerances no longer match the
/// icosahedron metrics, so the mesh would come out broken.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("expected 20 icosahedron face centers, found {found}")]
    FaceCenterCount { found: usize },

    #[error("expected 60 edge trisection points, found {found}")]
    TrisectionCount { found: usize },

    #[error("{kind:?} anchored at #{anchor} collected {found} perimeter points, expected {}", .kind.corner_count())]
    PerimeterCount {
        kind: FaceKind,
        anchor: usize,
        found: usize,
    },

    #[error("{kind:?} anchored at #{anchor} is not a closed cycle after reordering (gap after position {position})")]
    OpenPerimeter {
        kind: FaceKind,
        anchor: usize,
        position: usize,
    },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
