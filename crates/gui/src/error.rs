//! Error types for the extrusion tool.

use thiserror::Error;

use crate::viewport::service::{FaceId, MeshHandle};

/// The main error type for extrusion operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtrudeError {
    /// The picked face normal is not aligned with exactly one axis.
    #[error("face normal {0:?} is not aligned with a single axis")]
    ObliqueFaceNormal([f32; 3]),

    /// A preview or commit was requested while no face is armed.
    #[error("no face is selected")]
    NoFaceSelected,

    /// The mesh handle is not (or no longer) tracked by the viewport.
    #[error("mesh {0:?} not found")]
    UnknownMesh(MeshHandle),

    /// The face index does not exist on the mesh.
    #[error("face {face:?} out of range for mesh {mesh:?}")]
    FaceOutOfRange { mesh: MeshHandle, face: FaceId },

    /// A dimension that can never be clamped into a valid box.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
}

/// A specialized Result type for extrusion operations.
pub type Result<T> = std::result::Result<T, ExtrudeError>;
