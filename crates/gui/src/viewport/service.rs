//! Contract between the extrusion controller and whatever renders the scene.

use glam::Vec3;
use shared::BoxDimensions;

use super::picking::Plane;
use crate::error::Result;

/// Opaque handle to a mesh owned by the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u64);

/// Index of a quad face on a box mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceId(pub usize);

/// How a mesh is drawn and whether picking sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshStyle {
    /// Opaque, pickable
    Solid,
    /// Translucent, invisible to picking
    Preview,
}

impl MeshStyle {
    pub fn is_pickable(self) -> bool {
        matches!(self, MeshStyle::Solid)
    }
}

/// First surface hit under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub mesh: MeshHandle,
    pub mesh_name: String,
    pub face: FaceId,
    /// World-space hit point
    pub point: Vec3,
    /// Outward normal of the hit face
    pub normal: Vec3,
    pub distance: f32,
}

/// Scene, camera and picking services the controller drives.
pub trait ViewportService {
    /// Ray-cast from a screen position against pickable meshes.
    fn pick(&self, screen_pos: egui::Pos2) -> Option<PickHit>;

    /// Ray-cast from a screen position against an invisible infinite plane.
    fn pick_on_plane(&self, screen_pos: egui::Pos2, plane: &Plane) -> Option<Vec3>;

    /// Direction the camera is looking along.
    fn view_direction(&self) -> Vec3;

    /// Build a box with its minimum corner at the origin.
    fn build_box(&mut self, name: &str, dims: BoxDimensions, style: MeshStyle) -> MeshHandle;

    /// Release a mesh. Disposing an unknown handle is a no-op.
    fn dispose(&mut self, handle: MeshHandle);

    /// Recolor one face of a mesh.
    fn set_face_highlight(&mut self, handle: MeshHandle, face: FaceId, color: [f32; 3]) -> Result<()>;

    /// Viewport area changed (window resize, panel layout).
    fn resize(&mut self, rect: egui::Rect);
}
