//! CPU-side scene store backing the [`ViewportService`] contract.
//!
//! Meshes live here keyed by handle; the GL renderer mirrors the store whenever
//! [`SceneViewport::version`] changes.

use std::collections::BTreeMap;

use glam::Vec3;
use shared::BoxDimensions;

use super::camera::ArcBallCamera;
use super::mesh::{self, MeshData};
use super::picking::{pick_triangle, ray_aabb, ray_plane, Aabb, Plane};
use super::service::{FaceId, MeshHandle, MeshStyle, PickHit, ViewportService};
use crate::error::{ExtrudeError, Result};
use crate::state::settings::ViewportSettings;

/// A mesh tracked by the scene
#[derive(Clone, Debug)]
pub struct SceneMesh {
    pub name: String,
    pub data: MeshData,
    pub style: MeshStyle,
    pub aabb: Aabb,
}

/// Colors used when building meshes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePalette {
    pub solid: [f32; 3],
    pub preview: [f32; 3],
    pub preview_alpha: f32,
}

impl Default for ScenePalette {
    fn default() -> Self {
        ScenePalette::from(&ViewportSettings::default())
    }
}

impl From<&ViewportSettings> for ScenePalette {
    fn from(s: &ViewportSettings) -> Self {
        Self {
            solid: rgb_to_f32(s.solid_color),
            preview: rgb_to_f32(s.preview_color),
            preview_alpha: s.preview_alpha,
        }
    }
}

/// Scene viewport: camera, viewport rect and the live mesh store
pub struct SceneViewport {
    pub camera: ArcBallCamera,
    rect: egui::Rect,
    palette: ScenePalette,
    meshes: BTreeMap<MeshHandle, SceneMesh>,
    next_handle: u64,
    /// Monotonically increasing version counter for GPU sync
    version: u64,
}

impl SceneViewport {
    pub fn new(rect: egui::Rect, palette: ScenePalette) -> Self {
        Self {
            camera: ArcBallCamera::new(),
            rect,
            palette,
            meshes: BTreeMap::new(),
            next_handle: 1,
            version: 0,
        }
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    /// Current store version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_palette(&mut self, palette: ScenePalette) {
        self.palette = palette;
    }

    pub fn palette(&self) -> ScenePalette {
        self.palette
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<&SceneMesh> {
        self.meshes.get(&handle)
    }

    pub fn meshes(&self) -> impl Iterator<Item = (MeshHandle, &SceneMesh)> {
        self.meshes.iter().map(|(h, m)| (*h, m))
    }

    /// Number of live meshes, optionally restricted to one style
    pub fn mesh_count(&self, style: Option<MeshStyle>) -> usize {
        self.meshes
            .values()
            .filter(|m| style.is_none_or(|s| m.style == s))
            .count()
    }

    /// Alpha the renderer should use for a mesh style
    pub fn alpha_for(&self, style: MeshStyle) -> f32 {
        match style {
            MeshStyle::Solid => 1.0,
            MeshStyle::Preview => self.palette.preview_alpha,
        }
    }

    /// Snapshot of the store for the paint callback
    pub fn snapshot(&self) -> Vec<(MeshHandle, MeshData, f32)> {
        self.meshes
            .iter()
            .map(|(h, m)| (*h, m.data.clone(), self.alpha_for(m.style)))
            .collect()
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl ViewportService for SceneViewport {
    fn pick(&self, screen_pos: egui::Pos2) -> Option<PickHit> {
        let ray = self.camera.screen_ray(screen_pos, self.rect);
        let mut best: Option<PickHit> = None;

        for (handle, mesh) in &self.meshes {
            if !mesh.style.is_pickable() || ray_aabb(&ray, &mesh.aabb).is_none() {
                continue;
            }
            let Some(hit) = pick_triangle(&ray, &mesh.data) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| hit.distance < b.distance) {
                best = Some(PickHit {
                    mesh: *handle,
                    mesh_name: mesh.name.clone(),
                    face: FaceId(mesh::face_of_triangle(hit.triangle_index)),
                    point: ray.at(hit.distance),
                    normal: hit.normal,
                    distance: hit.distance,
                });
            }
        }

        best
    }

    fn pick_on_plane(&self, screen_pos: egui::Pos2, plane: &Plane) -> Option<Vec3> {
        let ray = self.camera.screen_ray(screen_pos, self.rect);
        ray_plane(&ray, plane).map(|t| ray.at(t))
    }

    fn view_direction(&self) -> Vec3 {
        self.camera.forward()
    }

    fn build_box(&mut self, name: &str, dims: BoxDimensions, style: MeshStyle) -> MeshHandle {
        let color = match style {
            MeshStyle::Solid => self.palette.solid,
            MeshStyle::Preview => self.palette.preview,
        };
        let data = mesh::box_from_origin(dims, color);
        let aabb = Aabb::from_mesh(&data);

        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;
        self.meshes.insert(
            handle,
            SceneMesh {
                name: name.to_string(),
                data,
                style,
                aabb,
            },
        );
        self.bump();
        handle
    }

    fn dispose(&mut self, handle: MeshHandle) {
        if self.meshes.remove(&handle).is_some() {
            self.bump();
        }
    }

    fn set_face_highlight(&mut self, handle: MeshHandle, face: FaceId, color: [f32; 3]) -> Result<()> {
        let mesh = self
            .meshes
            .get_mut(&handle)
            .ok_or(ExtrudeError::UnknownMesh(handle))?;
        if !mesh.data.paint_face(face.0, color) {
            return Err(ExtrudeError::FaceOutOfRange { mesh: handle, face });
        }
        self.bump();
        Ok(())
    }

    fn resize(&mut self, rect: egui::Rect) {
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.rect = rect;
        }
    }
}

fn rgb_to_f32(c: [u8; 3]) -> [f32; 3] {
    [c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> SceneViewport {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0));
        SceneViewport::new(rect, ScenePalette::default())
    }

    #[test]
    fn test_build_and_dispose_bump_version() {
        let mut vp = viewport();
        let v0 = vp.version();
        let h = vp.build_box("box", BoxDimensions::UNIT, MeshStyle::Solid);
        assert!(vp.version() > v0);
        assert_eq!(vp.mesh_count(None), 1);

        let v1 = vp.version();
        vp.dispose(h);
        assert!(vp.version() > v1);
        assert_eq!(vp.mesh_count(None), 0);
    }

    #[test]
    fn test_dispose_unknown_is_noop() {
        let mut vp = viewport();
        let v0 = vp.version();
        vp.dispose(MeshHandle(42));
        assert_eq!(vp.version(), v0);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut vp = viewport();
        let a = vp.build_box("a", BoxDimensions::UNIT, MeshStyle::Solid);
        vp.dispose(a);
        let b = vp.build_box("b", BoxDimensions::UNIT, MeshStyle::Solid);
        assert_ne!(a, b);
    }

    #[test]
    fn test_pick_hits_solid_face() {
        let mut vp = viewport();
        let h = vp.build_box("box", BoxDimensions::UNIT, MeshStyle::Solid);
        let target = Vec3::new(1.0, 0.4, 0.3);
        let screen = vp.camera.project(target, vp.rect()).unwrap();

        let hit = vp.pick(screen).unwrap();
        assert_eq!(hit.mesh, h);
        assert_eq!(hit.mesh_name, "box");
        assert_eq!(hit.normal, Vec3::X);
        assert_eq!(hit.face, FaceId(2));
        assert!((hit.point - target).length() < 1e-3);
    }

    #[test]
    fn test_pick_ignores_preview() {
        let mut vp = viewport();
        vp.build_box("preview", BoxDimensions::UNIT, MeshStyle::Preview);
        let screen = vp.camera.project(Vec3::new(1.0, 0.4, 0.3), vp.rect()).unwrap();
        assert!(vp.pick(screen).is_none());
    }

    #[test]
    fn test_pick_miss_on_empty_space() {
        let mut vp = viewport();
        vp.build_box("box", BoxDimensions::UNIT, MeshStyle::Solid);
        assert!(vp.pick(egui::pos2(5.0, 5.0)).is_none());
    }

    #[test]
    fn test_pick_on_plane_recovers_point() {
        let vp = viewport();
        let plane = Plane::containing_axis(Vec3::new(1.0, 0.4, 0.3), Vec3::X, vp.view_direction());
        let world = Vec3::new(3.0, 0.4, 0.3);
        let screen = vp.camera.project(world, vp.rect()).unwrap();
        let p = vp.pick_on_plane(screen, &plane).unwrap();
        assert!((p - world).length() < 1e-3);
    }

    #[test]
    fn test_face_highlight() {
        let mut vp = viewport();
        let h = vp.build_box("box", BoxDimensions::UNIT, MeshStyle::Solid);
        vp.set_face_highlight(h, FaceId(4), [0.0, 0.0, 1.0]).unwrap();
        let mesh = vp.mesh(h).unwrap();
        assert_eq!(mesh.data.color(16), [0.0, 0.0, 1.0]);
        assert_eq!(mesh.data.color(0), vp.palette().solid);
    }

    #[test]
    fn test_face_highlight_errors() {
        let mut vp = viewport();
        let h = vp.build_box("box", BoxDimensions::UNIT, MeshStyle::Solid);
        assert_eq!(
            vp.set_face_highlight(MeshHandle(999), FaceId(0), [1.0; 3]),
            Err(ExtrudeError::UnknownMesh(MeshHandle(999)))
        );
        assert_eq!(
            vp.set_face_highlight(h, FaceId(7), [1.0; 3]),
            Err(ExtrudeError::FaceOutOfRange { mesh: h, face: FaceId(7) })
        );
    }

    #[test]
    fn test_resize_ignores_empty_rect() {
        let mut vp = viewport();
        let before = vp.rect();
        vp.resize(egui::Rect::NOTHING);
        assert_eq!(vp.rect(), before);

        let bigger = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1600.0, 900.0));
        vp.resize(bigger);
        assert_eq!(vp.rect(), bigger);
    }

    #[test]
    fn test_preview_alpha() {
        let mut vp = viewport();
        vp.build_box("preview", BoxDimensions::UNIT, MeshStyle::Preview);
        let snap = vp.snapshot();
        assert_eq!(snap.len(), 1);
        assert!(snap[0].2 < 1.0);
    }
}
