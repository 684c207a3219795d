//! Face-drag extrusion state machine.
//!
//! The controller owns its viewport and goes through two modes:
//! [`InteractionMode::Idle`] waits for a click on the solid, and
//! [`InteractionMode::FaceSelected`] previews every frame until the next click
//! commits the dragged dimension.

use glam::Vec3;
use shared::{Axis, BoxDimensions};
use tracing::{debug, info, warn};

use crate::error::{ExtrudeError, Result};
use crate::extrude::{axis_vector, extruded_dimensions, face_axis, validate_min_dimension};
use crate::state::settings::{CommitMissPolicy, ExtrusionSettings};
use crate::viewport::picking::Plane;
use crate::viewport::service::{FaceId, MeshHandle, MeshStyle, PickHit, ViewportService};

/// Mesh name of the committed solid
pub const SOLID_NAME: &str = "box";
/// Mesh name of the translucent preview
pub const PREVIEW_NAME: &str = "box-preview";

/// The face armed for extrusion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedFace {
    pub face: FaceId,
    pub normal: Vec3,
    pub axis: Axis,
    /// World point where the face was picked
    pub anchor: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    FaceSelected(SelectedFace),
}

/// Result of a pointer click
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Nothing under the pointer, or not the solid
    Ignored,
    /// A face was armed
    FaceSelected(Axis),
    /// The face could not be armed
    Rejected(ExtrudeError),
    /// A new dimension was committed
    Committed(BoxDimensions),
    /// Commit click missed the picking plane; the selection stays
    Missed,
    /// Commit click missed the picking plane and the selection was dropped
    Cancelled,
}

/// Result of a key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    Ignored,
    Reset(BoxDimensions),
    Cancelled,
}

pub struct ExtrusionController<V: ViewportService> {
    viewport: V,
    settings: ExtrusionSettings,
    committed: BoxDimensions,
    mode: InteractionMode,
    solid: MeshHandle,
    preview: Option<MeshHandle>,
    /// Every mesh the controller has built and not yet disposed
    live: Vec<MeshHandle>,
    last_projection: Option<Vec3>,
    last_preview: Option<BoxDimensions>,
}

impl<V: ViewportService> ExtrusionController<V> {
    /// Take ownership of the viewport and build the initial solid.
    pub fn new(mut viewport: V, settings: ExtrusionSettings, initial: BoxDimensions) -> Self {
        let settings = sanitize(settings);
        let committed = initial.clamped(settings.min_dimension);
        let solid = viewport.build_box(SOLID_NAME, committed, MeshStyle::Solid);
        info!(
            "Initial box {:.3} x {:.3} x {:.3}",
            committed.width, committed.height, committed.depth
        );
        Self {
            viewport,
            settings,
            committed,
            mode: InteractionMode::Idle,
            solid,
            preview: None,
            live: vec![solid],
            last_projection: None,
            last_preview: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn settings(&self) -> &ExtrusionSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ExtrusionSettings) {
        self.settings = sanitize(settings);
    }

    pub fn committed(&self) -> BoxDimensions {
        self.committed
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn selected_face(&self) -> Option<&SelectedFace> {
        match &self.mode {
            InteractionMode::FaceSelected(sel) => Some(sel),
            InteractionMode::Idle => None,
        }
    }

    pub fn is_face_selected(&self) -> bool {
        self.selected_face().is_some()
    }

    /// The preview loop runs for as long as a face is armed
    pub fn is_previewing(&self) -> bool {
        self.is_face_selected()
    }

    pub fn solid(&self) -> MeshHandle {
        self.solid
    }

    pub fn preview(&self) -> Option<MeshHandle> {
        self.preview
    }

    /// Dimensions shown by the current preview
    pub fn preview_dimensions(&self) -> Option<BoxDimensions> {
        self.last_preview
    }

    pub fn live_meshes(&self) -> &[MeshHandle] {
        &self.live
    }

    /// Plane the pointer is projected onto while a face is armed.
    ///
    /// It contains the face's centre line along the dragged axis, so the two
    /// other coordinates sit at the middle of the box (`y = h/2, z = d/2` for
    /// ±X). Rebuilt from the current view direction on every call.
    pub fn picking_plane(&self) -> Option<Plane> {
        let sel = self.selected_face()?;
        Some(Plane::containing_axis(
            face_centre_line_point(self.committed, sel),
            axis_vector(sel.axis),
            self.viewport.view_direction(),
        ))
    }

    // ── Operations ────────────────────────────────────────────

    /// Arm the picked face. Oblique normals are rejected and the mode is unchanged.
    pub fn select_face(&mut self, hit: &PickHit) -> Result<Axis> {
        if hit.mesh != self.solid {
            return Err(ExtrudeError::UnknownMesh(hit.mesh));
        }
        let axis = face_axis(hit.normal)?;

        // Face ids survive a rebuild, so the solid can be redrawn to clear the old highlight
        if self.is_face_selected() {
            self.mode = InteractionMode::Idle;
            self.draw();
        }

        self.viewport
            .set_face_highlight(self.solid, hit.face, self.settings.highlight_rgb())?;
        self.mode = InteractionMode::FaceSelected(SelectedFace {
            face: hit.face,
            normal: hit.normal,
            axis,
            anchor: hit.point,
        });
        self.last_projection = None;
        self.last_preview = None;

        debug!(
            "Selected face {:?} of '{}' (normal {:?}), dragging {}",
            hit.face,
            hit.mesh_name,
            hit.normal,
            axis.dimension_name()
        );
        Ok(axis)
    }

    /// Replace the preview with one sized to the pointer projection.
    pub fn preview_tick(&mut self, projection: Vec3) -> Result<BoxDimensions> {
        let axis = self.selected_face().ok_or(ExtrudeError::NoFaceSelected)?.axis;
        let dims = extruded_dimensions(
            self.committed,
            axis,
            projection,
            self.settings.min_dimension,
        );

        if let Some(old) = self.preview.take() {
            self.release(old);
        }
        let handle = self.viewport.build_box(PREVIEW_NAME, dims, MeshStyle::Preview);
        self.preview = Some(handle);
        self.live.push(handle);
        self.last_projection = Some(projection);
        self.last_preview = Some(dims);

        debug!("Preview {} = {:.3}", axis.dimension_name(), dims.get(axis));
        Ok(dims)
    }

    /// Write the dragged dimension into the committed state and rebuild.
    pub fn commit(&mut self, projection: Vec3) -> Result<BoxDimensions> {
        let axis = self.selected_face().ok_or(ExtrudeError::NoFaceSelected)?.axis;
        let dims = extruded_dimensions(
            self.committed,
            axis,
            projection,
            self.settings.min_dimension,
        );

        self.committed = dims;
        self.mode = InteractionMode::Idle;
        self.draw();

        info!(
            "Committed {} = {:.3}; box {:.3} x {:.3} x {:.3}",
            axis.dimension_name(),
            dims.get(axis),
            dims.width,
            dims.height,
            dims.depth
        );
        Ok(dims)
    }

    /// Back to the unit cube. An armed face is dropped first.
    pub fn reset(&mut self) -> BoxDimensions {
        if self.is_face_selected() {
            debug!("Reset cancels the current selection");
        }
        self.mode = InteractionMode::Idle;
        self.committed = BoxDimensions::UNIT.clamped(self.settings.min_dimension);
        self.draw();
        info!("Reset box to unit cube");
        self.committed
    }

    /// Drop the armed face without committing. Returns false when already idle.
    pub fn cancel(&mut self) -> bool {
        if !self.is_face_selected() {
            return false;
        }
        self.mode = InteractionMode::Idle;
        self.draw();
        info!("Selection cancelled");
        true
    }

    // ── Event entry points ────────────────────────────────────

    pub fn on_pointer_click(&mut self, screen_pos: egui::Pos2) -> ClickOutcome {
        if !self.is_face_selected() {
            let Some(hit) = self.viewport.pick(screen_pos) else {
                return ClickOutcome::Ignored;
            };
            if hit.mesh != self.solid {
                return ClickOutcome::Ignored;
            }
            return match self.select_face(&hit) {
                Ok(axis) => ClickOutcome::FaceSelected(axis),
                Err(e) => {
                    warn!("Cannot select face: {e}");
                    ClickOutcome::Rejected(e)
                }
            };
        }

        let projection = match self.project_pointer(screen_pos) {
            Some(p) => p,
            None => match (self.settings.commit_miss, self.last_projection) {
                (CommitMissPolicy::ReuseLastPreview, Some(p)) => {
                    warn!("Commit click missed the picking plane; reusing last preview");
                    p
                }
                (CommitMissPolicy::CancelSelection, _) => {
                    warn!("Commit click missed the picking plane; cancelling");
                    self.cancel();
                    return ClickOutcome::Cancelled;
                }
                _ => {
                    warn!("Commit click missed the picking plane; keeping selection");
                    return ClickOutcome::Missed;
                }
            },
        };

        match self.commit(projection) {
            Ok(dims) => ClickOutcome::Committed(dims),
            Err(e) => ClickOutcome::Rejected(e),
        }
    }

    /// Preview tick for this frame. Returns the preview dimensions when one was built.
    pub fn on_frame(&mut self, pointer: Option<egui::Pos2>) -> Option<BoxDimensions> {
        if !self.is_previewing() {
            return None;
        }
        let projection = self.project_pointer(pointer?)?;
        self.preview_tick(projection).ok()
    }

    pub fn on_key_down(&mut self, key: egui::Key) -> KeyOutcome {
        match key {
            egui::Key::R => KeyOutcome::Reset(self.reset()),
            egui::Key::Escape => {
                if self.cancel() {
                    KeyOutcome::Cancelled
                } else {
                    KeyOutcome::Ignored
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }

    // ── Internals ─────────────────────────────────────────────

    fn project_pointer(&self, screen_pos: egui::Pos2) -> Option<Vec3> {
        let plane = self.picking_plane()?;
        self.viewport.pick_on_plane(screen_pos, &plane)
    }

    fn release(&mut self, handle: MeshHandle) {
        self.viewport.dispose(handle);
        self.live.retain(|h| *h != handle);
    }

    /// Dispose every tracked mesh, preview included, then build the committed solid.
    fn draw(&mut self) {
        for handle in self.live.drain(..) {
            self.viewport.dispose(handle);
        }
        self.preview = None;
        self.last_projection = None;
        self.last_preview = None;

        self.solid = self
            .viewport
            .build_box(SOLID_NAME, self.committed, MeshStyle::Solid);
        self.live.push(self.solid);
    }
}

fn sanitize(mut settings: ExtrusionSettings) -> ExtrusionSettings {
    if let Err(e) = validate_min_dimension(settings.min_dimension) {
        let fallback = ExtrusionSettings::default().min_dimension;
        warn!("{e}; using {fallback}");
        settings.min_dimension = fallback;
    }
    settings
}

/// Point on the selected face's centre line: the box centre, moved onto the face plane
fn face_centre_line_point(dims: BoxDimensions, sel: &SelectedFace) -> Vec3 {
    let [x, y, z] = dims.center();
    let mut point = Vec3::new(x as f32, y as f32, z as f32);
    point[sel.axis.index()] = sel.anchor[sel.axis.index()];
    point
}
