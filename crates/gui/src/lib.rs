// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, GL rendering) remain in the binary crate.

pub mod error;
pub mod extrude;
pub mod harness;
pub mod i18n;
pub mod state;
pub mod validation;

/// Viewport types the controller needs (camera, meshes, picking, service contract).
/// Panels, overlays and the GL renderer stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod picking;
    pub mod scene;
    pub mod service;
}
