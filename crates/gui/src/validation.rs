//! Mesh validation utilities.
//!
//! `MeshValidator` checks box mesh integrity: stride, in-range indices,
//! unit normals, the extent of the box and its corner pinned at the origin.

use glam::Vec3;
use shared::BoxDimensions;

use crate::viewport::mesh::{MeshData, BOX_FACE_COUNT, VERTEX_STRIDE};
use crate::viewport::picking::Aabb;

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / VERTEX_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Check that the vertex buffer length is a multiple of the stride.
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % VERTEX_STRIDE == 0
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// Check that all indices are within the valid vertex range.
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// Check that all vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        (0..self.vertex_count()).all(|i| (self.mesh.normal(i).length() - 1.0).abs() <= epsilon)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Extent of the bounding box (width, height, depth).
    pub fn dimensions(&self) -> [f32; 3] {
        self.aabb().size().to_array()
    }

    /// Check that the extent is approximately equal to `expected`.
    pub fn assert_dimensions_approx(&self, expected: BoxDimensions, tolerance: f32) -> bool {
        self.dimensions()
            .iter()
            .zip(expected.to_array())
            .all(|(got, want)| (*got - want as f32).abs() < tolerance)
    }

    /// Check that the minimum corner sits at the origin.
    pub fn is_origin_anchored(&self, tolerance: f32) -> bool {
        self.aabb().min.abs_diff_eq(Vec3::ZERO, tolerance)
    }

    /// Check that one face carries `color` on all four vertices.
    pub fn is_face_colored(&self, face: usize, color: [f32; 3], tolerance: f32) -> bool {
        if face >= self.mesh.face_count() {
            return false;
        }
        (face * 4..face * 4 + 4).all(|v| {
            let c = self.mesh.color(v);
            c.iter().zip(color).all(|(a, b)| (a - b).abs() < tolerance)
        })
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of {VERTEX_STRIDE}",
                self.mesh.vertices.len()
            ));
            // Every other check reads whole vertices
            return errors;
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={}): {:?}",
                max_idx, out_of_range
            ));
        }

        if self.vertex_count() > 0 && !self.are_normals_normalized(0.1) {
            errors.push("Some normals are not unit-length (epsilon=0.1)".to_string());
        }

        errors
    }

    /// `validate_all` plus the box layout: six quads anchored at the origin.
    pub fn validate_box(&self) -> Vec<String> {
        let mut errors = self.validate_all();
        if !errors.is_empty() {
            return errors;
        }

        if self.mesh.face_count() != BOX_FACE_COUNT || self.triangle_count() != BOX_FACE_COUNT * 2 {
            errors.push(format!(
                "Expected {BOX_FACE_COUNT} faces, got {} vertices / {} triangles",
                self.vertex_count(),
                self.triangle_count()
            ));
        }

        if self.vertex_count() > 0 && !self.is_origin_anchored(1e-5) {
            errors.push(format!("Minimum corner {:?} is not at the origin", self.aabb().min));
        }

        errors
    }
}
