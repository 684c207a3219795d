use glam::Vec3;
use shared::BoxDimensions;

/// Floats per vertex in [`MeshData::vertices`]
pub const VERTEX_STRIDE: usize = 9;

/// Number of quad faces on a box mesh
pub const BOX_FACE_COUNT: usize = 6;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, vertex: usize) -> Vec3 {
        let base = vertex * VERTEX_STRIDE;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    pub fn normal(&self, vertex: usize) -> Vec3 {
        let base = vertex * VERTEX_STRIDE + 3;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    pub fn color(&self, vertex: usize) -> [f32; 3] {
        let base = vertex * VERTEX_STRIDE + 6;
        [
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        ]
    }

    /// Number of quad faces, assuming the box layout (4 vertices per face)
    pub fn face_count(&self) -> usize {
        self.vertex_count() / 4
    }

    /// Recolor the four vertices of one box face.
    /// Returns false if the face does not exist.
    pub fn paint_face(&mut self, face: usize, color: [f32; 3]) -> bool {
        if face >= self.face_count() {
            return false;
        }
        for vertex in face * 4..face * 4 + 4 {
            let base = vertex * VERTEX_STRIDE + 6;
            self.vertices[base..base + 3].copy_from_slice(&color);
        }
        true
    }
}

/// Box faces are two triangles each, emitted in face order.
pub fn face_of_triangle(triangle_index: usize) -> usize {
    triangle_index / 2
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone, Debug)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

// ── Box generation ───────────────────────────────────────────

/// Build a box spanning [0,w]×[0,h]×[0,d], so one corner sits at the origin.
///
/// Face order is +Z, −Z, +X, −X, +Y, −Y. Face `f` owns vertices `4f..4f+4`
/// and triangles `2f`, `2f+1`.
pub fn box_from_origin(dims: BoxDimensions, color: [f32; 3]) -> MeshData {
    let w = dims.width as f32;
    let h = dims.height as f32;
    let d = dims.depth as f32;

    let faces: [([Vec3; 4], Vec3); BOX_FACE_COUNT] = [
        // Front (+Z)
        ([Vec3::new(0.0, 0.0, d), Vec3::new(w, 0.0, d), Vec3::new(w, h, d), Vec3::new(0.0, h, d)], Vec3::Z),
        // Back (-Z)
        ([Vec3::new(w, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, h, 0.0), Vec3::new(w, h, 0.0)], Vec3::NEG_Z),
        // Right (+X)
        ([Vec3::new(w, 0.0, d), Vec3::new(w, 0.0, 0.0), Vec3::new(w, h, 0.0), Vec3::new(w, h, d)], Vec3::X),
        // Left (-X)
        ([Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, d), Vec3::new(0.0, h, d), Vec3::new(0.0, h, 0.0)], Vec3::NEG_X),
        // Top (+Y)
        ([Vec3::new(0.0, h, d), Vec3::new(w, h, d), Vec3::new(w, h, 0.0), Vec3::new(0.0, h, 0.0)], Vec3::Y),
        // Bottom (-Y)
        ([Vec3::new(0.0, 0.0, 0.0), Vec3::new(w, 0.0, 0.0), Vec3::new(w, 0.0, d), Vec3::new(0.0, 0.0, d)], Vec3::NEG_Y),
    ];

    let mut vertices = Vec::with_capacity(24 * VERTEX_STRIDE);
    let mut indices = Vec::with_capacity(36);

    for (quad, normal) in &faces {
        let base = (vertices.len() / VERTEX_STRIDE) as u32;
        for v in quad {
            push_vert(&mut vertices, *v, *normal, color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

// ── Grid and axes ────────────────────────────────────────────

pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.25_f32, 0.25, 0.25, opacity];
    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        // Line along Z
        push_line_vert(&mut vertices, Vec3::new(f, 0.0, -extent), grid_color);
        push_line_vert(&mut vertices, Vec3::new(f, 0.0, extent), grid_color);
        // Line along X
        push_line_vert(&mut vertices, Vec3::new(-extent, 0.0, f), grid_color);
        push_line_vert(&mut vertices, Vec3::new(extent, 0.0, f), grid_color);
    }

    LineMeshData { vertices }
}

/// Axes viewer: X red, Y green, Z blue, starting at the origin
pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let colored = [
        (Vec3::X, [0.9_f32, 0.2, 0.2, 1.0]),
        (Vec3::Y, [0.2_f32, 0.8, 0.2, 1.0]),
        (Vec3::Z, [0.2_f32, 0.3, 0.9, 1.0]),
    ];

    for (dir, color) in colored {
        push_line_vert(&mut vertices, Vec3::ZERO, color);
        push_line_vert(&mut vertices, dir * length, color);
    }

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, p: Vec3, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

fn push_line_vert(v: &mut Vec<f32>, p: Vec3, c: [f32; 4]) {
    v.extend_from_slice(&[p.x, p.y, p.z, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: [f32; 3] = [0.5, 0.5, 0.5];

    #[test]
    fn test_box_counts() {
        let m = box_from_origin(BoxDimensions::UNIT, GRAY);
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.triangle_count(), 12);
        assert_eq!(m.face_count(), BOX_FACE_COUNT);
    }

    #[test]
    fn test_box_spans_from_origin() {
        let m = box_from_origin(BoxDimensions::new(3.0, 2.0, 0.5), GRAY);
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for i in 0..m.vertex_count() {
            min = min.min(m.position(i));
            max = max.max(m.position(i));
        }
        assert_eq!(min, Vec3::ZERO);
        assert_eq!(max, Vec3::new(3.0, 2.0, 0.5));
    }

    #[test]
    fn test_face_normals_in_order() {
        let m = box_from_origin(BoxDimensions::UNIT, GRAY);
        let expected = [Vec3::Z, Vec3::NEG_Z, Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y];
        assert_eq!(m.face_count(), expected.len());
        for (face, n) in expected.iter().enumerate() {
            for v in face * 4..face * 4 + 4 {
                assert_eq!(m.normal(v), *n);
            }
        }
    }

    #[test]
    fn test_face_vertices_lie_on_face_plane() {
        let m = box_from_origin(BoxDimensions::new(2.0, 3.0, 4.0), GRAY);
        // +X face sits at x = width
        for v in 8..12 {
            assert_eq!(m.position(v).x, 2.0);
        }
        // -Y face sits at y = 0
        for v in 20..24 {
            assert_eq!(m.position(v).y, 0.0);
        }
    }

    #[test]
    fn test_face_of_triangle() {
        assert_eq!(face_of_triangle(0), 0);
        assert_eq!(face_of_triangle(1), 0);
        assert_eq!(face_of_triangle(4), 2);
        assert_eq!(face_of_triangle(11), 5);
    }

    #[test]
    fn test_paint_face_recolors_only_that_face() {
        let mut m = box_from_origin(BoxDimensions::UNIT, GRAY);
        assert!(m.paint_face(2, [0.0, 0.0, 1.0]));
        for v in 0..m.vertex_count() {
            let expected = if (8..12).contains(&v) { [0.0, 0.0, 1.0] } else { GRAY };
            assert_eq!(m.color(v), expected, "vertex {v}");
        }
    }

    #[test]
    fn test_paint_face_out_of_range() {
        let mut m = box_from_origin(BoxDimensions::UNIT, GRAY);
        let before = m.clone();
        assert!(!m.paint_face(6, [1.0, 0.0, 0.0]));
        assert_eq!(m, before);
    }

    #[test]
    fn test_axes_has_three_lines() {
        let a = axes(5.0);
        assert_eq!(a.vertices.len(), 6 * 7);
        // X axis end point
        assert_eq!(&a.vertices[7..10], &[5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_grid_line_count() {
        let g = grid(2, 1.0, 0.5);
        // 5 positions × 2 lines × 2 vertices
        assert_eq!(g.vertices.len() / 7, 20);
    }
}
