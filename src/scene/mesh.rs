//! CPU-side mesh construction for the diorama.
//!
//! Everything in the scene is built from three primitive generators (box,
//! cylinder, torus) plus a ground plane, each placed with a `Mat4`
//! transform and flat-colored per vertex. Geometry is generated once at
//! startup and uploaded verbatim; nothing here touches the GPU.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

/// Vertex layout shared by all solid geometry: position, normal, color.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// Growable indexed triangle mesh.
#[derive(Debug, Default, Clone)]
pub struct MeshBuffer {
    /// Vertex data.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_vertex(
        &mut self,
        transform: &Mat4,
        position: Vec3,
        normal: Vec3,
        color: [f32; 3],
    ) -> u32 {
        let index = self.vertices.len() as u32;
        let world = transform.transform_point3(position);
        // Uniform rotations + translations only, so the rotation part is
        // enough for normals.
        let n = transform.transform_vector3(normal).normalize_or_zero();
        self.vertices.push(MeshVertex {
            position: world.to_array(),
            normal: n.to_array(),
            color,
        });
        index
    }

    /// Axis-aligned box of the given full extents, centered at the
    /// transform's origin.
    pub fn push_box(&mut self, transform: Mat4, size: Vec3, color: [f32; 3]) {
        let h = size * 0.5;
        // (normal, two in-plane axes)
        let faces: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::Y, Vec3::X),
        ];
        for (normal, u, v) in faces {
            let origin = normal * (normal.abs().dot(h));
            let eu = u * u.abs().dot(h);
            let ev = v * v.abs().dot(h);
            let a = self.push_vertex(&transform, origin - eu - ev, normal, color);
            let b = self.push_vertex(&transform, origin + eu - ev, normal, color);
            let c = self.push_vertex(&transform, origin + eu + ev, normal, color);
            let d = self.push_vertex(&transform, origin - eu + ev, normal, color);
            self.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    /// Closed cylinder along the local Y axis, centered at the transform's
    /// origin.
    pub fn push_cylinder(
        &mut self,
        transform: Mat4,
        radius: f32,
        height: f32,
        segments: u32,
        color: [f32; 3],
    ) {
        let half = height * 0.5;
        let ring: Vec<(f32, f32)> = (0..segments)
            .map(|i| {
                let theta = i as f32 / segments as f32 * TAU;
                (theta.sin(), theta.cos())
            })
            .collect();

        // Side wall
        let mut side = Vec::with_capacity(segments as usize * 2);
        for &(s, c) in &ring {
            let normal = Vec3::new(s, 0.0, c);
            let top = Vec3::new(radius * s, half, radius * c);
            let bottom = Vec3::new(radius * s, -half, radius * c);
            side.push((
                self.push_vertex(&transform, top, normal, color),
                self.push_vertex(&transform, bottom, normal, color),
            ));
        }
        for i in 0..segments as usize {
            let (t0, b0) = side[i];
            let (t1, b1) = side[(i + 1) % segments as usize];
            self.indices.extend_from_slice(&[t0, b0, b1, t0, b1, t1]);
        }

        // Caps
        for (y, normal) in [(half, Vec3::Y), (-half, Vec3::NEG_Y)] {
            let center =
                self.push_vertex(&transform, Vec3::new(0.0, y, 0.0), normal, color);
            let rim: Vec<u32> = ring
                .iter()
                .map(|&(s, c)| {
                    self.push_vertex(
                        &transform,
                        Vec3::new(radius * s, y, radius * c),
                        normal,
                        color,
                    )
                })
                .collect();
            for i in 0..segments as usize {
                let a = rim[i];
                let b = rim[(i + 1) % segments as usize];
                if y > 0.0 {
                    self.indices.extend_from_slice(&[center, a, b]);
                } else {
                    self.indices.extend_from_slice(&[center, b, a]);
                }
            }
        }
    }

    /// Torus (optionally partial) in the local XY plane, centered at the
    /// transform's origin. `arc` is the swept angle in radians (`TAU` for a
    /// full ring, `PI` for the wash arch).
    pub fn push_torus(
        &mut self,
        transform: Mat4,
        radius: f32,
        tube_radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
        color: [f32; 3],
    ) {
        let closed = (arc - TAU).abs() < 1e-4;
        let rings = tubular_segments + u32::from(!closed);
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(rings as usize);
        for j in 0..rings {
            let u = j as f32 / tubular_segments as f32 * arc;
            let (su, cu) = u.sin_cos();
            let mut row = Vec::with_capacity(radial_segments as usize);
            for i in 0..radial_segments {
                let v = i as f32 / radial_segments as f32 * TAU;
                let (sv, cv) = v.sin_cos();
                let center = Vec3::new(radius * cu, radius * su, 0.0);
                let position = Vec3::new(
                    (radius + tube_radius * cv) * cu,
                    (radius + tube_radius * cv) * su,
                    tube_radius * sv,
                );
                let normal = (position - center).normalize();
                row.push(self.push_vertex(&transform, position, normal, color));
            }
            grid.push(row);
        }
        let seg = radial_segments as usize;
        for j in 0..tubular_segments as usize {
            let next = (j + 1) % rings as usize;
            for i in 0..seg {
                let a = grid[j][i];
                let b = grid[j][(i + 1) % seg];
                let c = grid[next][(i + 1) % seg];
                let d = grid[next][i];
                self.indices.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }
    }

    /// Horizontal rectangle in the XZ plane, facing up, centered at the
    /// transform's origin.
    pub fn push_plane(
        &mut self,
        transform: Mat4,
        width: f32,
        depth: f32,
        color: [f32; 3],
    ) {
        let hw = width * 0.5;
        let hd = depth * 0.5;
        let a = self.push_vertex(
            &transform,
            Vec3::new(-hw, 0.0, -hd),
            Vec3::Y,
            color,
        );
        let b = self.push_vertex(
            &transform,
            Vec3::new(-hw, 0.0, hd),
            Vec3::Y,
            color,
        );
        let c =
            self.push_vertex(&transform, Vec3::new(hw, 0.0, hd), Vec3::Y, color);
        let d = self.push_vertex(
            &transform,
            Vec3::new(hw, 0.0, -hd),
            Vec3::Y,
            color,
        );
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    /// Append another mesh, remapping its indices.
    pub fn extend(&mut self, other: &Self) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}

/// Rotation placing a Y-axis cylinder horizontally along X (pipes, wheels).
#[must_use]
pub fn lay_along_x(translation: Vec3) -> Mat4 {
    Mat4::from_translation(translation) * Mat4::from_rotation_z(PI / 2.0)
}

/// Convert an sRGB hex color (`0xRRGGBB`) to linear RGB.
#[must_use]
pub fn hex_color(hex: u32) -> [f32; 3] {
    let srgb = [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ];
    srgb.map(|c| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_24_vertices_and_12_triangles() {
        let mut mesh = MeshBuffer::new();
        mesh.push_box(Mat4::IDENTITY, Vec3::ONE, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn cylinder_triangle_count() {
        let mut mesh = MeshBuffer::new();
        mesh.push_cylinder(Mat4::IDENTITY, 0.1, 3.2, 24, [1.0; 3]);
        // 24 side quads (2 tris each) + 2 * 24 cap tris
        assert_eq!(mesh.triangle_count(), 24 * 2 + 48);
    }

    #[test]
    fn transform_moves_vertices() {
        let mut mesh = MeshBuffer::new();
        let t = Mat4::from_translation(Vec3::new(0.0, 5.0, 0.0));
        mesh.push_box(t, Vec3::ONE, [1.0; 3]);
        assert!(mesh.vertices.iter().all(|v| v.position[1] >= 4.4));
    }

    #[test]
    fn laid_cylinder_runs_along_x() {
        let mut mesh = MeshBuffer::new();
        mesh.push_cylinder(
            lay_along_x(Vec3::ZERO),
            0.07,
            2.2,
            24,
            [1.0; 3],
        );
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        for v in &mesh.vertices {
            min_x = min_x.min(v.position[0]);
            max_x = max_x.max(v.position[0]);
        }
        assert!((max_x - min_x - 2.2).abs() < 1e-4);
    }

    #[test]
    fn hex_color_endpoints() {
        assert_eq!(hex_color(0x000000), [0.0, 0.0, 0.0]);
        assert_eq!(hex_color(0xffffff), [1.0, 1.0, 1.0]);
    }
}
