//! CPU tessellation of viewport primitives into colored triangles.
//!
//! The whole scene is a few hundred triangles per frame (grid lines, traces,
//! wires, bobs), so everything is rebuilt on the CPU each frame and streamed
//! to the GPU in one vertex buffer. One pipeline, one draw call.

use glam::Vec2;

/// A single colored vertex in viewport pixel coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Number of segments used to approximate a circle.
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Frame-local triangle list under construction.
#[derive(Debug, Default)]
pub struct GeometryBuffer {
    vertices: Vec<Vertex>,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Hand the built vertices over to the paint callback, leaving the
    /// buffer empty for the next frame.
    pub fn take(&mut self) -> Vec<Vertex> {
        std::mem::take(&mut self.vertices)
    }

    /// A straight line from `a` to `b` as a quad of the given width.
    /// Degenerate (zero-length) lines are skipped.
    pub fn push_line(&mut self, a: Vec2, b: Vec2, width: f32, color: [f32; 4]) {
        let dir = b - a;
        let len = dir.length();
        if len < 1e-4 {
            return;
        }
        let perp = Vec2::new(-dir.y, dir.x) / len * (width * 0.5);

        let v = |p: Vec2| Vertex {
            position: [p.x, p.y],
            color,
        };
        self.vertices.extend_from_slice(&[
            v(a - perp),
            v(a + perp),
            v(b - perp),
            v(a + perp),
            v(b + perp),
            v(b - perp),
        ]);
    }

    /// A filled circle as a triangle fan around `center`.
    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let v = |p: Vec2| Vertex {
            position: [p.x, p.y],
            color,
        };
        for i in 0..CIRCLE_SEGMENTS {
            let a0 = (i as f32 / CIRCLE_SEGMENTS as f32) * std::f32::consts::TAU;
            let a1 = ((i + 1) as f32 / CIRCLE_SEGMENTS as f32) * std::f32::consts::TAU;
            self.vertices.extend_from_slice(&[
                v(center),
                v(center + radius * Vec2::new(a0.cos(), a0.sin())),
                v(center + radius * Vec2::new(a1.cos(), a1.sin())),
            ]);
        }
    }

    /// Reference grid covering `size` pixels with the given line spacing.
    pub fn push_grid(&mut self, size: Vec2, spacing: f32, color: [f32; 4]) {
        if spacing <= 0.0 {
            return;
        }
        let mut y = 0.0;
        while y <= size.y {
            self.push_line(Vec2::new(0.0, y), Vec2::new(size.x, y), 1.0, color);
            y += spacing;
        }
        let mut x = 0.0;
        while x <= size.x {
            self.push_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), 1.0, color);
            x += spacing;
        }
    }

    /// A polyline through `points` with per-point RGBA. Each segment blends
    /// the alpha of its endpoints and takes the newer point's hue, so traces
    /// fade smoothly toward the tail. Faded segments also draw thinner.
    pub fn push_polyline(&mut self, points: &[(Vec2, [f32; 4])], width: f32) {
        for pair in points.windows(2) {
            let (a, ca) = pair[0];
            let (b, cb) = pair[1];
            let alpha = (ca[3] + cb[3]) * 0.5;
            let color = [cb[0], cb[1], cb[2], alpha];
            self.push_line(a, b, width * (0.5 + 0.5 * alpha), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    #[test]
    fn test_line_is_one_quad() {
        let mut geo = GeometryBuffer::new();
        geo.push_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(geo.len(), 6);

        // A horizontal line of width 2 spans y in [-1, 1]
        let ys: Vec<f32> = geo.vertices().iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| y.abs() <= 1.0 + 1e-6));
        assert!(ys.iter().any(|&y| y > 0.9));
        assert!(ys.iter().any(|&y| y < -0.9));
    }

    #[test]
    fn test_zero_length_line_is_skipped() {
        let mut geo = GeometryBuffer::new();
        geo.push_line(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 2.0, WHITE);
        assert!(geo.is_empty());
    }

    #[test]
    fn test_circle_vertex_count_and_bounds() {
        let mut geo = GeometryBuffer::new();
        geo.push_circle(Vec2::new(100.0, 100.0), 10.0, WHITE);
        assert_eq!(geo.len(), (CIRCLE_SEGMENTS * 3) as usize);

        for v in geo.vertices() {
            let p = Vec2::new(v.position[0], v.position[1]);
            assert!(p.distance(Vec2::new(100.0, 100.0)) <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_grid_line_count() {
        let mut geo = GeometryBuffer::new();
        // 100x50 at spacing 50: horizontals at y=0,50; verticals at x=0,50,100
        geo.push_grid(Vec2::new(100.0, 50.0), 50.0, WHITE);
        assert_eq!(geo.len(), 5 * 6);
    }

    #[test]
    fn test_polyline_blends_alpha() {
        let mut geo = GeometryBuffer::new();
        let points = [
            (Vec2::new(0.0, 0.0), [1.0, 0.0, 0.0, 0.0]),
            (Vec2::new(10.0, 0.0), [0.0, 1.0, 0.0, 1.0]),
        ];
        geo.push_polyline(&points, 2.0);
        assert_eq!(geo.len(), 6);

        let color = geo.vertices()[0].color;
        // Hue of the newer point, averaged alpha
        assert_eq!(color[1], 1.0);
        assert!((color[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_take_leaves_buffer_empty() {
        let mut geo = GeometryBuffer::new();
        geo.push_circle(Vec2::ZERO, 1.0, WHITE);
        let vertices = geo.take();
        assert!(!vertices.is_empty());
        assert!(geo.is_empty());
    }
}
