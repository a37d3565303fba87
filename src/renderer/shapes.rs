//! Shape generation for 2D primitives
//!
//! Turns a [`Frame`] into a flat triangle list in screen space, ready to be
//! uploaded by whatever graphics backend hosts the game. Text is passed
//! through as labels; glyph rasterization belongs to the host.

use std::f32::consts::PI;

use glam::Vec2;

use super::draw::{Camera2D, DrawCommand, Frame};
use super::vertex::Vertex;
use crate::sim::Rect;

/// Triangles per coin circle
pub const CIRCLE_SEGMENTS: u32 = 24;

/// A text line in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Tessellated frame
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub clear: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
}

impl Mesh {
    /// Packed vertex data for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Tessellate a frame; world commands go through the camera first
pub fn tessellate(frame: &Frame) -> Mesh {
    let mut mesh = Mesh {
        clear: frame.clear,
        ..Default::default()
    };
    for command in &frame.world {
        push_command(&mut mesh, command, Some(&frame.camera));
    }
    for command in &frame.overlay {
        push_command(&mut mesh, command, None);
    }
    mesh
}

fn push_command(mesh: &mut Mesh, command: &DrawCommand, camera: Option<&Camera2D>) {
    let to_screen = |p: Vec2| camera.map_or(p, |c| c.world_to_screen(p));
    let scale = camera.map_or(1.0, |c| c.zoom);

    match command {
        DrawCommand::Rect { rect, color } => {
            let min = to_screen(rect.position());
            let size = rect.size() * scale;
            mesh.vertices
                .extend(rect_vertices(&Rect::new(min.x, min.y, size.x, size.y), *color));
        }
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => {
            mesh.vertices.extend(circle(
                to_screen(*center),
                radius * scale,
                *color,
                CIRCLE_SEGMENTS,
            ));
        }
        DrawCommand::Text {
            text,
            position,
            size,
            color,
        } => mesh.labels.push(Label {
            text: text.clone(),
            position: to_screen(*position),
            size: size * scale,
            color: *color,
        }),
    }
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect_vertices(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::build_frame;
    use crate::renderer::vertex::colors;
    use crate::sim::GameState;

    #[test]
    fn test_rect_corners() {
        let v = rect_vertices(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::GOAL);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_circle_radius() {
        let center = Vec2::new(5.0, 5.0);
        let vertices = circle(center, 10.0, colors::COIN, 8);
        assert_eq!(vertices.len(), 24);
        for (i, v) in vertices.iter().enumerate() {
            let d = Vec2::from(v.position).distance(center);
            if i % 3 == 0 {
                assert_eq!(d, 0.0);
            } else {
                assert!((d - 10.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_frame_mesh() {
        let state = GameState::new(21);
        let mesh = tessellate(&build_frame(&state));

        let rects = 1 + MAX_PLATFORMS + MAX_OBSTACLES + 4;
        let expected = rects * 6 + MAX_COINS * CIRCLE_SEGMENTS as usize * 3;
        assert_eq!(mesh.vertices.len(), expected);
        assert_eq!(mesh.vertex_bytes().len(), expected * Vertex::STRIDE);
        assert_eq!(mesh.labels.len(), 2);
        assert_eq!(mesh.clear, colors::BACKGROUND);

        // Player is drawn first and sits at the screen center
        let player: Vec<Vec2> = mesh.vertices[..6]
            .iter()
            .map(|v| Vec2::from(v.position))
            .collect();
        assert!(player.contains(&Vec2::new(375.0, 200.0)));
        assert!(player.contains(&Vec2::new(425.0, 250.0)));
    }
}
