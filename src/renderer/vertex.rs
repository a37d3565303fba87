//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with screen-space position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a packed buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(245, 245, 245);
    pub const PLAYER: [f32; 4] = rgb(0, 121, 241);
    pub const PLATFORM: [f32; 4] = rgb(0, 228, 48);
    pub const OBSTACLE: [f32; 4] = rgb(230, 41, 55);
    pub const GOAL: [f32; 4] = rgb(255, 203, 0);
    pub const GROUND: [f32; 4] = rgb(76, 63, 47);
    pub const WALL: [f32; 4] = rgb(130, 130, 130);
    pub const COIN: [f32; 4] = rgb(253, 249, 0);
    pub const TEXT: [f32; 4] = rgb(0, 0, 0);
    pub const WIN_TEXT: [f32; 4] = rgb(0, 228, 48);
    pub const LOSE_TEXT: [f32; 4] = rgb(230, 41, 55);
}
