use crate::math::{self, vec4};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Quad covering a `width` x `height` viewport, counter-clockwise from the bottom-left
/// corner. Texture row 0 ends up at the top of the screen.
pub fn screen_quad(width: u32, height: u32) -> [Vertex; 4] {
    let (w, h) = (width as f32, height as f32);
    let projection = math::pixel_to_clip(w, h);

    let corner = |x: f32, y: f32, u: f32, v: f32| {
        let clip = projection * vec4(x, y, 0.0, 1.0);
        Vertex {
            position: [clip.x, clip.y],
            tex_coords: [u, v],
        }
    };

    [
        corner(0.0, h, 0.0, 1.0),
        corner(w, h, 1.0, 1.0),
        corner(w, 0.0, 1.0, 0.0),
        corner(0.0, 0.0, 0.0, 0.0),
    ]
}
