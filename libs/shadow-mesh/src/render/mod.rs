//! Draw submission seam.
//!
//! The device, shaders and stencil state live outside this crate. Meshes and
//! shadow volumes hand their buffers to a [`DrawTarget`] in the vertex layout
//! of [`Vertex`] with 16-bit indices.

use crate::core::ds::Vertex;
use crate::core::vec3::Mat4;

/// Receiver of indexed triangle-list draws.
pub trait DrawTarget {
    /// Sets the model-to-world matrix used by following draws.
    fn set_world_transform(&mut self, world: &Mat4);

    /// Draws an indexed triangle list.
    fn draw_indexed(&mut self, vertices: &[Vertex], indices: &[u16]);
}

/// One recorded draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// World matrix active when the draw was issued.
    pub world: Mat4,
    /// Vertex buffer contents.
    pub vertices: Vec<Vertex>,
    /// Index buffer contents.
    pub indices: Vec<u16>,
}

impl DrawCall {
    /// Vertex buffer as raw bytes, as it would be uploaded.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Headless target that records every draw.
///
/// # Examples
/// ```
/// use shadow_mesh::{primitives::double_rect, render::RecordingTarget, Mat4};
/// let rect = double_rect(1.0, 1.0).unwrap();
/// let mut target = RecordingTarget::default();
/// rect.render(&mut target, &Mat4::IDENTITY);
/// assert_eq!(target.calls().len(), 1);
/// assert_eq!(target.calls()[0].indices.len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    world: Mat4,
    calls: Vec<DrawCall>,
}

impl Default for RecordingTarget {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            calls: Vec::new(),
        }
    }
}

impl RecordingTarget {
    /// Draws recorded so far.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Total triangles across all recorded draws.
    pub fn triangle_count(&self) -> usize {
        self.calls.iter().map(|c| c.indices.len() / 3).sum()
    }

    /// Forgets recorded draws.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawTarget for RecordingTarget {
    fn set_world_transform(&mut self, world: &Mat4) {
        self.world = *world;
    }

    fn draw_indexed(&mut self, vertices: &[Vertex], indices: &[u16]) {
        self.calls.push(DrawCall {
            world: self.world,
            vertices: vertices.to_vec(),
            indices: indices.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests;
