use bytemuck::{Pod, Zeroable};

use crate::components::rect::PixelRect;

/// Per-entity draw command handed to the host's sprite batch.
/// 10 floats = 40 bytes stride, so the buffer can be read as a flat `&[f32]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Destination rect, screen pixels.
    pub dst_x: f32,
    pub dst_y: f32,
    pub dst_w: f32,
    pub dst_h: f32,
    /// Source frame rect on the sprite sheet.
    pub src_x: f32,
    pub src_y: f32,
    pub src_w: f32,
    pub src_h: f32,
    /// 1.0 when mirrored horizontally.
    pub flip: f32,
    /// Sprite sheet index.
    pub sheet: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(dst: PixelRect, src: PixelRect, flipped: bool, sheet: u32) -> Self {
        Self {
            dst_x: dst.x as f32,
            dst_y: dst.y as f32,
            dst_w: dst.width as f32,
            dst_h: dst.height as f32,
            src_x: src.x as f32,
            src_y: src.y as f32,
            src_w: src.width as f32,
            src_h: src.height as f32,
            flip: if flipped { 1.0 } else { 0.0 },
            sheet: sheet as f32,
        }
    }
}

/// Render buffer containing all sprite instances plus debug overlays.
pub struct RenderBuffer {
    /// Sprite instances in draw order.
    pub instances: Vec<RenderInstance>,
    /// Collision boxes of entities with `draw_collision` set.
    pub collision_boxes: Vec<PixelRect>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            collision_boxes: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.collision_boxes.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as flat floats for the host.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
