use wgpu::util::DeviceExt;

/// GPU-resident, immutable vertex data.
///
/// Contents are written once at creation; the buffer has no `COPY_DST` usage,
/// so nothing can modify it afterwards.
pub struct VertexBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    byte_len: u64,
}

impl VertexBuffer {
    /// Uploads `data` as vertices of `components` floats each.
    pub fn upload(device: &wgpu::Device, label: &str, data: &[f32], components: usize) -> Self {
        debug_assert!(components > 0 && data.len() % components == 0);

        let contents: &[u8] = bytemuck::cast_slice(data);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage: wgpu::BufferUsages::VERTEX,
        });

        let vertex_count = (data.len() / components) as u32;
        log::debug!(
            "uploaded vertex buffer `{label}`: {vertex_count} vertices, {} bytes",
            contents.len()
        );

        Self {
            buffer,
            vertex_count,
            byte_len: contents.len() as u64,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }
}
