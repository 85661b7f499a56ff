use crate::shader::{LinkedProgram, ProgramError};

/// How the bytes of a vertex buffer map to a named vertex input.
///
/// Positions are 3 × `f32`, not normalized, tightly packed, starting at offset 0.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBinding {
    name: String,
    attributes: [wgpu::VertexAttribute; 1],
}

impl AttributeBinding {
    pub const FORMAT: wgpu::VertexFormat = wgpu::VertexFormat::Float32x3;
    pub const COMPONENTS: usize = 3;

    /// Tightly packed stride: one position per vertex, no gap.
    pub const STRIDE: wgpu::BufferAddress = Self::FORMAT.size();

    /// Binds the vertex input `name` of `program`.
    ///
    /// A program without such an input cannot draw this geometry, so a missing
    /// name is an error rather than a silent no-op.
    pub fn resolve(program: &LinkedProgram, name: &str) -> Result<Self, ProgramError> {
        let location = program.attribute_location(name).ok_or_else(|| {
            log::error!("program has no vertex input named `{name}`");
            ProgramError::MissingAttribute(name.to_string())
        })?;

        Ok(Self::at_location(name, location))
    }

    pub fn at_location(name: &str, location: u32) -> Self {
        Self {
            name: name.to_string(),
            attributes: [wgpu::VertexAttribute {
                format: Self::FORMAT,
                offset: 0,
                shader_location: location,
            }],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> u32 {
        self.attributes[0].shader_location
    }

    pub fn layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{compile, link, StageKind, TRIANGLE_FRAGMENT_WGSL, TRIANGLE_VERTEX_WGSL};

    fn triangle_program() -> LinkedProgram {
        link(
            compile(StageKind::Vertex, "triangle.vert", TRIANGLE_VERTEX_WGSL),
            compile(StageKind::Fragment, "triangle.frag", TRIANGLE_FRAGMENT_WGSL),
        )
        .unwrap()
    }

    #[test]
    fn resolves_position_input() {
        let binding = AttributeBinding::resolve(&triangle_program(), "aPos").unwrap();
        assert_eq!(binding.name(), "aPos");
        assert_eq!(binding.location(), 0);
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = AttributeBinding::resolve(&triangle_program(), "aColor").unwrap_err();
        assert!(matches!(err, ProgramError::MissingAttribute(name) if name == "aColor"));
    }

    #[test]
    fn layout_is_tightly_packed_float3() {
        let binding = AttributeBinding::at_location("aPos", 0);
        let layout = binding.layout();

        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].shader_location, 0);
    }
}
