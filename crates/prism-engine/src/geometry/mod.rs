//! Static vertex data and its mapping to shader inputs.

mod binding;
mod buffer;

pub use binding::AttributeBinding;
pub use buffer::VertexBuffer;

/// Name of the position input in the vertex stage.
pub const POSITION_ATTRIBUTE: &str = "aPos";

/// One triangle in clip space: apex, then bottom-left and bottom-right corners.
///
/// Counter-clockwise, so it survives back-face culling.
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 9] = [
     0.0,  0.5, 0.0,
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_literal_is_exact() {
        assert_eq!(
            TRIANGLE_VERTICES,
            [0.0, 0.5, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0]
        );
    }

    #[test]
    fn triangle_bytes_round_trip_unchanged() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 36);

        let back: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &TRIANGLE_VERTICES[..]);
    }

    #[test]
    fn triangle_is_counter_clockwise() {
        let [ax, ay, _, bx, by, _, cx, cy, _] = TRIANGLE_VERTICES;
        let signed_area = (bx - ax) * (cy - ay) - (cx - ax) * (by - ay);
        assert!(signed_area > 0.0);
    }

    #[test]
    fn triangle_matches_binding_stride() {
        assert_eq!(TRIANGLE_VERTICES.len() % AttributeBinding::COMPONENTS, 0);
        assert_eq!(
            TRIANGLE_VERTICES.len() / AttributeBinding::COMPONENTS,
            3
        );
    }
}
