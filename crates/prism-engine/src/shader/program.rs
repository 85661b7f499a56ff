use super::{CompiledStage, ProgramError, ShaderError, StageKind};

/// A vertex and fragment stage whose interfaces have been checked against each other.
#[derive(Debug, Clone)]
pub struct LinkedProgram {
    vertex: CompiledStage,
    fragment: CompiledStage,
}

impl LinkedProgram {
    pub fn vertex(&self) -> &CompiledStage {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledStage {
        &self.fragment
    }

    /// Location of the vertex input called `name`, if the vertex stage declares one.
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.vertex
            .interface()
            .inputs
            .iter()
            .find(|slot| slot.name.as_deref() == Some(name))
            .map(|slot| slot.location)
    }
}

/// Links two compile results into a program.
///
/// Both stages must have compiled; otherwise nothing is linked and every
/// stage failure is returned together. Link diagnostics are logged.
pub fn link(
    vertex: Result<CompiledStage, ShaderError>,
    fragment: Result<CompiledStage, ShaderError>,
) -> Result<LinkedProgram, ProgramError> {
    let result = match (vertex, fragment) {
        (Ok(vertex), Ok(fragment)) => check_interfaces(&vertex, &fragment)
            .map(|()| LinkedProgram { vertex, fragment })
            .map_err(ProgramError::Interface),
        (vertex, fragment) => Err(ProgramError::Stage {
            failures: [vertex.err(), fragment.err()].into_iter().flatten().collect(),
        }),
    };

    match &result {
        Ok(program) => log::info!(
            "linked program `{}` + `{}`",
            program.vertex.label(),
            program.fragment.label()
        ),
        Err(err) => log::error!("program error: {err}"),
    }
    result
}

fn check_interfaces(vertex: &CompiledStage, fragment: &CompiledStage) -> Result<(), String> {
    if vertex.kind() != StageKind::Vertex {
        return Err(format!("`{}` is not a vertex stage", vertex.label()));
    }
    if fragment.kind() != StageKind::Fragment {
        return Err(format!("`{}` is not a fragment stage", fragment.label()));
    }

    let produced = &vertex.interface().outputs;
    let consumed = fragment.interface();

    if !vertex.interface().writes_position {
        return Err(format!(
            "vertex stage `{}` does not write @builtin(position)",
            vertex.label()
        ));
    }

    for input in &consumed.inputs {
        if !produced.iter().any(|out| out.location == input.location) {
            return Err(format!(
                "fragment input @location({}) is not written by vertex stage `{}`",
                input.location,
                vertex.label()
            ));
        }
    }

    if !consumed.outputs.iter().any(|out| out.location == 0) {
        return Err(format!(
            "fragment stage `{}` does not write @location(0)",
            fragment.label()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{compile, TRIANGLE_FRAGMENT_WGSL, TRIANGLE_VERTEX_WGSL};

    fn triangle_vertex() -> Result<CompiledStage, ShaderError> {
        compile(StageKind::Vertex, "triangle.vert", TRIANGLE_VERTEX_WGSL)
    }

    fn triangle_fragment() -> Result<CompiledStage, ShaderError> {
        compile(StageKind::Fragment, "triangle.frag", TRIANGLE_FRAGMENT_WGSL)
    }

    fn broken(kind: StageKind) -> Result<CompiledStage, ShaderError> {
        compile(kind, "broken", "fn {")
    }

    #[test]
    fn triangle_program_links() {
        let program = link(triangle_vertex(), triangle_fragment()).unwrap();
        assert_eq!(program.vertex().entry_point(), "vs_main");
        assert_eq!(program.fragment().entry_point(), "fs_main");
    }

    #[test]
    fn attribute_lookup_by_name() {
        let program = link(triangle_vertex(), triangle_fragment()).unwrap();
        assert_eq!(program.attribute_location("aPos"), Some(0));
        assert_eq!(program.attribute_location("aNormal"), None);
    }

    #[test]
    fn failed_vertex_stage_is_not_linked() {
        let err = link(broken(StageKind::Vertex), triangle_fragment()).unwrap_err();
        let ProgramError::Stage { failures } = err else {
            panic!("expected stage failure, got {err:?}");
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].stage(), StageKind::Vertex);
    }

    #[test]
    fn both_failures_are_reported() {
        let err = link(broken(StageKind::Vertex), broken(StageKind::Fragment)).unwrap_err();
        let ProgramError::Stage { failures } = err else {
            panic!("expected stage failure, got {err:?}");
        };
        let stages: Vec<_> = failures.iter().map(ShaderError::stage).collect();
        assert_eq!(stages, vec![StageKind::Vertex, StageKind::Fragment]);
    }

    #[test]
    fn swapped_stages_fail_to_link() {
        let err = link(triangle_fragment(), triangle_vertex()).unwrap_err();
        assert!(matches!(err, ProgramError::Interface(_)));
    }

    #[test]
    fn unmatched_fragment_input_fails_to_link() {
        let fragment = compile(
            StageKind::Fragment,
            "tinted.frag",
            r"
                @fragment
                fn fs_main(@location(1) tint: vec4<f32>) -> @location(0) vec4<f32> {
                    return tint;
                }
            ",
        );
        let err = link(triangle_vertex(), fragment).unwrap_err();
        let ProgramError::Interface(msg) = err else {
            panic!("expected interface error, got {err:?}");
        };
        assert!(msg.contains("@location(1)"));
    }
}
