use std::borrow::Cow;
use std::fmt;

use super::ShaderError;

/// Pipeline stage a shader source is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    fn naga_stage(self) -> naga::ShaderStage {
        match self {
            Self::Vertex => naga::ShaderStage::Vertex,
            Self::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// A user-defined `@location` slot on a stage boundary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LocationSlot {
    pub name: Option<String>,
    pub location: u32,
}

/// Inputs and outputs of a stage's entry point.
#[derive(Debug, Clone, Default)]
pub struct StageInterface {
    pub inputs: Vec<LocationSlot>,
    pub outputs: Vec<LocationSlot>,
    pub writes_position: bool,
}

/// A successfully compiled and validated stage.
///
/// Only ever produced by [`compile`]; a failed compile leaves nothing behind.
#[derive(Debug, Clone)]
pub struct CompiledStage {
    kind: StageKind,
    label: String,
    source: Cow<'static, str>,
    entry_point: String,
    interface: StageInterface,
}

impl CompiledStage {
    pub fn kind(&self) -> StageKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn interface(&self) -> &StageInterface {
        &self.interface
    }
}

/// Compiles one WGSL stage.
///
/// The source must contain exactly one entry point of `kind`. On failure the
/// diagnostic is logged and returned; no stage is produced.
pub fn compile(
    kind: StageKind,
    label: &str,
    source: impl Into<Cow<'static, str>>,
) -> Result<CompiledStage, ShaderError> {
    let source = source.into();

    let result = compile_inner(kind, label, &source).map(|(entry_point, interface)| {
        CompiledStage {
            kind,
            label: label.to_string(),
            source,
            entry_point,
            interface,
        }
    });

    match &result {
        Ok(stage) => log::debug!("compiled {kind} shader `{label}` ({})", stage.entry_point),
        Err(err) => log::error!("shader error: {err}"),
    }
    result
}

fn compile_inner(
    kind: StageKind,
    label: &str,
    source: &str,
) -> Result<(String, StageInterface), ShaderError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderError::Parse {
        stage: kind,
        label: label.to_string(),
        diagnostic: e.emit_to_string(source),
    })?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .map_err(|e| ShaderError::Validation {
        stage: kind,
        label: label.to_string(),
        diagnostic: e.emit_to_string(source),
    })?;

    let mut entries = module
        .entry_points
        .iter()
        .filter(|ep| ep.stage == kind.naga_stage());

    let (Some(entry), None) = (entries.next(), entries.next()) else {
        let found = module
            .entry_points
            .iter()
            .filter(|ep| ep.stage == kind.naga_stage())
            .count();
        return Err(ShaderError::EntryPoint {
            stage: kind,
            label: label.to_string(),
            found,
        });
    };

    Ok((entry.name.clone(), reflect_interface(&module, &entry.function)))
}

fn reflect_interface(module: &naga::Module, function: &naga::Function) -> StageInterface {
    let mut interface = StageInterface::default();

    for arg in &function.arguments {
        collect_slots(
            module,
            arg.name.as_deref(),
            arg.ty,
            arg.binding.as_ref(),
            &mut interface.inputs,
            &mut false,
        );
    }

    if let Some(result) = &function.result {
        collect_slots(
            module,
            None,
            result.ty,
            result.binding.as_ref(),
            &mut interface.outputs,
            &mut interface.writes_position,
        );
    }

    interface
}

/// Flattens a bound value (or a struct of bound members) into location slots.
fn collect_slots(
    module: &naga::Module,
    name: Option<&str>,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
    slots: &mut Vec<LocationSlot>,
    position: &mut bool,
) {
    match binding {
        Some(naga::Binding::Location { location, .. }) => slots.push(LocationSlot {
            name: name.map(str::to_string),
            location: *location,
        }),
        Some(naga::Binding::BuiltIn(naga::BuiltIn::Position { .. })) => *position = true,
        Some(naga::Binding::BuiltIn(_)) => {}
        None => {
            if let naga::TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_slots(
                        module,
                        member.name.as_deref(),
                        member.ty,
                        member.binding.as_ref(),
                        slots,
                        position,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::{TRIANGLE_FRAGMENT_WGSL, TRIANGLE_VERTEX_WGSL};

    #[test]
    fn triangle_vertex_compiles() {
        let stage = compile(StageKind::Vertex, "triangle.vert", TRIANGLE_VERTEX_WGSL).unwrap();
        assert_eq!(stage.kind(), StageKind::Vertex);
        assert_eq!(stage.entry_point(), "vs_main");
        assert!(stage.interface().writes_position);
        assert_eq!(
            stage.interface().inputs,
            vec![LocationSlot {
                name: Some("aPos".to_string()),
                location: 0,
            }]
        );
        assert!(stage.interface().outputs.is_empty());
    }

    #[test]
    fn triangle_fragment_compiles() {
        let stage =
            compile(StageKind::Fragment, "triangle.frag", TRIANGLE_FRAGMENT_WGSL).unwrap();
        assert_eq!(stage.entry_point(), "fs_main");
        assert!(stage.interface().inputs.is_empty());
        assert_eq!(stage.interface().outputs.len(), 1);
        assert_eq!(stage.interface().outputs[0].location, 0);
    }

    #[test]
    fn syntax_error_reports_parse_diagnostic() {
        let err = compile(StageKind::Vertex, "broken", "@vertex fn vs_main( {").unwrap_err();
        assert_eq!(err.stage(), StageKind::Vertex);
        let ShaderError::Parse { diagnostic, .. } = err else {
            panic!("expected parse error, got {err:?}");
        };
        assert!(!diagnostic.is_empty());
    }

    #[test]
    fn type_error_is_rejected() {
        let src = "@vertex fn vs_main() -> @builtin(position) vec4<f32> { return 1.0; }";
        let err = compile(StageKind::Vertex, "mistyped", src).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Parse { .. } | ShaderError::Validation { .. }
        ));
    }

    #[test]
    fn wrong_stage_kind_is_rejected() {
        let err = compile(StageKind::Fragment, "vert-as-frag", TRIANGLE_VERTEX_WGSL).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::EntryPoint {
                stage: StageKind::Fragment,
                found: 0,
                ..
            }
        ));
    }

    #[test]
    fn struct_outputs_are_flattened() {
        let src = r"
            struct VsOut {
                @builtin(position) clip: vec4<f32>,
                @location(2) tint: vec4<f32>,
            }

            @vertex
            fn vs_main(@location(0) pos: vec3<f32>) -> VsOut {
                var out: VsOut;
                out.clip = vec4<f32>(pos, 1.0);
                out.tint = vec4<f32>(1.0);
                return out;
            }
        ";
        let stage = compile(StageKind::Vertex, "struct-out", src).unwrap();
        let iface = stage.interface();
        assert!(iface.writes_position);
        assert_eq!(
            iface.outputs,
            vec![LocationSlot {
                name: Some("tint".to_string()),
                location: 2,
            }]
        );
    }
}
