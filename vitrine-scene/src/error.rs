/// Error categories for the hero scene renderer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Shader compile, link, or program object failures.
    #[error("Shader error: {0}")]
    Shader(String),

    /// Buffer, vertex array, or uniform plumbing failures.
    #[error("Resource error: {0}")]
    Resource(String),
}

impl Error {
    pub(crate) fn shader_creation_failed(stage: &str) -> Self {
        Self::Shader(format!("could not create the {stage} shader object"))
    }

    pub(crate) fn shader_program_creation_failed() -> Self {
        Self::Shader("could not create the program object".to_string())
    }

    pub(crate) fn shader_compile_failed(stage: &str, log: String) -> Self {
        Self::Shader(format!("{stage} stage failed to compile: {log}"))
    }

    pub(crate) fn shader_link_failed(log: String) -> Self {
        Self::Shader(format!("program failed to link: {log}"))
    }

    pub(crate) fn buffer_creation_failed(name: &str, detail: String) -> Self {
        Self::Resource(format!("could not create the {name} buffer: {detail}"))
    }

    pub(crate) fn vertex_array_creation_failed(detail: String) -> Self {
        Self::Resource(format!("could not create a vertex array: {detail}"))
    }

    pub(crate) fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("uniform {name} not found in the linked program"))
    }
}
