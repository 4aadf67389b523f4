/// Error categories for page setup.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The window, document, or another global handle is missing.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// DOM element creation or mutation errors.
    #[error("DOM error: {0}")]
    Dom(String),

    /// WebGL2 context acquisition or hero scene setup errors.
    #[error("Scene error: {0}")]
    Scene(String),
}

impl Error {
    pub(crate) fn window_not_found() -> Self {
        Self::Initialization("no window in this environment".to_string())
    }

    pub(crate) fn document_not_found() -> Self {
        Self::Initialization("window carries no document".to_string())
    }

    pub(crate) fn element_creation_failed(tag: &str) -> Self {
        Self::Dom(format!("could not create a <{tag}> element"))
    }

    pub(crate) fn node_attach_failed(what: &str) -> Self {
        Self::Dom(format!("could not attach {what} to the document"))
    }

    pub(crate) fn webgl_context_failed() -> Self {
        Self::Scene("canvas did not yield a WebGL2 context".to_string())
    }

    pub(crate) fn canvas_context_failed() -> Self {
        Self::Scene("rendering context request was rejected".to_string())
    }
}

impl From<vitrine_scene::Error> for Error {
    fn from(e: vitrine_scene::Error) -> Self {
        Self::Scene(e.to_string())
    }
}
