/// Persona catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("persona catalog is empty")]
    Empty,

    #[error("unknown persona: {id}")]
    UnknownPersona { id: String },

    #[error("invalid catalog: {reason}")]
    Invalid { reason: String },
}
