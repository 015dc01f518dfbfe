/// Model artifact errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("empty artifact: {what}")]
    EmptyArtifact { what: String },

    #[error("non-finite weight in {what}")]
    NonFiniteWeight { what: String },
}
