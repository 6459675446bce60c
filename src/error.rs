use dianzi_core::CollaboratorError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] dianzi_core::Error),

    #[error("disambiguator failed: {0}")]
    Disambiguator(#[source] CollaboratorError),

    #[error("disambiguator returned {found} readings for {expected} characters")]
    MalformedDisambiguation { expected: usize, found: usize },

    #[error("no disambiguator configured")]
    NoDisambiguator,
}
