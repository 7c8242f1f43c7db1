use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown difficulty {0:?}, expected easy, medium, hard or 1-3")]
    UnknownDifficulty(String),
}
