//! Erros específicos do módulo de feedback

use thiserror::Error;

pub type FeedbackResult<T> = Result<T, FeedbackError>;

/// O despacho em si é infalível (fire-and-forget); o erro existe apenas
/// para a superfície de parsing de nomes de `Kind`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Unknown feedback kind: {0}")]
    UnknownKind(String),
}
