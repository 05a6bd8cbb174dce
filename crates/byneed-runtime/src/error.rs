//! Runtime error types.

/// Evaluation failures. The reference behavior for all of these is to abort
/// the current top-level statement; a REPL host reports the error and keeps
/// reading.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unbound name: {0}")]
    Unbound(String),
    #[error("not a function: {0}")]
    NotFunc(String),
    #[error("malformed expression: {0}")]
    Malformed(String),
    #[error("recursion limit exceeded")]
    RecursionLimit,
    #[error("cycle detected while forcing a promise")]
    Cycle,
}
