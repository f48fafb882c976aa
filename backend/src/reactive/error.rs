//! Errors raised while dispatching control changes to chart handlers.

use super::cycle::UpdatePhase;

pub type HandlerResult<T> = Result<T, HandlerError>;

/// Dispatch failures. The chart handlers themselves never fail: unmatched
/// or out-of-range filter values produce empty charts instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HandlerError {
    #[error("no handler is bound to output '{0}'")]
    UnknownOutput(String),

    #[error("'{0}' is not an input of any binding")]
    UnknownInput(String),

    /// The value supplied for an input has the wrong shape.
    #[error("invalid value for input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("illegal update transition {from:?} -> {to:?}")]
    InvalidTransition { from: UpdatePhase, to: UpdatePhase },
}
