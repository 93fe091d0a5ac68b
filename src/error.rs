use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the range the operation accepts
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// An argument was rejected before the array was touched
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Description of why it was rejected
        reason: &'static str,
    },
}
