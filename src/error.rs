use thiserror::Error;

/// Errors reported by [`HashMap`](crate::HashMap) and by the constructors
/// that accept caller-provided parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No entry with the requested key exists in the map.
    #[error("key not found")]
    KeyNotFound,
    /// A construction parameter was out of range.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// What the parameter must satisfy.
        reason: &'static str,
    },
}
