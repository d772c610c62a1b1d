use thiserror::Error;

/// Invalid arguments passed to the range-checked byte codecs.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum ArgumentError {
    /// A buffer was required but none was given.
    #[error("value cannot be null (parameter '{param}')")]
    Null {
        /// Name of the missing argument.
        param: &'static str,
    },

    /// An offset or count fell outside the supplied buffer.
    #[error("specified argument was out of the range of valid values (parameter '{param}')")]
    OutOfRange {
        /// Name of the offending argument.
        param: &'static str,
    },
}
