use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every failure is terminal for the current invocation; nothing is retried.
/// Cardinality cannot overflow (it is computed as a [`num_bigint::BigUint`]),
/// so no overflow variant exists.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from I/O operations. Output written before the
    /// failure must be treated as unreliable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rule suffix depth is outside `1..=chunks`.
    #[error("rule depth must be between 1 and {chunks} (the chunk count), got {depth}")]
    InvalidDepth { depth: usize, chunks: usize },
}

/// A convenience `Result` type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
