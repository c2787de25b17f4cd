//! Error type for association path resolution

use thiserror::Error;

/// Result type alias for builder and factory operations
pub type BuilderResult<T> = Result<T, AssociationBuilderError>;

/// The single error kind raised while resolving association paths.
///
/// Every failure is fatal to the operation that raised it; the builder
/// never recovers or retries internally, so errors surface directly to the
/// caller and abort the whole build chain.
#[derive(Error, Debug)]
pub enum AssociationBuilderError {
    #[error("Table '{table}' has no association named '{segment}' (resolving '{path}')")]
    UnknownAssociation {
        table: String,
        segment: String,
        path: String,
    },

    #[error("Empty repetition brackets in '{0}'")]
    EmptyBrackets(String),

    #[error("More than one bracket group in '{0}': a segment takes a single repetition count")]
    MultipleBracketGroups(String),

    #[error("Repetition count in '{0}' must be a positive integer")]
    InvalidCount(String),

    #[error("Association '{association}' is to-one and cannot be built from a factory producing {times} records")]
    ToOneWithManyRecords { association: String, times: u32 },

    #[error("Unknown table '{0}'")]
    UnknownTable(String),
}
