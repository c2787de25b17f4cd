//! Error types for schema declaration

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while declaring tables and registering them
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Table name cannot be empty")]
    EmptyTableName,

    #[error("Association declared without a name on table '{table}'")]
    EmptyAssociationName { table: String },

    #[error("Association '{name}' targets no table on '{table}'")]
    EmptyTargetTable { table: String, name: String },

    #[error("Association '{name}' is declared twice on table '{table}'")]
    DuplicateAssociation { table: String, name: String },

    #[error("Table '{0}' is already registered")]
    DuplicateTable(String),
}
