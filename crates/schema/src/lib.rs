//! # fixtura-schema: table and association metadata
//!
//! The schema layer fixture factories resolve against: table definitions,
//! their declared associations with cardinality (to-one vs to-many), and a
//! name-keyed registry answering "does table T declare an association named
//! A, and what table does it target".
//!
//! Declarations are explicit - an association is a `(name, kind, target)`
//! triple and the name is the exact, case-sensitive alias used in
//! association paths. Nothing is inferred from naming conventions.
//!
//! ```rust
//! use fixtura_schema::{TableDef, TableRegistry};
//!
//! let registry = TableRegistry::new();
//! registry
//!     .register(TableDef::new("Cities").belongs_to("Country", "Countries"))
//!     .unwrap();
//! registry
//!     .register(TableDef::new("Countries").has_many("Cities", "Cities"))
//!     .unwrap();
//!
//! let country = registry.association("Cities", "Country").unwrap();
//! assert!(country.kind.is_to_one());
//! ```

pub mod error;
pub mod metadata;
pub mod registry;

pub use error::{SchemaError, SchemaResult};
pub use metadata::{AssociationDef, AssociationKind, TableDef};
pub use registry::TableRegistry;
