//! # fixtura - association-aware test fixture factories
//!
//! Factories build one or more records for a table and keep track of the
//! associated records to build and persist alongside them. The core of the
//! crate is the association-path resolver: dotted, optionally bracketed
//! path strings such as `Authors[5].Articles[10].Bills` are validated
//! against the table schema, aliases resolve to their configured target
//! tables, repetition counts become record counts, and the result is a
//! flattened, order-preserving list of canonical association paths.
//!
//! ## Quick Start
//!
//! ```rust
//! use fixtura::prelude::*;
//!
//! let schema = TableRegistry::new();
//! schema
//!     .register(TableDef::new("Cities").belongs_to("Country", "Countries"))
//!     .unwrap();
//! schema
//!     .register(TableDef::new("Countries").has_many("Cities", "Cities"))
//!     .unwrap();
//!
//! let factories = FactoryRegistry::new(schema);
//! factories.define("Cities", |factory| factory.with("Country"));
//!
//! let city = factories.make("Cities").unwrap();
//! assert_eq!(city.associated(), ["Country"]);
//!
//! let city = city.without("Country");
//! assert!(city.associated().is_empty());
//! ```
//!
//! Everything is synchronous and in-process: resolution is in-memory
//! schema introspection, and persisting the built records is left to
//! whatever persistence layer consumes the factory handles.

pub mod association;
pub mod error;
pub mod factory;
pub mod path;
pub mod registry;

// Re-export commonly used types
pub use association::AssociationBuilder;
pub use error::{AssociationBuilderError, BuilderResult};
pub use factory::Factory;
pub use path::{AssociationPath, PathSegment};
pub use registry::{FactoryRegistry, FactoryTemplate};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        association::AssociationBuilder,
        error::{AssociationBuilderError, BuilderResult},
        factory::Factory,
        path::{AssociationPath, PathSegment},
        registry::{FactoryRegistry, FactoryTemplate},
    };

    // Re-export the schema layer alongside the factories
    pub use fixtura_schema::{AssociationDef, AssociationKind, TableDef, TableRegistry};

    // Re-export commonly used external types
    pub use serde_json::{json, Value as JsonValue};
}
