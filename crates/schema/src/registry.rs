//! Table registry - runtime storage and lookup for table schemas

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::error::{SchemaError, SchemaResult};
use crate::metadata::{AssociationDef, TableDef};

/// Thread-safe registry of table schemas, keyed by registry name.
///
/// Cloning is cheap and clones share the same underlying map, so a registry
/// can be handed to every factory that needs schema introspection.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Arc<DashMap<String, TableDef>>,
}

impl TableRegistry {
    /// Create a new empty table registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table schema. The declaration is validated before
    /// insertion and re-registering a name is rejected.
    pub fn register(&self, table: TableDef) -> SchemaResult<()> {
        table.validate()?;

        if self.tables.contains_key(table.name()) {
            return Err(SchemaError::DuplicateTable(table.name().to_string()));
        }

        debug!(table = table.name(), "registering table schema");
        self.tables.insert(table.name().to_string(), table);

        Ok(())
    }

    /// Check whether a table is registered
    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Get a table schema by registry name
    pub fn get(&self, name: &str) -> Option<TableDef> {
        self.tables.get(name).map(|entry| entry.clone())
    }

    /// Look up one association declared on a table
    pub fn association(&self, table: &str, name: &str) -> Option<AssociationDef> {
        self.tables
            .get(table)?
            .get_association(name)
            .cloned()
    }

    /// All associations declared on a table, in declaration order
    pub fn associations(&self, table: &str) -> Vec<AssociationDef> {
        self.tables
            .get(table)
            .map(|entry| entry.associations().to_vec())
            .unwrap_or_default()
    }

    /// Number of registered tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no tables are registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
