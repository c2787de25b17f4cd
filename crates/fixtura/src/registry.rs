//! Factory registry - constructing factories by table name
//!
//! The registry pairs the table schema with per-table factory templates. A
//! template is the default configuration applied to every factory made for
//! its table, typically attaching the table's out-of-the-box associations;
//! it plays the role of a hand-written factory class for that table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use fixtura_schema::TableRegistry;

use crate::error::{AssociationBuilderError, BuilderResult};
use crate::factory::Factory;

/// Default configuration applied to every factory made for a table
pub type FactoryTemplate = Arc<dyn Fn(Factory) -> BuilderResult<Factory> + Send + Sync>;

/// Constructs factories by table name, applying per-table default
/// templates.
///
/// Cloning is cheap and clones share the same schema and templates, so the
/// registry is handed by value to every factory and builder it creates.
#[derive(Clone)]
pub struct FactoryRegistry {
    inner: Arc<RegistryInner>,
}

struct RegistryInner {
    schema: TableRegistry,
    templates: DashMap<String, FactoryTemplate>,
}

impl FactoryRegistry {
    /// Create a factory registry over a table schema
    pub fn new(schema: TableRegistry) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                schema,
                templates: DashMap::new(),
            }),
        }
    }

    /// The table schema factories resolve against
    pub fn schema(&self) -> &TableRegistry {
        &self.inner.schema
    }

    /// Register the default template for a table's factories
    pub fn define<F>(&self, table: &str, template: F)
    where
        F: Fn(Factory) -> BuilderResult<Factory> + Send + Sync + 'static,
    {
        debug!(table, "defining factory template");
        self.inner
            .templates
            .insert(table.to_string(), Arc::new(template));
    }

    /// Make the default factory for a table
    pub fn make(&self, table: &str) -> BuilderResult<Factory> {
        self.make_with(table, HashMap::new())
    }

    /// Make a factory for a table, seeded with attribute data. The data is
    /// merged over whatever the table's template seeded.
    pub fn make_with(
        &self,
        table: &str,
        data: HashMap<String, Value>,
    ) -> BuilderResult<Factory> {
        if !self.inner.schema.has_table(table) {
            return Err(AssociationBuilderError::UnknownTable(table.to_string()));
        }

        // clone the template out so the map guard is released before the
        // template runs; templates recurse into make_with for associated
        // tables
        let template = self
            .inner
            .templates
            .get(table)
            .map(|entry| Arc::clone(entry.value()));

        let factory = Factory::new(self.clone(), table);
        let factory = match template {
            Some(template) => template(factory)?,
            None => factory,
        };

        Ok(factory.with_attributes(data))
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("schema", &self.inner.schema)
            .field("templates", &self.inner.templates.len())
            .finish()
    }
}
