//! Fixture factory handles
//!
//! A `Factory` wraps one table for one build-and-persist chain: it carries
//! the seed attributes for the records it represents, a record count, and
//! the association builder accumulating which associated records to build
//! alongside the root. Persisting the records is the job of whatever
//! persistence layer consumes the handle; the factory only does the
//! bookkeeping.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::association::AssociationBuilder;
use crate::error::BuilderResult;
use crate::registry::FactoryRegistry;

/// A builder producing one or more records for a table, together with the
/// associations to build alongside them.
#[derive(Debug, Clone)]
pub struct Factory {
    table: String,
    attributes: HashMap<String, Value>,
    times: u32,
    builder: AssociationBuilder,
}

impl Factory {
    pub(crate) fn new(factories: FactoryRegistry, table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            builder: AssociationBuilder::new(factories, table.clone()),
            table,
            attributes: HashMap::new(),
            times: 1,
        }
    }

    /// Registry name of the table this factory builds records for
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Number of records this factory represents
    pub fn times(&self) -> u32 {
        self.times
    }

    /// Turn this into a multi-record factory producing `times` records
    pub fn with_times(mut self, times: u32) -> Self {
        self.times = times;
        self
    }

    /// Seed one attribute on the records this factory builds
    pub fn with_attribute<V: Serialize>(mut self, key: &str, value: V) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.attributes.insert(key.to_string(), json_value);
        }
        self
    }

    /// Merge a set of seed attributes
    pub fn with_attributes(mut self, attributes: HashMap<String, Value>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// The seed attributes, as handed to the persistence layer
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }

    /// Attach an association using the target table's default factory
    pub fn with(self, path: &str) -> BuilderResult<Self> {
        let factory = self.builder.get_factory_from_table_name(path, HashMap::new())?;
        self.with_factory(path, factory)
    }

    /// Attach an association whose factory is seeded with attribute data
    pub fn with_data(self, path: &str, data: HashMap<String, Value>) -> BuilderResult<Self> {
        let factory = self.builder.get_factory_from_table_name(path, data)?;
        self.with_factory(path, factory)
    }

    /// Attach an association built by the given factory.
    ///
    /// Dotted paths are attached level by level: every intermediate segment
    /// instantiates that table's default factory (a bracket count becomes
    /// its record count) and the given factory lands on the final segment.
    /// Each level contributes its own default associations to the flattened
    /// associated set.
    pub fn with_factory(mut self, path: &str, factory: Factory) -> BuilderResult<Self> {
        match path.split_once('.') {
            Some((first, rest)) => {
                let intermediate = self
                    .builder
                    .get_factory_from_table_name(first, HashMap::new())?
                    .with_factory(rest, factory)?;
                self.builder.collect_associated_factory(first, intermediate)?;
            }
            None => {
                self.builder.collect_associated_factory(path, factory)?;
            }
        }
        Ok(self)
    }

    /// Detach an association and all of its descendants
    pub fn without(mut self, path: &str) -> Self {
        self.builder.drop_association(path);
        self
    }

    /// Ordered canonical association paths to build alongside the root
    /// records, read immediately before a persist call
    pub fn associated(&self) -> &[String] {
        self.builder.associated()
    }

    /// Replace the associated path list wholesale
    pub fn set_associated(&mut self, associated: Vec<String>) {
        self.builder.set_associated(associated);
    }

    /// The association builder bound to this factory's table
    pub fn builder(&self) -> &AssociationBuilder {
        &self.builder
    }

    /// Mutable access to the association builder
    pub fn builder_mut(&mut self) -> &mut AssociationBuilder {
        &mut self.builder
    }
}
