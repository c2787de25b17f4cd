//! Association path resolution and bookkeeping
//!
//! `AssociationBuilder` is bound to one root table for its whole lifetime.
//! It walks dotted paths against the schema, resolves each segment to a
//! declared association, and accumulates the ordered set of canonical
//! association paths that will be built and persisted together with the
//! root record.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use fixtura_schema::{AssociationDef, AssociationKind};

use crate::error::{AssociationBuilderError, BuilderResult};
use crate::factory::Factory;
use crate::path::{self, AssociationPath};
use crate::registry::FactoryRegistry;

/// Resolves dotted association paths from a root table and keeps the
/// ordered, duplicate-free list of paths pending attachment.
#[derive(Debug, Clone)]
pub struct AssociationBuilder {
    factories: FactoryRegistry,
    root_table: String,
    associated: Vec<String>,
}

impl AssociationBuilder {
    /// Bind a builder to a root table
    pub fn new(factories: FactoryRegistry, root_table: impl Into<String>) -> Self {
        Self {
            factories,
            root_table: root_table.into(),
            associated: Vec::new(),
        }
    }

    /// The table the first segment of every path resolves against
    pub fn root_table(&self) -> &str {
        &self.root_table
    }

    /// Walk a canonical dotted path from the root table, requiring each
    /// segment to name a declared association of the current table, and
    /// return the final association.
    pub fn get_association(&self, path: &str) -> BuilderResult<AssociationDef> {
        self.resolve_chain(path).map(|(association, _)| association)
    }

    /// Strip every bracket group from a raw path. See [`path::remove_brackets`].
    pub fn remove_brackets(&self, raw: &str) -> String {
        path::remove_brackets(raw)
    }

    /// Extract the repetition count on one segment. See
    /// [`path::times_between_brackets`].
    pub fn times_between_brackets(&self, segment: &str) -> BuilderResult<Option<u32>> {
        path::times_between_brackets(segment)
    }

    /// Resolve a (possibly dotted, possibly bracketed) association name to
    /// a factory for its final target table, seeded with `data`. A bracket
    /// count on the final segment becomes the factory's record count.
    pub fn get_factory_from_table_name(
        &self,
        name: &str,
        data: HashMap<String, Value>,
    ) -> BuilderResult<Factory> {
        let parsed = AssociationPath::parse(name)?;
        let canonical = parsed.canonical();
        let (association, _) = self.resolve_chain(&canonical)?;

        let mut factory = self.factories.make_with(&association.target_table, data)?;
        if let Some(count) = parsed.final_count() {
            factory = factory.with_times(count);
        }
        Ok(factory)
    }

    /// Validate an association name and instantiate its target factory,
    /// ready for chaining or persistence.
    pub fn get_associated_factory(
        &self,
        name: &str,
        data: HashMap<String, Value>,
    ) -> BuilderResult<Factory> {
        let factory = self.get_factory_from_table_name(name, data)?;
        self.validate_to_one_association(name, &factory)?;
        Ok(factory)
    }

    /// Enforce that a to-one association is only ever attached with a
    /// single-record factory; extra generated records would be silently
    /// discarded at persist time otherwise.
    pub fn validate_to_one_association(
        &self,
        name: &str,
        factory: &Factory,
    ) -> BuilderResult<bool> {
        let canonical = path::remove_brackets(name);
        let (association, _) = self.resolve_chain(&canonical)?;

        if association.kind.is_to_one() && factory.times() > 1 {
            return Err(AssociationBuilderError::ToOneWithManyRecords {
                association: canonical,
                times: factory.times(),
            });
        }
        Ok(true)
    }

    /// Register an associated factory under an association name.
    ///
    /// The name may carry a repetition count and may itself be a dotted
    /// chain. The canonical path is appended to the associated set, then
    /// every path of the nested factory's own associated set is appended
    /// prefixed by it, depth-first and preserving insertion order.
    pub fn collect_associated_factory(
        &mut self,
        name: &str,
        mut factory: Factory,
    ) -> BuilderResult<()> {
        let parsed = AssociationPath::parse(name)?;
        let canonical = parsed.canonical();
        let (association, owner) = self.resolve_chain(&canonical)?;

        if let Some(count) = parsed.final_count() {
            factory = factory.with_times(count);
        }
        self.validate_to_one_association(&canonical, &factory)?;

        if association.kind == AssociationKind::HasMany {
            // The child rows receive their parent key from the record being
            // built; a to-one link back at the owner would persist a
            // competing parent record.
            for backlink in self.factories.schema().associations(&association.target_table) {
                if backlink.kind.is_to_one() && backlink.target_table == owner {
                    factory.builder_mut().drop_association(&backlink.name);
                }
            }
        }

        debug!(association = %canonical, "collecting associated factory");
        self.push(canonical.clone());
        for nested in factory.associated() {
            self.push(format!("{}.{}", canonical, nested));
        }

        Ok(())
    }

    /// Remove an association and all of its descendants from the
    /// associated set.
    ///
    /// Matching is exact: the entry equal to the canonical path, plus every
    /// entry starting with `path.`. No pluralization heuristics; dropping a
    /// name that matches nothing is a no-op.
    pub fn drop_association(&mut self, raw: &str) {
        let canonical = path::remove_brackets(raw);
        let prefix = format!("{}.", canonical);

        let before = self.associated.len();
        self.associated
            .retain(|entry| entry != &canonical && !entry.starts_with(&prefix));

        if self.associated.len() != before {
            debug!(association = %canonical, "dropped association subtree");
        }
    }

    /// The ordered canonical association paths collected so far
    pub fn associated(&self) -> &[String] {
        &self.associated
    }

    /// Replace the associated path list wholesale
    pub fn set_associated(&mut self, associated: Vec<String>) {
        self.associated = associated;
    }

    /// Append a canonical path unless it is already present, preserving
    /// the position of the first insertion.
    fn push(&mut self, canonical: String) {
        if !self.associated.contains(&canonical) {
            self.associated.push(canonical);
        }
    }

    /// Walk a canonical path and return the final association together
    /// with the table that declares it.
    fn resolve_chain(&self, canonical: &str) -> BuilderResult<(AssociationDef, String)> {
        let mut owner = self.root_table.clone();
        let mut resolved = None;

        for segment in canonical.split('.') {
            let association = self
                .factories
                .schema()
                .association(&owner, segment)
                .ok_or_else(|| AssociationBuilderError::UnknownAssociation {
                    table: owner.clone(),
                    segment: segment.to_string(),
                    path: canonical.to_string(),
                })?;
            let previous_owner = owner.clone();
            owner = association.target_table.clone();
            resolved = Some((association, previous_owner));
        }

        // split('.') always yields at least one segment, so an unresolved
        // chain has already returned the segment error above
        resolved.ok_or_else(|| AssociationBuilderError::UnknownAssociation {
            table: self.root_table.clone(),
            segment: String::new(),
            path: canonical.to_string(),
        })
    }
}
