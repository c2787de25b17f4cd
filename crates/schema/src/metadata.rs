//! Association metadata - table schemas as fixture factories see them
//!
//! A table declares its associations under case-sensitive names; the name is
//! the exact alias used in association paths and the target table is the
//! registry name it resolves to. Aliasing is nothing more than a name that
//! differs from its target (`ExclusivePremiumAuthors` targeting `Authors`);
//! no renaming or pluralization heuristics are applied anywhere.

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

/// The cardinality of an association between two tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssociationKind {
    /// Many-to-one relationship (belongsTo)
    BelongsTo,
    /// One-to-one relationship (hasOne)
    HasOne,
    /// One-to-many relationship (hasMany)
    HasMany,
    /// Many-to-many relationship (belongsToMany)
    BelongsToMany,
}

impl AssociationKind {
    /// Returns true if this association resolves to a single record
    pub fn is_to_one(self) -> bool {
        matches!(self, Self::BelongsTo | Self::HasOne)
    }

    /// Returns true if this association resolves to a collection
    pub fn is_collection(self) -> bool {
        matches!(self, Self::HasMany | Self::BelongsToMany)
    }
}

/// A declared association: the alias it is reachable under, its cardinality
/// and the table it targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationDef {
    /// Case-sensitive alias used in association paths
    pub name: String,

    /// Cardinality of the association
    pub kind: AssociationKind,

    /// Registry name of the target table
    pub target_table: String,
}

impl AssociationDef {
    /// Create a new association definition
    pub fn new(
        name: impl Into<String>,
        kind: AssociationKind,
        target_table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            target_table: target_table.into(),
        }
    }
}

/// A table schema: its registry name and the associations it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    name: String,
    associations: Vec<AssociationDef>,
}

impl TableDef {
    /// Start declaring a table under its registry name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            associations: Vec::new(),
        }
    }

    /// Declare a many-to-one association
    pub fn belongs_to(self, name: impl Into<String>, target_table: impl Into<String>) -> Self {
        self.association(name, AssociationKind::BelongsTo, target_table)
    }

    /// Declare a one-to-one association
    pub fn has_one(self, name: impl Into<String>, target_table: impl Into<String>) -> Self {
        self.association(name, AssociationKind::HasOne, target_table)
    }

    /// Declare a one-to-many association
    pub fn has_many(self, name: impl Into<String>, target_table: impl Into<String>) -> Self {
        self.association(name, AssociationKind::HasMany, target_table)
    }

    /// Declare a many-to-many association
    pub fn belongs_to_many(self, name: impl Into<String>, target_table: impl Into<String>) -> Self {
        self.association(name, AssociationKind::BelongsToMany, target_table)
    }

    /// Declare an association of any kind
    pub fn association(
        mut self,
        name: impl Into<String>,
        kind: AssociationKind,
        target_table: impl Into<String>,
    ) -> Self {
        self.associations
            .push(AssociationDef::new(name, kind, target_table));
        self
    }

    /// The registry name of this table
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All declared associations, in declaration order
    pub fn associations(&self) -> &[AssociationDef] {
        &self.associations
    }

    /// Look up a declared association by its exact name
    pub fn get_association(&self, name: &str) -> Option<&AssociationDef> {
        self.associations.iter().find(|a| a.name == name)
    }

    /// Validate the declaration for consistency
    pub fn validate(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyTableName);
        }

        for (i, assoc) in self.associations.iter().enumerate() {
            if assoc.name.is_empty() {
                return Err(SchemaError::EmptyAssociationName {
                    table: self.name.clone(),
                });
            }
            if assoc.target_table.is_empty() {
                return Err(SchemaError::EmptyTargetTable {
                    table: self.name.clone(),
                    name: assoc.name.clone(),
                });
            }
            if self.associations[..i].iter().any(|a| a.name == assoc.name) {
                return Err(SchemaError::DuplicateAssociation {
                    table: self.name.clone(),
                    name: assoc.name.clone(),
                });
            }
        }

        Ok(())
    }
}
