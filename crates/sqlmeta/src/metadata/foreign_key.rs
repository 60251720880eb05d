use sqlmeta_core::schema::FieldId;
use std::fmt;

/// Cardinality of the relation from a source model to an included model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForeignKeyRelation {
    /// The source holds the foreign key of the single included row.
    OneToOne,

    /// Each included row holds the foreign key of its source row.
    OneToMany,
}

/// A resolved foreign key and the relation it implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyInfo {
    /// The field holding the foreign key. Declared on the source model for
    /// [`OneToOne`] and on the included model for [`OneToMany`].
    ///
    /// [`OneToOne`]: ForeignKeyRelation::OneToOne
    /// [`OneToMany`]: ForeignKeyRelation::OneToMany
    pub field: FieldId,

    pub relation: ForeignKeyRelation,
}

impl fmt::Display for ForeignKeyRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneToOne => f.write_str("OneToOne"),
            Self::OneToMany => f.write_str("OneToMany"),
        }
    }
}
