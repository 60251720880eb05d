//! Descriptors of the record types that are mapped to tables.
//!
//! A record type describes itself once through [`Entity::schema`]. The
//! descriptors are collected by a [`Builder`], which assigns identifiers and
//! links navigation fields to their target models, producing an immutable
//! [`Schema`] that resolution strategies read from.

mod builder;
pub use builder::Builder;

mod computed;
pub use computed::ComputedColumn;

mod field;
pub use field::{Field, FieldId, FieldName, FieldTy, Navigation};

mod generated;
pub use generated::Generated;

mod model;
pub use model::{Model, ModelId};

mod name;
pub use name::Name;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;

mod table;
pub use table::TableAttr;

/// A record type that can be described to the schema.
pub trait Entity: 'static {
    /// Describe the record type: its name, table annotation and members.
    fn schema() -> Model;
}
