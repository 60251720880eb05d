use crate::ColumnPropertyInfo;
use sqlmeta_core::{schema::Model, Result};

/// Resolves the fields of a model that map to columns.
pub trait PropertyResolver: Send + Sync {
    /// Mapped fields, in the order their columns should appear in SQL.
    fn resolve_properties(&self, model: &Model) -> Result<Vec<ColumnPropertyInfo>>;
}

/// Maps every primitive field not marked `not_mapped`, in declaration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPropertyResolver;

impl PropertyResolver for DefaultPropertyResolver {
    fn resolve_properties(&self, model: &Model) -> Result<Vec<ColumnPropertyInfo>> {
        Ok(model
            .fields
            .iter()
            .filter(|field| field.ty.is_primitive() && !field.not_mapped)
            .map(|field| ColumnPropertyInfo::new(field, field.primary_key))
            .collect())
    }
}
