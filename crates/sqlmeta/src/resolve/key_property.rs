use crate::{ColumnPropertyInfo, Resolvers};
use sqlmeta_core::{schema::Model, Error, Result};

/// Resolves the key fields of a model.
pub trait KeyPropertyResolver: Send + Sync {
    /// Implementations fail when the model has no key; callers do not check.
    fn resolve_key_properties(
        &self,
        resolvers: &Resolvers,
        model: &Model,
    ) -> Result<Vec<ColumnPropertyInfo>>;
}

/// Uses the mapped fields marked as key. Without any, falls back to a field
/// named `id`, ignoring case.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultKeyPropertyResolver;

impl KeyPropertyResolver for DefaultKeyPropertyResolver {
    fn resolve_key_properties(
        &self,
        resolvers: &Resolvers,
        model: &Model,
    ) -> Result<Vec<ColumnPropertyInfo>> {
        let properties = resolvers.properties(model)?;

        let mut keys: Vec<_> = properties.iter().filter(|p| p.is_key).cloned().collect();

        if keys.is_empty() {
            keys = properties
                .iter()
                .filter(|p| p.name.eq_ignore_ascii_case("id"))
                .map(|p| ColumnPropertyInfo::new(resolvers.schema().field(p.field), true))
                .collect();
        }

        if keys.is_empty() {
            return Err(Error::invalid_key_count(model.name.to_string(), 0));
        }

        Ok(keys)
    }
}
