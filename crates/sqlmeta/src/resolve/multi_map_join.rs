use crate::{ColumnPropertyInfo, ForeignKeyRelation, Resolvers};
use sqlmeta_core::{schema::ModelId, Error, Result};
use sqlmeta_sql::SqlBuilder;

/// Resolves the pair of columns to equate when joining an included model to a
/// source model.
pub trait MultiMapJoinResolver: Send + Sync {
    /// Returns `(left, right)`: the source-side and included-side columns.
    fn resolve_join_properties(
        &self,
        resolvers: &Resolvers,
        builder: &dyn SqlBuilder,
        source: ModelId,
        including: ModelId,
    ) -> Result<(String, String)>;
}

/// Joins on the foreign key found by the configured
/// [`ForeignKeyPropertyResolver`](super::ForeignKeyPropertyResolver) and the
/// single key of the model it references.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultMultiMapJoinResolver;

impl MultiMapJoinResolver for DefaultMultiMapJoinResolver {
    fn resolve_join_properties(
        &self,
        resolvers: &Resolvers,
        builder: &dyn SqlBuilder,
        source: ModelId,
        including: ModelId,
    ) -> Result<(String, String)> {
        let foreign_key = resolvers.foreign_key_property(source, including)?;
        let foreign_key_column = resolvers.column(foreign_key.field, builder)?;

        match foreign_key.relation {
            ForeignKeyRelation::OneToOne => {
                let key = single_key(resolvers, including)?;
                let key_column = resolvers.column(key.field, builder)?;
                Ok((foreign_key_column.to_string(), key_column.to_string()))
            }
            ForeignKeyRelation::OneToMany => {
                let key = single_key(resolvers, source)?;
                let key_column = resolvers.column(key.field, builder)?;
                Ok((key_column.to_string(), foreign_key_column.to_string()))
            }
        }
    }
}

fn single_key(resolvers: &Resolvers, model: ModelId) -> Result<ColumnPropertyInfo> {
    let keys = resolvers.key_properties(model)?;

    match &keys[..] {
        [key] => Ok(key.clone()),
        _ => Err(Error::invalid_key_count(
            resolvers.schema().model(model).name.to_string(),
            keys.len(),
        )),
    }
}
