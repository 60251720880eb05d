use crate::{ForeignKeyInfo, ForeignKeyRelation};
use sqlmeta_core::{
    schema::{Field, Model, Name, Schema},
    Error, Result,
};

/// Finds the foreign key linking a source model to an included model and
/// classifies the relation.
pub trait ForeignKeyPropertyResolver: Send + Sync {
    fn resolve_foreign_key_property(
        &self,
        schema: &Schema,
        source: &Model,
        including: &Model,
    ) -> Result<ForeignKeyInfo>;
}

/// Looks for the foreign key on the source first, which makes the relation
/// one-to-one, then on the included model, which makes it one-to-many.
///
/// On either side the key is the field named by the `foreign_key` annotation
/// of a navigation to the other model, or else a field named after the other
/// model with an `_id` suffix (`customer_id` or `CustomerId` for `Customer`).
/// Fields marked `not_mapped` are never considered.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultForeignKeyPropertyResolver;

impl ForeignKeyPropertyResolver for DefaultForeignKeyPropertyResolver {
    fn resolve_foreign_key_property(
        &self,
        _schema: &Schema,
        source: &Model,
        including: &Model,
    ) -> Result<ForeignKeyInfo> {
        if let Some(field) = find_foreign_key(source, including) {
            return Ok(ForeignKeyInfo {
                field: field.id,
                relation: ForeignKeyRelation::OneToOne,
            });
        }

        if let Some(field) = find_foreign_key(including, source) {
            return Ok(ForeignKeyInfo {
                field: field.id,
                relation: ForeignKeyRelation::OneToMany,
            });
        }

        Err(Error::unresolved_foreign_key(
            source.name.to_string(),
            including.name.to_string(),
        ))
    }
}

/// The mapped field of `holder` referencing `target`. An annotated navigation
/// takes precedence over the naming convention.
fn find_foreign_key<'a>(holder: &'a Model, target: &Model) -> Option<&'a Field> {
    let mapped = |field: &&Field| field.ty.is_primitive() && !field.not_mapped;

    let annotated = holder
        .navigations_to(target.id)
        .filter_map(|navigation| holder.field_by_name(navigation.foreign_key.as_deref()?))
        .find(mapped);

    annotated.or_else(|| {
        let conventional = format!("{}_id", target.name.snake_case());
        holder
            .fields
            .iter()
            .filter(mapped)
            .find(|field| Name::new(&field.name.app_name).snake_case() == conventional)
    })
}
