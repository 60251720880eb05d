use super::{Entity, FieldTy, Model, ModelId, Schema};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Collects model descriptors and links them into a [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Model definitions as described by the record types (unlinked)
    models: Vec<Model>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Entity>(&mut self) -> &mut Self {
        self.models.push(T::schema());
        self
    }

    /// Register a model that was described by hand, e.g. a projection shape.
    pub fn model(&mut self, model: Model) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut models = IndexMap::new();
        let mut by_type = IndexMap::new();

        for (index, model) in self.models.iter().enumerate() {
            let id = ModelId(index);

            if by_type.insert(model.type_id, id).is_some() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is registered more than once",
                    model.name
                )));
            }

            let mut model = model.clone();
            model.id = id;
            for (index, field) in model.fields.iter_mut().enumerate() {
                field.id = id.field(index);
            }

            models.insert(id, model);
        }

        let mut schema = Schema { models, by_type };
        link_navigations(&mut schema)?;
        verify_foreign_keys(&schema)?;

        Ok(schema)
    }
}

/// Resolve the target `TypeId` of every navigation field to the registered
/// model.
fn link_navigations(schema: &mut Schema) -> Result<()> {
    // Models are mutated while the type lookup is read, so iterate by index.
    for curr in 0..schema.models.len() {
        for index in 0..schema.models[curr].fields.len() {
            let field = &schema.models[curr].fields[index];

            let FieldTy::Navigation(navigation) = &field.ty else {
                continue;
            };

            let Some(target) = schema.model_id_of(navigation.target_type) else {
                return Err(Error::invalid_schema(format!(
                    "field `{}::{}` references a model that was not registered \
                     with the schema; did you forget to register it with `Schema::builder()`?",
                    schema.models[curr].name, field.name.app_name,
                )));
            };

            schema.models[curr].fields[index]
                .ty
                .expect_navigation_mut()
                .target = target;
        }
    }

    Ok(())
}

/// A foreign-key annotation must sit on a navigation field and name a
/// primitive field of the same model.
fn verify_foreign_keys(schema: &Schema) -> Result<()> {
    for model in schema.models() {
        for field in &model.fields {
            let Some(fk) = &field.foreign_key else {
                continue;
            };

            if !field.is_navigation() {
                return Err(Error::invalid_schema(format!(
                    "field `{}::{}` declares a foreign key but is not a navigation field",
                    model.name, field.name.app_name,
                )));
            }

            match model.field_by_name(fk) {
                Some(fk_field) if fk_field.ty.is_primitive() => {}
                _ => {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` names foreign key `{fk}`, which is not a primitive field of `{}`",
                        model.name, field.name.app_name, model.name,
                    )));
                }
            }
        }
    }

    Ok(())
}
