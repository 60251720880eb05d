use super::{Builder, Entity, Field, FieldId, Model, ModelId};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::any::{type_name, TypeId};

/// The set of registered models. Immutable once built.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,

    /// Maps record types to the model describing them
    pub(super) by_type: IndexMap<TypeId, ModelId>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Get a model by ID, returning an error if it is not part of this schema.
    pub fn get(&self, id: impl Into<ModelId>) -> Result<&Model> {
        let id = id.into();
        self.models
            .get(&id)
            .ok_or_else(|| Error::unknown_model(format!("{id:?}")))
    }

    /// Get a field by ID
    #[track_caller]
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    /// Get a field by ID, returning an error if it is not part of this schema.
    pub fn get_field(&self, id: FieldId) -> Result<&Field> {
        self.get(id.model)?
            .fields
            .get(id.index)
            .ok_or_else(|| crate::err!("invalid field ID {id:?}"))
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// The model describing the Rust type `T`.
    pub fn model_id<T: Entity>(&self) -> Result<ModelId> {
        self.model_id_of(TypeId::of::<T>())
            .ok_or_else(|| Error::unknown_model(type_name::<T>()))
    }

    pub fn model_id_of(&self, type_id: TypeId) -> Option<ModelId> {
        self.by_type.get(&type_id).copied()
    }

    /// The model describing the Rust type `T`.
    pub fn model_of<T: Entity>(&self) -> Result<&Model> {
        let id = self.model_id::<T>()?;
        Ok(self.model(id))
    }

    /// The field of `T` named `name`.
    pub fn field_id<T: Entity>(&self, name: &str) -> Result<FieldId> {
        let model = self.model_of::<T>()?;
        let Some(field) = model.field_by_name(name) else {
            crate::bail!("model `{}` has no field `{name}`", model.name);
        };
        Ok(field.id)
    }
}
