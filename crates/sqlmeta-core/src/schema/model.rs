use super::{Field, FieldId, Name, TableAttr};
use std::any::TypeId;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Identity of the Rust type the model describes
    pub type_id: TypeId,

    /// Name of the model
    pub name: Name,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// If the model declares the table it maps to, this is set.
    pub table: Option<TableAttr>,

    /// True for ad-hoc projection shapes that do not map to a table. Their
    /// columns are never qualified with a table alias.
    pub synthetic: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    /// Start describing the record type `T`. The id is assigned when the model
    /// is registered with a schema.
    pub fn new<T: 'static>(name: &str) -> Self {
        Self {
            id: ModelId::placeholder(),
            type_id: TypeId::of::<T>(),
            name: Name::new(name),
            fields: vec![],
            table: None,
            synthetic: false,
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn table(mut self, table: TableAttr) -> Self {
        self.table = Some(table);
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    /// Get a field by id.
    #[track_caller]
    pub fn field_by_id(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    /// Navigation fields pointing at `target`, in declaration order.
    pub fn navigations_to(&self, target: ModelId) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(move |field| {
            field
                .ty
                .as_navigation()
                .is_some_and(|nav| nav.target == target)
        })
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }

    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
