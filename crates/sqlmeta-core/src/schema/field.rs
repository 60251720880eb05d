use super::{ComputedColumn, Generated, ModelId};
use std::any::TypeId;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Primitive value or navigation to another model
    pub ty: FieldTy,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// Set if the column is computed by the database
    pub computed: Option<ComputedColumn>,

    /// Set if the field declares how the database generates its value
    pub generated: Option<Generated>,

    /// On a navigation field, the name of the field holding the foreign key
    pub foreign_key: Option<String>,

    /// True if the field is not mapped to a column
    pub not_mapped: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    /// Name of the member on the record type
    pub app_name: String,

    /// Column name declared for the member
    pub storage_name: Option<String>,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive,
    Navigation(Navigation),
}

/// Reference from one record type to another.
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Rust type of the referenced record
    pub target_type: TypeId,

    /// Referenced model, linked when the schema is built
    pub target: ModelId,
}

impl Field {
    /// A primitive, column-backed field.
    pub fn new(name: &str) -> Self {
        Self::with_ty(name, FieldTy::Primitive)
    }

    /// A field referencing the record type `T`.
    pub fn navigation<T: 'static>(name: &str) -> Self {
        Self::with_ty(
            name,
            FieldTy::Navigation(Navigation {
                target_type: TypeId::of::<T>(),
                target: ModelId::placeholder(),
            }),
        )
    }

    fn with_ty(name: &str, ty: FieldTy) -> Self {
        Self {
            id: FieldId::placeholder(),
            name: FieldName {
                app_name: name.to_string(),
                storage_name: None,
            },
            ty,
            primary_key: false,
            computed: None,
            generated: None,
            foreign_key: None,
            not_mapped: false,
        }
    }

    pub fn key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.name.storage_name = Some(name.into());
        self
    }

    pub fn computed(mut self, computed: ComputedColumn) -> Self {
        self.computed = Some(computed);
        self
    }

    pub fn generated(mut self, generated: Generated) -> Self {
        self.generated = Some(generated);
        self
    }

    pub fn foreign_key(mut self, field: impl Into<String>) -> Self {
        self.foreign_key = Some(field.into());
        self
    }

    pub fn not_mapped(mut self) -> Self {
        self.not_mapped = true;
        self
    }

    /// Gets the id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self.ty, FieldTy::Navigation(_))
    }
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive)
    }

    pub fn as_navigation(&self) -> Option<&Navigation> {
        match self {
            Self::Navigation(navigation) => Some(navigation),
            Self::Primitive => None,
        }
    }

    #[track_caller]
    pub fn expect_navigation_mut(&mut self) -> &mut Navigation {
        match self {
            Self::Navigation(navigation) => navigation,
            _ => panic!("expected navigation field, but was {self:?}"),
        }
    }
}

impl FieldId {
    pub(crate) const fn placeholder() -> Self {
        Self {
            model: ModelId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Self> for FieldId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
