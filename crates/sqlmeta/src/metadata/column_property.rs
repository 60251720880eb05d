use sqlmeta_core::schema::{Field, FieldId, Generated};

/// A field that maps to a column, with the metadata needed to build SQL for
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPropertyInfo {
    /// The mapped field
    pub field: FieldId,

    /// Name of the field on the record type
    pub name: String,

    /// True if the field is (part of) the primary key
    pub is_key: bool,

    /// How the database populates the column
    pub generated: Generated,
}

impl ColumnPropertyInfo {
    /// Key columns are database-generated identities unless the field says
    /// otherwise. Computed columns are always database-generated.
    pub fn new(field: &Field, is_key: bool) -> Self {
        let generated = match field.generated {
            Some(generated) => generated,
            None if field.computed.is_some() => Generated::Computed,
            None if is_key => Generated::Identity,
            None => Generated::None,
        };

        Self {
            field: field.id,
            name: field.name.app_name.clone(),
            is_key,
            generated,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.generated.is_generated()
    }
}
