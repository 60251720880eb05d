use crate::TableName;
use sqlmeta_core::schema::Model;

/// Resolves the unquoted table name of a model.
pub trait TableNameResolver: Send + Sync {
    /// A schema-qualified name separates the schema with `.`.
    fn resolve_table_name(&self, model: &Model) -> TableName;
}

/// Uses the declared table annotation. Otherwise the model name, snake cased
/// and pluralized: `OrderLine` maps to `order_lines`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTableNameResolver;

impl TableNameResolver for DefaultTableNameResolver {
    fn resolve_table_name(&self, model: &Model) -> TableName {
        match &model.table {
            Some(table) => match &table.alias {
                Some(alias) => TableName::with_alias(table.qualified_name(), alias),
                None => TableName::new(table.qualified_name()),
            },
            None => TableName::new(model.name.plural_snake_case()),
        }
    }
}
