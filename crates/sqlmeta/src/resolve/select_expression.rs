use crate::Resolvers;
use sqlmeta_core::{schema::Model, Result};
use sqlmeta_sql::SqlBuilder;

/// Resolves the column list selected for a model.
pub trait SelectExpressionResolver: Send + Sync {
    /// Returns `None` to select every column (`*`).
    fn resolve_select_expression(
        &self,
        resolvers: &Resolvers,
        model: &Model,
        builder: &dyn SqlBuilder,
    ) -> Result<Option<Vec<String>>>;
}

/// Always selects `*`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSelectExpressionResolver;

impl SelectExpressionResolver for DefaultSelectExpressionResolver {
    fn resolve_select_expression(
        &self,
        _resolvers: &Resolvers,
        _model: &Model,
        _builder: &dyn SqlBuilder,
    ) -> Result<Option<Vec<String>>> {
        Ok(None)
    }
}

/// Selects every mapped column by name, qualified with the table alias, in
/// declaration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnListSelectExpressionResolver;

impl SelectExpressionResolver for ColumnListSelectExpressionResolver {
    fn resolve_select_expression(
        &self,
        resolvers: &Resolvers,
        model: &Model,
        builder: &dyn SqlBuilder,
    ) -> Result<Option<Vec<String>>> {
        let columns = resolvers
            .properties(model)?
            .iter()
            .map(|property| {
                resolvers
                    .column_with(property.field, builder, true)
                    .map(|column| column.to_string())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(columns))
    }
}
