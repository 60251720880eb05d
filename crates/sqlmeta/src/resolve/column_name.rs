use sqlmeta_core::schema::Field;

/// Resolves the unquoted column name of a field.
pub trait ColumnNameResolver: Send + Sync {
    fn resolve_column_name(&self, field: &Field) -> String;
}

/// Uses the computed-column alias, then the declared column name, then the
/// field name.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultColumnNameResolver;

impl ColumnNameResolver for DefaultColumnNameResolver {
    fn resolve_column_name(&self, field: &Field) -> String {
        if let Some(alias) = field.computed.as_ref().and_then(|c| c.alias.as_ref()) {
            return alias.clone();
        }

        field.name.storage_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlmeta_core::schema::ComputedColumn;

    fn resolve(field: Field) -> String {
        DefaultColumnNameResolver.resolve_column_name(&field)
    }

    #[test]
    fn bare_name() {
        assert_eq!(resolve(Field::new("email")), "email");
    }

    #[test]
    fn declared_name() {
        assert_eq!(resolve(Field::new("email").column("email_address")), "email_address");
    }

    #[test]
    fn computed_alias_wins() {
        let field = Field::new("total")
            .column("order_total")
            .computed(ComputedColumn::new("price * quantity").alias("x"));
        assert_eq!(resolve(field), "x");
    }

    #[test]
    fn computed_without_alias() {
        let field = Field::new("total")
            .column("order_total")
            .computed(ComputedColumn::new("price * quantity"));
        assert_eq!(resolve(field), "order_total");
    }
}
