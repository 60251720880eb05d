/// Marks a field whose value is computed by the database from a SQL
/// expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedColumn {
    /// SQL expression computing the column. Informational only.
    pub expression: String,

    /// Name to select the computed value as. Overrides every other column
    /// name of the field.
    pub alias: Option<String>,
}

impl ComputedColumn {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
