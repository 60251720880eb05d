/// Table annotation declared on a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAttr {
    /// Unqualified table name
    pub name: String,

    /// Schema the table lives in, e.g. `dbo`
    pub schema: Option<String>,

    /// Alias used to qualify the table's columns
    pub alias: Option<String>,
}

impl TableAttr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            alias: None,
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The table name qualified with its schema, when one is set.
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}
