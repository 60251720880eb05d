use std::fmt;

/// A table name and the alias used to qualify its columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName {
    /// Table name, possibly schema-qualified
    pub name: String,

    /// Alias of the table. Same as `name` unless one was given.
    pub alias: String,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
        }
    }

    /// A table name with an alias. An empty alias falls back to `name`.
    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        let name = name.into();
        let alias = alias.into();

        if alias.is_empty() {
            Self::new(name)
        } else {
            Self { name, alias }
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_defaults_to_name() {
        let table = TableName::new("dbo.Users");
        assert_eq!(table.alias, "dbo.Users");
        assert_eq!(TableName::with_alias("Users", ""), table_named("Users"));
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(
            TableName::with_alias("Users", "u"),
            TableName::with_alias("Users", "u")
        );
        assert_ne!(TableName::with_alias("Users", "u"), TableName::new("Users"));
    }

    #[test]
    fn display() {
        assert_eq!(TableName::with_alias("[Users]", "[u]").to_string(), "[Users] [u]");
    }

    fn table_named(name: &str) -> TableName {
        TableName {
            name: name.to_string(),
            alias: name.to_string(),
        }
    }
}
