use super::{BuilderKind, Ident, SqlBuilder};

/// Built-in SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
    SqlServer,
}

impl Flavor {
    /// Opening and closing identifier quote characters.
    pub(crate) fn quotes(self) -> (char, char) {
        match self {
            Flavor::Postgresql | Flavor::Sqlite => ('"', '"'),
            Flavor::Mysql => ('`', '`'),
            Flavor::SqlServer => ('[', ']'),
        }
    }
}

impl SqlBuilder for Flavor {
    fn kind(&self) -> BuilderKind {
        match self {
            Flavor::Postgresql => BuilderKind::new("postgresql"),
            Flavor::Sqlite => BuilderKind::new("sqlite"),
            Flavor::Mysql => BuilderKind::new("mysql"),
            Flavor::SqlServer => BuilderKind::new("sqlserver"),
        }
    }

    fn quote_identifier(&self, ident: &str) -> String {
        Ident::new(*self, ident).to_string()
    }
}
