use std::fmt;

/// Produces dialect-specific SQL fragments.
///
/// Implementations are shared between threads and must be pure: the same
/// input always quotes to the same output for a given [`BuilderKind`].
pub trait SqlBuilder: Send + Sync {
    /// Identifies the dialect. Builders reporting the same kind must quote
    /// identically, as resolved names are cached per kind.
    fn kind(&self) -> BuilderKind;

    /// Wraps `ident` in the dialect's identifier quotes.
    fn quote_identifier(&self, ident: &str) -> String;
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuilderKind(&'static str);

impl BuilderKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for BuilderKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "BuilderKind({})", self.0)
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.0)
    }
}

impl<T: SqlBuilder + ?Sized> SqlBuilder for &T {
    fn kind(&self) -> BuilderKind {
        (**self).kind()
    }

    fn quote_identifier(&self, ident: &str) -> String {
        (**self).quote_identifier(ident)
    }
}

impl<T: SqlBuilder + ?Sized> SqlBuilder for std::sync::Arc<T> {
    fn kind(&self) -> BuilderKind {
        (**self).kind()
    }

    fn quote_identifier(&self, ident: &str) -> String {
        (**self).quote_identifier(ident)
    }
}
