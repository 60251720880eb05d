use super::Error;

/// Error when no foreign key links a source model to an including model in
/// either direction.
#[derive(Debug)]
pub(super) struct UnresolvedForeignKey {
    source: Box<str>,
    including: Box<str>,
}

impl std::error::Error for UnresolvedForeignKey {}

impl core::fmt::Display for UnresolvedForeignKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved foreign key: no relation between `{}` and `{}`",
            self.source, self.including
        )
    }
}

impl Error {
    /// Creates an unresolved foreign key error.
    pub fn unresolved_foreign_key(
        source: impl Into<String>,
        including: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvedForeignKey(
            UnresolvedForeignKey {
                source: source.into().into(),
                including: including.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unresolved foreign key error.
    pub fn is_unresolved_foreign_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedForeignKey(_))
    }
}
