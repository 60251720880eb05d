mod adhoc;
mod already_installed;
mod invalid_key_count;
mod invalid_schema;
mod unknown_model;
mod unresolved_foreign_key;

use adhoc::AdhocError;
use already_installed::AlreadyInstalled;
use invalid_key_count::InvalidKeyCount;
use invalid_schema::InvalidSchema;
use unknown_model::UnknownModel;
use unresolved_foreign_key::UnresolvedForeignKey;

use std::fmt;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while registering or resolving type metadata.
///
/// A single pointer wide, so `Result<T>` stays small on the hot resolution
/// paths. Cloning shares the underlying error.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,

    /// The error this one adds context to
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    AlreadyInstalled(AlreadyInstalled),
    InvalidKeyCount(InvalidKeyCount),
    InvalidSchema(InvalidSchema),
    UnknownModel(UnknownModel),
    UnresolvedForeignKey(UnresolvedForeignKey),
}

/// Outermost first, ending with the root cause.
struct Chain<'a> {
    next: Option<&'a Error>,
}

impl Error {
    /// Wraps this error with `consequent`, which describes what was being
    /// attempted. Renders as `consequent: self`.
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.wrap(consequent.into_error())
    }

    #[cold]
    #[inline(never)]
    fn wrap(self, consequent: Error) -> Error {
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(ErrorInner { kind, cause: None }) => kind,
            // Shared, or already wrapping something: keep its rendering only.
            Ok(inner) => ErrorKind::flatten(&Error {
                inner: Arc::new(inner),
            }),
            Err(inner) => ErrorKind::flatten(&Error { inner }),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            }),
        }
    }

    fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorKind;

    fn next(&mut self) -> Option<&'a ErrorKind> {
        let err = self.next?;
        self.next = err.inner.cause.as_ref();
        Some(&err.inner.kind)
    }
}

impl ErrorKind {
    fn flatten(err: &Error) -> ErrorKind {
        ErrorKind::Adhoc(AdhocError::new(err.to_string()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, kind) in self.chain().enumerate() {
            if depth > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(kind, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_list().entries(self.chain()).finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Anyhow(err) => fmt::Display::fmt(err, f),
            ErrorKind::Adhoc(err) => fmt::Display::fmt(err, f),
            ErrorKind::AlreadyInstalled(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidKeyCount(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidSchema(err) => fmt::Display::fmt(err, f),
            ErrorKind::UnknownModel(err) => fmt::Display::fmt(err, f),
            ErrorKind::UnresolvedForeignKey(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

/// Custom strategies report failures through `anyhow`.
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Values usable as [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_word() {
        use std::mem::size_of;

        assert_eq!(size_of::<Error>(), size_of::<usize>());
        assert_eq!(size_of::<Result<(), Error>>(), size_of::<usize>());
    }

    #[test]
    fn adhoc_message() {
        let err = err!("no field `{}` on `{}`", "email", "Customer");
        assert_eq!(err.to_string(), "no field `email` on `Customer`");
    }

    #[test]
    fn context_is_rendered_outermost_first() {
        let err = err!("root cause")
            .context(err!("resolving `User`"))
            .context("building select list");
        assert_eq!(
            err.to_string(),
            "building select list: resolving `User`: root cause"
        );
    }

    #[test]
    fn context_already_wrapping_a_cause() {
        let consequent = err!("inner").context("outer");
        let err = err!("root").context(consequent.clone());

        assert_eq!(err.to_string(), "outer: inner: root");
        assert_eq!(consequent.to_string(), "outer: inner");
    }

    #[test]
    fn anyhow_bridge() {
        let our_err: Error = anyhow::anyhow!("custom resolver failed").into();
        assert_eq!(our_err.to_string(), "custom resolver failed");
        assert!(std::error::Error::source(&our_err).is_some());
    }

    #[test]
    fn invalid_key_count_none() {
        let err = Error::invalid_key_count("Order", 0);
        assert!(err.is_invalid_key_count());
        assert_eq!(
            err.to_string(),
            "invalid key count: `Order` has no key members"
        );
    }

    #[test]
    fn invalid_key_count_many() {
        let err = Error::invalid_key_count("OrderLine", 2);
        assert_eq!(
            err.to_string(),
            "invalid key count: `OrderLine` has 2 key members, expected exactly one"
        );
    }

    #[test]
    fn unresolved_foreign_key() {
        let err = Error::unresolved_foreign_key("Order", "Product");
        assert!(err.is_unresolved_foreign_key());
        assert_eq!(
            err.to_string(),
            "unresolved foreign key: no relation between `Order` and `Product`"
        );
    }

    #[test]
    fn unknown_model_with_context() {
        let err = Error::unknown_model("app::Invoice").context(err!("table name lookup"));
        assert!(!err.is_unknown_model());
        assert_eq!(
            err.to_string(),
            "table name lookup: unknown model: `app::Invoice` is not registered with the schema"
        );
    }

    #[test]
    fn invalid_schema() {
        let err = Error::invalid_schema("model `User` registered twice");
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "invalid schema: model `User` registered twice"
        );
    }
}
