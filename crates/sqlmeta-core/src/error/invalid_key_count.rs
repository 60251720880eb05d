use super::Error;

/// Error when a model has no key members, or several where a consumer needs
/// exactly one.
///
/// This occurs when:
/// - The key-property resolver finds no key member at all
/// - A join needs the single key of a model with a composite key
#[derive(Debug)]
pub(super) struct InvalidKeyCount {
    model: Box<str>,
    actual: usize,
}

impl std::error::Error for InvalidKeyCount {}

impl core::fmt::Display for InvalidKeyCount {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.actual {
            0 => write!(f, "invalid key count: `{}` has no key members", self.model),
            n => write!(
                f,
                "invalid key count: `{}` has {n} key members, expected exactly one",
                self.model
            ),
        }
    }
}

impl Error {
    /// Creates an invalid key count error for `model`, which has `actual` key
    /// members.
    pub fn invalid_key_count(model: impl Into<String>, actual: usize) -> Error {
        Error::from(super::ErrorKind::InvalidKeyCount(InvalidKeyCount {
            model: model.into().into(),
            actual,
        }))
    }

    /// Returns `true` if this error is an invalid key count error.
    pub fn is_invalid_key_count(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidKeyCount(_))
    }
}
