use super::Error;

/// Error when a process-wide resolver instance is installed a second time.
#[derive(Debug)]
pub(super) struct AlreadyInstalled;

impl std::error::Error for AlreadyInstalled {}

impl core::fmt::Display for AlreadyInstalled {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("a global resolver instance is already installed")
    }
}

impl Error {
    /// Creates an already installed error.
    pub fn already_installed() -> Error {
        Error::from(super::ErrorKind::AlreadyInstalled(AlreadyInstalled))
    }

    /// Returns `true` if this error is an already installed error.
    pub fn is_already_installed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AlreadyInstalled(_))
    }
}
