mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Entity, Schema};

/// A Result type alias that uses sqlmeta's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
