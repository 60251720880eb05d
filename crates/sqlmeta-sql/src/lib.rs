//! The SQL-builder collaborator: dialect-specific identifier quoting.

mod builder;
pub use builder::{BuilderKind, SqlBuilder};

mod delim;
pub use delim::{Comma, Delimited, Period};

mod flavor;
pub use flavor::Flavor;

mod ident;
pub use ident::Ident;
