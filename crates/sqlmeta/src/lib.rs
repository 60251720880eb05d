//! Resolves table names, column names, keys and join keys for registered
//! record types, memoizing every result per distinct input.
//!
//! ```ignore
//! let schema = Schema::builder().register::<User>().build()?;
//! let resolvers = Resolvers::new(schema, Config::default());
//!
//! let table = resolvers.table_for::<User>(&Flavor::SqlServer)?;
//! assert_eq!(table.name, "[users]");
//! ```

mod config;
pub use config::{Config, ConfigBuilder};

mod diagnostics;
pub use diagnostics::LogReceived;

pub mod global;

mod metadata;
pub use metadata::{ColumnPropertyInfo, ForeignKeyInfo, ForeignKeyRelation, TableName};

pub mod resolve;

mod resolvers;
pub use resolvers::Resolvers;

pub use sqlmeta_core::{bail, err, schema, Entity, Error, Result, Schema};
pub use sqlmeta_sql::{BuilderKind, Flavor, SqlBuilder};
