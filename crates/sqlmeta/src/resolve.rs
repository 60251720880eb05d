//! Replaceable resolution strategies.
//!
//! Each concern has a trait and a default implementation. Custom strategies
//! are installed through [`ConfigBuilder`](crate::ConfigBuilder). Strategies
//! must be deterministic: the facade caches their first published result per
//! key and never asks again.

mod column_name;
pub use column_name::{ColumnNameResolver, DefaultColumnNameResolver};

mod foreign_key;
pub use foreign_key::{DefaultForeignKeyPropertyResolver, ForeignKeyPropertyResolver};

mod key_property;
pub use key_property::{DefaultKeyPropertyResolver, KeyPropertyResolver};

mod multi_map_join;
pub use multi_map_join::{DefaultMultiMapJoinResolver, MultiMapJoinResolver};

mod property;
pub use property::{DefaultPropertyResolver, PropertyResolver};

mod select_expression;
pub use select_expression::{
    ColumnListSelectExpressionResolver, DefaultSelectExpressionResolver, SelectExpressionResolver,
};

mod table_name;
pub use table_name::{DefaultTableNameResolver, TableNameResolver};
