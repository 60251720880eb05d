mod column_property;
pub use column_property::ColumnPropertyInfo;

mod foreign_key;
pub use foreign_key::{ForeignKeyInfo, ForeignKeyRelation};

mod table_name;
pub use table_name::TableName;
