use crate::diagnostics::{Diagnostics, LogReceived};
use crate::resolve::{
    ColumnNameResolver, DefaultColumnNameResolver, DefaultForeignKeyPropertyResolver,
    DefaultKeyPropertyResolver, DefaultMultiMapJoinResolver, DefaultPropertyResolver,
    DefaultSelectExpressionResolver, DefaultTableNameResolver, ForeignKeyPropertyResolver,
    KeyPropertyResolver, MultiMapJoinResolver, PropertyResolver, SelectExpressionResolver,
    TableNameResolver,
};

use std::fmt;
use std::sync::Arc;

/// The strategies and options a [`Resolvers`](crate::Resolvers) instance uses.
#[derive(Clone)]
pub struct Config {
    pub(crate) key_property_resolver: Arc<dyn KeyPropertyResolver>,
    pub(crate) property_resolver: Arc<dyn PropertyResolver>,
    pub(crate) table_name_resolver: Arc<dyn TableNameResolver>,
    pub(crate) column_name_resolver: Arc<dyn ColumnNameResolver>,
    pub(crate) foreign_key_property_resolver: Arc<dyn ForeignKeyPropertyResolver>,
    pub(crate) multi_map_join_resolver: Arc<dyn MultiMapJoinResolver>,
    pub(crate) select_expression_resolver: Arc<dyn SelectExpressionResolver>,

    /// Whether `Resolvers::column` qualifies columns with the table alias
    pub(crate) include_table_name: bool,

    pub(crate) diagnostics: Diagnostics,
}

/// Builds a [`Config`], starting from the default strategies.
#[derive(Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            config: Config {
                key_property_resolver: Arc::new(DefaultKeyPropertyResolver),
                property_resolver: Arc::new(DefaultPropertyResolver),
                table_name_resolver: Arc::new(DefaultTableNameResolver),
                column_name_resolver: Arc::new(DefaultColumnNameResolver),
                foreign_key_property_resolver: Arc::new(DefaultForeignKeyPropertyResolver),
                multi_map_join_resolver: Arc::new(DefaultMultiMapJoinResolver),
                select_expression_resolver: Arc::new(DefaultSelectExpressionResolver),
                include_table_name: true,
                diagnostics: Diagnostics::default(),
            },
        }
    }

    pub fn include_table_name(&self) -> bool {
        self.include_table_name
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl ConfigBuilder {
    pub fn key_property_resolver(&mut self, resolver: impl KeyPropertyResolver + 'static) -> &mut Self {
        self.config.key_property_resolver = Arc::new(resolver);
        self
    }

    pub fn property_resolver(&mut self, resolver: impl PropertyResolver + 'static) -> &mut Self {
        self.config.property_resolver = Arc::new(resolver);
        self
    }

    pub fn table_name_resolver(&mut self, resolver: impl TableNameResolver + 'static) -> &mut Self {
        self.config.table_name_resolver = Arc::new(resolver);
        self
    }

    pub fn column_name_resolver(&mut self, resolver: impl ColumnNameResolver + 'static) -> &mut Self {
        self.config.column_name_resolver = Arc::new(resolver);
        self
    }

    pub fn foreign_key_property_resolver(
        &mut self,
        resolver: impl ForeignKeyPropertyResolver + 'static,
    ) -> &mut Self {
        self.config.foreign_key_property_resolver = Arc::new(resolver);
        self
    }

    pub fn multi_map_join_resolver(
        &mut self,
        resolver: impl MultiMapJoinResolver + 'static,
    ) -> &mut Self {
        self.config.multi_map_join_resolver = Arc::new(resolver);
        self
    }

    pub fn select_expression_resolver(
        &mut self,
        resolver: impl SelectExpressionResolver + 'static,
    ) -> &mut Self {
        self.config.select_expression_resolver = Arc::new(resolver);
        self
    }

    /// Whether columns are qualified with their table alias when no explicit
    /// choice is made. Defaults to `true`.
    pub fn include_table_name(&mut self, include: bool) -> &mut Self {
        self.config.include_table_name = include;
        self
    }

    /// Receive a line describing every resolution.
    pub fn log_received(&mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> &mut Self {
        let callback: LogReceived = Arc::new(callback);
        self.config.diagnostics = Diagnostics::new(Some(callback));
        self
    }

    pub fn build(&self) -> Config {
        self.config.clone()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("include_table_name", &self.include_table_name)
            .field("log_received", &self.diagnostics.has_sink())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for ConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigBuilder")
            .field("config", &self.config)
            .finish()
    }
}
