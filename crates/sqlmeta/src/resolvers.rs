mod cache;
use cache::Cache;

use crate::{ColumnPropertyInfo, Config, ForeignKeyInfo, TableName};

use sqlmeta_core::{
    schema::{FieldId, ModelId},
    Entity, Result, Schema,
};
use sqlmeta_sql::{BuilderKind, Comma, Period, SqlBuilder};

use std::sync::Arc;

/// Entry point for type metadata.
///
/// Each lookup consults a cache first and calls the configured strategy only
/// on a miss. Results are never evicted: models are immutable for the lifetime
/// of the schema. `Resolvers` is `Send + Sync` and meant to be shared.
pub struct Resolvers {
    schema: Arc<Schema>,
    config: Config,

    table_names: Cache<(BuilderKind, ModelId), Arc<TableName>>,

    /// `None` selects all columns
    select_expressions: Cache<(BuilderKind, ModelId), Option<Arc<[String]>>>,

    /// Keyed by dialect, field and whether the table alias is included
    column_names: Cache<(BuilderKind, FieldId, bool), Arc<str>>,

    key_properties: Cache<ModelId, Arc<[ColumnPropertyInfo]>>,
    properties: Cache<ModelId, Arc<[ColumnPropertyInfo]>>,

    /// Keyed by (source, including)
    foreign_keys: Cache<(ModelId, ModelId), ForeignKeyInfo>,
}

impl Resolvers {
    pub fn new(schema: impl Into<Arc<Schema>>, config: Config) -> Self {
        Self {
            schema: schema.into(),
            config,
            table_names: Cache::new(),
            select_expressions: Cache::new(),
            column_names: Cache::new(),
            key_properties: Cache::new(),
            properties: Cache::new(),
            foreign_keys: Cache::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The key fields of `model`, as found by the key-property resolver.
    pub fn key_properties(&self, model: impl Into<ModelId>) -> Result<Arc<[ColumnPropertyInfo]>> {
        let model = self.schema.get(model)?;

        let keys = self.key_properties.get_or_try_insert_with(model.id, || {
            self.config
                .key_property_resolver
                .resolve_key_properties(self, model)
                .map(Arc::from)
        })?;

        self.config.diagnostics.emit(|| {
            let names: Vec<_> = keys.iter().map(|key| key.name.as_str()).collect();
            format!(
                "Resolved property '{}' as key property for '{}'",
                names.join(", "),
                model.name
            )
        });

        Ok(keys)
    }

    /// The mapped fields of `model`, in declaration order.
    pub fn properties(&self, model: impl Into<ModelId>) -> Result<Arc<[ColumnPropertyInfo]>> {
        let model = self.schema.get(model)?;

        let properties = self.properties.get_or_try_insert_with(model.id, || {
            self.config
                .property_resolver
                .resolve_properties(model)
                .map(Arc::from)
        })?;

        self.config.diagnostics.emit(|| {
            let names: Vec<_> = properties.iter().map(|p| p.name.as_str()).collect();
            format!(
                "Resolved properties '{}' for '{}'",
                names.join(", "),
                model.name
            )
        });

        Ok(properties)
    }

    /// The quoted table name of `model`.
    ///
    /// A schema-qualified name is quoted segment by segment, as a single quoted
    /// identifier cannot contain the separator. The alias is quoted whole.
    pub fn table(
        &self,
        model: impl Into<ModelId>,
        builder: &dyn SqlBuilder,
    ) -> Result<Arc<TableName>> {
        let model = self.schema.get(model)?;

        let table = self
            .table_names
            .get_or_try_insert_with((builder.kind(), model.id), || {
                let resolved = self.config.table_name_resolver.resolve_table_name(model);

                let segments = resolved.name.split('.');
                let name = Period(segments.map(|s| builder.quote_identifier(s))).to_string();
                let alias = builder.quote_identifier(&resolved.alias);

                Ok(Arc::new(TableName::with_alias(name, alias)))
            })?;

        self.config
            .diagnostics
            .emit(|| format!("Resolved table name '{table}' for '{}'", model.name));

        Ok(table)
    }

    /// The `(left, right)` columns joining `including` to `source`.
    pub fn join_properties(
        &self,
        builder: &dyn SqlBuilder,
        source: impl Into<ModelId>,
        including: impl Into<ModelId>,
    ) -> Result<(String, String)> {
        let source = self.schema.get(source)?;
        let including = self.schema.get(including)?;

        let (left, right) = self.config.multi_map_join_resolver.resolve_join_properties(
            self,
            builder,
            source.id,
            including.id,
        )?;

        self.config.diagnostics.emit(|| {
            format!(
                "Resolved join for {} -> {} as {left} = {right}",
                source.name, including.name
            )
        });

        Ok((left, right))
    }

    /// The foreign key linking `source` and `including`, and its relation.
    pub fn foreign_key_property(
        &self,
        source: impl Into<ModelId>,
        including: impl Into<ModelId>,
    ) -> Result<ForeignKeyInfo> {
        let source = self.schema.get(source)?;
        let including = self.schema.get(including)?;

        let info = self
            .foreign_keys
            .get_or_try_insert_with((source.id, including.id), || {
                self.config
                    .foreign_key_property_resolver
                    .resolve_foreign_key_property(&self.schema, source, including)
            })?;

        self.config.diagnostics.emit(|| {
            format!(
                "Resolved property '{}' ({}) as foreign key between '{}' and '{}'",
                self.field_path(info.field),
                info.relation,
                source.name,
                including.name
            )
        });

        Ok(info)
    }

    /// The comma separated column list to select for `model`, or `*`.
    pub fn select_expression(
        &self,
        model: impl Into<ModelId>,
        builder: &dyn SqlBuilder,
    ) -> Result<String> {
        let model = self.schema.get(model)?;

        let fields = self
            .select_expressions
            .get_or_try_insert_with((builder.kind(), model.id), || {
                let fields = self
                    .config
                    .select_expression_resolver
                    .resolve_select_expression(self, model, builder)?;
                Ok(fields.map(Arc::from))
            })?;

        let select = match &fields {
            Some(fields) => Comma(fields.iter()).to_string(),
            None => "*".to_string(),
        };

        self.config
            .diagnostics
            .emit(|| format!("Resolved select fields '{select}' for '{}'", model.name));

        Ok(select)
    }

    /// The select expression of a multi-model query.
    ///
    /// If any model selects `*`, the whole expression is `*`. Otherwise the
    /// non-empty column lists are joined in the given order, falling back to
    /// `*` when there are none.
    pub fn select_expression_many<I>(&self, models: I, builder: &dyn SqlBuilder) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<ModelId>,
    {
        let mut fragments = vec![];

        for model in models {
            let fragment = self.select_expression(model, builder)?;

            if fragment == "*" {
                return Ok(fragment);
            }

            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }

        if fragments.is_empty() {
            return Ok("*".to_string());
        }

        Ok(Comma(&fragments).to_string())
    }

    /// The quoted column of `field`, qualified with the table alias according
    /// to [`Config::include_table_name`].
    pub fn column(&self, field: impl Into<FieldId>, builder: &dyn SqlBuilder) -> Result<Arc<str>> {
        self.column_with(field, builder, self.config.include_table_name)
    }

    /// The quoted column of `field`.
    ///
    /// With `include_table_name`, the column is prefixed with its table's alias
    /// (`alias.column`), except for fields of synthetic models, which have no
    /// table.
    pub fn column_with(
        &self,
        field: impl Into<FieldId>,
        builder: &dyn SqlBuilder,
        include_table_name: bool,
    ) -> Result<Arc<str>> {
        let field_id = field.into();
        let field = self.schema.get_field(field_id)?;

        let column = self.column_names.get_or_try_insert_with(
            (builder.kind(), field_id, include_table_name),
            || {
                let name = self.config.column_name_resolver.resolve_column_name(field);
                let column = builder.quote_identifier(&name);

                if include_table_name && !self.schema.model(field_id.model).synthetic {
                    let table = self.table(field_id.model, builder)?;
                    return Ok(Arc::from(format!("{}.{column}", table.alias)));
                }

                Ok(Arc::from(column))
            },
        )?;

        self.config.diagnostics.emit(|| {
            format!(
                "Resolved column name '{column}' for '{}'",
                self.field_path(field_id)
            )
        });

        Ok(column)
    }

    /// [`key_properties`](Self::key_properties) of the model describing `T`.
    pub fn key_properties_for<T: Entity>(&self) -> Result<Arc<[ColumnPropertyInfo]>> {
        self.key_properties(self.schema.model_id::<T>()?)
    }

    /// [`properties`](Self::properties) of the model describing `T`.
    pub fn properties_for<T: Entity>(&self) -> Result<Arc<[ColumnPropertyInfo]>> {
        self.properties(self.schema.model_id::<T>()?)
    }

    /// [`table`](Self::table) of the model describing `T`.
    pub fn table_for<T: Entity>(&self, builder: &dyn SqlBuilder) -> Result<Arc<TableName>> {
        self.table(self.schema.model_id::<T>()?, builder)
    }

    /// [`join_properties`](Self::join_properties) between the models
    /// describing `S` and `I`.
    pub fn join_properties_for<S: Entity, I: Entity>(
        &self,
        builder: &dyn SqlBuilder,
    ) -> Result<(String, String)> {
        self.join_properties(
            builder,
            self.schema.model_id::<S>()?,
            self.schema.model_id::<I>()?,
        )
    }

    /// [`select_expression`](Self::select_expression) of the model describing
    /// `T`.
    pub fn select_expression_for<T: Entity>(&self, builder: &dyn SqlBuilder) -> Result<String> {
        self.select_expression(self.schema.model_id::<T>()?, builder)
    }

    /// [`column`](Self::column) of the field of `T` named `name`.
    pub fn column_for<T: Entity>(&self, name: &str, builder: &dyn SqlBuilder) -> Result<Arc<str>> {
        self.column(self.schema.field_id::<T>(name)?, builder)
    }

    fn field_path(&self, field: FieldId) -> String {
        let model = self.schema.model(field.model);
        format!(
            "{}::{}",
            model.name,
            model.field_by_id(field).name.app_name
        )
    }
}

impl std::fmt::Debug for Resolvers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolvers")
            .field("schema", &self.schema)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
