//! Ordered aggregates of schemas backing one configuration.

use std::collections::HashMap;
use std::sync::Arc;

use uncased::Uncased;

use super::{DeclaringScope, Schema, ScopeId, schema_of};
use crate::error::{CoralError, SchemaError, UsageError};
use crate::param::{Key, ParamDescriptor, ParamId};
use crate::CoralResult;

/// The schemas a configuration draws its parameters from.
///
/// Parameter names are unique across the aggregate ignoring ASCII case:
/// `timeoutMs` and `timeoutms` cannot coexist.
///
/// ```
/// use coral_config::{SchemaAggregate, config_scope, i32_param, bool_param};
///
/// config_scope! {
///     struct X {
///         TIMEOUT_MS: i32 = i32_param().with_default(5),
///     }
/// }
/// config_scope! {
///     struct Y {
///         TIMEOUTMS: bool = bool_param().with_default(true),
///     }
/// }
///
/// assert!(SchemaAggregate::builder().scope::<X>().build().is_ok());
/// let err = SchemaAggregate::builder().scope::<X>().scope::<Y>().build();
/// assert!(err.is_err_and(|e| e.is_schema()));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaAggregate {
    schemas: Vec<Arc<Schema>>,
}

/// Collects scopes for a [`SchemaAggregate`].
#[derive(Debug, Default)]
#[must_use = "call `build` to obtain the aggregate"]
pub struct SchemaAggregateBuilder {
    loaders: Vec<fn() -> CoralResult<Arc<Schema>>>,
}

impl SchemaAggregateBuilder {
    /// Append scope `S`.
    pub fn scope<S: DeclaringScope>(mut self) -> Self {
        self.loaders.push(schema_of::<S>);
        self
    }

    /// Freeze every scope and check names across them.
    ///
    /// # Errors
    ///
    /// Returns the schema errors of every invalid scope, or a
    /// [`SchemaError`] when no scope was added or names collide.
    pub fn build(self) -> CoralResult<SchemaAggregate> {
        let mut schemas = Vec::with_capacity(self.loaders.len());
        let mut errors = Vec::new();
        for load in self.loaders {
            match load() {
                Ok(schema) => schemas.push(schema),
                Err(err) => errors.push(err),
            }
        }
        CoralError::check_all(errors)?;
        SchemaAggregate::from_schemas(schemas)
    }
}

impl SchemaAggregate {
    /// Start collecting scopes.
    pub fn builder() -> SchemaAggregateBuilder {
        SchemaAggregateBuilder::default()
    }

    /// Aggregate already frozen schemas, keeping their order.
    ///
    /// A schema listed twice is kept once.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyAggregate`] for an empty list and
    /// [`SchemaError::NameCollision`] for each pair of parameter names that
    /// differ only by case.
    pub fn from_schemas(schemas: Vec<Arc<Schema>>) -> CoralResult<Self> {
        if schemas.is_empty() {
            return Err(Arc::new(SchemaError::EmptyAggregate.into()));
        }
        let mut unique: Vec<Arc<Schema>> = Vec::with_capacity(schemas.len());
        for schema in schemas {
            if unique.iter().all(|seen| seen.scope() != schema.scope()) {
                unique.push(schema);
            }
        }

        let mut seen: HashMap<Uncased<'static>, &ParamDescriptor> = HashMap::new();
        let mut errors = Vec::new();
        for descriptor in unique.iter().flat_map(|schema| schema.descriptors()) {
            let key = Uncased::from(descriptor.param_name().to_owned());
            if let Some(first) = seen.get(&key) {
                errors.push(CoralError::from(SchemaError::NameCollision {
                    first: first.to_string(),
                    second: descriptor.to_string(),
                }));
            } else {
                seen.insert(key, descriptor);
            }
        }
        CoralError::check_all(errors)?;

        tracing::debug!(
            scopes = unique.len(),
            parameters = seen.len(),
            "schema aggregate built"
        );
        Ok(Self { schemas: unique })
    }

    /// Member schemas in order.
    #[must_use]
    pub fn schemas(&self) -> &[Arc<Schema>] {
        &self.schemas
    }

    /// Declaring scopes in order.
    #[must_use]
    pub fn scopes(&self) -> Vec<ScopeId> {
        self.schemas.iter().map(|schema| schema.scope()).collect()
    }

    /// Schema of `scope`, if it is a member.
    #[must_use]
    pub fn schema(&self, scope: ScopeId) -> Option<&Schema> {
        self.schemas
            .iter()
            .find(|schema| schema.scope() == scope)
            .map(AsRef::as_ref)
    }

    /// Whether some member schema holds `descriptor`.
    #[must_use]
    pub fn contains(&self, descriptor: &ParamDescriptor) -> bool {
        self.descriptor(descriptor.id()).is_some()
    }

    /// Descriptor with identity `id`.
    #[must_use]
    pub fn descriptor(&self, id: ParamId) -> Option<&ParamDescriptor> {
        self.schema(id.scope())
            .and_then(|schema| schema.descriptor(id))
    }

    /// Descriptor named by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::UnknownDescriptor`] when the key's scope is not
    /// part of this aggregate.
    pub fn descriptor_for<T>(&self, key: Key<T>) -> CoralResult<&ParamDescriptor> {
        self.schema(key.scope())
            .and_then(|schema| schema.field(key.field_name()))
            .ok_or_else(|| {
                Arc::new(
                    UsageError::UnknownDescriptor {
                        descriptor: format!("{key:?}"),
                    }
                    .into(),
                )
            })
    }

    /// First descriptor named `name` across schemas in order (case-sensitive).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ParamDescriptor> {
        self.schemas.iter().find_map(|schema| schema.get(name))
    }

    /// Every descriptor, schema by schema, in declaration order.
    pub fn all_descriptors(&self) -> impl Iterator<Item = &ParamDescriptor> + '_ {
        self.schemas.iter().flat_map(|schema| schema.descriptors())
    }

    /// Primary of an alias or deprecated descriptor.
    #[must_use]
    pub fn primary_of(&self, descriptor: &ParamDescriptor) -> Option<&ParamDescriptor> {
        self.schema(descriptor.holder())
            .and_then(|schema| schema.primary_of(descriptor))
    }

    /// Aliases of a primary, in declaration order.
    pub fn aliases_of<'a>(
        &'a self,
        descriptor: &'a ParamDescriptor,
    ) -> impl Iterator<Item = &'a ParamDescriptor> + 'a {
        self.schema(descriptor.holder())
            .into_iter()
            .flat_map(move |schema| schema.aliases_of(descriptor))
    }

    /// Deprecated names of a primary, in declaration order.
    pub fn deprecated_of<'a>(
        &'a self,
        descriptor: &'a ParamDescriptor,
    ) -> impl Iterator<Item = &'a ParamDescriptor> + 'a {
        self.schema(descriptor.holder())
            .into_iter()
            .flat_map(move |schema| schema.deprecated_of(descriptor))
    }
}
