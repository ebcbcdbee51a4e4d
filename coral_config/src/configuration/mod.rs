//! Runtime configuration state and value resolution.
//!
//! A [`Configuration`] binds values to the parameters of a
//! [`SchemaAggregate`] in two layers: explicit values placed by
//! [`Configuration::set`] and overwritten defaults placed by
//! [`Configuration::set_overwritten_default`]. Declared defaults form the
//! implicit third layer.
//!
//! Reads walk the layers from the most specific to the least:
//!
//! 1. an explicit value on the parameter, its primary, the primary's aliases,
//!    then its deprecated names;
//! 2. an overwritten default, in the same order, when the parameter would
//!    otherwise resolve to a declared default;
//! 3. the declared default of the parameter, then of its primary, then the
//!    single distinct default among the primary's aliases and deprecated
//!    names.

mod resolve;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{CoralError, ResolutionError, UsageError};
use crate::listener::DeprecationListener;
use crate::param::{Key, ParamDescriptor, ParamId, Role};
use crate::params::parse_params;
use crate::schema::{SchemaAggregate, ScopeId};
use crate::value::{ParamValue, Value};
use crate::{CoralResult, CoralResultExt};

/// Anything that names a descriptor of an aggregate.
///
/// Implemented for typed [`Key`]s, [`ParamDescriptor`]s, [`ParamId`]s and
/// references to them.
pub trait ParamRef {
    /// The descriptor in `aggregate` this reference names.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::UnknownDescriptor`] when the descriptor is not
    /// part of `aggregate`.
    fn locate<'a>(&self, aggregate: &'a SchemaAggregate) -> CoralResult<&'a ParamDescriptor>;
}

impl<T> ParamRef for Key<T> {
    fn locate<'a>(&self, aggregate: &'a SchemaAggregate) -> CoralResult<&'a ParamDescriptor> {
        aggregate.descriptor_for(*self)
    }
}

impl ParamRef for ParamDescriptor {
    fn locate<'a>(&self, aggregate: &'a SchemaAggregate) -> CoralResult<&'a ParamDescriptor> {
        aggregate
            .descriptor(self.id())
            .ok_or_else(|| unknown(self.to_string()))
    }
}

impl ParamRef for ParamId {
    fn locate<'a>(&self, aggregate: &'a SchemaAggregate) -> CoralResult<&'a ParamDescriptor> {
        aggregate
            .descriptor(*self)
            .ok_or_else(|| unknown(format!("{}#{}", self.scope(), self.index())))
    }
}

impl<R: ParamRef + ?Sized> ParamRef for &R {
    fn locate<'a>(&self, aggregate: &'a SchemaAggregate) -> CoralResult<&'a ParamDescriptor> {
        (**self).locate(aggregate)
    }
}

fn unknown(descriptor: String) -> Arc<CoralError> {
    Arc::new(UsageError::UnknownDescriptor { descriptor }.into())
}

/// Values bound to the parameters of one [`SchemaAggregate`].
///
/// Each layer sits behind its own lock, so every single operation is atomic
/// while a read racing a write may see either state. Listeners are called
/// without any lock held.
///
/// ```
/// use coral_config::{Configuration, SchemaAggregate, config_scope, i32_param};
///
/// config_scope! {
///     struct Retry {
///         MAX_RETRIES: i32 = i32_param().with_default(3),
///         RETRIES: i32 = i32_param().alias_of(Self::MAX_RETRIES),
///     }
/// }
///
/// let aggregate = SchemaAggregate::builder().scope::<Retry>().build()?;
/// let config = Configuration::new(aggregate);
/// assert_eq!(config.get(Retry::MAX_RETRIES)?, Some(3));
///
/// config.set(Retry::RETRIES, 5)?;
/// assert_eq!(config.get(Retry::MAX_RETRIES)?, Some(5));
/// # Ok::<(), std::sync::Arc<coral_config::CoralError>>(())
/// ```
pub struct Configuration {
    aggregate: SchemaAggregate,
    explicit: Mutex<HashMap<ParamId, Value>>,
    overwritten: Mutex<HashMap<ParamId, Option<Value>>>,
    listeners: Mutex<Vec<Arc<dyn DeprecationListener>>>,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("scopes", &self.aggregate.scopes())
            .field("explicit", &self.explicit.lock().len())
            .field("overwritten", &self.overwritten.lock().len())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

impl Configuration {
    /// An empty configuration over `aggregate`.
    #[must_use]
    pub fn new(aggregate: SchemaAggregate) -> Self {
        Self {
            aggregate,
            explicit: Mutex::new(HashMap::new()),
            overwritten: Mutex::new(HashMap::new()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// A configuration seeded from a `name=value` parameter string.
    ///
    /// # Errors
    ///
    /// Returns the parse errors of every bad token; see
    /// [`parse_params`](crate::parse_params).
    pub fn with_params(aggregate: SchemaAggregate, params: &str) -> CoralResult<Self> {
        let config = Self::new(aggregate);
        config.apply_params(params)?;
        Ok(config)
    }

    /// An independent copy of `other`'s explicit values and overwritten
    /// defaults. Listeners are not copied.
    #[must_use]
    pub fn copy_of(other: &Self) -> Self {
        Self {
            aggregate: other.aggregate.clone(),
            explicit: Mutex::new(other.explicit.lock().clone()),
            overwritten: Mutex::new(other.overwritten.lock().clone()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Aggregate this configuration draws its parameters from.
    #[must_use]
    pub const fn aggregate(&self) -> &SchemaAggregate {
        &self.aggregate
    }

    /// Parse `params` and store every value as an explicit value.
    ///
    /// Nothing is stored unless every token is valid.
    ///
    /// # Errors
    ///
    /// Returns the parse errors of every bad token.
    pub fn apply_params(&self, params: &str) -> CoralResult<()> {
        for parsed in parse_params(&self.aggregate, params)? {
            self.set_value(parsed.descriptor, parsed.value)?;
        }
        Ok(())
    }

    /// Resolve the value of `param`.
    ///
    /// Returns `None` only for strings and enums resolving to null.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate and a
    /// [`ResolutionError`] when no value or default can be found, or when
    /// several distinct defaults compete.
    pub fn get_value(&self, param: impl ParamRef) -> CoralResult<Option<Value>> {
        let descriptor = param.locate(&self.aggregate)?;
        self.notify(descriptor);
        let order = resolve::lookup_order(&self.aggregate, descriptor);

        let explicit = resolve::lookup(&order, &self.explicit.lock());
        if let Some(value) = explicit {
            return resolve::coerce(descriptor, Some(value));
        }
        if resolve::will_return_default(&self.aggregate, descriptor) {
            let overwritten = resolve::lookup(&order, &self.overwritten.lock());
            if let Some(value) = overwritten {
                return resolve::coerce(descriptor, value);
            }
        }
        resolve::declared_default(&self.aggregate, descriptor)
    }

    /// Store `value` as the explicit value of `param`, returning the previous
    /// explicit value of `param` itself.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate or a
    /// value of another type.
    pub fn set_value(&self, param: impl ParamRef, value: Value) -> CoralResult<Option<Value>> {
        let descriptor = param.locate(&self.aggregate)?;
        check_type(descriptor, &value)?;
        self.notify(descriptor);
        Ok(self.explicit.lock().insert(descriptor.id(), value))
    }

    /// Remove the explicit value of `param`, returning it.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate.
    pub fn unset_value(&self, param: impl ParamRef) -> CoralResult<Option<Value>> {
        let descriptor = param.locate(&self.aggregate)?;
        self.notify(descriptor);
        Ok(self.explicit.lock().remove(&descriptor.id()))
    }

    /// Replace the default `param` resolves to. `None` stores null, which
    /// only strings and enums accept.
    ///
    /// Returns whether `param` already had an overwritten default.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate, a
    /// value of another type, a null for a non-nullable type, or a parameter
    /// that would never resolve to a default.
    pub fn set_overwritten_default_value(
        &self,
        param: impl ParamRef,
        value: Option<Value>,
    ) -> CoralResult<bool> {
        let descriptor = param.locate(&self.aggregate)?;
        match &value {
            Some(value) => check_type(descriptor, value)?,
            None if descriptor.value_type().is_nullable() => {}
            None => {
                return Err(UsageError::NullNotAllowed {
                    descriptor: descriptor.to_string(),
                    value_type: descriptor.value_type().to_string(),
                })
                .into_coral();
            }
        }
        self.notify(descriptor);
        if !resolve::will_return_default(&self.aggregate, descriptor) {
            return Err(UsageError::NoDefaultToOverwrite {
                descriptor: descriptor.to_string(),
            })
            .into_coral();
        }
        Ok(self
            .overwritten
            .lock()
            .insert(descriptor.id(), value)
            .is_some())
    }

    /// Overwritten default stored for `param` itself; `None` when absent or
    /// null.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate.
    pub fn overwritten_default_value(&self, param: impl ParamRef) -> CoralResult<Option<Value>> {
        let descriptor = param.locate(&self.aggregate)?;
        self.notify(descriptor);
        Ok(self
            .overwritten
            .lock()
            .get(&descriptor.id())
            .cloned()
            .flatten())
    }

    /// Whether `param` itself has an overwritten default, null included.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate.
    pub fn has_overwritten_default(&self, param: impl ParamRef) -> CoralResult<bool> {
        let descriptor = param.locate(&self.aggregate)?;
        self.notify(descriptor);
        Ok(self.overwritten.lock().contains_key(&descriptor.id()))
    }

    /// Remove the overwritten default of `param`, returning whether one was
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate.
    pub fn clear_overwritten_default(&self, param: impl ParamRef) -> CoralResult<bool> {
        let descriptor = param.locate(&self.aggregate)?;
        self.notify(descriptor);
        Ok(self.overwritten.lock().remove(&descriptor.id()).is_some())
    }

    /// Remove every overwritten default.
    pub fn clear_all_overwritten_defaults(&self) {
        self.overwritten.lock().clear();
    }

    /// Whether `param`, its primary, or any alias or deprecated name of the
    /// primary has an explicit value.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] for a descriptor outside the aggregate.
    pub fn has(&self, param: impl ParamRef) -> CoralResult<bool> {
        let descriptor = param.locate(&self.aggregate)?;
        self.notify(descriptor);
        let order = resolve::lookup_order(&self.aggregate, descriptor);
        Ok(resolve::present(&order, &self.explicit.lock()))
    }

    /// Snapshot of the descriptors holding an explicit value, in aggregate
    /// order.
    #[must_use]
    pub fn list_keys(&self) -> Vec<&ParamDescriptor> {
        let ids: HashSet<ParamId> = self.explicit.lock().keys().copied().collect();
        self.snapshot(&ids)
    }

    /// Snapshot of the descriptors holding an overwritten default, in
    /// aggregate order.
    #[must_use]
    pub fn overwritten_default_keys(&self) -> Vec<&ParamDescriptor> {
        let ids: HashSet<ParamId> = self.overwritten.lock().keys().copied().collect();
        self.snapshot(&ids)
    }

    /// Number of explicit values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.explicit.lock().len()
    }

    /// Whether no explicit value is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.explicit.lock().is_empty()
    }

    /// Every descriptor of the aggregate, schema by schema.
    pub fn all_descriptors(&self) -> impl Iterator<Item = &ParamDescriptor> + '_ {
        self.aggregate.all_descriptors()
    }

    /// Declaring scopes of the aggregate, in order.
    #[must_use]
    pub fn scopes(&self) -> Vec<ScopeId> {
        self.aggregate.scopes()
    }

    /// Register `listener`, returning `false` if this exact listener is
    /// already registered.
    pub fn add_listener(&self, listener: Arc<dyn DeprecationListener>) -> bool {
        let mut listeners = self.listeners.lock();
        if listeners.iter().any(|known| Arc::ptr_eq(known, &listener)) {
            return false;
        }
        listeners.push(listener);
        true
    }

    /// Unregister `listener`, returning whether it was registered.
    pub fn remove_listener(&self, listener: &Arc<dyn DeprecationListener>) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|known| !Arc::ptr_eq(known, listener));
        listeners.len() != before
    }

    /// Resolve the value of `key`.
    ///
    /// # Errors
    ///
    /// As for [`Configuration::get_value`].
    pub fn get<T: ParamValue>(&self, key: Key<T>) -> CoralResult<Option<T>> {
        self.get_value(key)?
            .map(|value| typed(key, value))
            .transpose()
    }

    /// Resolve the value of `key`, treating null as an error.
    ///
    /// # Errors
    ///
    /// As for [`Configuration::get_value`], plus [`ResolutionError::Null`]
    /// when the value resolves to null.
    pub fn require<T: ParamValue>(&self, key: Key<T>) -> CoralResult<T> {
        self.get(key)?.ok_or_else(|| {
            Arc::new(
                ResolutionError::Null {
                    descriptor: format!("{key:?}"),
                }
                .into(),
            )
        })
    }

    /// Store `value` as the explicit value of `key`, returning the previous
    /// one.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] when `key`'s scope is not in the aggregate.
    pub fn set<T: ParamValue>(&self, key: Key<T>, value: T) -> CoralResult<Option<T>> {
        self.set_value(key, value.into_value())?
            .map(|previous| typed(key, previous))
            .transpose()
    }

    /// Remove the explicit value of `key`, returning it.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] when `key`'s scope is not in the aggregate.
    pub fn unset<T: ParamValue>(&self, key: Key<T>) -> CoralResult<Option<T>> {
        self.unset_value(key)?
            .map(|previous| typed(key, previous))
            .transpose()
    }

    /// Replace the default `key` resolves to.
    ///
    /// # Errors
    ///
    /// As for [`Configuration::set_overwritten_default_value`].
    pub fn set_overwritten_default<T: ParamValue>(&self, key: Key<T>, value: T) -> CoralResult<bool> {
        self.set_overwritten_default_value(key, Some(value.into_value()))
    }

    /// Overwrite the default of a string or enum `key` with null.
    ///
    /// # Errors
    ///
    /// As for [`Configuration::set_overwritten_default_value`].
    pub fn set_overwritten_default_null<T: ParamValue>(&self, key: Key<T>) -> CoralResult<bool> {
        self.set_overwritten_default_value(key, None)
    }

    /// Overwritten default stored for `key` itself.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] when `key`'s scope is not in the aggregate.
    pub fn get_overwritten_default<T: ParamValue>(&self, key: Key<T>) -> CoralResult<Option<T>> {
        self.overwritten_default_value(key)?
            .map(|value| typed(key, value))
            .transpose()
    }

    fn notify(&self, descriptor: &ParamDescriptor) {
        if descriptor.role() != Role::Deprecated {
            return;
        }
        let Some(primary) = self.aggregate.primary_of(descriptor) else {
            return;
        };
        let listeners = self.listeners.lock().clone();
        for listener in &listeners {
            listener.deprecated_access(descriptor, primary);
        }
    }

    fn snapshot(&self, ids: &HashSet<ParamId>) -> Vec<&ParamDescriptor> {
        self.aggregate
            .all_descriptors()
            .filter(|descriptor| ids.contains(&descriptor.id()))
            .collect()
    }
}

fn check_type(descriptor: &ParamDescriptor, value: &Value) -> CoralResult<()> {
    let found = value.value_type();
    if found == descriptor.value_type() {
        return Ok(());
    }
    Err(UsageError::TypeMismatch {
        descriptor: descriptor.to_string(),
        expected: descriptor.value_type().to_string(),
        found: found.to_string(),
    })
    .into_coral()
}

fn typed<T: ParamValue>(key: Key<T>, value: Value) -> CoralResult<T> {
    let found = value.value_type();
    T::from_value(value).ok_or_else(|| {
        Arc::new(
            UsageError::TypeMismatch {
                descriptor: format!("{key:?}"),
                expected: T::value_type().to_string(),
                found: found.to_string(),
            }
            .into(),
        )
    })
}
