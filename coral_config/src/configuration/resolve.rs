//! Layered lookup and default discovery for one descriptor.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{CoralError, ResolutionError, UsageError};
use crate::param::{DeclaredDefault, ParamDescriptor, ParamId};
use crate::schema::SchemaAggregate;
use crate::value::Value;
use crate::{CoralResult, CoralResultExt};

/// Identities consulted by a layered lookup, highest precedence first.
///
/// A non-primary descriptor is followed by its primary; the primary is
/// followed by its aliases and then its deprecated names, each in
/// declaration order.
pub(super) fn lookup_order(aggregate: &SchemaAggregate, descriptor: &ParamDescriptor) -> Vec<ParamId> {
    let mut order = vec![descriptor.id()];
    let primary = match aggregate.primary_of(descriptor) {
        Some(primary) => {
            order.push(primary.id());
            primary
        }
        None => descriptor,
    };
    order.extend(aggregate.aliases_of(primary).map(ParamDescriptor::id));
    order.extend(aggregate.deprecated_of(primary).map(ParamDescriptor::id));
    order
}

/// First entry of `layer` along `order`.
pub(super) fn lookup<V: Clone>(order: &[ParamId], layer: &HashMap<ParamId, V>) -> Option<V> {
    order.iter().find_map(|id| layer.get(id)).cloned()
}

/// Whether any identity along `order` has an entry in `layer`.
pub(super) fn present<V>(order: &[ParamId], layer: &HashMap<ParamId, V>) -> bool {
    order.iter().any(|id| layer.contains_key(id))
}

/// Whether resolution would end at a declared default rather than failing.
pub(super) fn will_return_default(aggregate: &SchemaAggregate, descriptor: &ParamDescriptor) -> bool {
    if !descriptor.is_required() {
        return true;
    }
    aggregate.primary_of(descriptor).map_or_else(
        || distinct_defaults(aggregate, descriptor).len() == 1,
        |primary| !primary.is_required(),
    )
}

/// Declared default `descriptor` resolves to once both layers miss.
pub(super) fn declared_default(
    aggregate: &SchemaAggregate,
    descriptor: &ParamDescriptor,
) -> CoralResult<Option<Value>> {
    if let DeclaredDefault::Value(value) = descriptor.declared_default() {
        return Ok(value.clone());
    }
    if let Some(primary) = aggregate.primary_of(descriptor) {
        return match primary.declared_default() {
            DeclaredDefault::Value(value) => coerce(descriptor, value.clone()),
            DeclaredDefault::Required => Err(missing(descriptor)),
        };
    }
    match distinct_defaults(aggregate, descriptor).as_slice() {
        [only] => coerce(descriptor, only.clone()),
        [] => Err(missing(descriptor)),
        many => Err(Arc::new(
            ResolutionError::AmbiguousDefault {
                descriptor: descriptor.to_string(),
                candidates: many.len(),
            }
            .into(),
        )),
    }
}

/// Convert a resolved value to the type of `descriptor`.
pub(super) fn coerce(descriptor: &ParamDescriptor, value: Option<Value>) -> CoralResult<Option<Value>> {
    let value_type = descriptor.value_type();
    match value {
        Some(value) => value.coerce_to(value_type).map(Some).into_coral(),
        None if value_type.is_nullable() => Ok(None),
        None => Err(UsageError::NullNotAllowed {
            descriptor: descriptor.to_string(),
            value_type: value_type.to_string(),
        })
        .into_coral(),
    }
}

/// Distinct declared defaults of a primary's aliases and deprecated names.
///
/// Aliases come first. Null counts as a default of its own.
fn distinct_defaults(aggregate: &SchemaAggregate, primary: &ParamDescriptor) -> Vec<Option<Value>> {
    let mut distinct: Vec<Option<Value>> = Vec::new();
    let related = aggregate
        .aliases_of(primary)
        .chain(aggregate.deprecated_of(primary));
    for candidate in related {
        let DeclaredDefault::Value(value) = candidate.declared_default() else {
            continue;
        };
        if !distinct.iter().any(|known| same_default(known.as_ref(), value.as_ref())) {
            distinct.push(value.clone());
        }
    }
    distinct
}

fn same_default(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.same_as(b),
        (None, None) => true,
        _ => false,
    }
}

fn missing(descriptor: &ParamDescriptor) -> Arc<CoralError> {
    Arc::new(
        ResolutionError::Missing {
            descriptor: descriptor.to_string(),
        }
        .into(),
    )
}
