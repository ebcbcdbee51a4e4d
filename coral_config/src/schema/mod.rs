//! Frozen, per-scope collections of parameter descriptors.

mod aggregate;
mod cache;
mod scope;

use std::collections::HashMap;

pub use aggregate::{SchemaAggregate, SchemaAggregateBuilder};
pub use cache::{clear_schema_cache, schema_of};
pub use scope::{DeclaringScope, ScopeId};

use crate::error::{CoralError, SchemaError};
use crate::param::naming::param_name;
use crate::param::{FieldDecl, KeyRef, ParamDescriptor, ParamId, PrimaryLink, Role, SpecMisuse};
use crate::CoralResult;

/// The frozen descriptors of one declaring scope.
///
/// Descriptors keep their declaration order. A primary's aliases and
/// deprecated parameters are fixed when the schema is built and never change
/// afterwards.
#[derive(Debug)]
pub struct Schema {
    scope: ScopeId,
    descriptors: Vec<ParamDescriptor>,
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Freeze `fields` declared by `scope`.
    ///
    /// Most callers go through [`schema_of`], which memoizes the result.
    ///
    /// # Errors
    ///
    /// Returns every [`SchemaError`] found, aggregated when there are several.
    pub fn build(scope: ScopeId, fields: Vec<FieldDecl>) -> CoralResult<Self> {
        if fields.is_empty() {
            return Err(CoralError::from(SchemaError::EmptyScope {
                scope: scope.to_string(),
            })
            .into());
        }

        let mut errors = Vec::new();
        let mut by_name = HashMap::with_capacity(fields.len());
        let mut descriptors = Vec::with_capacity(fields.len());
        for (index, decl) in fields.iter().enumerate() {
            let name = param_name(decl.field_name);
            if let Some(misuse) = decl.spec.misuse {
                errors.push(misuse_error(scope, decl, misuse));
            }
            if by_name.insert(name.clone(), index).is_some() {
                errors.push(SchemaError::DuplicateName {
                    scope: scope.to_string(),
                    name: name.clone(),
                });
            }
            descriptors.push(ParamDescriptor {
                id: ParamId::new(scope, index),
                field_name: decl.field_name,
                param_name: name,
                value_type: decl.spec.value_type,
                role: decl.spec.role,
                primary: None,
                aliases: Vec::new(),
                deprecated: Vec::new(),
                default: decl.spec.default.clone(),
                description: decl.spec.description.clone(),
            });
        }

        let by_field: HashMap<&str, usize> = fields
            .iter()
            .enumerate()
            .map(|(index, decl)| (decl.field_name, index))
            .collect();
        let mut links = Vec::new();
        for (index, decl) in fields.iter().enumerate() {
            let Some(primary) = decl.spec.primary else {
                continue;
            };
            match resolve_primary(scope, &fields, &by_field, decl, primary) {
                Ok(primary_index) => links.push((index, primary_index)),
                Err(err) => errors.push(err),
            }
        }
        CoralError::check_all(errors.into_iter().map(CoralError::from))?;

        for (index, primary_index) in links {
            let Some(primary) = descriptors.get_mut(primary_index) else {
                continue;
            };
            let link = PrimaryLink {
                index: primary_index,
                field_name: primary.field_name,
                param_name: primary.param_name.clone(),
            };
            let role = fields.get(index).map(|decl| decl.spec.role);
            match role {
                Some(Role::Alias) => primary.aliases.push(index),
                Some(Role::Deprecated) => primary.deprecated.push(index),
                Some(Role::Primary) | None => continue,
            }
            if let Some(referrer) = descriptors.get_mut(index) {
                referrer.primary = Some(link);
            }
        }

        Ok(Self {
            scope,
            descriptors,
            by_name,
        })
    }

    /// Declaring scope.
    #[must_use]
    pub const fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Descriptors in declaration order.
    #[must_use]
    pub fn descriptors(&self) -> &[ParamDescriptor] {
        &self.descriptors
    }

    /// Number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Always `false`; empty scopes are rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor with parameter name `name` (case-sensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamDescriptor> {
        self.by_name
            .get(name)
            .and_then(|index| self.descriptors.get(*index))
    }

    /// Descriptor declared as `field_name`.
    #[must_use]
    pub fn field(&self, field_name: &str) -> Option<&ParamDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.field_name == field_name)
    }

    /// Descriptor with identity `id`.
    #[must_use]
    pub fn descriptor(&self, id: ParamId) -> Option<&ParamDescriptor> {
        if id.scope() == self.scope {
            self.descriptors.get(id.index())
        } else {
            None
        }
    }

    /// Whether `descriptor` belongs to this schema.
    #[must_use]
    pub fn contains(&self, descriptor: &ParamDescriptor) -> bool {
        self.descriptor(descriptor.id()).is_some()
    }

    /// Primary of an alias or deprecated descriptor.
    #[must_use]
    pub fn primary_of(&self, descriptor: &ParamDescriptor) -> Option<&ParamDescriptor> {
        if !self.contains(descriptor) {
            return None;
        }
        descriptor
            .primary_index()
            .and_then(|index| self.descriptors.get(index))
    }

    /// Aliases of a primary, in declaration order.
    pub fn aliases_of<'a>(
        &'a self,
        descriptor: &'a ParamDescriptor,
    ) -> impl Iterator<Item = &'a ParamDescriptor> + 'a {
        self.related(descriptor, &descriptor.aliases)
    }

    /// Deprecated names of a primary, in declaration order.
    pub fn deprecated_of<'a>(
        &'a self,
        descriptor: &'a ParamDescriptor,
    ) -> impl Iterator<Item = &'a ParamDescriptor> + 'a {
        self.related(descriptor, &descriptor.deprecated)
    }

    fn related<'a>(
        &'a self,
        descriptor: &ParamDescriptor,
        indices: &'a [usize],
    ) -> impl Iterator<Item = &'a ParamDescriptor> + 'a {
        let owned = self.contains(descriptor);
        indices
            .iter()
            .filter(move |_| owned)
            .filter_map(|index| self.descriptors.get(*index))
    }
}

fn resolve_primary(
    scope: ScopeId,
    fields: &[FieldDecl],
    by_field: &HashMap<&str, usize>,
    decl: &FieldDecl,
    primary: KeyRef,
) -> Result<usize, SchemaError> {
    let primary_scope = primary.scope();
    if primary_scope != scope {
        return Err(SchemaError::ForeignPrimary {
            scope: scope.to_string(),
            field: decl.field_name.to_owned(),
            primary_scope: primary_scope.to_string(),
        });
    }
    let target = by_field
        .get(primary.field_name())
        .and_then(|index| fields.get(*index).map(|target| (*index, target)));
    let Some((index, target)) = target else {
        return Err(SchemaError::UnknownPrimary {
            scope: scope.to_string(),
            field: decl.field_name.to_owned(),
            primary: primary.field_name().to_owned(),
        });
    };
    if target.spec.role != Role::Primary {
        return Err(SchemaError::NonPrimaryTarget {
            scope: scope.to_string(),
            field: decl.field_name.to_owned(),
            primary: target.field_name.to_owned(),
        });
    }
    let found = decl.spec.value_type;
    let expected = target.spec.value_type;
    let compatible = match decl.spec.role {
        Role::Deprecated => found.deprecation_compatible(&expected),
        Role::Alias | Role::Primary => found == expected,
    };
    if !compatible {
        return Err(SchemaError::IncompatibleTypes {
            scope: scope.to_string(),
            field: decl.field_name.to_owned(),
            found: found.to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(index)
}

fn misuse_error(scope: ScopeId, decl: &FieldDecl, misuse: SpecMisuse) -> SchemaError {
    let scope = scope.to_string();
    let field = decl.field_name.to_owned();
    match misuse {
        SpecMisuse::SecondDefault => SchemaError::SecondDefault { scope, field },
        SpecMisuse::SecondRole {
            existing,
            requested,
        } => SchemaError::SecondRole {
            scope,
            field,
            existing: existing.to_string(),
            requested: requested.to_string(),
        },
        SpecMisuse::NullDefault => SchemaError::NullDefault {
            scope,
            field,
            value_type: decl.spec.value_type.to_string(),
        },
    }
}
