//! Typed configuration registry.
//!
//! Applications declare parameters in *scopes* with [`config_scope!`]. Each
//! parameter has a value type, an optional default, and may be an alias or
//! a deprecated name of another parameter of the same scope. Scopes are
//! frozen into [`Schema`]s on first use, combined into a
//! [`SchemaAggregate`], and bound to values by a [`Configuration`].
//!
//! ```
//! use coral_config::{Configuration, SchemaAggregate, config_scope, i32_param, string_param};
//!
//! config_scope! {
//!     /// Login settings.
//!     pub struct Login {
//!         USERNAME: String = string_param(),
//!         MAX_RETRIES: i32 = i32_param().with_default(3),
//!         RETRIES: i32 = i32_param().deprecated_in_favor_of(Self::MAX_RETRIES),
//!     }
//! }
//!
//! let aggregate = SchemaAggregate::builder().scope::<Login>().build()?;
//! let config = Configuration::with_params(aggregate, "username=saoj retries=2")?;
//! assert_eq!(config.require(Login::USERNAME)?, "saoj");
//! assert_eq!(config.require(Login::MAX_RETRIES)?, 2);
//! # Ok::<(), std::sync::Arc<coral_config::CoralError>>(())
//! ```
//!
//! Fieldless enums become parameter types with `#[derive(ParamEnum)]`.

extern crate self as coral_config;

use std::sync::Arc;

mod configuration;
mod error;
mod listener;
mod param;
mod params;
mod printer;
mod result_ext;
mod schema;
mod value;

pub use coral_config_macros::ParamEnum;

pub use configuration::{Configuration, ParamRef};
pub use error::{AggregatedErrors, CoralError, ParseError, ResolutionError, SchemaError, UsageError};
pub use listener::{DeprecationListener, TracingDeprecationListener};
pub use param::{
    DeclaredDefault, FieldDecl, Key, KeyRef, ParamDescriptor, ParamId, ParamSpec, Role,
    bool_param, char_param, enum_param, f32_param, f64_param, i8_param, i16_param, i32_param,
    i64_param, string_param,
};
pub use params::{ParsedParam, parse_params};
#[cfg(feature = "serde_json")]
pub use printer::render_json;
pub use printer::{HEADER, ParamRow, PrintOptions, render_table, rows, write_table};
pub use result_ext::CoralResultExt;
pub use schema::{
    DeclaringScope, Schema, SchemaAggregate, SchemaAggregateBuilder, ScopeId,
    clear_schema_cache, schema_of,
};
#[doc(hidden)]
pub use value::__private;
pub use value::{EnumType, EnumValue, ParamEnum, ParamValue, Value, ValueType};

/// Result type returned by fallible operations of this crate.
pub type CoralResult<T> = Result<T, Arc<CoralError>>;
