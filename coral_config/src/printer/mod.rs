//! Tabular export of the parameters of an aggregate.
//!
//! One row per descriptor, sorted by field name, columns separated by a
//! comma and a space:
//!
//! ```text
//! Field Name, Name, Type, Default Value, Holder Class, Kind, Parent Primary, Aliases, Deprecated, Description
//! ```
//!
//! Required parameters show `=REQUIRED=` as their default and enum
//! parameters show `Enum` as their type. Aliases and deprecated names list
//! their primary's field name; primaries list their aliases and deprecated
//! names joined by `;`.

use std::io;

use serde::Serialize;

use crate::param::{DeclaredDefault, ParamDescriptor, Role};
use crate::schema::SchemaAggregate;

/// Column titles of the table header.
pub const HEADER: &str = "Field Name, Name, Type, Default Value, Holder Class, Kind, Parent Primary, Aliases, Deprecated, Description";

const REQUIRED: &str = "=REQUIRED=";

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Emit the header line first.
    pub with_header: bool,
    /// Show the full type path of the declaring scope instead of its last
    /// segment.
    pub full_holder_name: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            with_header: true,
            full_holder_name: false,
        }
    }
}

/// One printed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamRow {
    /// Declared field name.
    pub field_name: String,
    /// camelCase parameter name.
    pub name: String,
    /// Type column.
    pub value_type: String,
    /// Default column.
    pub default_value: String,
    /// Declaring scope.
    pub holder: String,
    /// `PRIMARY`, `ALIAS` or `DEPRECATED`.
    pub kind: String,
    /// Field name of the primary, empty for primaries.
    pub parent_primary: String,
    /// Field names of the aliases of a primary.
    pub aliases: Vec<String>,
    /// Field names of the deprecated names of a primary.
    pub deprecated: Vec<String>,
    /// Description, empty when none was given.
    pub description: String,
}

impl ParamRow {
    fn new(aggregate: &SchemaAggregate, descriptor: &ParamDescriptor, options: PrintOptions) -> Self {
        let holder = descriptor.holder();
        let primary = descriptor.role() == Role::Primary;
        Self {
            field_name: descriptor.field_name().to_owned(),
            name: descriptor.param_name().to_owned(),
            value_type: descriptor.value_type().simple_name().to_owned(),
            default_value: match descriptor.declared_default() {
                DeclaredDefault::Required => REQUIRED.to_owned(),
                DeclaredDefault::Value(Some(value)) => value.to_string(),
                DeclaredDefault::Value(None) => "null".to_owned(),
            },
            holder: if options.full_holder_name {
                holder.name()
            } else {
                holder.simple_name()
            }
            .to_owned(),
            kind: descriptor.role().label().to_owned(),
            parent_primary: descriptor
                .primary_field_name()
                .unwrap_or_default()
                .to_owned(),
            aliases: if primary {
                field_names(aggregate.aliases_of(descriptor))
            } else {
                Vec::new()
            },
            deprecated: if primary {
                field_names(aggregate.deprecated_of(descriptor))
            } else {
                Vec::new()
            },
            description: descriptor.description().unwrap_or_default().to_owned(),
        }
    }

    /// The row as one table line, without a trailing newline.
    #[must_use]
    pub fn to_line(&self) -> String {
        let aliases = self.aliases.join(";");
        let deprecated = self.deprecated.join(";");
        [
            self.field_name.as_str(),
            self.name.as_str(),
            self.value_type.as_str(),
            self.default_value.as_str(),
            self.holder.as_str(),
            self.kind.as_str(),
            self.parent_primary.as_str(),
            aliases.as_str(),
            deprecated.as_str(),
            self.description.as_str(),
        ]
        .join(", ")
    }
}

fn field_names<'a>(related: impl Iterator<Item = &'a ParamDescriptor>) -> Vec<String> {
    related.map(|d| d.field_name().to_owned()).collect()
}

/// Rows of every descriptor of `aggregate`, sorted by field name.
///
/// Rows sharing a field name keep aggregate order.
#[must_use]
pub fn rows(aggregate: &SchemaAggregate, options: PrintOptions) -> Vec<ParamRow> {
    let mut rows: Vec<ParamRow> = aggregate
        .all_descriptors()
        .map(|descriptor| ParamRow::new(aggregate, descriptor, options))
        .collect();
    rows.sort_by(|a, b| a.field_name.cmp(&b.field_name));
    rows
}

/// The table as a string, one line per row, each ending in a newline.
///
/// ```
/// use coral_config::{PrintOptions, SchemaAggregate, config_scope, i32_param, render_table};
///
/// config_scope! {
///     struct Retry {
///         MAX_RETRIES: i32 = i32_param().with_default(3).describe("retry budget"),
///     }
/// }
///
/// let aggregate = SchemaAggregate::builder().scope::<Retry>().build().expect("valid");
/// let options = PrintOptions { with_header: false, ..PrintOptions::default() };
/// assert_eq!(
///     render_table(&aggregate, options),
///     "MAX_RETRIES, maxRetries, i32, 3, Retry, PRIMARY, , , , retry budget\n",
/// );
/// ```
#[must_use]
pub fn render_table(aggregate: &SchemaAggregate, options: PrintOptions) -> String {
    let mut out = String::new();
    if options.with_header {
        out.push_str(HEADER);
        out.push('\n');
    }
    for row in rows(aggregate, options) {
        out.push_str(&row.to_line());
        out.push('\n');
    }
    out
}

/// Stream the table to `writer`.
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn write_table<W: io::Write>(
    aggregate: &SchemaAggregate,
    options: PrintOptions,
    mut writer: W,
) -> io::Result<()> {
    if options.with_header {
        writeln!(writer, "{HEADER}")?;
    }
    for row in rows(aggregate, options) {
        writeln!(writer, "{}", row.to_line())?;
    }
    writer.flush()
}

/// The rows as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails.
#[cfg(feature = "serde_json")]
pub fn render_json(aggregate: &SchemaAggregate, options: PrintOptions) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&rows(aggregate, options))
}

#[cfg(test)]
mod tests;
