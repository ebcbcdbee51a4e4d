//! The `resolve` command: seed a configuration and read parameters back.

use std::io;

use coral_config::{Configuration, Value, parse_params};

use crate::error::{Result, TcpClientError};
use crate::scopes;

/// One resolved parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Parameter name as requested.
    pub name: String,
    /// Resolved value; `None` for null.
    pub value: Option<Value>,
}

impl Resolution {
    /// `name=value`, with `null` for a null value.
    #[must_use]
    pub fn to_line(&self) -> String {
        match &self.value {
            Some(value) => format!("{}={value}", self.name),
            None => format!("{}=null", self.name),
        }
    }
}

/// Resolve `names` against every demo scope.
///
/// `params` seeds explicit values and `overwrite` replaces defaults, both as
/// `name=value` strings. The transport defaults are applied before
/// `overwrite`.
///
/// # Errors
///
/// Returns an error for an unknown name, a malformed string, or a parameter
/// that cannot be resolved.
pub fn resolve<S: AsRef<str>>(params: &str, overwrite: &str, names: &[S]) -> Result<Vec<Resolution>> {
    let config = Configuration::with_params(scopes::aggregate::<&str>(&[])?, params)?;
    scopes::apply_transport_defaults(&config)?;
    for parsed in parse_params(config.aggregate(), overwrite)? {
        config.set_overwritten_default_value(parsed.descriptor, Some(parsed.value))?;
    }
    names
        .iter()
        .map(|requested| {
            let name = requested.as_ref();
            let descriptor = config
                .aggregate()
                .find_by_name(name)
                .ok_or_else(|| TcpClientError::UnknownParameter(name.to_owned()))?;
            let value = config.get_value(descriptor)?;
            tracing::debug!(parameter = name, value = ?value, "resolved");
            Ok(Resolution {
                name: name.to_owned(),
                value,
            })
        })
        .collect()
}

/// Write one `name=value` line per resolution.
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn write_resolutions<W: io::Write>(resolutions: &[Resolution], mut writer: W) -> io::Result<()> {
    for resolution in resolutions {
        writeln!(writer, "{}", resolution.to_line())?;
    }
    writer.flush()
}
