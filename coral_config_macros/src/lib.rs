//! Procedural macros for `coral_config`.
//!
//! `#[derive(ParamEnum)]` turns a fieldless enum into a configuration
//! parameter type: it implements `coral_config::ParamEnum` and
//! `coral_config::ParamValue`, naming each variant in
//! `SCREAMING_SNAKE_CASE` unless told otherwise.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod crate_path;
mod param_enum;

/// Derive `coral_config::ParamEnum` and `coral_config::ParamValue` for a
/// fieldless enum.
///
/// Supported attributes:
///
/// * `#[param_enum(rename_all = "...")]` on the enum, one of
///   `SCREAMING_SNAKE_CASE` (the default), `snake_case`, `kebab-case`,
///   `SCREAMING-KEBAB-CASE`, `lowercase`, `UPPERCASE`, `PascalCase` or
///   `camelCase`;
/// * `#[param_enum(crate = "path")]` on the enum, when `coral_config` is
///   renamed in `Cargo.toml`;
/// * `#[param_enum(rename = "...")]` on a variant.
///
/// The enum must also implement `Copy`.
#[proc_macro_derive(ParamEnum, attributes(param_enum))]
pub fn derive_param_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match param_enum::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
