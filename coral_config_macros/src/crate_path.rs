//! Path under which generated code reaches `coral_config`.

use proc_macro2::TokenStream;
use quote::quote;

/// Defaults to `coral_config`; `#[param_enum(crate = "...")]` overrides it.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { coral_config }, |path| quote! { #path })
}
