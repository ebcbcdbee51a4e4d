//! `#[param_enum(...)]` attribute parsing.

use syn::meta::ParseNestedMeta;

use super::naming::RenameRule;

const ATTR: &str = "param_enum";

/// Options given on the enum itself.
#[derive(Default)]
pub(crate) struct EnumAttrs {
    pub(crate) rename_all: RenameRule,
    pub(crate) crate_path: Option<syn::Path>,
}

pub(crate) fn enum_attrs(attrs: &[syn::Attribute]) -> syn::Result<EnumAttrs> {
    let mut out = EnumAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let lit = lit_str(&meta)?;
                out.rename_all = RenameRule::from_name(&lit.value()).ok_or_else(|| {
                    syn::Error::new_spanned(&lit, "unknown rename_all rule")
                })?;
                return Ok(());
            }
            if meta.path.is_ident("crate") {
                out.crate_path = Some(lit_str(&meta)?.parse()?);
                return Ok(());
            }
            Err(meta.error("unsupported param_enum option"))
        })?;
    }
    Ok(out)
}

/// Explicit name given with `#[param_enum(rename = "...")]` on a variant.
pub(crate) fn variant_rename(attrs: &[syn::Attribute]) -> syn::Result<Option<syn::LitStr>> {
    let mut rename = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit = lit_str(&meta)?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new_spanned(&lit, "variant name must not be empty"));
                }
                rename = Some(lit);
                return Ok(());
            }
            Err(meta.error("unsupported param_enum variant option"))
        })?;
    }
    Ok(rename)
}

fn lit_str(meta: &ParseNestedMeta) -> syn::Result<syn::LitStr> {
    meta.value()?.parse()
}
