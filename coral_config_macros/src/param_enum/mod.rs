//! Expansion of `#[derive(ParamEnum)]`.

mod attrs;
mod naming;

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::crate_path;

/// One unit variant and the name it is parsed and printed as.
struct NamedVariant<'a> {
    ident: &'a syn::Ident,
    name: String,
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ParamEnum can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ParamEnum cannot be derived for generic enums",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ParamEnum requires at least one variant",
        ));
    }

    let options = attrs::enum_attrs(&input.attrs)?;
    let variants = named_variants(data, options.rename_all)?;
    let krate = crate_path::resolve(options.crate_path.as_ref());
    let ident = &input.ident;
    let idents: Vec<_> = variants.iter().map(|v| v.ident).collect();
    let names: Vec<_> = variants.iter().map(|v| v.name.as_str()).collect();
    let ordinals: Vec<_> = (0..variants.len()).map(Literal::usize_unsuffixed).collect();

    Ok(quote! {
        impl #krate::ParamEnum for #ident {
            const ENUM_TYPE: #krate::EnumType = #krate::EnumType::new(
                ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)),
                &[#(#names),*],
            );

            fn ordinal(self) -> usize {
                match self {
                    #(Self::#idents => #ordinals,)*
                }
            }

            fn from_ordinal(ordinal: usize) -> ::core::option::Option<Self> {
                match ordinal {
                    #(#ordinals => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #krate::ParamValue for #ident {
            fn value_type() -> #krate::ValueType {
                #krate::ValueType::Enum(<Self as #krate::ParamEnum>::ENUM_TYPE)
            }

            fn into_value(self) -> #krate::Value {
                #krate::__private::enum_into_value(self)
            }

            fn from_value(value: #krate::Value) -> ::core::option::Option<Self> {
                #krate::__private::enum_from_value(&value)
            }
        }
    })
}

fn named_variants(
    data: &syn::DataEnum,
    rule: naming::RenameRule,
) -> syn::Result<Vec<NamedVariant<'_>>> {
    let mut out: Vec<NamedVariant<'_>> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "ParamEnum variants must not carry data",
            ));
        }
        let name = attrs::variant_rename(&variant.attrs)?
            .map_or_else(|| rule.apply(&variant.ident.to_string()), |lit| lit.value());
        if out.iter().any(|seen| seen.name.eq_ignore_ascii_case(&name)) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("variant name `{name}` is already used, ignoring case"),
            ));
        }
        out.push(NamedVariant {
            ident: &variant.ident,
            name,
        });
    }
    Ok(out)
}
