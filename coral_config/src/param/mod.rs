//! Parameter declarations and their frozen descriptors.

mod descriptor;
mod key;
pub(crate) mod naming;
mod spec;

pub use descriptor::{DeclaredDefault, ParamDescriptor, ParamId, Role};
pub(crate) use descriptor::PrimaryLink;
pub use key::{Key, KeyRef};
pub(crate) use spec::SpecMisuse;
pub use spec::{
    FieldDecl, ParamSpec, bool_param, char_param, enum_param, f32_param, f64_param, i8_param,
    i16_param, i32_param, i64_param, string_param,
};

#[cfg(test)]
mod tests;
