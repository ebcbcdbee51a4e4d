//! Tests for parameter builders and descriptor presentation.

use rstest::rstest;

use super::{DeclaredDefault, Role, SpecMisuse};
use crate::value::Value;
use crate::{
    Key, ParamSpec, ScopeId, SchemaAggregate, char_param, config_scope, f64_param, i16_param, i32_param,
    string_param,
};

config_scope! {
    struct Listing {
        MAX_PRICE: f64 = f64_param().with_default(9.5),
        PRICE_CAP: f64 = f64_param().alias_of(Self::MAX_PRICE),
        OLD_PRICE: i16 = i16_param().with_default(9).deprecated_in_favor_of(Self::MAX_PRICE),
        SEPARATOR: char = char_param().with_default(';').describe("field separator"),
    }
}

const SEPARATOR_AS_I32: Key<i32> = Key::new(ScopeId::of::<Listing>, "SEPARATOR");

#[rstest]
fn new_specs_are_required_primaries() {
    let spec: ParamSpec<i32> = ParamSpec::new();
    assert_eq!(spec.role(), Role::Primary);
    assert!(spec.is_required());
    let raw = spec.into_raw();
    assert!(raw.primary.is_none());
    assert_eq!(raw.default, DeclaredDefault::Required);
}

#[rstest]
fn defaults_and_roles_are_recorded() {
    let raw = i32_param()
        .with_default(7)
        .alias_of(SEPARATOR_AS_I32)
        .into_raw();
    assert_eq!(raw.role, Role::Alias);
    assert_eq!(raw.default, DeclaredDefault::Value(Some(Value::I32(7))));
    assert_eq!(raw.primary.map(|key| key.field_name()), Some("SEPARATOR"));
    assert!(raw.misuse.is_none());
}

#[rstest]
fn null_default_keeps_nullable_params_optional() {
    let spec = string_param().with_null_default();
    assert!(!spec.is_required());
    assert_eq!(spec.into_raw().default, DeclaredDefault::Value(None));
}

#[rstest]
#[case::second_default(
    i32_param().with_default(1).with_default(2),
    SpecMisuse::SecondDefault
)]
#[case::second_role(
    i32_param().alias_of(SEPARATOR_AS_I32).deprecated_in_favor_of(Listing::MAX_PRICE),
    SpecMisuse::SecondRole { existing: Role::Alias, requested: Role::Deprecated }
)]
#[case::null_default(i32_param().with_null_default(), SpecMisuse::NullDefault)]
#[case::first_misuse_wins(
    i32_param().with_null_default().with_default(1).with_default(2),
    SpecMisuse::NullDefault
)]
fn misuse_is_recorded_not_raised(#[case] spec: ParamSpec<i32>, #[case] expected: SpecMisuse) {
    assert_eq!(spec.into_raw().misuse, Some(expected));
}

#[rstest]
fn descriptors_display_their_relation() {
    let aggregate = SchemaAggregate::builder()
        .scope::<Listing>()
        .build()
        .expect("listing scope is valid");
    let shown: Vec<String> = aggregate.all_descriptors().map(ToString::to_string).collect();
    assert_eq!(
        shown,
        [
            "Listing.MAX_PRICE(\"maxPrice\")",
            "Listing.PRICE_CAP(\"priceCap\")_aliasOf_[Listing.MAX_PRICE(\"maxPrice\")]",
            "Listing.OLD_PRICE(\"oldPrice\")_deprecatedInFavorOf_[Listing.MAX_PRICE(\"maxPrice\")]",
            "Listing.SEPARATOR(\"separator\")",
        ]
    );
}

#[rstest]
fn descriptor_accessors_reflect_the_declaration() {
    let aggregate = SchemaAggregate::builder()
        .scope::<Listing>()
        .build()
        .expect("listing scope is valid");
    let old = aggregate.find_by_name("oldPrice").expect("declared");
    assert_eq!(old.role(), Role::Deprecated);
    assert_eq!(old.primary_field_name(), Some("MAX_PRICE"));
    assert_eq!(old.default_value(), Some(&Value::I16(9)));
    assert_eq!(old.parse_value("12"), Ok(Value::I16(12)));
    assert_eq!(old.parse_optional_value(None), Ok(None));

    let separator = aggregate.find_by_name("separator").expect("declared");
    assert_eq!(separator.description(), Some("field separator"));
    assert_eq!(separator.primary_field_name(), None);
    assert!(separator.parse_value("ab").is_err());

    let cap = aggregate.find_by_name("priceCap").expect("declared");
    assert!(cap.is_required());
    assert_eq!(cap.default_value(), None);
}
