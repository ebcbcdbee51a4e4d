//! Tests for the parameter table.

use rstest::{fixture, rstest};

use super::{HEADER, PrintOptions, render_table, rows, write_table};
use crate::{
    ParamEnum, SchemaAggregate, config_scope, enum_param, f32_param, i32_param, string_param,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ParamEnum)]
enum Mode {
    Fast,
    Safe,
}

config_scope! {
    struct Printed {
        RETRIES: i32 = i32_param().with_default(3).describe("attempts"),
        TRIES: i32 = i32_param().alias_of(Self::RETRIES),
        ATTEMPTS: f32 = f32_param().with_default(2.5).deprecated_in_favor_of(Self::RETRIES),
        MODE: Mode = enum_param::<Mode>().with_default(Mode::Safe),
        LABEL: String = string_param().with_null_default(),
        HOST: String = string_param(),
    }
}

#[fixture]
fn aggregate() -> SchemaAggregate {
    SchemaAggregate::builder()
        .scope::<Printed>()
        .build()
        .expect("printed scope is valid")
}

#[rstest]
fn renders_sorted_rows_with_header(aggregate: SchemaAggregate) {
    let expected = [
        HEADER,
        "ATTEMPTS, attempts, f32, 2.5, Printed, DEPRECATED, RETRIES, , , ",
        "HOST, host, String, =REQUIRED=, Printed, PRIMARY, , , , ",
        "LABEL, label, String, null, Printed, PRIMARY, , , , ",
        "MODE, mode, Enum, SAFE, Printed, PRIMARY, , , , ",
        "RETRIES, retries, i32, 3, Printed, PRIMARY, , TRIES, ATTEMPTS, attempts",
        "TRIES, tries, i32, =REQUIRED=, Printed, ALIAS, RETRIES, , , ",
    ]
    .map(|line| format!("{line}\n"))
    .concat();
    assert_eq!(render_table(&aggregate, PrintOptions::default()), expected);
}

#[rstest]
fn full_holder_name_uses_the_type_path(aggregate: SchemaAggregate) {
    let options = PrintOptions {
        with_header: false,
        full_holder_name: true,
    };
    let table = render_table(&aggregate, options);
    assert!(!table.starts_with(HEADER));
    assert!(
        table
            .lines()
            .all(|line| line.contains(", coral_config::printer::tests::Printed, ")),
        "{table}"
    );
}

#[rstest]
fn write_table_matches_render_table(aggregate: SchemaAggregate) {
    let mut out = Vec::new();
    write_table(&aggregate, PrintOptions::default(), &mut out).expect("vec writes succeed");
    assert_eq!(
        String::from_utf8(out).expect("utf-8"),
        render_table(&aggregate, PrintOptions::default())
    );
}

#[rstest]
fn primary_rows_list_related_fields(aggregate: SchemaAggregate) {
    let rows = rows(&aggregate, PrintOptions::default());
    let retries = rows
        .iter()
        .find(|row| row.field_name == "RETRIES")
        .expect("declared");
    assert_eq!(retries.aliases, ["TRIES"]);
    assert_eq!(retries.deprecated, ["ATTEMPTS"]);
    assert!(retries.parent_primary.is_empty());
}

#[cfg(feature = "serde_json")]
#[rstest]
fn json_rows_keep_table_order(aggregate: SchemaAggregate) {
    let json = super::render_json(&aggregate, PrintOptions::default()).expect("serializes");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let names: Vec<_> = parsed
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|row| row.get("field_name").and_then(serde_json::Value::as_str))
        .collect();
    assert_eq!(names, ["ATTEMPTS", "HOST", "LABEL", "MODE", "RETRIES", "TRIES"]);
}
