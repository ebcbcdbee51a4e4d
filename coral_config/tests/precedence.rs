//! Seeded values and the order in which related parameters consult them.

use anyhow::Result;
use coral_config::{Configuration, DeclaringScope, Key, SchemaAggregate, config_scope, i32_param};
use rstest::rstest;

config_scope! {
    struct AliasAndDeprecated {
        MY_INTEGER_1: i32 = i32_param().with_default(10),
        MY_INTEGER_2: i32 = i32_param().with_default(20).deprecated_in_favor_of(Self::MY_INTEGER_1),
        MY_INTEGER_3: i32 = i32_param().with_default(30).alias_of(Self::MY_INTEGER_1),
    }
}

config_scope! {
    struct TwoDeprecated {
        MY_INTEGER_1: i32 = i32_param().with_default(10),
        MY_INTEGER_2: i32 = i32_param().with_default(20).deprecated_in_favor_of(Self::MY_INTEGER_1),
        MY_INTEGER_3: i32 = i32_param().with_default(30).deprecated_in_favor_of(Self::MY_INTEGER_1),
    }
}

config_scope! {
    struct TwoAliases {
        MY_INTEGER_1: i32 = i32_param().with_default(10),
        MY_INTEGER_2: i32 = i32_param().with_default(20).alias_of(Self::MY_INTEGER_1),
        MY_INTEGER_3: i32 = i32_param().with_default(30).alias_of(Self::MY_INTEGER_1),
    }
}

config_scope! {
    struct Mixed {
        MY_INTEGER_1: i32 = i32_param().with_default(10),
        MY_INTEGER_2: i32 = i32_param().with_default(20).alias_of(Self::MY_INTEGER_1),
        MY_INTEGER_3: i32 = i32_param().with_default(30).deprecated_in_favor_of(Self::MY_INTEGER_1),
        MY_INTEGER_4: i32 = i32_param().with_default(40).alias_of(Self::MY_INTEGER_1),
        MY_INTEGER_5: i32 = i32_param().with_default(50).deprecated_in_favor_of(Self::MY_INTEGER_1),
    }
}

fn seeded<S: DeclaringScope>(params: &str) -> Result<Configuration> {
    let aggregate = SchemaAggregate::builder().scope::<S>().build()?;
    Ok(Configuration::with_params(aggregate, params)?)
}

fn read_all(config: &Configuration, keys: &[Key<i32>]) -> Result<Vec<i32>> {
    keys.iter()
        .map(|key| Ok(config.require(*key)?))
        .collect()
}

#[rstest]
#[case::nothing("", [10, 20, 30])]
#[case::primary("myInteger1=5", [5, 5, 5])]
#[case::deprecated("myInteger2=15", [15, 15, 15])]
#[case::alias("myInteger3=25", [25, 25, 25])]
#[case::primary_and_deprecated("myInteger1=33 myInteger2=77", [33, 77, 33])]
#[case::primary_and_alias("myInteger1=33 myInteger3=99", [33, 33, 99])]
#[case::alias_beats_deprecated("myInteger2=66 myInteger3=88", [88, 66, 88])]
#[case::all_pinned("myInteger1=6 myInteger2=7 myInteger3=8", [6, 7, 8])]
fn alias_and_deprecated(#[case] params: &str, #[case] expected: [i32; 3]) -> Result<()> {
    let config = seeded::<AliasAndDeprecated>(params)?;
    let keys = [
        AliasAndDeprecated::MY_INTEGER_1,
        AliasAndDeprecated::MY_INTEGER_2,
        AliasAndDeprecated::MY_INTEGER_3,
    ];
    assert_eq!(read_all(&config, &keys)?, expected);
    Ok(())
}

#[rstest]
#[case::nothing("", [10, 20, 30])]
#[case::primary("myInteger1=5", [5, 5, 5])]
#[case::first("myInteger2=15", [15, 15, 15])]
#[case::second("myInteger3=25", [25, 25, 25])]
#[case::primary_and_first("myInteger1=33 myInteger2=77", [33, 77, 33])]
#[case::primary_and_second("myInteger1=33 myInteger3=99", [33, 33, 99])]
#[case::declaration_order_wins("myInteger2=66 myInteger3=88", [66, 66, 88])]
#[case::all_pinned("myInteger1=6 myInteger2=7 myInteger3=8", [6, 7, 8])]
fn two_deprecated(#[case] params: &str, #[case] expected: [i32; 3]) -> Result<()> {
    let config = seeded::<TwoDeprecated>(params)?;
    let keys = [
        TwoDeprecated::MY_INTEGER_1,
        TwoDeprecated::MY_INTEGER_2,
        TwoDeprecated::MY_INTEGER_3,
    ];
    assert_eq!(read_all(&config, &keys)?, expected);
    Ok(())
}

#[rstest]
#[case::nothing("", [10, 20, 30])]
#[case::primary("myInteger1=5", [5, 5, 5])]
#[case::first("myInteger2=15", [15, 15, 15])]
#[case::second("myInteger3=25", [25, 25, 25])]
#[case::primary_and_first("myInteger1=33 myInteger2=77", [33, 77, 33])]
#[case::primary_and_second("myInteger1=33 myInteger3=99", [33, 33, 99])]
#[case::declaration_order_wins("myInteger2=66 myInteger3=88", [66, 66, 88])]
#[case::all_pinned("myInteger1=6 myInteger2=7 myInteger3=8", [6, 7, 8])]
fn two_aliases(#[case] params: &str, #[case] expected: [i32; 3]) -> Result<()> {
    let config = seeded::<TwoAliases>(params)?;
    let keys = [
        TwoAliases::MY_INTEGER_1,
        TwoAliases::MY_INTEGER_2,
        TwoAliases::MY_INTEGER_3,
    ];
    assert_eq!(read_all(&config, &keys)?, expected);
    Ok(())
}

#[rstest]
#[case::nothing("", [10, 20, 30, 40, 50])]
#[case::primary("myInteger1=5", [5, 5, 5, 5, 5])]
#[case::alias_and_deprecated("myInteger2=15 myInteger5=25", [15, 15, 15, 15, 25])]
#[case::later_alias_beats_deprecated("myInteger3=35 myInteger4=45", [45, 45, 35, 45, 45])]
#[case::alias_then_deprecated("myInteger4=33 myInteger5=44", [33, 33, 33, 33, 44])]
#[case::first_alias_and_deprecated("myInteger2=11 myInteger3=22", [11, 11, 22, 11, 11])]
#[case::last_deprecated("myInteger5=99", [99, 99, 99, 99, 99])]
#[case::primary_and_deprecated("myInteger1=66 myInteger5=77", [66, 66, 66, 66, 77])]
#[case::first_alias("myInteger2=11", [11, 11, 11, 11, 11])]
#[case::first_deprecated("myInteger3=11", [11, 11, 11, 11, 11])]
fn mixed_aliases_and_deprecations(#[case] params: &str, #[case] expected: [i32; 5]) -> Result<()> {
    let config = seeded::<Mixed>(params)?;
    let keys = [
        Mixed::MY_INTEGER_1,
        Mixed::MY_INTEGER_2,
        Mixed::MY_INTEGER_3,
        Mixed::MY_INTEGER_4,
        Mixed::MY_INTEGER_5,
    ];
    assert_eq!(read_all(&config, &keys)?, expected);
    Ok(())
}
