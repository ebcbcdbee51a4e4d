//! Scopes and scenario state shared by the behavioural steps.

use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use coral_config::{
    CoralError, CoralResult, Configuration, SchemaAggregate, bool_param, config_scope, f32_param,
    i32_param, string_param,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::listener::RecordingListener;

config_scope! {
    /// A primary with one deprecated name and one alias, all defaulted.
    pub struct Chain {
        A: i32 = i32_param().with_default(10),
        B: i32 = i32_param().with_default(20).deprecated_in_favor_of(Self::A),
        C: i32 = i32_param().with_default(30).alias_of(Self::A),
    }
}

config_scope! {
    /// A required primary whose related parameters disagree on a default.
    pub struct Competing {
        P: i32 = i32_param(),
        Q: i32 = i32_param().with_default(11).deprecated_in_favor_of(Self::P),
        R: i32 = i32_param().with_default(22).alias_of(Self::P),
    }
}

config_scope! {
    /// Credentials seeded from text.
    pub struct Login {
        USERNAME: String = string_param(),
        MAX_RETRIES: i32 = i32_param().with_default(3),
    }
}

config_scope! {
    /// Declares `timeout` as an integer.
    pub struct X {
        TIMEOUT: i32 = i32_param().with_default(5),
    }
}

config_scope! {
    /// Declares `Timeout`, which folds onto `timeout`.
    pub struct Y {
        #[expect(non_upper_case_globals, reason = "differs from X::TIMEOUT only by case")]
        Timeout: bool = bool_param().with_default(true),
    }
}

config_scope! {
    /// A float primary with a deprecated name.
    pub struct Heartbeat {
        P: f32 = f32_param().with_default(1.0),
        D: f32 = f32_param().deprecated_in_favor_of(Self::P),
    }
}

/// Aggregate of the scope called `name`.
pub fn aggregate_of(name: &str) -> Result<CoralResult<SchemaAggregate>> {
    let builder = SchemaAggregate::builder();
    Ok(match name {
        "Chain" => builder.scope::<Chain>(),
        "Competing" => builder.scope::<Competing>(),
        "Login" => builder.scope::<Login>(),
        "X" => builder.scope::<X>(),
        "Y" => builder.scope::<Y>(),
        "Heartbeat" => builder.scope::<Heartbeat>(),
        other => bail!("unknown scope {other}"),
    }
    .build())
}

/// Aggregate of two scopes, in order.
pub fn aggregate_of_pair(first: &str, second: &str) -> Result<CoralResult<SchemaAggregate>> {
    let mut schemas = Vec::new();
    for name in [first, second] {
        let aggregate = aggregate_of(name)?.map_err(|err| anyhow!(err))?;
        schemas.extend(aggregate.schemas().iter().cloned());
    }
    Ok(SchemaAggregate::from_schemas(schemas))
}

/// State shared between the steps of one scenario.
#[derive(Default, ScenarioState)]
pub struct RegistryContext {
    pub config: Slot<Arc<Configuration>>,
    pub listener: Slot<Arc<RecordingListener>>,
    pub failure: Slot<Arc<CoralError>>,
}

impl RegistryContext {
    /// The configuration built by an earlier step.
    pub fn configuration(&self) -> Result<Arc<Configuration>> {
        self.config
            .get()
            .ok_or_else(|| anyhow!("no configuration has been built"))
    }
}

/// Fresh scenario state.
#[fixture]
pub fn registry() -> RegistryContext {
    RegistryContext::default()
}
