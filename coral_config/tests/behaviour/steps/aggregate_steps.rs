//! Steps combining scopes into aggregates.

use anyhow::{Result, anyhow};
use rstest_bdd_macros::when;

use super::config_steps::record_failure;
use crate::fixtures::{RegistryContext, aggregate_of, aggregate_of_pair};

#[when("an aggregate of the {first} and {second} scopes is built")]
fn build_pair(registry: &RegistryContext, first: String, second: String) -> Result<()> {
    let err = aggregate_of_pair(&first, &second)?
        .err()
        .ok_or_else(|| anyhow!("aggregating {first} and {second} succeeded"))?;
    record_failure(registry, err);
    Ok(())
}

#[when("seeding the {scope} scope with {params} is attempted")]
fn attempt_seed(registry: &RegistryContext, scope: String, params: String) -> Result<()> {
    let aggregate = aggregate_of(&scope)??;
    let err = coral_config::Configuration::with_params(aggregate, &params)
        .err()
        .ok_or_else(|| anyhow!("seeding {scope} with {params} succeeded"))?;
    record_failure(registry, err);
    Ok(())
}
