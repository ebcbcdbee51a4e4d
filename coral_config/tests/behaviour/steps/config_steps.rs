//! Steps building configurations, writing layers and checking reads.

use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use coral_config::{Configuration, CoralError, ParamId, Value};
use rstest_bdd_macros::{given, then, when};

use crate::fixtures::{RegistryContext, aggregate_of};

fn resolve_name(config: &Configuration, name: &str) -> Result<ParamId> {
    config
        .aggregate()
        .find_by_name(name)
        .map(|descriptor| descriptor.id())
        .ok_or_else(|| anyhow!("no parameter named {name}"))
}

fn parse_for(config: &Configuration, name: &str, raw: &str) -> Result<(ParamId, Value)> {
    let id = resolve_name(config, name)?;
    let descriptor = config
        .aggregate()
        .descriptor(id)
        .ok_or_else(|| anyhow!("{name} vanished from the aggregate"))?;
    Ok((id, descriptor.parse_value(raw)?))
}

#[given("a configuration over the {scope} scope")]
fn configuration_over(registry: &RegistryContext, scope: String) -> Result<()> {
    ensure!(registry.config.is_empty(), "configuration already built");
    let aggregate = aggregate_of(&scope)??;
    registry.config.set(Arc::new(Configuration::new(aggregate)));
    Ok(())
}

#[given("a {scope} configuration seeded with {params}")]
fn seeded_configuration(registry: &RegistryContext, scope: String, params: String) -> Result<()> {
    ensure!(registry.config.is_empty(), "configuration already built");
    let aggregate = aggregate_of(&scope)??;
    registry
        .config
        .set(Arc::new(Configuration::with_params(aggregate, &params)?));
    Ok(())
}

#[when("the value of {name} is set to {raw}")]
fn set_value(registry: &RegistryContext, name: String, raw: String) -> Result<()> {
    let config = registry.configuration()?;
    let (id, value) = parse_for(&config, &name, &raw)?;
    config.set_value(id, value)?;
    Ok(())
}

#[when("the value of {name} is unset")]
fn unset_value(registry: &RegistryContext, name: String) -> Result<()> {
    let config = registry.configuration()?;
    config.unset_value(resolve_name(&config, &name)?)?;
    Ok(())
}

#[when("the default of {name} is overwritten with {raw}")]
fn overwrite_default(registry: &RegistryContext, name: String, raw: String) -> Result<()> {
    let config = registry.configuration()?;
    let (id, value) = parse_for(&config, &name, &raw)?;
    config.set_overwritten_default_value(id, Some(value))?;
    Ok(())
}

#[when("the overwritten default of {name} is cleared")]
fn clear_default(registry: &RegistryContext, name: String) -> Result<()> {
    let config = registry.configuration()?;
    config.clear_overwritten_default(resolve_name(&config, &name)?)?;
    Ok(())
}

#[when("all overwritten defaults are cleared")]
fn clear_all_defaults(registry: &RegistryContext) -> Result<()> {
    registry.configuration()?.clear_all_overwritten_defaults();
    Ok(())
}

#[when("the parameter {name} is read")]
fn read_parameter(registry: &RegistryContext, name: String) -> Result<()> {
    let config = registry.configuration()?;
    config.get_value(resolve_name(&config, &name)?)?;
    Ok(())
}

#[when("the overwritten default of {name} is read")]
fn read_overwritten_default(registry: &RegistryContext, name: String) -> Result<()> {
    let config = registry.configuration()?;
    config.overwritten_default_value(resolve_name(&config, &name)?)?;
    Ok(())
}

#[when("overwriting the default of {name} with {raw} is attempted")]
fn attempt_overwrite(registry: &RegistryContext, name: String, raw: String) -> Result<()> {
    let config = registry.configuration()?;
    let (id, value) = parse_for(&config, &name, &raw)?;
    let err = config
        .set_overwritten_default_value(id, Some(value))
        .err()
        .ok_or_else(|| anyhow!("overwriting the default of {name} succeeded"))?;
    registry.failure.set(err);
    Ok(())
}

#[when("reading {name} is attempted")]
fn attempt_read(registry: &RegistryContext, name: String) -> Result<()> {
    let config = registry.configuration()?;
    let err = config
        .get_value(resolve_name(&config, &name)?)
        .err()
        .ok_or_else(|| anyhow!("reading {name} succeeded"))?;
    registry.failure.set(err);
    Ok(())
}

#[then("parameter {name} resolves to {raw}")]
fn resolves_to(registry: &RegistryContext, name: String, raw: String) -> Result<()> {
    let config = registry.configuration()?;
    let (id, expected) = parse_for(&config, &name, &raw)?;
    let actual = config.get_value(id)?;
    ensure!(
        actual.as_ref() == Some(&expected),
        "{name} resolved to {actual:?}, expected {expected}"
    );
    Ok(())
}

#[then("the operation failed with a {kind} error")]
fn failed_with(registry: &RegistryContext, kind: String) -> Result<()> {
    let err = registry
        .failure
        .take()
        .ok_or_else(|| anyhow!("no failure was recorded"))?;
    let matched = match kind.as_str() {
        "resolution" => err.is_resolution(),
        "usage" => err.is_usage(),
        "schema" => err.is_schema(),
        "parse" => err.is_parse(),
        other => return Err(anyhow!("unknown error kind {other}")),
    };
    ensure!(matched, "expected a {kind} error, got {err}");
    Ok(())
}

#[then("the configuration holds {count:usize} explicit values")]
fn holds_values(registry: &RegistryContext, count: usize) -> Result<()> {
    let held = registry.configuration()?.len();
    ensure!(held == count, "configuration holds {held} values, expected {count}");
    Ok(())
}

pub(crate) fn record_failure(registry: &RegistryContext, err: Arc<CoralError>) {
    registry.failure.set(err);
}
