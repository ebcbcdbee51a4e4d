//! Steps observing deprecation notifications.

use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use coral_config::DeprecationListener;
use rstest_bdd_macros::{given, then};
use test_helpers::listener::RecordingListener;

use crate::fixtures::RegistryContext;

#[given("a recording deprecation listener")]
fn recording_listener(registry: &RegistryContext) -> Result<()> {
    let config = registry.configuration()?;
    let listener = Arc::new(RecordingListener::default());
    let shared: Arc<dyn DeprecationListener> = listener.clone();
    ensure!(config.add_listener(shared), "listener already registered");
    registry.listener.set(listener);
    Ok(())
}

#[then("the listener was notified {count:usize} times in favour of {primary}")]
fn notified(registry: &RegistryContext, count: usize, primary: String) -> Result<()> {
    let config = registry.configuration()?;
    let listener = registry
        .listener
        .get()
        .ok_or_else(|| anyhow!("no listener registered"))?;
    let primary = config
        .aggregate()
        .find_by_name(&primary)
        .ok_or_else(|| anyhow!("no parameter named {primary}"))?;
    listener.ensure_calls(count, primary)
}
