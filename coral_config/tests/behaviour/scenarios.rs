//! Binds the feature files to the step registry.

use crate::fixtures::{RegistryContext, registry};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/defaults.feature",
    fixtures = [registry: RegistryContext]
);
scenarios!(
    "tests/features/ambiguity.feature",
    fixtures = [registry: RegistryContext]
);
scenarios!(
    "tests/features/seeding.feature",
    fixtures = [registry: RegistryContext]
);
scenarios!(
    "tests/features/aggregate.feature",
    fixtures = [registry: RegistryContext]
);
scenarios!(
    "tests/features/deprecation.feature",
    fixtures = [registry: RegistryContext]
);
