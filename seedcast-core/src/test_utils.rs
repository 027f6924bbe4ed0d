//! Shared test utilities for `seedcast-core`.

use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration for this crate's property
/// suites.
///
/// `PROPTEST_CASES` from the environment takes precedence over
/// `default_cases` so CI can dial coverage up or down without code
/// changes.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
