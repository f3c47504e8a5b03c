use std::env;

use proptest::prelude::ProptestConfig;

/// Proptest config; `PROPTEST_CASES` raises the case count locally.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
