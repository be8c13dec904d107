//! Policy for suites that need the embedded PostgreSQL cluster.
//!
//! Bootstrapping downloads PostgreSQL binaries, which is not possible in
//! every environment. Suites skip with a marker by default and fail loudly
//! when `REQUIRE_TEST_CLUSTER` is truthy, as it is in CI.

/// Returns true when `REQUIRE_TEST_CLUSTER` is "1", "true" or "yes"
/// (case-insensitive).
pub fn test_cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// Prints a skip marker and returns `None` unless the cluster is required,
/// in which case it panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if test_cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
