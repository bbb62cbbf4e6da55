//! Log capture for tests.

/// Route `log` output through the test harness. Safe to call from every test.
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
