// Runs in its own process so the environment is read fresh.

use ayurwell_log::{Level, current_level, is_debug_enabled, is_level_enabled};

#[test]
fn test_debug_env_applies_before_first_message() {
    // SAFETY: the only test in this binary, nothing else reads the environment yet.
    unsafe {
        std::env::set_var("AYURWELL_DEBUG", "1");
        std::env::remove_var("AYURWELL_LOG_LEVEL");
    }

    assert!(is_level_enabled(Level::Debug));
    assert!(is_debug_enabled());
    assert_eq!(current_level(), Level::Debug);
    assert!(!is_level_enabled(Level::Trace));

    ayurwell_log::debug!("first debug line");
}
