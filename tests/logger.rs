//! Global subscriber installation
//!
//! Kept in its own test binary: a successful init here installs a DEBUG
//! subscriber for the whole process.

use fibseq::util::logger::{self, LogLevel};

#[test]
fn test_second_init_is_noop() {
    assert!(logger::init_with_level(LogLevel::Debug));
    assert!(!logger::init());
    assert!(!logger::init_debug());

    // The first subscriber stays in place
    assert!(tracing::enabled!(tracing::Level::DEBUG));
}
