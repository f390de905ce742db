//! Probes the real host through the process-wide wrangler. These tests
//! accept either outcome: build machines may or may not have libxcb
//! installed.

use rstest::rstest;
use xcb_wrangler::{InitStatus, LibraryId, LibraryStatus};

#[rstest]
fn live_init_is_idempotent() {
    let first = xcb_wrangler::init();
    let second = xcb_wrangler::init();
    assert_eq!(first, second);

    match first {
        InitStatus::Success => {
            assert!(xcb_wrangler::core().is_some());
            assert!(xcb_wrangler::status(LibraryId::Xcb).is_usable());
        }
        _ => {
            assert!(xcb_wrangler::core().is_none());
            assert!(!xcb_wrangler::status(LibraryId::Xcb).is_usable());
        }
    }

    // Every recognized library was attempted, whatever the core outcome.
    for &lib in LibraryId::ALL {
        assert_ne!(xcb_wrangler::status(lib), LibraryStatus::NotAttempted);
    }
}

/// Cross-checks our answer against an independent loader.
#[rstest]
#[cfg(unix)]
fn live_matches_libloading() {
    use xcb_wrangler::SymbolTable;

    let ours = xcb_wrangler::init() == InitStatus::Success;
    let theirs = xcb_wrangler::xcb::CoreFns::SONAMES.iter().any(|soname| {
        unsafe { libloading::Library::new(soname.to_str().unwrap()) }.is_ok()
    });
    assert_eq!(ours, theirs);
}

/// Exercises a resolved entry point end to end. Works with or without an X
/// server: a failed connection comes back as an error object that still
/// must be freed with `xcb_disconnect`.
#[rstest]
#[cfg(unix)]
fn live_connect_roundtrip() {
    if xcb_wrangler::init() != InitStatus::Success {
        eprintln!("skipping: libxcb not installed");
        return;
    }
    let core = xcb_wrangler::core().unwrap();

    let mut screen = 0;
    let conn = unsafe { (core.xcb_connect)(std::ptr::null(), &mut screen) };
    assert!(!conn.is_null());

    if unsafe { (core.xcb_connection_has_error)(conn) } == 0 {
        let setup = unsafe { (core.xcb_get_setup)(conn) };
        assert!(!setup.is_null());
        let _ = unsafe { (core.xcb_flush)(conn) };
    }
    unsafe { (core.xcb_disconnect)(conn) };
}
