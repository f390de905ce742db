//! # xcb_wrangler
//! A runtime symbol wrangler for `libxcb` and its extension libraries:
//! use XCB from a program that is not linked against it, and keep running
//! on hosts where it is not installed.
//!
//! The crate opens each library through the platform's dynamic loader the
//! first time [`init`] is called, resolves every declared entry point into
//! a typed function pointer, and memoizes one status per library for the
//! rest of the process. The core library (libxcb itself) is all-or-nothing;
//! each extension library is opportunistic and degrades independently.
//!
//! ## Example
//! ```no_run
//! use xcb_wrangler::InitStatus;
//!
//! if xcb_wrangler::init() == InitStatus::Success {
//!     let core = xcb_wrangler::core().unwrap();
//!     let mut screen = 0;
//!     let conn = unsafe { (core.xcb_connect)(std::ptr::null(), &mut screen) };
//!     unsafe { (core.xcb_disconnect)(conn) };
//! } else {
//!     eprintln!("XCB not found");
//! }
//! ```
//!
//! Libraries are opened once and never closed: resolved function pointers
//! may be held by callers for the remaining process lifetime, so unloading
//! would be unsound. The OS handles are leaked deliberately.

pub(crate) mod error;
mod loader;
pub mod os;
mod registry;
mod table;
pub mod xcb;

pub use error::Error;
pub use loader::{DynLoader, OsLoader, Wrangled};
pub use registry::{InitStatus, LibraryId, LibraryStatus, Registry, Wrangler};
pub use table::{Resolved, SymbolEntry, SymbolTable};

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The process-wide wrangler backing [`init`] and the accessors below.
static WRANGLER: Wrangler = Wrangler::new();

/// Initializes the process-wide wrangler, at most once.
///
/// The first call opens the core library and every recognized extension
/// library and resolves their entry points; every later call (from any
/// thread) returns the same memoized result without touching the loader.
/// Callers branch on the result before using any wrangled function.
pub fn init() -> InitStatus {
    WRANGLER.ensure_init()
}

/// The load state of one recognized library.
///
/// Returns [`LibraryStatus::NotAttempted`] until [`init`] has run. Use
/// this for capability checks finer than [`init`]'s overall result, for
/// example before relying on a particular extension.
pub fn status(lib: LibraryId) -> LibraryStatus {
    WRANGLER.status(lib)
}

/// The process-wide registry, `None` until [`init`] has run.
pub fn registry() -> Option<&'static Registry> {
    WRANGLER.registry()
}

/// The core libxcb table, `None` unless [`init`] returned
/// [`InitStatus::Success`].
pub fn core() -> Option<&'static xcb::CoreFns> {
    WRANGLER.registry().and_then(Registry::core)
}

/// The MIT-SHM table, `None` unless libxcb-shm loaded.
pub fn shm() -> Option<&'static xcb::ShmFns> {
    WRANGLER.registry().and_then(Registry::shm)
}

/// The XFIXES table, `None` unless libxcb-xfixes loaded.
pub fn xfixes() -> Option<&'static xcb::XfixesFns> {
    WRANGLER.registry().and_then(Registry::xfixes)
}

/// The Present table, `None` unless libxcb-present loaded.
pub fn present() -> Option<&'static xcb::PresentFns> {
    WRANGLER.registry().and_then(Registry::present)
}

/// The RandR table, `None` unless libxcb-randr loaded.
pub fn randr() -> Option<&'static xcb::RandrFns> {
    WRANGLER.registry().and_then(Registry::randr)
}
