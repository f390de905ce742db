//! Process-wide storage for wrangle results.
//!
//! The [`Registry`] holds the resolved function-pointer table of the core
//! library and of each recognized extension library, together with one
//! status per library. It is built whole by the engine, exactly once per
//! [`Wrangler`], and is immutable afterward; concurrent reads need no
//! synchronization.

use crate::loader::{DynLoader, OsLoader, Wrangled};
use crate::table::SymbolTable;
use crate::xcb::{CoreFns, PresentFns, RandrFns, ShmFns, XfixesFns};
use delegate::delegate;
use std::sync::OnceLock;

/// Load state of one recognized library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibraryStatus {
    /// Initialization has not run yet.
    NotAttempted,
    /// The library was opened and every declared entry point resolved.
    LoadedFull,
    /// All required entry points resolved; at least one optional entry
    /// point is absent (an older installed release).
    LoadedPartial,
    /// The library could not be located or opened.
    LoadFailed,
    /// The library was opened but a required entry point is missing.
    SymbolFailed,
}

impl LibraryStatus {
    /// Whether the library's function-pointer table may be used.
    #[inline]
    pub fn is_usable(self) -> bool {
        matches!(self, LibraryStatus::LoadedFull | LibraryStatus::LoadedPartial)
    }
}

/// Result of the single initialization entry point.
///
/// Derived from the core library's status alone; extension outcomes are
/// reported separately and never affect it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStatus {
    /// The core library loaded with every required entry point resolved.
    Success,
    /// The core library is not installed, or not on the loader search path.
    CoreLibraryNotFound,
    /// The core library was found but lacks a required entry point.
    CoreSymbolMissing,
}

/// Identifies one recognized library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibraryId {
    /// The core library, libxcb itself.
    Xcb,
    /// The MIT-SHM extension library.
    Shm,
    /// The XFIXES extension library.
    Xfixes,
    /// The Present extension library.
    Present,
    /// The RandR extension library.
    Randr,
}

impl LibraryId {
    /// Every recognized library, in wrangle order.
    pub const ALL: &'static [LibraryId] = &[
        LibraryId::Xcb,
        LibraryId::Shm,
        LibraryId::Xfixes,
        LibraryId::Present,
        LibraryId::Randr,
    ];

    /// The library family name, as used in errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            LibraryId::Xcb => CoreFns::NAME,
            LibraryId::Shm => ShmFns::NAME,
            LibraryId::Xfixes => XfixesFns::NAME,
            LibraryId::Present => PresentFns::NAME,
            LibraryId::Randr => RandrFns::NAME,
        }
    }
}

/// Resolved function pointers for the core library and each recognized
/// extension, with one status per library.
///
/// Write access ends when construction returns; every accessor hands out
/// shared references into immutable storage.
pub struct Registry {
    core: Wrangled<CoreFns>,
    shm: Wrangled<ShmFns>,
    xfixes: Wrangled<XfixesFns>,
    present: Wrangled<PresentFns>,
    randr: Wrangled<RandrFns>,
}

impl Registry {
    /// Wrangles every recognized library in declared order.
    ///
    /// Extension outcomes are independent of the core outcome and of each
    /// other: a library that fails to load or resolve degrades only its own
    /// status and never aborts the rest. Note that every extension's
    /// functions take a connection obtained from the core library, so an
    /// extension table is only useful when the core loaded as well.
    pub fn wrangle<L: DynLoader>(loader: &L) -> Self {
        Registry {
            core: Wrangled::wrangle(loader),
            shm: Wrangled::wrangle(loader),
            xfixes: Wrangled::wrangle(loader),
            present: Wrangled::wrangle(loader),
            randr: Wrangled::wrangle(loader),
        }
    }

    /// Derives the overall initialization result from the core status.
    pub fn overall(&self) -> InitStatus {
        match self.core.status() {
            LibraryStatus::LoadedFull | LibraryStatus::LoadedPartial => InitStatus::Success,
            LibraryStatus::LoadFailed | LibraryStatus::NotAttempted => {
                InitStatus::CoreLibraryNotFound
            }
            LibraryStatus::SymbolFailed => InitStatus::CoreSymbolMissing,
        }
    }

    /// The load state of one recognized library.
    pub fn status(&self, lib: LibraryId) -> LibraryStatus {
        match lib {
            LibraryId::Xcb => self.core.status(),
            LibraryId::Shm => self.shm.status(),
            LibraryId::Xfixes => self.xfixes.status(),
            LibraryId::Present => self.present.status(),
            LibraryId::Randr => self.randr.status(),
        }
    }

    // Delegate the table accessors to the per-library wrangle results.
    delegate! {
        to self.core {
            /// The core libxcb table, present iff the core loaded.
            #[call(fns)]
            pub fn core(&self) -> Option<&CoreFns>;
        }
        to self.shm {
            /// The MIT-SHM table, present iff libxcb-shm loaded.
            #[call(fns)]
            pub fn shm(&self) -> Option<&ShmFns>;
        }
        to self.xfixes {
            /// The XFIXES table, present iff libxcb-xfixes loaded.
            #[call(fns)]
            pub fn xfixes(&self) -> Option<&XfixesFns>;
        }
        to self.present {
            /// The Present table, present iff libxcb-present loaded.
            #[call(fns)]
            pub fn present(&self) -> Option<&PresentFns>;
        }
        to self.randr {
            /// The RandR table, present iff libxcb-randr loaded.
            #[call(fns)]
            pub fn randr(&self) -> Option<&RandrFns>;
        }
    }
}

/// The initialization gate: runs the engine at most once and memoizes the
/// resulting [`Registry`] for the rest of the process.
///
/// One process-wide instance backs [`init`](crate::init); independent
/// instances can be constructed for tests or embedded lifecycles. The
/// compiled-in symbol tables are fixed and singular: two instances wrangle
/// the same descriptors, never different ones.
pub struct Wrangler {
    registry: OnceLock<Registry>,
}

impl Wrangler {
    /// Creates a gate in the uninitialized state.
    pub const fn new() -> Self {
        Wrangler {
            registry: OnceLock::new(),
        }
    }

    /// Runs the engine against the operating system's loader, at most once.
    ///
    /// The first caller performs the (possibly slow) library opening and
    /// symbol resolution; concurrent first callers block until it finishes;
    /// every later call is a non-blocking read of the memoized result.
    pub fn ensure_init(&self) -> InitStatus {
        self.ensure_init_with(&OsLoader)
    }

    /// Same as [`ensure_init`](Self::ensure_init) with an injected loader.
    ///
    /// Only the loader of the call that wins the initialization race is
    /// ever used; there is no way to re-wrangle with a different one.
    pub fn ensure_init_with<L: DynLoader>(&self, loader: &L) -> InitStatus {
        self.registry
            .get_or_init(|| Registry::wrangle(loader))
            .overall()
    }

    /// The memoized registry, `None` until initialization has run.
    pub fn registry(&self) -> Option<&Registry> {
        self.registry.get()
    }

    /// The load state of one recognized library,
    /// [`LibraryStatus::NotAttempted`] before initialization.
    pub fn status(&self, lib: LibraryId) -> LibraryStatus {
        self.registry
            .get()
            .map_or(LibraryStatus::NotAttempted, |registry| registry.status(lib))
    }
}

impl Default for Wrangler {
    fn default() -> Self {
        Wrangler::new()
    }
}
