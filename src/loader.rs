//! The wrangle engine.
//!
//! For one library at a time: open it through the platform loader, resolve
//! its declared entry points in order, and fold the outcome into a
//! [`LibraryStatus`]. The engine never retries: a library that failed to
//! wrangle stays failed for the process lifetime, because recovering would
//! require unloading, and unloading would invalidate function pointers
//! already handed to callers.

use crate::os::{Library, OpenFlags};
use crate::registry::LibraryStatus;
use crate::table::SymbolTable;
use crate::{Result, error::open_error};
use core::ffi::{CStr, c_void};
use core::ptr::NonNull;

/// The platform-loading seam the engine runs against.
///
/// The production implementation is [`OsLoader`]. Tests substitute stub
/// loaders to exercise every failure path without any real library being
/// installed.
pub trait DynLoader {
    /// Opaque ownership token for an opened library.
    ///
    /// Dropping a handle must not unmap the library: resolved function
    /// pointers outlive the handle by design. The production handle has no
    /// destructor at all.
    type Handle;

    /// Opens a library by platform name.
    fn open(&self, lib: &'static str, soname: &CStr, flags: OpenFlags) -> Result<Self::Handle>;

    /// Resolves an exported name to an address.
    ///
    /// `None` means the symbol is absent, which is an expected outcome and
    /// not an error.
    fn symbol(&self, handle: &Self::Handle, name: &CStr) -> Option<NonNull<c_void>>;
}

/// The operating system's dynamic loader.
pub struct OsLoader;

impl DynLoader for OsLoader {
    type Handle = Library;

    fn open(&self, lib: &'static str, soname: &CStr, flags: OpenFlags) -> Result<Library> {
        Library::open(lib, soname, flags)
    }

    fn symbol(&self, handle: &Library, name: &CStr) -> Option<NonNull<c_void>> {
        handle.symbol(name)
    }
}

/// One library's wrangle outcome: its status plus, when the status permits
/// use, the resolved table.
///
/// The table is present if and only if the status is
/// [`LibraryStatus::LoadedFull`] or [`LibraryStatus::LoadedPartial`]; a
/// missing required entry point discards everything resolved so far, so no
/// half-populated table can ever be observed.
pub struct Wrangled<T> {
    status: LibraryStatus,
    fns: Option<T>,
}

impl<T: SymbolTable> Wrangled<T> {
    /// Opens `T`'s library and resolves its symbol table.
    pub fn wrangle<L: DynLoader>(loader: &L) -> Self {
        let handle = match open_first::<T, L>(loader) {
            Ok(handle) => handle,
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!("[Wrangle] {}: {}", T::NAME, _err);
                return Wrangled {
                    status: LibraryStatus::LoadFailed,
                    fns: None,
                };
            }
        };
        match unsafe { T::resolve(loader, &handle) } {
            Ok(resolved) => {
                let status = if resolved.missing_optional == 0 {
                    LibraryStatus::LoadedFull
                } else {
                    LibraryStatus::LoadedPartial
                };
                #[cfg(feature = "log")]
                log::debug!(
                    "[Wrangle] {}: resolved {}/{} entry points",
                    T::NAME,
                    T::SYMBOLS.len() - resolved.missing_optional,
                    T::SYMBOLS.len()
                );
                Wrangled {
                    status,
                    fns: Some(resolved.fns),
                }
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!("[Wrangle] {}: {}", T::NAME, _err);
                Wrangled {
                    status: LibraryStatus::SymbolFailed,
                    fns: None,
                }
            }
        }
    }

    /// The library's load state.
    #[inline]
    pub fn status(&self) -> LibraryStatus {
        self.status
    }

    /// The resolved table, `Some` iff [`status`](Self::status) permits use.
    #[inline]
    pub fn fns(&self) -> Option<&T> {
        self.fns.as_ref()
    }
}

/// Tries `T`'s platform library names in declared order, returning the
/// first handle that opens. The last open error is reported when none do.
fn open_first<T: SymbolTable, L: DynLoader>(loader: &L) -> Result<L::Handle> {
    let mut last_err = None;
    for soname in T::SONAMES {
        match loader.open(T::NAME, soname, OpenFlags::WRANGLE) {
            Ok(handle) => {
                #[cfg(feature = "log")]
                log::trace!("[Open] {}: {:?}", T::NAME, soname);
                return Ok(handle);
            }
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| open_error(T::NAME, "no platform library names declared")))
}
