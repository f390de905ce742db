//! Symbol table descriptors.
//!
//! Every wrangled library is described at compile time by an ordered list
//! of entry points, each classified as required or optional. The
//! [`symbol_table!`] macro turns such a description into a struct of typed
//! function pointers plus the [`SymbolTable`] impl the engine drives. The
//! declared `unsafe extern "C"` signatures are the binary-interface
//! contract with the installed library; a mismatch cannot be detected at
//! load time, which is why the declarations live in one reviewable place
//! per library.

use crate::Result;
use crate::loader::DynLoader;
use core::ffi::CStr;

/// A single declared entry point of a wrangled library.
#[derive(Clone, Copy, Debug)]
pub struct SymbolEntry {
    /// Canonical exported name.
    pub name: &'static CStr,
    /// Whether a resolution failure fails the whole library.
    pub required: bool,
}

/// Converts a NUL-terminated byte literal into a `&CStr` at compile time.
pub(crate) const fn cstr(bytes: &'static [u8]) -> &'static CStr {
    match CStr::from_bytes_with_nul(bytes) {
        Ok(s) => s,
        Err(_) => panic!("entry point name must be NUL-terminated without interior NULs"),
    }
}

/// A fully resolved table plus how many optional entries were absent.
pub struct Resolved<T> {
    pub(crate) fns: T,
    pub(crate) missing_optional: usize,
}

/// Compile-time description of one wrangled library.
///
/// Implementations are generated by [`symbol_table!`]; the engine only ever
/// consumes this trait, so tests can drive it with stub loaders.
pub trait SymbolTable: Sized + 'static {
    /// Library family name, used in errors and logs.
    const NAME: &'static str;

    /// Platform library names tried in declared order.
    const SONAMES: &'static [&'static CStr];

    /// Declared entry points in resolution order.
    const SYMBOLS: &'static [SymbolEntry];

    /// Resolves every declared entry point from an opened library.
    ///
    /// Fails on the first missing required entry; absent optional entries
    /// are counted and left as `None`.
    ///
    /// # Safety
    /// `handle` must refer to a live library whose exports match the
    /// signatures declared for `Self`. A signature mismatch is a silent
    /// binary-interface violation that no check here can catch.
    unsafe fn resolve<L: DynLoader>(loader: &L, handle: &L::Handle) -> Result<Resolved<Self>>;
}

/// Declares one wrangled library: its family name, the platform library
/// names to try, and the ordered required/optional entry points.
///
/// Generates a struct whose fields mirror the exported names exactly
/// (plain `unsafe extern "C" fn` pointers for required entries,
/// `Option<unsafe extern "C" fn>` for optional ones) and the matching
/// [`SymbolTable`] impl.
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        pub struct $fns:ident {
            name: $name:literal,
            sonames: $sonames:expr,
            required: {
                $(fn $req:ident($($req_arg:ident: $req_ty:ty),* $(,)?) $(-> $req_ret:ty)?;)*
            },
            optional: {
                $(fn $opt:ident($($opt_arg:ident: $opt_ty:ty),* $(,)?) $(-> $opt_ret:ty)?;)*
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $fns {
            $(pub $req: unsafe extern "C" fn($($req_arg: $req_ty),*) $(-> $req_ret)?,)*
            $(pub $opt: ::core::option::Option<
                unsafe extern "C" fn($($opt_arg: $opt_ty),*) $(-> $opt_ret)?,
            >,)*
        }

        impl $crate::table::SymbolTable for $fns {
            const NAME: &'static str = $name;

            const SONAMES: &'static [&'static ::core::ffi::CStr] = $sonames;

            const SYMBOLS: &'static [$crate::table::SymbolEntry] = &[
                $($crate::table::SymbolEntry {
                    name: $crate::table::cstr(concat!(stringify!($req), "\0").as_bytes()),
                    required: true,
                },)*
                $($crate::table::SymbolEntry {
                    name: $crate::table::cstr(concat!(stringify!($opt), "\0").as_bytes()),
                    required: false,
                },)*
            ];

            unsafe fn resolve<L: $crate::loader::DynLoader>(
                loader: &L,
                handle: &L::Handle,
            ) -> $crate::Result<$crate::table::Resolved<Self>> {
                #[allow(unused_mut)]
                let mut missing_optional = 0usize;
                let fns = Self {
                    $($req: {
                        let name =
                            $crate::table::cstr(concat!(stringify!($req), "\0").as_bytes());
                        let ptr = loader.symbol(handle, name).ok_or_else(|| {
                            $crate::error::symbol_error(Self::NAME, stringify!($req))
                        })?;
                        unsafe { ::core::mem::transmute(ptr.as_ptr()) }
                    },)*
                    $($opt: {
                        let name =
                            $crate::table::cstr(concat!(stringify!($opt), "\0").as_bytes());
                        match loader.symbol(handle, name) {
                            Some(ptr) => {
                                Some(unsafe { ::core::mem::transmute(ptr.as_ptr()) })
                            }
                            None => {
                                missing_optional += 1;
                                None
                            }
                        }
                    },)*
                };
                Ok($crate::table::Resolved {
                    fns,
                    missing_optional,
                })
            }
        }
    };
}

pub(crate) use symbol_table;
