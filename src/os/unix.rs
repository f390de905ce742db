use crate::{Result, error::open_error, os::OpenFlags};
use core::ffi::{CStr, c_int, c_void};
use core::ptr::NonNull;
use libc::{RTLD_GLOBAL, RTLD_LAZY, RTLD_LOCAL, RTLD_NOW, dlerror, dlopen, dlsym};

/// A shared library opened through `dlopen`.
///
/// The handle is never passed to `dlclose`. Function pointers resolved from
/// it may be held by caller code for the rest of the process, so the mapping
/// must stay valid until process exit; dropping a `Library` leaks the OS
/// handle on purpose.
pub struct Library {
    handle: NonNull<c_void>,
}

// The handle is a process-global resource owned by the dynamic loader;
// libxcb's exported functions are themselves thread-safe.
unsafe impl Send for Library {}
unsafe impl Sync for Library {}

fn rtld_flags(flags: OpenFlags) -> c_int {
    let mut bits = 0;
    if flags.contains(OpenFlags::LAZY) {
        bits |= RTLD_LAZY;
    }
    if flags.contains(OpenFlags::NOW) {
        bits |= RTLD_NOW;
    }
    if flags.contains(OpenFlags::LOCAL) {
        bits |= RTLD_LOCAL;
    }
    if flags.contains(OpenFlags::GLOBAL) {
        bits |= RTLD_GLOBAL;
    }
    bits
}

fn take_dlerror() -> Option<String> {
    let err = unsafe { dlerror() };
    if err.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned())
}

impl Library {
    /// Opens the library named `soname`.
    ///
    /// A library that is not installed is an expected outcome; the returned
    /// error carries the `dlerror` text for diagnostics.
    pub fn open(lib: &'static str, soname: &CStr, flags: OpenFlags) -> Result<Self> {
        let handle = unsafe { dlopen(soname.as_ptr(), rtld_flags(flags)) };
        match NonNull::new(handle) {
            Some(handle) => Ok(Library { handle }),
            None => Err(open_error(
                lib,
                take_dlerror().unwrap_or_else(|| "dlopen failed".into()),
            )),
        }
    }

    /// Resolves an exported name to an address.
    ///
    /// `None` means the symbol is absent. The symbol's value being a null
    /// pointer is folded into the same answer; no entry point wrangled here
    /// is legitimately null.
    pub fn symbol(&self, name: &CStr) -> Option<NonNull<c_void>> {
        // Clear any stale error state before probing.
        let _ = unsafe { dlerror() };
        NonNull::new(unsafe { dlsym(self.handle.as_ptr(), name.as_ptr()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtld_flag_mapping() {
        assert_eq!(rtld_flags(OpenFlags::LAZY), RTLD_LAZY);
        assert_eq!(
            rtld_flags(OpenFlags::NOW | OpenFlags::GLOBAL),
            RTLD_NOW | RTLD_GLOBAL
        );
        assert_eq!(rtld_flags(OpenFlags::WRANGLE), RTLD_LAZY | RTLD_LOCAL);
    }
}
