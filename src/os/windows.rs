use crate::{Result, error::open_error, os::OpenFlags};
use core::ffi::{CStr, c_void};
use core::ptr::NonNull;
use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryA};

/// A shared library opened through `LoadLibraryA`.
///
/// The handle is never passed to `FreeLibrary`; see the unix counterpart
/// for the rationale. Dropping a `Library` leaks the module handle on
/// purpose.
pub struct Library {
    handle: NonNull<c_void>,
}

unsafe impl Send for Library {}
unsafe impl Sync for Library {}

impl Library {
    /// Opens the library named `soname`.
    ///
    /// Windows resolves imports eagerly; `flags` has no equivalent here and
    /// is ignored.
    pub fn open(lib: &'static str, soname: &CStr, _flags: OpenFlags) -> Result<Self> {
        let handle = unsafe { LoadLibraryA(soname.as_ptr().cast()) };
        match NonNull::new(handle.cast()) {
            Some(handle) => Ok(Library { handle }),
            None => Err(open_error(
                lib,
                format!("LoadLibraryA failed: error {:#010x}", unsafe {
                    GetLastError()
                }),
            )),
        }
    }

    /// Resolves an exported name to an address, `None` when absent.
    pub fn symbol(&self, name: &CStr) -> Option<NonNull<c_void>> {
        let proc = unsafe { GetProcAddress(self.handle.as_ptr(), name.as_ptr().cast()) };
        proc.map(|f| unsafe { NonNull::new_unchecked(f as *mut c_void) })
    }
}
