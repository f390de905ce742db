#![allow(dead_code)]

use std::ffi::{CStr, CString, c_void};
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

use xcb_wrangler::os::OpenFlags;
use xcb_wrangler::xcb::{CoreFns, PresentFns, RandrFns, ShmFns, XfixesFns};
use xcb_wrangler::{DynLoader, Error, Result, SymbolTable};

/// A stand-in exported function. Tests only resolve it, never call it.
unsafe extern "C" fn stub() {}

pub fn stub_ptr() -> NonNull<c_void> {
    let f: unsafe extern "C" fn() = stub;
    NonNull::new(f as usize as *mut c_void).unwrap()
}

/// A fake platform: the library names that "exist" on it, the exported
/// names "missing" from otherwise-present libraries, and a counter of open
/// attempts.
pub struct StubLoader {
    installed: Vec<CString>,
    missing_symbols: Vec<CString>,
    open_calls: AtomicUsize,
}

impl StubLoader {
    /// A system with nothing installed.
    pub fn empty() -> Self {
        StubLoader {
            installed: Vec::new(),
            missing_symbols: Vec::new(),
            open_calls: AtomicUsize::new(0),
        }
    }

    /// Every recognized library present under its first platform name.
    pub fn with_everything() -> Self {
        let mut loader = StubLoader::empty();
        loader.install(CoreFns::SONAMES[0]);
        loader.install(ShmFns::SONAMES[0]);
        loader.install(XfixesFns::SONAMES[0]);
        loader.install(PresentFns::SONAMES[0]);
        loader.install(RandrFns::SONAMES[0]);
        loader
    }

    pub fn install(&mut self, soname: &CStr) {
        self.installed.push(soname.to_owned());
    }

    pub fn uninstall(&mut self, soname: &CStr) {
        self.installed.retain(|s| s.as_c_str() != soname);
    }

    /// Makes `name` unresolvable even in installed libraries.
    pub fn hide_symbol(&mut self, name: &str) {
        self.missing_symbols.push(CString::new(name).unwrap());
    }

    /// Number of open attempts the engine has made against this loader.
    pub fn opens(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }
}

impl DynLoader for StubLoader {
    type Handle = ();

    fn open(&self, lib: &'static str, soname: &CStr, _flags: OpenFlags) -> Result<()> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        if self.installed.iter().any(|s| s.as_c_str() == soname) {
            Ok(())
        } else {
            Err(Error::Open {
                lib,
                msg: "not installed".into(),
            })
        }
    }

    fn symbol(&self, _handle: &(), name: &CStr) -> Option<NonNull<c_void>> {
        if self.missing_symbols.iter().any(|s| s.as_c_str() == name) {
            None
        } else {
            Some(stub_ptr())
        }
    }
}
