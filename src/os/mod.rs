//! Thin abstraction over the operating system's dynamic-library loading
//! primitive: open a library by name, resolve an exported name to an
//! address. Closing is deliberately not offered, see [`Library`].

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        mod windows;
        pub use windows::Library;
    } else if #[cfg(unix)] {
        mod unix;
        pub use unix::Library;
    } else {
        compile_error!("no dynamic loading primitive on this platform");
    }
}

bitflags::bitflags! {
    /// Flags forwarded to the platform loader when opening a library.
    ///
    /// On unix these map onto the corresponding `RTLD_*` constants. The
    /// windows loader has no equivalent knobs; flags are accepted and
    /// ignored there.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct OpenFlags: u32 {
        /// Resolve symbols lazily, on first use.
        const LAZY = 1;
        /// Resolve all symbols when the library is opened.
        const NOW = 1 << 1;
        /// Keep the library's symbols out of the global namespace.
        const LOCAL = 1 << 2;
        /// Make the library's symbols available for subsequently opened
        /// libraries.
        const GLOBAL = 1 << 3;
    }
}

impl OpenFlags {
    /// The flags the wrangle engine opens every library with.
    ///
    /// Lazy binding matches the long-standing extension-wrangler behavior:
    /// entry points are probed one by one anyway, and an unused one must
    /// not keep an otherwise usable library from loading.
    pub const WRANGLE: OpenFlags = OpenFlags::LAZY.union(OpenFlags::LOCAL);
}
