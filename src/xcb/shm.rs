//! MIT-SHM extension library table (`shm.h`, libxcb-shm).

use super::{
    xcb_connection_t, xcb_drawable_t, xcb_generic_error_t, xcb_pixmap_t, xcb_void_cookie_t,
};
use crate::table::symbol_table;
use core::ffi::{CStr, c_int, c_uint};

pub type xcb_shm_seg_t = u32;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_shm_query_version_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_shm_create_segment_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
pub struct xcb_shm_query_version_reply_t {
    pub response_type: u8,
    pub shared_pixmaps: u8,
    pub sequence: u16,
    pub length: u32,
    pub major_version: u16,
    pub minor_version: u16,
    pub uid: u16,
    pub gid: u16,
    pub pixmap_format: u8,
    pub pad0: [u8; 15],
}

#[repr(C)]
pub struct xcb_shm_create_segment_reply_t {
    pub response_type: u8,
    pub nfd: u8,
    pub sequence: u16,
    pub length: u32,
    pub pad0: [u8; 24],
}

#[cfg(target_os = "macos")]
const SONAMES: &[&CStr] = &[c"libxcb-shm.0.dylib", c"libxcb-shm.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
const SONAMES: &[&CStr] = &[c"libxcb-shm.so.0", c"libxcb-shm.so"];
#[cfg(windows)]
const SONAMES: &[&CStr] = &[c"libxcb-shm.dll"];

symbol_table! {
    /// Entry points of the MIT-SHM extension library.
    ///
    /// The fd-passing requests arrived with MIT-SHM 1.2 and are optional:
    /// an older installed libxcb-shm degrades to
    /// [`LoadedPartial`](crate::LibraryStatus::LoadedPartial) instead of
    /// failing.
    pub struct ShmFns {
        name: "xcb-shm",
        sonames: SONAMES,
        required: {
            fn xcb_shm_query_version(c: *mut xcb_connection_t) -> xcb_shm_query_version_cookie_t;
            fn xcb_shm_query_version_unchecked(
                c: *mut xcb_connection_t,
            ) -> xcb_shm_query_version_cookie_t;
            fn xcb_shm_query_version_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_shm_query_version_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_shm_query_version_reply_t;
            fn xcb_shm_attach(
                c: *mut xcb_connection_t,
                shmseg: xcb_shm_seg_t,
                shmid: u32,
                read_only: u8,
            ) -> xcb_void_cookie_t;
            fn xcb_shm_attach_checked(
                c: *mut xcb_connection_t,
                shmseg: xcb_shm_seg_t,
                shmid: u32,
                read_only: u8,
            ) -> xcb_void_cookie_t;
            fn xcb_shm_detach(
                c: *mut xcb_connection_t,
                shmseg: xcb_shm_seg_t,
            ) -> xcb_void_cookie_t;
            fn xcb_shm_create_pixmap(
                c: *mut xcb_connection_t,
                pid: xcb_pixmap_t,
                drawable: xcb_drawable_t,
                width: u16,
                height: u16,
                depth: u8,
                shmseg: xcb_shm_seg_t,
                offset: u32,
            ) -> xcb_void_cookie_t;
        },
        optional: {
            fn xcb_shm_attach_fd(
                c: *mut xcb_connection_t,
                shmseg: xcb_shm_seg_t,
                shm_fd: c_int,
                read_only: u8,
            ) -> xcb_void_cookie_t;
            fn xcb_shm_create_segment(
                c: *mut xcb_connection_t,
                shmseg: xcb_shm_seg_t,
                size: u32,
                read_only: u8,
            ) -> xcb_shm_create_segment_cookie_t;
        },
    }
}
