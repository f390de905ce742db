//! XFIXES extension library table (`xfixes.h`, libxcb-xfixes).

use super::{
    xcb_connection_t, xcb_generic_error_t, xcb_rectangle_t, xcb_void_cookie_t, xcb_window_t,
};
use crate::table::symbol_table;
use core::ffi::{CStr, c_uint};

pub type xcb_xfixes_region_t = u32;
pub type xcb_xfixes_barrier_t = u32;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_xfixes_query_version_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
pub struct xcb_xfixes_query_version_reply_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub length: u32,
    pub major_version: u32,
    pub minor_version: u32,
    pub pad1: [u8; 16],
}

#[cfg(target_os = "macos")]
const SONAMES: &[&CStr] = &[c"libxcb-xfixes.0.dylib", c"libxcb-xfixes.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
const SONAMES: &[&CStr] = &[c"libxcb-xfixes.so.0", c"libxcb-xfixes.so"];
#[cfg(windows)]
const SONAMES: &[&CStr] = &[c"libxcb-xfixes.dll"];

symbol_table! {
    /// Entry points of the XFIXES extension library.
    ///
    /// Pointer barriers arrived with XFIXES 5 and are optional.
    pub struct XfixesFns {
        name: "xcb-xfixes",
        sonames: SONAMES,
        required: {
            fn xcb_xfixes_query_version(
                c: *mut xcb_connection_t,
                client_major_version: u32,
                client_minor_version: u32,
            ) -> xcb_xfixes_query_version_cookie_t;
            fn xcb_xfixes_query_version_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_xfixes_query_version_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_xfixes_query_version_reply_t;
            fn xcb_xfixes_create_region(
                c: *mut xcb_connection_t,
                region: xcb_xfixes_region_t,
                rectangles_len: u32,
                rectangles: *const xcb_rectangle_t,
            ) -> xcb_void_cookie_t;
            fn xcb_xfixes_destroy_region(
                c: *mut xcb_connection_t,
                region: xcb_xfixes_region_t,
            ) -> xcb_void_cookie_t;
            fn xcb_xfixes_hide_cursor(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
            ) -> xcb_void_cookie_t;
            fn xcb_xfixes_show_cursor(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
            ) -> xcb_void_cookie_t;
        },
        optional: {
            fn xcb_xfixes_create_pointer_barrier(
                c: *mut xcb_connection_t,
                barrier: xcb_xfixes_barrier_t,
                window: xcb_window_t,
                x1: u16,
                y1: u16,
                x2: u16,
                y2: u16,
                directions: u32,
                num_devices: u16,
                devices: *const u16,
            ) -> xcb_void_cookie_t;
            fn xcb_xfixes_delete_pointer_barrier(
                c: *mut xcb_connection_t,
                barrier: xcb_xfixes_barrier_t,
            ) -> xcb_void_cookie_t;
        },
    }
}
