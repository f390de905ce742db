//! Present extension library table (`present.h`, libxcb-present).

use super::randr::xcb_randr_crtc_t;
use super::xfixes::xcb_xfixes_region_t;
use super::{xcb_connection_t, xcb_generic_error_t, xcb_pixmap_t, xcb_void_cookie_t, xcb_window_t};
use crate::table::symbol_table;
use core::ffi::{CStr, c_uint};

// present.h pulls the fence type from the Sync extension; only the XID is
// needed here.
pub type xcb_sync_fence_t = u32;
pub type xcb_present_event_t = u32;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_present_notify_t {
    pub window: xcb_window_t,
    pub serial: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_present_query_version_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
pub struct xcb_present_query_version_reply_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub length: u32,
    pub major_version: u32,
    pub minor_version: u32,
}

#[cfg(target_os = "macos")]
const SONAMES: &[&CStr] = &[c"libxcb-present.0.dylib", c"libxcb-present.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
const SONAMES: &[&CStr] = &[c"libxcb-present.so.0", c"libxcb-present.so"];
#[cfg(windows)]
const SONAMES: &[&CStr] = &[c"libxcb-present.dll"];

symbol_table! {
    /// Entry points of the Present extension library.
    pub struct PresentFns {
        name: "xcb-present",
        sonames: SONAMES,
        required: {
            fn xcb_present_query_version(
                c: *mut xcb_connection_t,
                major_version: u32,
                minor_version: u32,
            ) -> xcb_present_query_version_cookie_t;
            fn xcb_present_query_version_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_present_query_version_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_present_query_version_reply_t;
            fn xcb_present_pixmap(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
                pixmap: xcb_pixmap_t,
                serial: u32,
                valid: xcb_xfixes_region_t,
                update: xcb_xfixes_region_t,
                x_off: i16,
                y_off: i16,
                target_crtc: xcb_randr_crtc_t,
                wait_fence: xcb_sync_fence_t,
                idle_fence: xcb_sync_fence_t,
                options: u32,
                target_msc: u64,
                divisor: u64,
                remainder: u64,
                notifies_len: u32,
                notifies: *const xcb_present_notify_t,
            ) -> xcb_void_cookie_t;
            fn xcb_present_notify_msc(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
                serial: u32,
                target_msc: u64,
                divisor: u64,
                remainder: u64,
            ) -> xcb_void_cookie_t;
            fn xcb_present_select_input(
                c: *mut xcb_connection_t,
                eid: xcb_present_event_t,
                window: xcb_window_t,
                event_mask: u32,
            ) -> xcb_void_cookie_t;
        },
        optional: {},
    }
}
