//! RandR extension library table (`randr.h`, libxcb-randr).

use super::{
    xcb_connection_t, xcb_generic_error_t, xcb_timestamp_t, xcb_void_cookie_t, xcb_window_t,
};
use crate::table::symbol_table;
use core::ffi::{CStr, c_uint};

pub type xcb_randr_crtc_t = u32;
pub type xcb_randr_output_t = u32;
pub type xcb_randr_mode_t = u32;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_randr_query_version_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_randr_get_screen_resources_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_randr_get_crtc_info_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_randr_get_monitors_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
pub struct xcb_randr_query_version_reply_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub length: u32,
    pub major_version: u32,
    pub minor_version: u32,
    pub pad1: [u8; 16],
}

#[repr(C)]
pub struct xcb_randr_get_screen_resources_reply_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub length: u32,
    pub timestamp: xcb_timestamp_t,
    pub config_timestamp: xcb_timestamp_t,
    pub num_crtcs: u16,
    pub num_outputs: u16,
    pub num_modes: u16,
    pub names_len: u16,
    pub pad1: [u8; 8],
}

#[repr(C)]
pub struct xcb_randr_get_crtc_info_reply_t {
    pub response_type: u8,
    pub status: u8,
    pub sequence: u16,
    pub length: u32,
    pub timestamp: xcb_timestamp_t,
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
    pub mode: xcb_randr_mode_t,
    pub rotation: u16,
    pub rotations: u16,
    pub num_outputs: u16,
    pub num_possible_outputs: u16,
}

#[repr(C)]
pub struct xcb_randr_get_monitors_reply_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub length: u32,
    pub timestamp: xcb_timestamp_t,
    pub nMonitors: u32,
    pub nOutputs: u32,
    pub pad1: [u8; 12],
}

#[cfg(target_os = "macos")]
const SONAMES: &[&CStr] = &[c"libxcb-randr.0.dylib", c"libxcb-randr.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
const SONAMES: &[&CStr] = &[c"libxcb-randr.so.0", c"libxcb-randr.so"];
#[cfg(windows)]
const SONAMES: &[&CStr] = &[c"libxcb-randr.dll"];

symbol_table! {
    /// Entry points of the RandR extension library.
    ///
    /// Monitor enumeration arrived with RandR 1.5 and is optional.
    pub struct RandrFns {
        name: "xcb-randr",
        sonames: SONAMES,
        required: {
            fn xcb_randr_query_version(
                c: *mut xcb_connection_t,
                major_version: u32,
                minor_version: u32,
            ) -> xcb_randr_query_version_cookie_t;
            fn xcb_randr_query_version_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_randr_query_version_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_randr_query_version_reply_t;
            fn xcb_randr_get_screen_resources(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
            ) -> xcb_randr_get_screen_resources_cookie_t;
            fn xcb_randr_get_screen_resources_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_randr_get_screen_resources_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_randr_get_screen_resources_reply_t;
            fn xcb_randr_get_screen_resources_crtcs(
                R: *const xcb_randr_get_screen_resources_reply_t,
            ) -> *mut xcb_randr_crtc_t;
            fn xcb_randr_get_crtc_info(
                c: *mut xcb_connection_t,
                crtc: xcb_randr_crtc_t,
                config_timestamp: xcb_timestamp_t,
            ) -> xcb_randr_get_crtc_info_cookie_t;
            fn xcb_randr_get_crtc_info_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_randr_get_crtc_info_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_randr_get_crtc_info_reply_t;
            fn xcb_randr_select_input(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
                enable: u16,
            ) -> xcb_void_cookie_t;
        },
        optional: {
            fn xcb_randr_get_monitors(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
                get_active: u8,
            ) -> xcb_randr_get_monitors_cookie_t;
            fn xcb_randr_get_monitors_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_randr_get_monitors_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_randr_get_monitors_reply_t;
        },
    }
}
