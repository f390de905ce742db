//! Core library table: the connection machinery from `xcb.h` plus the
//! `xproto.h` requests this crate declares.
//!
//! Every entry point here has been exported by libxcb since 1.0, so the
//! whole table is required: an installed libxcb that lacks any of them is
//! reported as [`SymbolFailed`](crate::LibraryStatus::SymbolFailed) rather
//! than half-used.

use super::{
    xcb_atom_t, xcb_auth_info_t, xcb_connection_t, xcb_drawable_t, xcb_extension_t,
    xcb_gcontext_t, xcb_generic_error_t, xcb_generic_event_t, xcb_intern_atom_cookie_t,
    xcb_intern_atom_reply_t, xcb_query_extension_reply_t, xcb_screen_iterator_t, xcb_setup_t,
    xcb_visualid_t, xcb_void_cookie_t, xcb_window_t,
};
use crate::table::symbol_table;
use core::ffi::{CStr, c_char, c_int, c_uint, c_void};

#[cfg(target_os = "macos")]
const SONAMES: &[&CStr] = &[c"libxcb.1.dylib", c"libxcb.dylib"];
#[cfg(all(unix, not(target_os = "macos")))]
const SONAMES: &[&CStr] = &[c"libxcb.so.1", c"libxcb.so"];
#[cfg(windows)]
const SONAMES: &[&CStr] = &[c"libxcb.dll"];

symbol_table! {
    /// Entry points of the core XCB library.
    ///
    /// Field names and signatures mirror the C declarations exactly; code
    /// written against `xcb.h` calls through them unchanged, for example
    /// `(core.xcb_connect)(ptr::null(), &mut screen)`.
    pub struct CoreFns {
        name: "xcb",
        sonames: SONAMES,
        required: {
            // xcb.h
            fn xcb_connect(
                displayname: *const c_char,
                screenp: *mut c_int,
            ) -> *mut xcb_connection_t;
            fn xcb_connect_to_fd(
                fd: c_int,
                auth_info: *mut xcb_auth_info_t,
            ) -> *mut xcb_connection_t;
            fn xcb_connect_to_display_with_auth_info(
                display: *const c_char,
                auth: *mut xcb_auth_info_t,
                screen: *mut c_int,
            ) -> *mut xcb_connection_t;
            fn xcb_disconnect(c: *mut xcb_connection_t);
            fn xcb_connection_has_error(c: *mut xcb_connection_t) -> c_int;
            fn xcb_get_file_descriptor(c: *mut xcb_connection_t) -> c_int;
            fn xcb_get_setup(c: *mut xcb_connection_t) -> *const xcb_setup_t;
            fn xcb_generate_id(c: *mut xcb_connection_t) -> u32;
            fn xcb_flush(c: *mut xcb_connection_t) -> c_int;
            fn xcb_get_maximum_request_length(c: *mut xcb_connection_t) -> u32;
            fn xcb_prefetch_maximum_request_length(c: *mut xcb_connection_t);
            fn xcb_wait_for_event(c: *mut xcb_connection_t) -> *mut xcb_generic_event_t;
            fn xcb_poll_for_event(c: *mut xcb_connection_t) -> *mut xcb_generic_event_t;
            fn xcb_poll_for_queued_event(c: *mut xcb_connection_t) -> *mut xcb_generic_event_t;
            fn xcb_request_check(
                c: *mut xcb_connection_t,
                cookie: xcb_void_cookie_t,
            ) -> *mut xcb_generic_error_t;
            fn xcb_discard_reply(c: *mut xcb_connection_t, sequence: c_uint);
            fn xcb_get_extension_data(
                c: *mut xcb_connection_t,
                ext: *mut xcb_extension_t,
            ) -> *const xcb_query_extension_reply_t;
            fn xcb_prefetch_extension_data(c: *mut xcb_connection_t, ext: *mut xcb_extension_t);
            fn xcb_parse_display(
                name: *const c_char,
                host: *mut *mut c_char,
                display: *mut c_int,
                screen: *mut c_int,
            ) -> c_int;
            // xproto.h
            fn xcb_setup_roots_iterator(R: *const xcb_setup_t) -> xcb_screen_iterator_t;
            fn xcb_screen_next(i: *mut xcb_screen_iterator_t);
            fn xcb_create_window(
                c: *mut xcb_connection_t,
                depth: u8,
                wid: xcb_window_t,
                parent: xcb_window_t,
                x: i16,
                y: i16,
                width: u16,
                height: u16,
                border_width: u16,
                _class: u16,
                visual: xcb_visualid_t,
                value_mask: u32,
                value_list: *const c_void,
            ) -> xcb_void_cookie_t;
            fn xcb_destroy_window(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
            ) -> xcb_void_cookie_t;
            fn xcb_map_window(c: *mut xcb_connection_t, window: xcb_window_t) -> xcb_void_cookie_t;
            fn xcb_unmap_window(
                c: *mut xcb_connection_t,
                window: xcb_window_t,
            ) -> xcb_void_cookie_t;
            fn xcb_create_gc(
                c: *mut xcb_connection_t,
                cid: xcb_gcontext_t,
                drawable: xcb_drawable_t,
                value_mask: u32,
                value_list: *const c_void,
            ) -> xcb_void_cookie_t;
            fn xcb_intern_atom(
                c: *mut xcb_connection_t,
                only_if_exists: u8,
                name_len: u16,
                name: *const c_char,
            ) -> xcb_intern_atom_cookie_t;
            fn xcb_intern_atom_reply(
                c: *mut xcb_connection_t,
                cookie: xcb_intern_atom_cookie_t,
                e: *mut *mut xcb_generic_error_t,
            ) -> *mut xcb_intern_atom_reply_t;
            fn xcb_change_property(
                c: *mut xcb_connection_t,
                mode: u8,
                window: xcb_window_t,
                property: xcb_atom_t,
                r#type: xcb_atom_t,
                format: u8,
                data_len: u32,
                data: *const c_void,
            ) -> xcb_void_cookie_t;
        },
        optional: {},
    }
}
