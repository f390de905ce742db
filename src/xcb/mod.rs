//! C ABI surface of the wrangled libraries.
//!
//! Hand-maintained counterparts of the declarations in `xcb.h`, `xproto.h`
//! and the extension headers, split one module per library exactly as the
//! headers are split one per library. Field layouts must match the
//! installed libxcb byte for byte; structs this crate never looks into are
//! kept opaque. Names mirror the C declarations, including the `xcb_`
//! prefixes, so code written against the real headers ports over verbatim.
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use ::core::ffi::{c_char, c_int, c_uint};

pub mod core;
pub mod present;
pub mod randr;
pub mod shm;
pub mod xfixes;

pub use self::core::CoreFns;
pub use self::present::PresentFns;
pub use self::randr::RandrFns;
pub use self::shm::ShmFns;
pub use self::xfixes::XfixesFns;

// xproto.h resource ids.
pub type xcb_window_t = u32;
pub type xcb_pixmap_t = u32;
pub type xcb_drawable_t = u32;
pub type xcb_gcontext_t = u32;
pub type xcb_colormap_t = u32;
pub type xcb_atom_t = u32;
pub type xcb_visualid_t = u32;
pub type xcb_keycode_t = u8;
pub type xcb_timestamp_t = u32;

/// An opaque connection to the X server, owned by libxcb.
#[repr(C)]
pub struct xcb_connection_t {
    _opaque: [u8; 0],
}

/// An opaque extension record, defined by each extension library.
#[repr(C)]
pub struct xcb_extension_t {
    _opaque: [u8; 0],
}

/// Sequence-number handle for a request with no reply.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_void_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_intern_atom_cookie_t {
    pub sequence: c_uint,
}

#[repr(C)]
pub struct xcb_generic_event_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub pad: [u32; 7],
    pub full_sequence: u32,
}

#[repr(C)]
pub struct xcb_generic_error_t {
    pub response_type: u8,
    pub error_code: u8,
    pub sequence: u16,
    pub resource_id: u32,
    pub minor_code: u16,
    pub major_code: u8,
    pub pad0: u8,
    pub pad: [u32; 5],
    pub full_sequence: u32,
}

#[repr(C)]
pub struct xcb_auth_info_t {
    pub namelen: c_int,
    pub name: *mut c_char,
    pub datalen: c_int,
    pub data: *mut c_char,
}

#[repr(C)]
pub struct xcb_setup_t {
    pub status: u8,
    pub pad0: u8,
    pub protocol_major_version: u16,
    pub protocol_minor_version: u16,
    pub length: u16,
    pub release_number: u32,
    pub resource_id_base: u32,
    pub resource_id_mask: u32,
    pub motion_buffer_size: u32,
    pub vendor_len: u16,
    pub maximum_request_length: u16,
    pub roots_len: u8,
    pub pixmap_formats_len: u8,
    pub image_byte_order: u8,
    pub bitmap_format_bit_order: u8,
    pub bitmap_format_scanline_unit: u8,
    pub bitmap_format_scanline_pad: u8,
    pub min_keycode: xcb_keycode_t,
    pub max_keycode: xcb_keycode_t,
    pub pad1: [u8; 4],
}

#[repr(C)]
pub struct xcb_screen_t {
    pub root: xcb_window_t,
    pub default_colormap: xcb_colormap_t,
    pub white_pixel: u32,
    pub black_pixel: u32,
    pub current_input_masks: u32,
    pub width_in_pixels: u16,
    pub height_in_pixels: u16,
    pub width_in_millimeters: u16,
    pub height_in_millimeters: u16,
    pub min_installed_maps: u16,
    pub max_installed_maps: u16,
    pub root_visual: xcb_visualid_t,
    pub backing_stores: u8,
    pub save_unders: u8,
    pub root_depth: u8,
    pub allowed_depths_len: u8,
}

#[repr(C)]
pub struct xcb_screen_iterator_t {
    pub data: *mut xcb_screen_t,
    pub rem: c_int,
    pub index: c_int,
}

#[repr(C)]
pub struct xcb_query_extension_reply_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub length: u32,
    pub present: u8,
    pub major_opcode: u8,
    pub first_event: u8,
    pub first_error: u8,
}

#[repr(C)]
pub struct xcb_intern_atom_reply_t {
    pub response_type: u8,
    pub pad0: u8,
    pub sequence: u16,
    pub length: u32,
    pub atom: xcb_atom_t,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct xcb_rectangle_t {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

// xcb.h constants.
pub const XCB_NONE: u32 = 0;
pub const XCB_COPY_FROM_PARENT: u32 = 0;
pub const XCB_CURRENT_TIME: u32 = 0;
pub const XCB_NO_SYMBOL: u32 = 0;

// xcb_connection_has_error return values.
pub const XCB_CONN_ERROR: c_int = 1;
pub const XCB_CONN_CLOSED_EXT_NOTSUPPORTED: c_int = 2;
pub const XCB_CONN_CLOSED_MEM_INSUFFICIENT: c_int = 3;
pub const XCB_CONN_CLOSED_REQ_LEN_EXCEED: c_int = 4;
pub const XCB_CONN_CLOSED_PARSE_ERR: c_int = 5;
pub const XCB_CONN_CLOSED_INVALID_SCREEN: c_int = 6;
pub const XCB_CONN_CLOSED_FDPASSING_FAILED: c_int = 7;
