//! General Windows platform utilities
//!
//! Conversions between domain types and their Win32 counterparts.

use crate::domain::color::Rgb;
use crate::domain::core::Rect;
use windows::Win32::Foundation::{COLORREF, RECT};

/// Converts a domain rectangle to Windows RECT structure
///
/// # Arguments
/// * `rect` - Domain rectangle to convert
///
/// # Returns
/// RECT with exclusive right and bottom edges
pub fn rect_to_win32_rect(rect: &Rect) -> RECT {
    RECT {
        left: rect.x,
        top: rect.y,
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Converts a Windows RECT to domain rectangle
///
/// # Arguments
/// * `rect` - Windows RECT structure, as passed with `WM_SIZING`
///
/// # Returns
/// Domain rectangle with the same top-left corner
pub fn win32_rect_to_rect(rect: &RECT) -> Rect {
    Rect {
        x: rect.left,
        y: rect.top,
        w: rect.right - rect.left,
        h: rect.bottom - rect.top,
    }
}

/// Converts a domain color for GDI
///
/// # Arguments
/// * `color` - Color to convert
///
/// # Returns
/// COLORREF packed as `0x00BBGGRR`
pub fn rgb_to_colorref(color: Rgb) -> COLORREF {
    COLORREF(color.r as u32 | (color.g as u32) << 8 | (color.b as u32) << 16)
}

/// Encodes a string for the wide Win32 APIs
///
/// # Arguments
/// * `input` - Text to encode
///
/// # Returns
/// Null-terminated UTF-16 buffer; keep it alive while the pointer is in use
pub fn to_wstring(input: &str) -> Vec<u16> {
    input.encode_utf16().chain(std::iter::once(0)).collect()
}
