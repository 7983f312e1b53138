//! GDI resource wrappers
//!
//! Each wrapper releases its handle on drop, so an early return out of a
//! paint handler can never leak a brush or leave a paint cycle open.

use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BeginPaint, CreateSolidBrush, DIB_RGB_COLORS,
    DeleteObject, EndPaint, FillRect, HBRUSH, HDC, HGDIOBJ, PAINTSTRUCT, SetDIBitsToDevice,
};

use crate::domain::color::Rgb;
use crate::platform::windows::rgb_to_colorref;

#[derive(Debug, thiserror::Error)]
pub enum GdiError {
    #[error("Failed to create solid brush for color {0:?}")]
    BrushCreationFailed(Rgb),

    #[error("Failed to begin painting")]
    BeginPaintFailed,

    #[error("Failed to copy frame to the device context")]
    BlitFailed,
}

/// Solid brush used to erase the client area with the current background
#[derive(Debug)]
pub struct BackgroundBrush {
    handle: HBRUSH,
}

impl BackgroundBrush {
    pub fn new(color: Rgb) -> Result<Self, GdiError> {
        let handle = unsafe { CreateSolidBrush(rgb_to_colorref(color)) };
        if handle.is_invalid() {
            return Err(GdiError::BrushCreationFailed(color));
        }

        Ok(Self { handle })
    }

    pub fn fill(&self, hdc: HDC, rect: &RECT) {
        unsafe {
            FillRect(hdc, rect, self.handle);
        }
    }
}

impl Drop for BackgroundBrush {
    fn drop(&mut self) {
        unsafe {
            if !DeleteObject(HGDIOBJ(self.handle.0)).as_bool() {
                tracing::warn!("Failed to delete background brush");
            }
        }
    }
}

/// One BeginPaint/EndPaint cycle
pub struct PaintSession {
    hwnd: HWND,
    paint: PAINTSTRUCT,
    hdc: HDC,
}

impl PaintSession {
    pub fn begin(hwnd: HWND) -> Result<Self, GdiError> {
        let mut paint = PAINTSTRUCT::default();
        let hdc = unsafe { BeginPaint(hwnd, &mut paint) };
        if hdc.is_invalid() {
            return Err(GdiError::BeginPaintFailed);
        }

        Ok(Self { hwnd, paint, hdc })
    }

    /// Copies a top-down BGRA frame to the top-left of the device context
    pub fn blit_bgra(&self, width: u32, height: u32, pixels: &[u8]) -> Result<(), GdiError> {
        if pixels.len() < (width as usize) * (height as usize) * 4 {
            return Err(GdiError::BlitFailed);
        }

        let mut bitmap_info = BITMAPINFO::default();
        bitmap_info.bmiHeader = BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width as i32,
            biHeight: -(height as i32), // top-down rows, same as the pixmap
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        };

        let lines = unsafe {
            SetDIBitsToDevice(
                self.hdc,
                0,
                0,
                width,
                height,
                0,
                0,
                0,
                height,
                pixels.as_ptr() as *const c_void,
                &bitmap_info,
                DIB_RGB_COLORS,
            )
        };

        if lines == 0 {
            return Err(GdiError::BlitFailed);
        }

        Ok(())
    }
}

impl Drop for PaintSession {
    fn drop(&mut self) {
        unsafe {
            let _ = EndPaint(self.hwnd, &self.paint);
        }
    }
}
