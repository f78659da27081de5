//! C ABI
//!
//! Hosts own pixmaps through opaque `*mut PixHandle` pointers returned by
//! [pix_new] and [pix_load] and released with [pix_free]. The handle
//! exposes read-only copies of the pixmap's attributes; they are kept in
//! sync by [pix_set_blend] and [pix_set_scale].
//!
//! Identifiers:
//!
//! * formats: Alpha = 1, LuminanceAlpha = 2, Rgb888 = 3, Rgba8888 = 4,
//!   Rgb565 = 5, Rgba4444 = 6
//! * blend: None = 0, SrcOver = 1
//! * scale: Nearest = 0, Bilinear = 1
//!
//! Color arguments are packed values of the target pixmap's format, see
//! [PixelFormat::decode_value]. [pix_get_pixel] returns the canonical
//! color packed as `0xRRGGBBAA`.
//!
//! Failing calls store a message readable with [pix_get_failure_reason].
//! There is a single slot for the whole process; concurrent failures on
//! different threads overwrite each other. Each reader gets its own copy
//! of the message, so a returned string is never freed by another thread.
//!
//! Passing a freed handle, or freeing a handle twice, is undefined
//! behavior.
//!
//! [pix_new]: fn.pix_new.html
//! [pix_load]: fn.pix_load.html
//! [pix_free]: fn.pix_free.html
//! [pix_set_blend]: fn.pix_set_blend.html
//! [pix_set_scale]: fn.pix_set_scale.html
//! [pix_get_pixel]: fn.pix_get_pixel.html
//! [pix_get_failure_reason]: fn.pix_get_failure_reason.html
//! [PixelFormat::decode_value]: ../pixfmt/enum.PixelFormat.html#method.decode_value

use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

use crate::blend::{BlendMode, ScaleMode};
use crate::error::{last_failure_ptr, record_failure, Error};
use crate::io::ImageDecoder;
use crate::pixfmt::PixelFormat;
use crate::pixmap::Pixmap;

use log::{debug, warn};

/// Host visible pixmap handle
#[repr(C)]
#[derive(Debug)]
pub struct PixHandle {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Format identifier
    pub format: u32,
    /// Blend mode identifier
    pub blend: u32,
    /// Scale mode identifier
    pub scale: u32,
    /// Start of the pixel data, `width * height * bpp` bytes
    pub pixels: *const u8,
    pixmap: *mut Pixmap,
}

impl PixHandle {
    fn new(pixmap: Pixmap) -> *mut PixHandle {
        let pixmap = Box::into_raw(Box::new(pixmap));
        // Safety: freshly allocated above
        let p = unsafe { &*pixmap };
        let handle = PixHandle {
            width: p.width(),
            height: p.height(),
            format: p.format().id(),
            blend: p.blend().id(),
            scale: p.scale().id(),
            pixels: p.as_bytes().as_ptr(),
            pixmap,
        };
        Box::into_raw(Box::new(handle))
    }
}

/// Run `f`, turning a panic into `default` and a recorded failure
fn guard<T, F: FnOnce() -> T>(name: &str, default: T, f: F) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(v) => v,
        Err(_) => {
            warn!("{}: caught panic", name);
            record_failure(&Error::Internal(name.to_string()));
            default
        }
    }
}

/// Pixmap behind a handle, None for null
unsafe fn pixmap_mut<'a>(handle: *mut PixHandle) -> Option<&'a mut Pixmap> {
    handle.as_mut().and_then(|h| h.pixmap.as_mut())
}

/// Create a zero filled pixmap
///
/// Returns null and records the reason on failure
#[no_mangle]
pub extern "C" fn pix_new(width: u32, height: u32, format: u32) -> *mut PixHandle {
    guard("pix_new", ptr::null_mut(), || {
        match PixelFormat::from_id(format).and_then(|f| Pixmap::new(width, height, f)) {
            Ok(p) => PixHandle::new(p),
            Err(e) => {
                record_failure(&e);
                ptr::null_mut()
            }
        }
    })
}

/// Decode `len` bytes of encoded image data at `buffer`
///
/// Returns null and records the reason on failure
///
/// # Safety
///
/// `buffer` must be valid for reads of `len` bytes, or null
#[no_mangle]
pub unsafe extern "C" fn pix_load(buffer: *const u8, len: usize) -> *mut PixHandle {
    guard("pix_load", ptr::null_mut(), || {
        if buffer.is_null() || len == 0 {
            record_failure(&Error::Decode("empty input buffer".to_string()));
            return ptr::null_mut();
        }
        let bytes = std::slice::from_raw_parts(buffer, len);
        match Pixmap::load_with(&ImageDecoder, bytes) {
            Ok(p) => PixHandle::new(p),
            Err(e) => {
                record_failure(&e);
                ptr::null_mut()
            }
        }
    })
}

/// Release a pixmap and its handle; null is ignored
///
/// # Safety
///
/// `handle` must come from [pix_new] or [pix_load] and not be freed yet
///
/// [pix_new]: fn.pix_new.html
/// [pix_load]: fn.pix_load.html
#[no_mangle]
pub unsafe extern "C" fn pix_free(handle: *mut PixHandle) {
    guard("pix_free", (), || {
        if handle.is_null() {
            return;
        }
        let h = Box::from_raw(handle);
        debug!("free pixmap {}x{} format {}", h.width, h.height, h.format);
        if !h.pixmap.is_null() {
            drop(Box::from_raw(h.pixmap));
        }
    })
}

/// Most recent failure message, or null if nothing failed yet
///
/// The string belongs to the calling thread and stays valid until its
/// next call to this function
#[no_mangle]
pub extern "C" fn pix_get_failure_reason() -> *const c_char {
    last_failure_ptr()
}

/// Bytes per pixel of a format identifier, 0 for an unknown format
#[no_mangle]
pub extern "C" fn pix_bytes_per_pixel(format: u32) -> u32 {
    match PixelFormat::from_id(format) {
        Ok(f) => f.bpp() as u32,
        Err(e) => {
            record_failure(&e);
            0
        }
    }
}

/// Set the blend mode; unknown identifiers are recorded and ignored
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_set_blend(handle: *mut PixHandle, blend: u32) {
    let mode = match BlendMode::from_id(blend) {
        Some(m) => m,
        None => return record_failure(&Error::InvalidMode(blend)),
    };
    if let Some(p) = pixmap_mut(handle) {
        p.set_blend(mode);
        (*handle).blend = mode.id();
    }
}

/// Set the scale mode; unknown identifiers are recorded and ignored
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_set_scale(handle: *mut PixHandle, scale: u32) {
    let mode = match ScaleMode::from_id(scale) {
        Some(m) => m,
        None => return record_failure(&Error::InvalidMode(scale)),
    };
    if let Some(p) = pixmap_mut(handle) {
        p.set_scale(mode);
        (*handle).scale = mode.id();
    }
}

/// Pointer to the pixel data, null for a null handle
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_get_pixels(handle: *mut PixHandle) -> *const u8 {
    handle.as_ref().map_or(ptr::null(), |h| h.pixels)
}

/// Overwrite every pixel with `color`, ignoring the blend mode
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_clear(handle: *mut PixHandle, color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        let c = p.format().decode_value(color);
        guard("pix_clear", (), || p.clear(c));
    }
}

/// Draw a single pixel through the blend mode
///
/// Outside coordinates draw nothing and record the failure
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_set_pixel(handle: *mut PixHandle, x: i32, y: i32, color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        guard("pix_set_pixel", (), || {
            if !p.contains(x, y) {
                let (width, height) = (p.width(), p.height());
                return record_failure(&Error::OutOfBounds { x, y, width, height });
            }
            let c = p.format().decode_value(color);
            p.draw_pixel(x, y, c);
        });
    }
}

/// Canonical color at (x,y) as `0xRRGGBBAA`
///
/// Outside coordinates return 0 and record the failure
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_get_pixel(handle: *mut PixHandle, x: i32, y: i32) -> u32 {
    match pixmap_mut(handle) {
        Some(p) => guard("pix_get_pixel", 0, || {
            p.get_pixel(x, y).map(|c| c.pack()).unwrap_or_else(|e| {
                record_failure(&e);
                0
            })
        }),
        None => 0,
    }
}

/// Draw a line, both end points included
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_draw_line(handle: *mut PixHandle, x: i32, y: i32, x2: i32, y2: i32, color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        let c = p.format().decode_value(color);
        guard("pix_draw_line", (), || p.draw_line(x, y, x2, y2, c));
    }
}

/// Draw a rectangle outline
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_draw_rect(handle: *mut PixHandle, x: i32, y: i32, width: i32, height: i32, color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        let c = p.format().decode_value(color);
        guard("pix_draw_rect", (), || p.draw_rect(x, y, width, height, c));
    }
}

/// Fill a rectangle
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_fill_rect(handle: *mut PixHandle, x: i32, y: i32, width: i32, height: i32, color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        let c = p.format().decode_value(color);
        guard("pix_fill_rect", (), || p.fill_rect(x, y, width, height, c));
    }
}

/// Draw a circle outline
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_draw_circle(handle: *mut PixHandle, x: i32, y: i32, radius: i32, color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        let c = p.format().decode_value(color);
        guard("pix_draw_circle", (), || p.draw_circle(x, y, radius, c));
    }
}

/// Fill a circle
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
pub unsafe extern "C" fn pix_fill_circle(handle: *mut PixHandle, x: i32, y: i32, radius: i32, color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        let c = p.format().decode_value(color);
        guard("pix_fill_circle", (), || p.fill_circle(x, y, radius, c));
    }
}

/// Fill a triangle
///
/// # Safety
///
/// `handle` must be a live handle or null
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pix_fill_triangle(handle: *mut PixHandle,
                                           x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32,
                                           color: u32) {
    if let Some(p) = pixmap_mut(handle) {
        let c = p.format().decode_value(color);
        guard("pix_fill_triangle", (), || p.fill_triangle(x1, y1, x2, y2, x3, y3, c));
    }
}

/// Copy a rectangle of `src` into a rectangle of `dst`, scaling and
/// blending with the modes of `dst`
///
/// `src` and `dst` may be the same handle
///
/// # Safety
///
/// Both handles must be live handles or null
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn pix_draw_pixmap(src: *mut PixHandle, dst: *mut PixHandle,
                                         src_x: i32, src_y: i32, src_w: i32, src_h: i32,
                                         dst_x: i32, dst_y: i32, dst_w: i32, dst_h: i32) {
    if src.is_null() || dst.is_null() {
        return;
    }
    if src == dst {
        if let Some(d) = pixmap_mut(dst) {
            guard("pix_draw_pixmap", (), || {
                let s = d.clone();
                d.draw_pixmap(&s, src_x, src_y, src_w, src_h, dst_x, dst_y, dst_w, dst_h);
            });
        }
        return;
    }
    if let (Some(s), Some(d)) = (pixmap_mut(src), pixmap_mut(dst)) {
        let s : &Pixmap = s;
        guard("pix_draw_pixmap", (), || {
            d.draw_pixmap(s, src_x, src_y, src_w, src_h, dst_x, dst_y, dst_w, dst_h)
        });
    }
}
