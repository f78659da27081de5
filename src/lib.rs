//! Software pixmap engine
//!
//! A [Pixmap] is a rectangle of pixels stored in one of six packed
//! [PixelFormat]s. Pixels are read and written as canonical [Rgba8]
//! colors and every write goes through the pixmap's [BlendMode]. On top
//! of that sit a primitive rasterizer (lines, rectangles, circles and
//! triangles) and a blitter that copies and scales rectangles between
//! pixmaps of any format using the destination's [ScaleMode].
//!
//! The [capi] module exposes the engine to C hosts through opaque
//! handles and a process wide failure reason.
//!
//! # Usage
//!
//!     use pixmap::{Pixmap, PixelFormat, Rgba8, BlendMode};
//!
//!     let mut pix = Pixmap::new(16, 16, PixelFormat::Rgb565).unwrap();
//!     pix.set_blend(BlendMode::None);
//!     pix.clear(Rgba8::white());
//!     pix.draw_line(0, 0, 15, 15, Rgba8::new(255, 0, 0, 255));
//!     pix.fill_circle(8, 8, 3, Rgba8::new(0, 0, 255, 255));
//!     assert_eq!(pix.get_pixel(8, 8).unwrap(), Rgba8::new(0, 0, 255, 255));
//!     assert_eq!(pix.get_pixel(15, 0).unwrap(), Rgba8::white());
//!
//! # Structure
//!
//!   - [PixelFormat]: format table, packing and unpacking of pixels
//!   - [RenderingBuffer]: row major byte storage
//!   - [BlendMode], [ScaleMode]: compositing and resampling rules
//!   - [Pixmap]: owner of a buffer, checked pixel access
//!   - base, raster: clipped spans and primitives
//!   - scale: scaled blits between pixmaps
//!   - io: decoding and file helpers
//!
//! [Pixmap]: struct.Pixmap.html
//! [PixelFormat]: pixfmt/enum.PixelFormat.html
//! [Rgba8]: color/struct.Rgba8.html
//! [BlendMode]: blend/enum.BlendMode.html
//! [ScaleMode]: blend/enum.ScaleMode.html
//! [RenderingBuffer]: buffer/struct.RenderingBuffer.html
//! [capi]: capi/index.html

pub mod color;
pub mod math;
pub mod error;
pub mod pixfmt;
pub mod buffer;
pub mod blend;
mod pixmap;
pub mod base;
pub mod raster;
pub mod scale;
pub mod io;
pub mod capi;

pub use crate::color::*;
pub use crate::error::*;
pub use crate::pixfmt::*;
pub use crate::buffer::*;
pub use crate::blend::*;
pub use crate::pixmap::*;
pub use crate::io::*;
pub use crate::capi::*;
