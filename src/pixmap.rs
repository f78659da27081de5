//! Pixmap
//!
//! An owned rectangular grid of pixels in one [PixelFormat] together with
//! the blend and scale modes used when drawing into it.
//!
//! Coordinates are measured from the top left corner with `y` pointing
//! downwards.
//!
//! [PixelFormat]: ../pixfmt/enum.PixelFormat.html

use crate::blend::{BlendMode, ScaleMode};
use crate::buffer::RenderingBuffer;
use crate::color::Rgba8;
use crate::error::Error;
use crate::pixfmt::PixelFormat;

use log::debug;

/// In-memory image
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Pixmap {
    pub(crate) rbuf: RenderingBuffer,
    pub(crate) format: PixelFormat,
    pub(crate) blend: BlendMode,
    pub(crate) scale: ScaleMode,
}

impl Pixmap {
    /// Create a new zero filled pixmap
    ///
    /// Blend and scale modes take their default values
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8};
    ///
    ///     let pix = Pixmap::new(4, 2, PixelFormat::Rgb565).unwrap();
    ///     assert_eq!(pix.as_bytes().len(), 4 * 2 * 2);
    ///     assert_eq!(pix.get_pixel(3,1).unwrap(), Rgba8::black());
    ///
    ///     assert!(Pixmap::new(0, 2, PixelFormat::Rgb565).is_err());
    ///
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self, Error> {
        Self::with_modes(width, height, format, BlendMode::default(), ScaleMode::default())
    }
    /// Create a new zero filled pixmap with explicit blend and scale modes
    ///
    /// Sizes that overflow or cannot be allocated are reported as
    /// `InvalidDimensions`
    pub fn with_modes(width: u32, height: u32, format: PixelFormat,
                      blend: BlendMode, scale: ScaleMode) -> Result<Self, Error> {
        check_dimensions(width, height)?;
        debug!("new pixmap {}x{} {:?}", width, height, format);
        let rbuf = RenderingBuffer::new(width as usize, height as usize, format.bpp())
            .ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self { rbuf, format, blend, scale })
    }
    /// Take ownership of already encoded pixel data
    ///
    /// `data` must hold exactly `width * height * bpp` bytes
    pub fn from_vec(data: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> Result<Self, Error> {
        check_dimensions(width, height)?;
        let rbuf = RenderingBuffer::from_vec(data, width as usize, height as usize, format.bpp())
            .ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self { rbuf, format, blend: BlendMode::default(), scale: ScaleMode::default() })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.rbuf.width as u32
    }
    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.rbuf.height as u32
    }
    /// Storage format
    pub fn format(&self) -> PixelFormat {
        self.format
    }
    /// Current blend mode
    pub fn blend(&self) -> BlendMode {
        self.blend
    }
    /// Current scale mode
    pub fn scale(&self) -> ScaleMode {
        self.scale
    }
    /// Set the blend mode used by drawing operations into this pixmap
    pub fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
    }
    /// Set the scale mode used by scaled blits into this pixmap
    pub fn set_scale(&mut self, scale: ScaleMode) {
        self.scale = scale;
    }
    /// Raw pixel data, rows top to bottom without padding
    pub fn as_bytes(&self) -> &[u8] {
        &self.rbuf.data
    }
    /// Check if (`x`,`y`) lies inside the pixmap
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.rbuf.width && (y as usize) < self.rbuf.height
    }

    /// Read the pixel at (`x`,`y`) as a canonical color
    ///
    /// Blending does not apply to reads
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Rgba8, Error> {
        self.check_bounds(x, y)?;
        Ok(self.get((x as usize, y as usize)))
    }
    /// Store the canonical color `c` at (`x`,`y`)
    ///
    /// The color is written as is, converted to the storage format;
    /// see [draw_pixel] for a write that honors the blend mode
    ///
    /// [draw_pixel]: #method.draw_pixel
    pub fn set_pixel(&mut self, x: i32, y: i32, c: Rgba8) -> Result<(), Error> {
        self.check_bounds(x, y)?;
        self.set((x as usize, y as usize), c);
        Ok(())
    }
    fn check_bounds(&self, x: i32, y: i32) -> Result<(), Error> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { x, y, width: self.width(), height: self.height() })
        }
    }
    /// Unchecked read, id is (x,y)
    pub(crate) fn get(&self, id: (usize, usize)) -> Rgba8 {
        self.format.read(&self.rbuf[id])
    }
    /// Unchecked write, id is (x,y)
    pub(crate) fn set(&mut self, id: (usize, usize), c: Rgba8) {
        let format = self.format;
        format.write(&mut self.rbuf[id], c);
    }

    /// Overwrite every pixel with `c`
    ///
    /// The blend mode is ignored; whatever was stored before is replaced
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8};
    ///
    ///     let mut pix = Pixmap::new(2, 2, PixelFormat::Rgba8888).unwrap();
    ///     let c = Rgba8::new(10, 20, 30, 40);
    ///     pix.clear(c);
    ///     assert_eq!(pix.get_pixel(1,1).unwrap(), c);
    ///
    pub fn clear(&mut self, c: Rgba8) {
        let bpp = self.rbuf.bpp;
        let mut px = [0u8; 4];
        self.format.write(&mut px, c);
        for p in self.rbuf.data.chunks_exact_mut(bpp) {
            p.copy_from_slice(&px[..bpp]);
        }
    }

    /// New pixmap holding the same pixels re-encoded into `format`
    pub fn convert(&self, format: PixelFormat) -> Result<Pixmap, Error> {
        let mut out = Pixmap::with_modes(self.width(), self.height(), format, self.blend, self.scale)?;
        for (src, dst) in self.rbuf.data.chunks_exact(self.rbuf.bpp)
            .zip(out.rbuf.data.chunks_exact_mut(format.bpp())) {
            format.write(dst, self.format.read(src));
        }
        Ok(out)
    }
    /// New pixmap holding the `width` x `height` region starting at (`x`,`y`)
    ///
    /// Parts of the region outside of this pixmap are left zeroed
    pub fn crop(&self, x: i32, y: i32, width: u32, height: u32) -> Result<Pixmap, Error> {
        let mut out = Pixmap::with_modes(width, height, self.format, BlendMode::None, self.scale)?;
        let (w, h) = (width as i32, height as i32);
        out.draw_pixmap(self, x, y, w, h, 0, 0, w, h);
        out.blend = self.blend;
        Ok(out)
    }
    /// New pixmap mirrored left to right
    pub fn flip_x(&self) -> Pixmap {
        let mut out = self.clone();
        let bpp = self.rbuf.bpp;
        for y in 0 .. self.rbuf.height {
            let src = self.rbuf.row(y);
            let dst = out.rbuf.row_mut(y);
            for (d, s) in dst.chunks_exact_mut(bpp).zip(src.chunks_exact(bpp).rev()) {
                d.copy_from_slice(s);
            }
        }
        out
    }
    /// New pixmap mirrored top to bottom
    pub fn flip_y(&self) -> Pixmap {
        let mut out = self.clone();
        let h = self.rbuf.height;
        for y in 0 .. h {
            out.rbuf.row_mut(y).copy_from_slice(self.rbuf.row(h - 1 - y));
        }
        out
    }
    /// New pixmap with an outline of color `c` around every visible pixel
    ///
    /// Each fully transparent pixel within `radius` (euclidean) of a pixel
    /// with non-zero alpha is set to `c`; the blend mode is ignored and
    /// pixels outside the pixmap count as transparent
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8};
    ///
    ///     let mut pix = Pixmap::new(5, 5, PixelFormat::Rgba8888).unwrap();
    ///     pix.set_pixel(2, 2, Rgba8::white()).unwrap();
    ///     let red = Rgba8::new(255, 0, 0, 255);
    ///     let out = pix.outline(red, 1);
    ///     assert_eq!(out.get_pixel(2, 1).unwrap(), red);
    ///     assert_eq!(out.get_pixel(1, 1).unwrap(), Rgba8::transparent());
    ///     assert_eq!(out.get_pixel(2, 2).unwrap(), Rgba8::white());
    ///
    pub fn outline(&self, c: Rgba8, radius: u32) -> Pixmap {
        let (w, h) = (self.rbuf.width as i64, self.rbuf.height as i64);
        // Nothing lies further away than the pixmap itself
        let r = i64::from(radius).min(w + h);
        let mut out = self.clone();
        for y in 0 .. h {
            for x in 0 .. w {
                let id = (x as usize, y as usize);
                if self.get(id).a == 0 && self.any_opaque_within(x, y, r) {
                    out.set(id, c);
                }
            }
        }
        out
    }
    fn any_opaque_within(&self, x: i64, y: i64, r: i64) -> bool {
        let (w, h) = (self.rbuf.width as i64, self.rbuf.height as i64);
        for dy in (-r).max(-y) ..= r.min(h - 1 - y) {
            for dx in (-r).max(-x) ..= r.min(w - 1 - x) {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                if self.get(((x + dx) as usize, (y + dy) as usize)).a != 0 {
                    return true;
                }
            }
        }
        false
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}
