//! Loading and saving of Pixmaps
//!
//! Decoding of compressed image data is delegated to a [Decode]
//! implementation; [ImageDecoder] uses the `image` crate and handles
//! PNG, JPEG, GIF, BMP and PNM data.
//!
//! [Decode]: trait.Decode.html
//! [ImageDecoder]: struct.ImageDecoder.html

use std::path::Path;

use crate::color::Rgba8;
use crate::error::Error;
use crate::pixfmt::PixelFormat;
use crate::pixmap::Pixmap;

use image::DynamicImage;
use log::debug;

/// Turns encoded image data into a Pixmap
pub trait Decode {
    /// Decode `bytes`, choosing the pixel format from the image's channels
    fn decode(&self, bytes: &[u8]) -> Result<Pixmap, Error>;
}

/// Decoder backed by the `image` crate
///
/// | Source channels | Pixmap format     |
/// |-----------------|-------------------|
/// | Gray            | LuminanceAlpha    |
/// | Gray + Alpha    | LuminanceAlpha    |
/// | RGB             | Rgb888            |
/// | RGBA            | Rgba8888          |
/// | anything else   | Rgba8888          |
#[derive(Debug,Default,Copy,Clone)]
pub struct ImageDecoder;

impl Decode for ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Pixmap, Error> {
        let img = image::load_from_memory(bytes)?;
        from_dynamic(img)
    }
}

fn from_dynamic(img: DynamicImage) -> Result<Pixmap, Error> {
    let (data, w, h, format) = match img {
        DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            let mut data = Vec::with_capacity(w as usize * h as usize * 2);
            for l in buf.into_raw() {
                data.push(l);
                data.push(255);
            }
            (data, w, h, PixelFormat::LuminanceAlpha)
        }
        DynamicImage::ImageLumaA8(buf) => {
            let (w, h) = buf.dimensions();
            (buf.into_raw(), w, h, PixelFormat::LuminanceAlpha)
        }
        DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            (buf.into_raw(), w, h, PixelFormat::Rgb888)
        }
        DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            (buf.into_raw(), w, h, PixelFormat::Rgba8888)
        }
        other => {
            let buf = other.to_rgba();
            let (w, h) = buf.dimensions();
            (buf.into_raw(), w, h, PixelFormat::Rgba8888)
        }
    };
    if w == 0 || h == 0 {
        return Err(Error::Decode(format!("image has no pixels ({}x{})", w, h)));
    }
    debug!("decoded {}x{} image as {:?}", w, h, format);
    Pixmap::from_vec(data, w, h, format)
}

impl Pixmap {
    /// Decode an encoded image with the default decoder
    pub fn load(bytes: &[u8]) -> Result<Pixmap, Error> {
        Self::load_with(&ImageDecoder, bytes)
    }
    /// Decode an encoded image with `decoder`
    pub fn load_with<D: Decode + ?Sized>(decoder: &D, bytes: &[u8]) -> Result<Pixmap, Error> {
        decoder.decode(bytes)
    }
    /// Read and decode an image file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Pixmap, Error> {
        let bytes = std::fs::read(filename)?;
        Self::load(&bytes)
    }
    /// Write the pixmap to `filename` as 8 bit RGBA, or RGB for formats
    /// without alpha
    ///
    /// The image format follows the file extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<(), Error> {
        let (w, h) = (self.width(), self.height());
        if self.format.has_alpha() {
            image::save_buffer(filename, &self.to_rgba_vec(), w, h, image::ColorType::RGBA(8))?;
        } else {
            let buf : Vec<u8> = self.to_rgba_vec().chunks_exact(4)
                .flat_map(|p| p[..3].iter().cloned())
                .collect();
            image::save_buffer(filename, &buf, w, h, image::ColorType::RGB(8))?;
        }
        Ok(())
    }
    /// Canonical colors of all pixels as `R G B A` bytes
    pub fn to_rgba_vec(&self) -> Vec<u8> {
        let bpp = self.format.bpp();
        let mut out = Vec::with_capacity(self.as_bytes().len() / bpp * 4);
        for p in self.as_bytes().chunks_exact(bpp) {
            out.extend_from_slice(&self.format.read(p).to_array());
        }
        out
    }
}

/// Compare two image files pixel by pixel
///
/// Differences are logged; returns true if the images are identical
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, Error> {
    let p1 = Pixmap::from_file(f1)?;
    let p2 = Pixmap::from_file(f2)?;
    if p1.width() != p2.width() || p1.height() != p2.height() {
        debug!("size differs {}x{} {}x{}", p1.width(), p1.height(), p2.width(), p2.height());
        return Ok(false);
    }
    let mut flag = true;
    for y in 0 .. p1.height() as usize {
        for x in 0 .. p1.width() as usize {
            let (c1, c2) : (Rgba8, Rgba8) = (p1.get((x,y)), p2.get((x,y)));
            if c1 != c2 {
                debug!("[{},{}]: {:?} {:?}", x, y, c1, c2);
                flag = false;
            }
        }
    }
    Ok(flag)
}
