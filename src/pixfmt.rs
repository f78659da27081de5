//! Pixel Format
//!
//! Storage layout of each format and the conversion of stored pixels
//! to and from the canonical [Rgba8] color.
//!
//! | Format         | id | bpp | Stored bytes                       |
//! |----------------|----|-----|------------------------------------|
//! | Alpha          | 1  | 1   | `A`                                |
//! | LuminanceAlpha | 2  | 2   | `L A`                              |
//! | Rgb888         | 3  | 3   | `R G B`                            |
//! | Rgba8888       | 4  | 4   | `R G B A`                          |
//! | Rgb565         | 5  | 2   | little-endian `rrrrrggg gggbbbbb`  |
//! | Rgba4444       | 6  | 2   | little-endian `rrrrgggg bbbbaaaa`  |
//!
//! [Rgba8]: ../color/struct.Rgba8.html

use crate::color::Rgba8;
use crate::error::Error;
use crate::math::*;

/// Storage format of a Pixmap
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum PixelFormat {
    /// Alpha only, color reads back as white
    Alpha,
    /// Luminance and Alpha
    LuminanceAlpha,
    /// Red, Green, Blue; always opaque
    Rgb888,
    /// Red, Green, Blue, Alpha
    Rgba8888,
    /// Red, Green, Blue packed 5-6-5; always opaque
    Rgb565,
    /// Red, Green, Blue, Alpha packed 4-4-4-4
    Rgba4444,
}

impl PixelFormat {
    /// All formats in identifier order
    pub const ALL : [PixelFormat; 6] = [
        PixelFormat::Alpha,
        PixelFormat::LuminanceAlpha,
        PixelFormat::Rgb888,
        PixelFormat::Rgba8888,
        PixelFormat::Rgb565,
        PixelFormat::Rgba4444,
    ];

    /// Format from its numeric identifier (1 - 6)
    ///
    ///     use pixmap::PixelFormat;
    ///
    ///     assert_eq!(PixelFormat::from_id(4).unwrap(), PixelFormat::Rgba8888);
    ///     assert!(PixelFormat::from_id(0).is_err());
    ///     assert!(PixelFormat::from_id(7).is_err());
    ///
    pub fn from_id(id: u32) -> Result<Self, Error> {
        match id {
            1 => Ok(PixelFormat::Alpha),
            2 => Ok(PixelFormat::LuminanceAlpha),
            3 => Ok(PixelFormat::Rgb888),
            4 => Ok(PixelFormat::Rgba8888),
            5 => Ok(PixelFormat::Rgb565),
            6 => Ok(PixelFormat::Rgba4444),
            _ => Err(Error::InvalidFormat(id)),
        }
    }
    /// Numeric identifier of the format
    pub fn id(self) -> u32 {
        match self {
            PixelFormat::Alpha          => 1,
            PixelFormat::LuminanceAlpha => 2,
            PixelFormat::Rgb888         => 3,
            PixelFormat::Rgba8888       => 4,
            PixelFormat::Rgb565         => 5,
            PixelFormat::Rgba4444       => 6,
        }
    }
    /// Bytes used to store a single pixel
    pub fn bpp(self) -> usize {
        match self {
            PixelFormat::Alpha          => 1,
            PixelFormat::LuminanceAlpha => 2,
            PixelFormat::Rgb888         => 3,
            PixelFormat::Rgba8888       => 4,
            PixelFormat::Rgb565         => 2,
            PixelFormat::Rgba4444       => 2,
        }
    }
    /// True if the format stores an alpha channel
    pub fn has_alpha(self) -> bool {
        match self {
            PixelFormat::Rgb888 | PixelFormat::Rgb565 => false,
            _ => true,
        }
    }

    /// Convert a packed value of this format into a canonical color
    ///
    /// Only the low `8 * bpp` bits are significant
    ///
    ///     use pixmap::{PixelFormat, Rgba8};
    ///
    ///     let red = PixelFormat::Rgb565.decode_value(0xF800);
    ///     assert_eq!(red, Rgba8::new(255,0,0,255));
    ///     let half = PixelFormat::Alpha.decode_value(0x80);
    ///     assert_eq!(half, Rgba8::new(255,255,255,128));
    ///
    pub fn decode_value(self, v: u32) -> Rgba8 {
        match self {
            PixelFormat::Alpha => Rgba8::new(255, 255, 255, v as u8),
            PixelFormat::LuminanceAlpha => {
                let l = (v >> 8) as u8;
                Rgba8::new(l, l, l, v as u8)
            }
            PixelFormat::Rgb888 => Rgba8::new((v >> 16) as u8, (v >> 8) as u8, v as u8, 255),
            PixelFormat::Rgba8888 => Rgba8::unpack(v),
            PixelFormat::Rgb565 => {
                let v = v as u16;
                Rgba8::new(expand5(v >> 11), expand6(v >> 5), expand5(v), 255)
            }
            PixelFormat::Rgba4444 => {
                let v = v as u16;
                Rgba8::new(expand4(v >> 12), expand4(v >> 8), expand4(v >> 4), expand4(v))
            }
        }
    }
    /// Convert a canonical color into a packed value of this format
    ///
    /// Components not representable in the format are dropped and
    /// narrow components are truncated
    pub fn encode_value(self, c: Rgba8) -> u32 {
        match self {
            PixelFormat::Alpha => u32::from(c.a),
            PixelFormat::LuminanceAlpha => u32::from(luma(c.r, c.g, c.b)) << 8 | u32::from(c.a),
            PixelFormat::Rgb888 => c.pack() >> 8,
            PixelFormat::Rgba8888 => c.pack(),
            PixelFormat::Rgb565 => {
                let (r,g,b) = (u32::from(c.r >> 3), u32::from(c.g >> 2), u32::from(c.b >> 3));
                r << 11 | g << 5 | b
            }
            PixelFormat::Rgba4444 => {
                let (r,g,b,a) = (u32::from(c.r >> 4), u32::from(c.g >> 4),
                                 u32::from(c.b >> 4), u32::from(c.a >> 4));
                r << 12 | g << 8 | b << 4 | a
            }
        }
    }

    /// Read the packed value of the pixel stored at the start of `p`
    pub fn read_value(self, p: &[u8]) -> u32 {
        match self {
            PixelFormat::Alpha => u32::from(p[0]),
            PixelFormat::LuminanceAlpha => u32::from(p[0]) << 8 | u32::from(p[1]),
            PixelFormat::Rgb888 => u32::from(p[0]) << 16 | u32::from(p[1]) << 8 | u32::from(p[2]),
            PixelFormat::Rgba8888 => u32::from_be_bytes([p[0], p[1], p[2], p[3]]),
            PixelFormat::Rgb565 | PixelFormat::Rgba4444 => u32::from(u16::from_le_bytes([p[0], p[1]])),
        }
    }
    /// Write a packed value to the pixel stored at the start of `p`
    pub fn write_value(self, p: &mut [u8], v: u32) {
        match self {
            PixelFormat::Alpha => p[0] = v as u8,
            PixelFormat::LuminanceAlpha => {
                p[0] = (v >> 8) as u8;
                p[1] = v as u8;
            }
            PixelFormat::Rgb888 => {
                p[0] = (v >> 16) as u8;
                p[1] = (v >> 8) as u8;
                p[2] = v as u8;
            }
            PixelFormat::Rgba8888 => p[..4].copy_from_slice(&v.to_be_bytes()),
            PixelFormat::Rgb565 | PixelFormat::Rgba4444 => {
                p[..2].copy_from_slice(&(v as u16).to_le_bytes())
            }
        }
    }
    /// Read the pixel at the start of `p` as a canonical color
    pub fn read(self, p: &[u8]) -> Rgba8 {
        self.decode_value(self.read_value(p))
    }
    /// Write the canonical color `c` to the pixel at the start of `p`
    pub fn write(self, p: &mut [u8], c: Rgba8) {
        self.write_value(p, self.encode_value(c))
    }
}

impl std::convert::TryFrom<u32> for PixelFormat {
    type Error = Error;
    fn try_from(id: u32) -> Result<Self, Error> {
        PixelFormat::from_id(id)
    }
}
