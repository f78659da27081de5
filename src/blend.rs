//! Blend and scale modes
//!
//! Compositing of a new canonical color over an existing one

use crate::color::Rgba8;
use crate::error::Error;
use crate::math::div255;

/// Rule applied when writing a color over existing pixel content
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum BlendMode {
    /// Overwrite the destination, alpha included
    None,
    /// Source over destination alpha compositing
    SrcOver,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::SrcOver
    }
}

impl BlendMode {
    /// Mode from its numeric identifier (0 - 1)
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(BlendMode::None),
            1 => Some(BlendMode::SrcOver),
            _ => None,
        }
    }
    /// Numeric identifier of the mode
    pub fn id(self) -> u32 {
        match self {
            BlendMode::None    => 0,
            BlendMode::SrcOver => 1,
        }
    }
    /// Combine `src` with the existing `dst` color
    ///
    ///     use pixmap::{BlendMode, Rgba8};
    ///
    ///     let dst = Rgba8::new(0,0,255,255);
    ///     let src = Rgba8::new(255,0,0,128);
    ///     assert_eq!(BlendMode::None.composite(src, dst), src);
    ///     assert_eq!(BlendMode::SrcOver.composite(src, dst), Rgba8::new(128,0,127,255));
    ///
    pub fn composite(self, src: Rgba8, dst: Rgba8) -> Rgba8 {
        match self {
            BlendMode::None => src,
            BlendMode::SrcOver => src_over(src, dst),
        }
    }
}

/// Source over destination
///
/// ```text
/// out.c = (src.c * src.a + dst.c * (255 - src.a)) / 255
/// out.a = src.a + dst.a * (255 - src.a) / 255
/// ```
///
/// Both divisions round to nearest
pub fn src_over(src: Rgba8, dst: Rgba8) -> Rgba8 {
    match src.a {
        255 => return src,
        0 => return dst,
        _ => {}
    }
    let sa = u32::from(src.a);
    let da = 255 - sa;
    let mix = |s: u8, d: u8| div255(u32::from(s) * sa + u32::from(d) * da);
    Rgba8 {
        r: mix(src.r, dst.r),
        g: mix(src.g, dst.g),
        b: mix(src.b, dst.b),
        a: src.a + div255(u32::from(dst.a) * da),
    }
}

/// Resampling rule used when a blit changes size
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum ScaleMode {
    /// Nearest source pixel
    Nearest,
    /// Area weighted average of the four surrounding source pixels
    Bilinear,
}

impl Default for ScaleMode {
    fn default() -> Self {
        ScaleMode::Nearest
    }
}

impl ScaleMode {
    /// Mode from its numeric identifier (0 - 1)
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(ScaleMode::Nearest),
            1 => Some(ScaleMode::Bilinear),
            _ => None,
        }
    }
    /// Numeric identifier of the mode
    pub fn id(self) -> u32 {
        match self {
            ScaleMode::Nearest  => 0,
            ScaleMode::Bilinear => 1,
        }
    }
}

impl std::convert::TryFrom<u32> for BlendMode {
    type Error = Error;
    fn try_from(id: u32) -> Result<Self, Error> {
        BlendMode::from_id(id).ok_or(Error::InvalidMode(id))
    }
}
impl std::convert::TryFrom<u32> for ScaleMode {
    type Error = Error;
    fn try_from(id: u32) -> Result<Self, Error> {
        ScaleMode::from_id(id).ok_or(Error::InvalidMode(id))
    }
}
