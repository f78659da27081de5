//! Colors

/// Canonical color as Red, Green, Blue, and Alpha
///
/// Every pixel read is converted into this form and every pixel write
/// starts from it, whatever the storage format of the pixmap.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent black (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Create a new opaque gray color
    pub fn gray(v: u8) -> Self {
        Self::new(v,v,v,255)
    }
    /// Unpack from `0xRRGGBBAA`
    ///
    ///     use pixmap::Rgba8;
    ///
    ///     let c = Rgba8::unpack(0xFF00_80FF);
    ///     assert_eq!(c, Rgba8::new(255, 0, 128, 255));
    ///     assert_eq!(c.pack(), 0xFF00_80FF);
    ///
    pub fn unpack(v: u32) -> Self {
        Self::new((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
    /// Pack into `0xRRGGBBAA`
    pub fn pack(&self) -> u32 {
        u32::from(self.r) << 24 | u32::from(self.g) << 16 | u32::from(self.b) << 8 | u32::from(self.a)
    }
    /// Same color with a different alpha
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
    /// Color components in `[r,g,b,a]` order
    pub fn to_array(&self) -> [u8;4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8;4]> for Rgba8 {
    fn from(c: [u8;4]) -> Rgba8 {
        Rgba8::new(c[0], c[1], c[2], c[3])
    }
}
impl From<Rgba8> for [u8;4] {
    fn from(c: Rgba8) -> [u8;4] {
        c.to_array()
    }
}
impl From<u32> for Rgba8 {
    fn from(v: u32) -> Rgba8 {
        Rgba8::unpack(v)
    }
}
impl From<Rgba8> for u32 {
    fn from(c: Rgba8) -> u32 {
        c.pack()
    }
}
