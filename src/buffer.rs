//! Rendering buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format) without row padding
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub(crate) data: Vec<u8>,
    /// Image Width in pixels
    pub(crate) width: usize,
    /// Image Height in pixels
    pub(crate) height: usize,
    /// Bytes per pixel
    pub(crate) bpp: usize,
}

impl RenderingBuffer {
    /// Create a new zeroed buffer of width, height, and bpp
    ///
    /// None if the size does not fit in memory
    pub fn new(width: usize, height: usize, bpp: usize) -> Option<Self> {
        let n = byte_len(width, height, bpp)?;
        let mut data = Vec::new();
        data.try_reserve_exact(n).ok()?;
        data.resize(n, 0u8);
        Some(RenderingBuffer { width, height, bpp, data })
    }
    /// Wrap existing data, which must hold exactly width * height * bpp bytes
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, bpp: usize) -> Option<Self> {
        if byte_len(width, height, bpp) != Some(data.len()) {
            return None;
        }
        Some(RenderingBuffer { data, width, height, bpp })
    }
    /// Size of underlying Rendering Buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// True if the buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Bytes in a single row
    pub fn stride(&self) -> usize {
        self.width * self.bpp
    }
    /// Byte offset of pixel (x,y)
    pub fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y * self.width + x) * self.bpp
    }
    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[u8] {
        let s = self.stride();
        &self.data[i * s .. (i + 1) * s]
    }
    /// Row `i` as a mutable slice
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        let s = self.stride();
        &mut self.data[i * s .. (i + 1) * s]
    }
}

/// `width * height * bpp`, None on overflow
fn byte_len(width: usize, height: usize, bpp: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(bpp)
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    /// Bytes of the pixel at (x,y)
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        let bpp = self.bpp;
        &mut self.data[i .. i + bpp]
    }
}
