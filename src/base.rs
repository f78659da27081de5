//! Clipped pixel and span writes
//!
//! Every drawing operation ends up here. Coordinates outside of the
//! pixmap are dropped without error and each written pixel goes through
//! the pixmap's blend mode.

use crate::blend::BlendMode;
use crate::color::Rgba8;
use crate::pixmap::Pixmap;

use std::cmp::max;
use std::cmp::min;

impl Pixmap {
    /// Inclusive limits (xmin, xmax, ymin, ymax) of the pixmap
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.rbuf.width as i64;
        let h = self.rbuf.height as i64;
        (0, w-1, 0, h-1)
    }
    /// Write `c` at `id` through the blend mode, id is (x,y)
    pub(crate) fn blend_pix(&mut self, id: (usize, usize), c: Rgba8) {
        match self.blend {
            BlendMode::None => self.set(id, c),
            blend => {
                let p = self.get(id);
                self.set(id, blend.composite(c, p));
            }
        }
    }
    /// Draw a single pixel of color `c` at (`x`,`y`)
    ///
    /// Honors the blend mode, pixels outside of the pixmap are ignored
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8};
    ///
    ///     let mut pix = Pixmap::new(2, 1, PixelFormat::Rgba8888).unwrap();
    ///     pix.draw_pixel(0, 0, Rgba8::new(0, 0, 255, 255));
    ///     pix.draw_pixel(0, 0, Rgba8::new(255, 0, 0, 128));
    ///     assert_eq!(pix.get_pixel(0,0).unwrap(), Rgba8::new(128, 0, 127, 255));
    ///
    ///     pix.draw_pixel(5, 5, Rgba8::black()); // Ignored, outside of range
    ///
    pub fn draw_pixel(&mut self, x: i32, y: i32, c: Rgba8) {
        self.plot(i64::from(x), i64::from(y), c);
    }
    /// Clipped, blended single pixel write
    pub(crate) fn plot(&mut self, x: i64, y: i64, c: Rgba8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if x < xmin || x > xmax || y < ymin || y > ymax {
            return;
        }
        self.blend_pix((x as usize, y as usize), c);
    }
    /// Draw pixels from (`x1`,`y`) to (`x2`,`y`), both ends included
    pub fn blend_hline(&mut self, x1: i64, y: i64, x2: i64, c: Rgba8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = max(x1, xmin) as usize;
        let x2 = min(x2, xmax) as usize;
        let y = y as usize;
        if self.blend == BlendMode::None {
            let bpp = self.rbuf.bpp;
            let mut px = [0u8; 4];
            self.format.write(&mut px, c);
            let row = self.rbuf.row_mut(y);
            for p in row[x1 * bpp .. (x2 + 1) * bpp].chunks_exact_mut(bpp) {
                p.copy_from_slice(&px[..bpp]);
            }
            return;
        }
        for x in x1 ..= x2 {
            self.blend_pix((x, y), c);
        }
    }
    /// Draw pixels from (`x`,`y1`) to (`x`,`y2`), both ends included
    pub fn blend_vline(&mut self, x: i64, y1: i64, y2: i64, c: Rgba8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (y1,y2) = if y2 > y1 { (y1,y2) } else { (y2,y1) };
        if x > xmax || x < xmin || y1 > ymax || y2 < ymin {
            return;
        }
        let y1 = max(y1, ymin) as usize;
        let y2 = min(y2, ymax) as usize;
        for y in y1 ..= y2 {
            self.blend_pix((x as usize, y), c);
        }
    }
}
