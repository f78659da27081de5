//! Scaled blits between pixmaps
//!
//! A rectangle of a source pixmap is copied into a rectangle of the
//! destination. When the rectangles differ in size the destination's
//! [ScaleMode] selects the resampling. Source samples are converted to
//! canonical colors and composited with the destination's [BlendMode], so
//! any pair of formats can be mixed.
//!
//! The mapping between the two rectangles is fixed by their unclipped
//! sizes. Clipping only removes destination pixels: those outside of the
//! destination pixmap and those whose source sample lies outside of the
//! source pixmap.
//!
//! [ScaleMode]: ../blend/enum.ScaleMode.html
//! [BlendMode]: ../blend/enum.BlendMode.html

use crate::blend::{BlendMode, ScaleMode};
use crate::color::Rgba8;
use crate::math::{bilerp_u8, WEIGHT_SHIFT};
use crate::pixmap::Pixmap;

use log::trace;
use std::cmp::max;
use std::cmp::min;

/// Half open rectangle `[x0,x1) x [y0,y1)`
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
struct Rect {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl Rect {
    fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        let (x, y) = (i64::from(x), i64::from(y));
        Rect { x0: x, y0: y, x1: x + i64::from(w), y1: y + i64::from(h) }
    }
    fn bounds(p: &Pixmap) -> Self {
        Rect { x0: 0, y0: 0, x1: i64::from(p.width()), y1: i64::from(p.height()) }
    }
    fn intersect(&self, o: &Rect) -> Rect {
        Rect {
            x0: max(self.x0, o.x0), y0: max(self.y0, o.y0),
            x1: min(self.x1, o.x1), y1: min(self.y1, o.y1),
        }
    }
    fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
    fn width(&self) -> i64 {
        self.x1 - self.x0
    }
    fn height(&self) -> i64 {
        self.y1 - self.y0
    }
}

/// Source position of a destination pixel in 16.16 fixed point
///
/// Pixel centers of the destination rectangle map onto the source
/// rectangle, the result is the position relative to the source
/// rectangle's first pixel center, clamped at 0
fn center_map(i: i64, src_len: i64, dst_len: i64) -> i64 {
    let v = ((2 * i128::from(i) + 1) * i128::from(src_len) << 16) / (2 * i128::from(dst_len)) - (1 << 15);
    max(v, 0) as i64
}

/// Source offset of destination offset `i`: `i * src_len / dst_len`
fn nearest(i: i64, src_len: i64, dst_len: i64) -> i64 {
    (i128::from(i) * i128::from(src_len) / i128::from(dst_len)) as i64
}

impl Pixmap {
    /// Copy the `src_w` x `src_h` rectangle at (`src_x`,`src_y`) of `src`
    /// into the `dst_w` x `dst_h` rectangle at (`dst_x`,`dst_y`) of this
    /// pixmap
    ///
    /// Rectangles of equal size are copied pixel for pixel, otherwise the
    /// source is resampled using this pixmap's scale mode. Every pixel is
    /// written through this pixmap's blend mode. Nothing happens when a
    /// rectangle is empty or lies completely outside its pixmap.
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8, ScaleMode};
    ///
    ///     let mut src = Pixmap::new(2, 2, PixelFormat::Rgba8888).unwrap();
    ///     src.set_pixel(1, 1, Rgba8::new(255, 0, 0, 255)).unwrap();
    ///
    ///     let mut dst = Pixmap::new(4, 4, PixelFormat::Rgb888).unwrap();
    ///     dst.set_scale(ScaleMode::Nearest);
    ///     dst.draw_pixmap(&src, 0, 0, 2, 2, 0, 0, 4, 4);
    ///     assert_eq!(dst.get_pixel(3, 3).unwrap(), Rgba8::new(255, 0, 0, 255));
    ///     assert_eq!(dst.get_pixel(2, 2).unwrap(), Rgba8::new(255, 0, 0, 255));
    ///     assert_eq!(dst.get_pixel(1, 1).unwrap(), Rgba8::black());
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn draw_pixmap(&mut self, src: &Pixmap,
                       src_x: i32, src_y: i32, src_w: i32, src_h: i32,
                       dst_x: i32, dst_y: i32, dst_w: i32, dst_h: i32) {
        if src_w <= 0 || src_h <= 0 || dst_w <= 0 || dst_h <= 0 {
            trace!("blit with empty rectangle {}x{} -> {}x{}", src_w, src_h, dst_w, dst_h);
            return;
        }
        let srect = Rect::new(src_x, src_y, src_w, src_h);
        let drect = Rect::new(dst_x, dst_y, dst_w, dst_h);
        let sclip = srect.intersect(&Rect::bounds(src));
        let dclip = drect.intersect(&Rect::bounds(self));
        if sclip.is_empty() || dclip.is_empty() {
            trace!("blit clipped away {:?} -> {:?}", srect, drect);
            return;
        }
        if srect.width() == drect.width() && srect.height() == drect.height() {
            self.blit_same_size(src, &srect, &sclip, &drect, &dclip);
            return;
        }
        match self.scale {
            ScaleMode::Nearest  => self.blit_nearest(src, &srect, &sclip, &drect, &dclip),
            ScaleMode::Bilinear => self.blit_bilinear(src, &srect, &sclip, &drect, &dclip),
        }
    }
    /// Draw all of `src` with its top left corner at (`x`,`y`)
    pub fn draw_pixmap_at(&mut self, src: &Pixmap, x: i32, y: i32) {
        let (w, h) = (src.width() as i32, src.height() as i32);
        self.draw_pixmap(src, 0, 0, w, h, x, y, w, h);
    }

    fn blit_same_size(&mut self, src: &Pixmap, srect: &Rect, sclip: &Rect, drect: &Rect, dclip: &Rect) {
        // Shift the source clip into destination space and intersect
        let (ox, oy) = (drect.x0 - srect.x0, drect.y0 - srect.y0);
        let r = dclip.intersect(&Rect {
            x0: sclip.x0 + ox, y0: sclip.y0 + oy,
            x1: sclip.x1 + ox, y1: sclip.y1 + oy,
        });
        if r.is_empty() {
            return;
        }
        if self.blend == BlendMode::None && self.format == src.format {
            let bpp = self.rbuf.bpp;
            let (sx0, sx1) = ((r.x0 - ox) as usize * bpp, (r.x1 - ox) as usize * bpp);
            let (dx0, dx1) = (r.x0 as usize * bpp, r.x1 as usize * bpp);
            for y in r.y0 .. r.y1 {
                let srow = src.rbuf.row((y - oy) as usize);
                self.rbuf.row_mut(y as usize)[dx0 .. dx1].copy_from_slice(&srow[sx0 .. sx1]);
            }
            return;
        }
        for y in r.y0 .. r.y1 {
            for x in r.x0 .. r.x1 {
                let c = src.get(((x - ox) as usize, (y - oy) as usize));
                self.blend_pix((x as usize, y as usize), c);
            }
        }
    }

    fn blit_nearest(&mut self, src: &Pixmap, srect: &Rect, sclip: &Rect, drect: &Rect, dclip: &Rect) {
        let (sw, sh) = (srect.width(), srect.height());
        let (dw, dh) = (drect.width(), drect.height());
        for y in dclip.y0 .. dclip.y1 {
            let sy = srect.y0 + nearest(y - drect.y0, sh, dh);
            if sy < sclip.y0 || sy >= sclip.y1 {
                continue;
            }
            for x in dclip.x0 .. dclip.x1 {
                let sx = srect.x0 + nearest(x - drect.x0, sw, dw);
                if sx < sclip.x0 || sx >= sclip.x1 {
                    continue;
                }
                let c = src.get((sx as usize, sy as usize));
                self.blend_pix((x as usize, y as usize), c);
            }
        }
    }

    fn blit_bilinear(&mut self, src: &Pixmap, srect: &Rect, sclip: &Rect, drect: &Rect, dclip: &Rect) {
        let (sw, sh) = (srect.width(), srect.height());
        let (dw, dh) = (drect.width(), drect.height());
        let frac = |v: i64| ((v >> (16 - WEIGHT_SHIFT)) & ((1 << WEIGHT_SHIFT) - 1)) as u32;
        for y in dclip.y0 .. dclip.y1 {
            let fy = center_map(y - drect.y0, sh, dh);
            let sy = srect.y0 + (fy >> 16);
            if sy < sclip.y0 || sy >= sclip.y1 {
                continue;
            }
            let sy1 = min(sy + 1, sclip.y1 - 1);
            let wy = frac(fy);
            for x in dclip.x0 .. dclip.x1 {
                let fx = center_map(x - drect.x0, sw, dw);
                let sx = srect.x0 + (fx >> 16);
                if sx < sclip.x0 || sx >= sclip.x1 {
                    continue;
                }
                let sx1 = min(sx + 1, sclip.x1 - 1);
                let wx = frac(fx);
                let p00 = src.get((sx as usize, sy as usize));
                let p10 = src.get((sx1 as usize, sy as usize));
                let p01 = src.get((sx as usize, sy1 as usize));
                let p11 = src.get((sx1 as usize, sy1 as usize));
                let c = bilinear(p00, p10, p01, p11, wx, wy);
                self.blend_pix((x as usize, y as usize), c);
            }
        }
    }
}

/// Weighted average of four colors, channel by channel
fn bilinear(p00: Rgba8, p10: Rgba8, p01: Rgba8, p11: Rgba8, wx: u32, wy: u32) -> Rgba8 {
    Rgba8 {
        r: bilerp_u8(p00.r, p10.r, p01.r, p11.r, wx, wy),
        g: bilerp_u8(p00.g, p10.g, p01.g, p11.g, wx, wy),
        b: bilerp_u8(p00.b, p10.b, p01.b, p11.b, wx, wy),
        a: bilerp_u8(p00.a, p10.a, p01.a, p11.a, wx, wy),
    }
}
