//! Primitive Rasterizer
//!
//! Aliased lines, rectangles, circles and triangles drawn straight into
//! the pixel data. All coordinates are integers; anything falling outside
//! of the pixmap is clipped and degenerate shapes draw nothing.

use crate::color::Rgba8;
use crate::math::isqrt;
use crate::pixmap::Pixmap;

use log::trace;
use std::cmp::max;
use std::cmp::min;

impl Pixmap {
    /// Draw a line from (`x1`,`y1`) to (`x2`,`y2`) of color `c`
    ///
    /// Uses [Bresenham's line drawing algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm).
    /// Both end points are drawn and each pixel is touched once. The line
    /// is always walked from the same end so swapping the end points
    /// gives the same pixels. Only the part inside the pixmap is walked.
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8};
    ///
    ///     let mut pix = Pixmap::new(4, 4, PixelFormat::Rgb888).unwrap();
    ///     pix.draw_line(0, 0, 3, 3, Rgba8::white());
    ///     for i in 0 .. 4 {
    ///         assert_eq!(pix.get_pixel(i, i).unwrap(), Rgba8::white());
    ///     }
    ///     assert_eq!(pix.get_pixel(1, 0).unwrap(), Rgba8::black());
    ///
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, c: Rgba8) {
        self.line(i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2), c);
    }
    pub(crate) fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, c: Rgba8) {
        if y1 == y2 {
            self.blend_hline(x1, y1, x2, c);
            return;
        }
        if x1 == x2 {
            self.blend_vline(x1, y1, y2, c);
            return;
        }
        let (xmin,xmax,ymin,ymax) = self.limits();
        if max(x1,x2) < xmin || min(x1,x2) > xmax || max(y1,y2) < ymin || min(y1,y2) > ymax {
            trace!("line ({},{}) ({},{}) outside pixmap", x1, y1, x2, y2);
            return;
        }
        if (x2 - x1).abs() >= (y2 - y1).abs() {
            let (x1,y1,x2,y2) = if x1 > x2 { (x2,y2,x1,y1) } else { (x1,y1,x2,y2) };
            bresenham((x1,y1), (x2,y2), (xmin,xmax), |x, y| self.plot(x, y, c));
        } else {
            let (x1,y1,x2,y2) = if y1 > y2 { (x2,y2,x1,y1) } else { (x1,y1,x2,y2) };
            bresenham((y1,x1), (y2,x2), (ymin,ymax), |y, x| self.plot(x, y, c));
        }
    }

    /// Draw the 1 pixel outline of a `width` x `height` rectangle with
    /// its top left corner at (`x`,`y`)
    ///
    /// Corners are drawn once
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, c: Rgba8) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (x1, y1) = (i64::from(x), i64::from(y));
        let x2 = x1 + i64::from(width) - 1;
        let y2 = y1 + i64::from(height) - 1;
        self.line(x1, y1, x2, y1, c);
        if y2 > y1 {
            self.line(x1, y2, x2, y2, c);
        }
        if y2 - y1 > 1 {
            self.line(x1, y1 + 1, x1, y2 - 1, c);
            if x2 > x1 {
                self.line(x2, y1 + 1, x2, y2 - 1, c);
            }
        }
    }
    /// Fill every pixel in `[x, x+width) x [y, y+height)`
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8};
    ///
    ///     let mut pix = Pixmap::new(4, 4, PixelFormat::Rgba8888).unwrap();
    ///     pix.fill_rect(0, 0, 4, 4, Rgba8::unpack(0xFF0000FF));
    ///     assert_eq!(pix.get_pixel(2, 2).unwrap(), Rgba8::new(255, 0, 0, 255));
    ///
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, c: Rgba8) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (_,_,ymin,ymax) = self.limits();
        let x1 = i64::from(x);
        let x2 = x1 + i64::from(width) - 1;
        let y1 = max(i64::from(y), ymin);
        let y2 = min(i64::from(y) + i64::from(height) - 1, ymax);
        for row in y1 ..= y2 {
            self.blend_hline(x1, row, x2, c);
        }
    }

    /// Draw the outline of a circle centered on (`x`,`y`)
    ///
    /// Uses the [Midpoint circle algorithm](https://en.wikipedia.org/wiki/Midpoint_circle_algorithm);
    /// each pixel on the outline is drawn once. Only rows inside the
    /// pixmap are visited, so the cost does not depend on the radius.
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32, c: Rgba8) {
        let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(radius));
        let (y1, y2) = match self.circle_rows(cx, cy, r) {
            Some(rows) => rows,
            None => return,
        };
        for y in y1 ..= y2 {
            let d = (y - cy).abs();
            // Columns of the first octant whose height is exactly d
            let lo = row_reach(r, d + 1) + 1;
            let hi = min(row_reach(r, d), d);
            if lo <= hi {
                self.blend_hline(cx + lo, y, cx + hi, c);
                if hi > 0 {
                    self.blend_hline(cx - hi, y, cx - max(lo, 1), c);
                }
            }
            // Same octant mirrored across the diagonal
            let col = column_height(r, d);
            if d < col {
                self.plot(cx + col, y, c);
                self.plot(cx - col, y, c);
            }
        }
    }
    /// Fill a circle centered on (`x`,`y`)
    ///
    /// Each row is a single span reaching the outline drawn by
    /// [draw_circle], so no pixel is drawn twice
    ///
    /// [draw_circle]: #method.draw_circle
    pub fn fill_circle(&mut self, x: i32, y: i32, radius: i32, c: Rgba8) {
        let (cx, cy, r) = (i64::from(x), i64::from(y), i64::from(radius));
        let (y1, y2) = match self.circle_rows(cx, cy, r) {
            Some(rows) => rows,
            None => return,
        };
        for y in y1 ..= y2 {
            let d = (y - cy).abs();
            let col = column_height(r, d);
            let hw = if d <= col { col } else { row_reach(r, d) };
            self.blend_hline(cx - hw, y, cx + hw, c);
        }
    }
    /// Visible rows of a circle, None if nothing of it can be seen
    fn circle_rows(&self, cx: i64, cy: i64, r: i64) -> Option<(i64,i64)> {
        if r <= 0 {
            return None;
        }
        let (xmin,xmax,ymin,ymax) = self.limits();
        if cx + r < xmin || cx - r > xmax || cy + r < ymin || cy - r > ymax {
            trace!("circle ({},{}) r {} outside pixmap", cx, cy, r);
            return None;
        }
        Some((max(cy - r, ymin), min(cy + r, ymax)))
    }

    /// Fill the triangle (`x1`,`y1`), (`x2`,`y2`), (`x3`,`y3`)
    ///
    /// Vertices may be given in any winding order. A pixel is filled when
    /// its center lies inside the triangle; centers exactly on an edge
    /// belong to the triangle only if it is a top or left edge, so
    /// triangles sharing an edge never overlap or leave gaps.
    ///
    ///     use pixmap::{Pixmap, PixelFormat, Rgba8};
    ///
    ///     let mut pix = Pixmap::new(4, 4, PixelFormat::Alpha).unwrap();
    ///     pix.fill_triangle(0, 0, 4, 0, 0, 4, Rgba8::white());
    ///     assert_eq!(pix.get_pixel(0, 0).unwrap().a, 255);
    ///     assert_eq!(pix.get_pixel(2, 0).unwrap().a, 255);
    ///     assert_eq!(pix.get_pixel(3, 0).unwrap().a, 0); // center on the diagonal
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, c: Rgba8) {
        let mut v = [
            (i64::from(x1), i64::from(y1)),
            (i64::from(x2), i64::from(y2)),
            (i64::from(x3), i64::from(y3)),
        ];
        let area = i128::from(v[1].0 - v[0].0) * i128::from(v[2].1 - v[0].1)
                 - i128::from(v[1].1 - v[0].1) * i128::from(v[2].0 - v[0].0);
        if area == 0 {
            trace!("degenerate triangle {:?}", v);
            return;
        }
        if area < 0 {
            v.swap(1, 2);
        }
        let (xmin,xmax,ymin,ymax) = self.limits();
        // Pixels whose centers can fall inside the bounding box
        let left   = max(v.iter().map(|p| p.0).min().unwrap_or(0), xmin);
        let right  = min(v.iter().map(|p| p.0).max().unwrap_or(0) - 1, xmax);
        let top    = max(v.iter().map(|p| p.1).min().unwrap_or(0), ymin);
        let bottom = min(v.iter().map(|p| p.1).max().unwrap_or(0) - 1, ymax);
        if left > right || top > bottom {
            return;
        }
        let edges = [
            Edge::new(v[0], v[1]),
            Edge::new(v[1], v[2]),
            Edge::new(v[2], v[0]),
        ];
        for y in top ..= bottom {
            let mut span : Option<(i64,i64)> = None;
            for x in left ..= right {
                if edges.iter().all(|e| e.covers(x, y)) {
                    span = Some(span.map_or((x,x), |(s,_)| (s,x)));
                } else if span.is_some() {
                    break;
                }
            }
            if let Some((s,e)) = span {
                self.blend_hline(s, y, e, c);
            }
        }
    }
}

/// Walk a line along its major axis `u`, visiting only `u` in `[lo, hi]`
///
/// `a` is the end with the smaller `u` and the major extent is at least
/// the minor one. `put` gets (u, v) of each pixel, the same pixels a full
/// walk from `a` would produce.
fn bresenham<F>(a: (i64,i64), b: (i64,i64), (lo, hi): (i64,i64), mut put: F)
    where F: FnMut(i64, i64)
{
    let du = b.0 - a.0;
    let dv = (b.1 - a.1).abs();
    let step = if b.1 > a.1 { 1 } else { -1 };
    let k0 = max(lo - a.0, 0);
    let k1 = min(hi, b.0) - a.0;
    if k0 > k1 {
        return;
    }
    // Minor steps taken before k0: ceil((2 dv k0 - du) / 2 du)
    let (du2, dv2) = (2 * i128::from(du), 2 * i128::from(dv));
    let n = dv2 * i128::from(k0) - i128::from(du);
    let s = -(-n).div_euclid(du2);
    let mut v = a.1 + step * s as i64;
    let mut error = (dv2 * (i128::from(k0) + 1) - i128::from(du) - du2 * s) as i64;
    let (du2, dv2) = (du2 as i64, dv2 as i64);
    for k in k0 ..= k1 {
        put(a.0 + k, v);
        if error > 0 {
            v += step;
            error -= du2;
        }
        error += dv2;
    }
}

/// Height of column `x` in the first octant of a midpoint circle of
/// radius `r`: the largest `y` with `(2y-1)^2 < 4(r^2 - x^2)`
fn column_height(r: i64, x: i64) -> i64 {
    let (r, x) = (i128::from(r), i128::from(x));
    ((isqrt(4 * (r * r - x * x) - 1) + 1) / 2) as i64
}

/// Last column whose height is at least `y`, -1 if there is none
fn row_reach(r: i64, y: i64) -> i64 {
    let (r, y) = (i128::from(r), i128::from(y));
    let m = 4 * r * r - (2 * y - 1) * (2 * y - 1);
    if m < 1 {
        -1
    } else {
        (isqrt(m - 1) / 2) as i64
    }
}

/// Edge of a triangle with positive area, in doubled coordinates so
/// pixel centers fall on integers
#[derive(Debug)]
struct Edge {
    ax: i128,
    ay: i128,
    dx: i128,
    dy: i128,
    /// Top or left edge; centers on it are inside
    inclusive: bool,
}

impl Edge {
    fn new(a: (i64,i64), b: (i64,i64)) -> Self {
        let dx = i128::from(b.0 - a.0) * 2;
        let dy = i128::from(b.1 - a.1) * 2;
        // Interior lies to the right of the edge for left edges and below
        // it for top edges (y grows downwards)
        let inclusive = dy < 0 || (dy == 0 && dx > 0);
        Edge { ax: i128::from(a.0) * 2, ay: i128::from(a.1) * 2, dx, dy, inclusive }
    }
    /// Is the center of pixel (x,y) on the inner side of the edge
    fn covers(&self, x: i64, y: i64) -> bool {
        let qx = i128::from(x) * 2 + 1;
        let qy = i128::from(y) * 2 + 1;
        let w = self.dx * (qy - self.ay) - self.dy * (qx - self.ax);
        w > 0 || (w == 0 && self.inclusive)
    }
}
