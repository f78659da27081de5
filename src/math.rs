//! Fixed point helpers shared by the pixel formats, blending and scaling

/// Divide by 255 rounding to the nearest integer
///
/// Exact for every `v <= 255 * 255 * 2`; ties cannot occur since 255 is odd
pub fn div255(v: u32) -> u8 {
    ((v + 127) / 255) as u8
}

/// Widen a 5 bit component to 8 bits by bit replication
pub fn expand5(v: u16) -> u8 {
    let v = (v & 0x1f) as u8;
    (v << 3) | (v >> 2)
}
/// Widen a 6 bit component to 8 bits by bit replication
pub fn expand6(v: u16) -> u8 {
    let v = (v & 0x3f) as u8;
    (v << 2) | (v >> 4)
}
/// Widen a 4 bit component to 8 bits by bit replication
pub fn expand4(v: u16) -> u8 {
    let v = (v & 0x0f) as u8;
    (v << 4) | v
}

/// Luminance of an 8 bit color using integer Rec. 601 weights
///
/// Weights sum to 256 so gray values are preserved
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let (r,g,b) = (u32::from(r), u32::from(g), u32::from(b));
    ((77 * r + 150 * g + 29 * b + 128) >> 8) as u8
}

/// Largest `v` with `v * v <= n`, 0 for negative `n`
pub fn isqrt(n: i128) -> i128 {
    if n <= 0 {
        return 0;
    }
    let mut v = (n as f64).sqrt() as i128;
    while v * v > n {
        v -= 1;
    }
    while (v + 1) * (v + 1) <= n {
        v += 1;
    }
    v
}

/// Number of fractional bits in bilinear sample weights
pub const WEIGHT_SHIFT : u32 = 8;
/// Weight of a full sample
pub const WEIGHT_ONE : u32 = 1 << WEIGHT_SHIFT;

/// Interpolate a single component between four neighbors
///
/// `fx` and `fy` are fractional positions in `[0, WEIGHT_ONE)` measured
/// from `p00` towards `p10` and `p01`
pub fn bilerp_u8(p00: u8, p10: u8, p01: u8, p11: u8, fx: u32, fy: u32) -> u8 {
    let (ix, iy) = (WEIGHT_ONE - fx, WEIGHT_ONE - fy);
    let sum = u32::from(p00) * ix * iy
        + u32::from(p10) * fx * iy
        + u32::from(p01) * ix * fy
        + u32::from(p11) * fx * fy;
    let shift = 2 * WEIGHT_SHIFT;
    ((sum + (1 << (shift - 1))) >> shift) as u8
}
