use pixmap::*;

fn pattern(w: u32, h: u32, format: PixelFormat) -> Pixmap {
    let n = (w * h) as usize * format.bpp();
    let data : Vec<u8> = (0 .. n).map(|i| (i * 37 + 11) as u8).collect();
    Pixmap::from_vec(data, w, h, format).unwrap()
}

fn dest(w: u32, h: u32, format: PixelFormat, scale: ScaleMode) -> Pixmap {
    Pixmap::with_modes(w, h, format, BlendMode::None, scale).unwrap()
}

#[test_log::test]
fn t05_identity() {
    for &f in PixelFormat::ALL.iter() {
        let src = pattern(5, 4, f);
        let mut dst = dest(5, 4, f, ScaleMode::Nearest);
        dst.draw_pixmap(&src, 0, 0, 5, 4, 0, 0, 5, 4);
        assert_eq!(dst.as_bytes(), src.as_bytes(), "{:?}", f);

        let mut dst = dest(5, 4, f, ScaleMode::Bilinear);
        dst.draw_pixmap_at(&src, 0, 0);
        assert_eq!(dst.as_bytes(), src.as_bytes(), "{:?}", f);
    }
}

#[test]
fn t05_identity_opaque_src_over() {
    // An opaque source under SrcOver replaces the destination
    let src = pattern(3, 3, PixelFormat::Rgb888);
    let mut dst = Pixmap::new(3, 3, PixelFormat::Rgb888).unwrap();
    dst.clear(Rgba8::white());
    dst.draw_pixmap(&src, 0, 0, 3, 3, 0, 0, 3, 3);
    assert_eq!(dst.as_bytes(), src.as_bytes());
}

#[test]
fn t05_cross_format() {
    let src = pattern(4, 3, PixelFormat::Rgba8888);
    for &f in PixelFormat::ALL.iter() {
        let mut dst = dest(4, 3, f, ScaleMode::Nearest);
        dst.draw_pixmap(&src, 0, 0, 4, 3, 0, 0, 4, 3);
        assert_eq!(dst.as_bytes(), src.convert(f).unwrap().as_bytes(), "{:?}", f);
    }
    let src = pattern(4, 3, PixelFormat::Rgb565);
    let mut dst = dest(4, 3, PixelFormat::Rgba8888, ScaleMode::Nearest);
    dst.draw_pixmap_at(&src, 0, 0);
    for y in 0 .. 3 {
        for x in 0 .. 4 {
            assert_eq!(dst.get_pixel(x, y).unwrap(), src.get_pixel(x, y).unwrap());
        }
    }
}

#[test]
fn t05_sub_rectangle() {
    let src = pattern(4, 4, PixelFormat::Rgba8888);
    let mut dst = dest(4, 4, PixelFormat::Rgba8888, ScaleMode::Nearest);
    dst.draw_pixmap(&src, 1, 1, 2, 2, 0, 0, 2, 2);
    for y in 0 .. 2 {
        for x in 0 .. 2 {
            assert_eq!(dst.get_pixel(x, y).unwrap(), src.get_pixel(x + 1, y + 1).unwrap());
        }
    }
    assert_eq!(dst.get_pixel(2, 0).unwrap(), Rgba8::transparent());
    assert_eq!(dst.get_pixel(0, 2).unwrap(), Rgba8::transparent());
}

#[test]
fn t05_nearest() {
    let (a, b) = (Rgba8::new(255, 0, 0, 255), Rgba8::new(0, 255, 0, 255));
    let (c, d) = (Rgba8::new(0, 0, 255, 255), Rgba8::white());
    let mut src = dest(2, 2, PixelFormat::Rgba8888, ScaleMode::Nearest);
    src.set_pixel(0, 0, a).unwrap();
    src.set_pixel(1, 0, b).unwrap();
    src.set_pixel(0, 1, c).unwrap();
    src.set_pixel(1, 1, d).unwrap();

    // 2x up: every source pixel becomes a 2x2 block
    let mut up = dest(4, 4, PixelFormat::Rgb888, ScaleMode::Nearest);
    up.draw_pixmap(&src, 0, 0, 2, 2, 0, 0, 4, 4);
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            let expect = src.get_pixel(x / 2, y / 2).unwrap();
            assert_eq!(up.get_pixel(x, y).unwrap(), expect, "({},{})", x, y);
        }
    }

    // 2x down: dst i samples src i * 2
    let big = pattern(4, 4, PixelFormat::Rgba8888);
    let mut down = dest(2, 2, PixelFormat::Rgba8888, ScaleMode::Nearest);
    down.draw_pixmap(&big, 0, 0, 4, 4, 0, 0, 2, 2);
    for y in 0 .. 2 {
        for x in 0 .. 2 {
            assert_eq!(down.get_pixel(x, y).unwrap(), big.get_pixel(x * 2, y * 2).unwrap());
        }
    }
}

#[test]
fn t05_bilinear_uniform() {
    for &c in [Rgba8::new(10, 200, 30, 255), Rgba8::new(90, 90, 90, 77)].iter() {
        let mut src = dest(3, 3, PixelFormat::Rgba8888, ScaleMode::Nearest);
        src.clear(c);
        let mut dst = dest(7, 5, PixelFormat::Rgba8888, ScaleMode::Bilinear);
        dst.draw_pixmap(&src, 0, 0, 3, 3, 0, 0, 7, 5);
        for y in 0 .. 5 {
            for x in 0 .. 7 {
                assert_eq!(dst.get_pixel(x, y).unwrap(), c);
            }
        }
    }
}

#[test]
fn t05_bilinear_gradient() {
    let mut src = dest(2, 1, PixelFormat::Rgba8888, ScaleMode::Nearest);
    src.set_pixel(0, 0, Rgba8::black()).unwrap();
    src.set_pixel(1, 0, Rgba8::new(255, 0, 0, 255)).unwrap();

    let mut dst = dest(4, 1, PixelFormat::Rgba8888, ScaleMode::Bilinear);
    dst.draw_pixmap(&src, 0, 0, 2, 1, 0, 0, 4, 1);
    let reds : Vec<u8> = (0 .. 4).map(|x| dst.get_pixel(x, 0).unwrap().r).collect();
    assert_eq!(reds, vec![0, 64, 191, 255]);

    // Nearest on the same input only uses the source values
    dst.set_scale(ScaleMode::Nearest);
    dst.draw_pixmap(&src, 0, 0, 2, 1, 0, 0, 4, 1);
    let reds : Vec<u8> = (0 .. 4).map(|x| dst.get_pixel(x, 0).unwrap().r).collect();
    assert_eq!(reds, vec![0, 0, 255, 255]);
}

#[test]
fn t05_blit_blends() {
    let mut src = dest(2, 2, PixelFormat::Rgba8888, ScaleMode::Nearest);
    src.clear(Rgba8::new(255, 255, 255, 128));
    let mut dst = Pixmap::new(4, 4, PixelFormat::Rgb888).unwrap();
    dst.draw_pixmap(&src, 0, 0, 2, 2, 0, 0, 4, 4);
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            assert_eq!(dst.get_pixel(x, y).unwrap(), Rgba8::gray(128));
        }
    }
}

#[test]
fn t05_clipping() {
    let src = pattern(3, 3, PixelFormat::Rgba8888);

    // Destination hanging off the top left corner
    let mut dst = dest(3, 3, PixelFormat::Rgba8888, ScaleMode::Nearest);
    dst.draw_pixmap(&src, 0, 0, 3, 3, -1, -1, 3, 3);
    assert_eq!(dst.get_pixel(0, 0).unwrap(), src.get_pixel(1, 1).unwrap());
    assert_eq!(dst.get_pixel(1, 1).unwrap(), src.get_pixel(2, 2).unwrap());
    assert_eq!(dst.get_pixel(2, 2).unwrap(), Rgba8::transparent());

    // Source rectangle partly outside the source
    let mut dst = dest(4, 1, PixelFormat::Rgba8888, ScaleMode::Nearest);
    dst.draw_pixmap(&src, -2, 0, 4, 1, 0, 0, 4, 1);
    assert_eq!(dst.get_pixel(0, 0).unwrap(), Rgba8::transparent());
    assert_eq!(dst.get_pixel(1, 0).unwrap(), Rgba8::transparent());
    assert_eq!(dst.get_pixel(2, 0).unwrap(), src.get_pixel(0, 0).unwrap());
    assert_eq!(dst.get_pixel(3, 0).unwrap(), src.get_pixel(1, 0).unwrap());

    // Scaled, the mapping stays that of the unclipped rectangles
    let mut dst = dest(8, 1, PixelFormat::Rgba8888, ScaleMode::Nearest);
    dst.draw_pixmap(&src, -2, 0, 4, 1, 0, 0, 8, 1);
    for x in 0 .. 4 {
        assert_eq!(dst.get_pixel(x, 0).unwrap(), Rgba8::transparent());
    }
    assert_eq!(dst.get_pixel(4, 0).unwrap(), src.get_pixel(0, 0).unwrap());
    assert_eq!(dst.get_pixel(5, 0).unwrap(), src.get_pixel(0, 0).unwrap());
    assert_eq!(dst.get_pixel(6, 0).unwrap(), src.get_pixel(1, 0).unwrap());
    assert_eq!(dst.get_pixel(7, 0).unwrap(), src.get_pixel(1, 0).unwrap());
}

#[test]
fn t05_empty_rectangles() {
    let src = pattern(3, 3, PixelFormat::Rgba8888);
    let mut dst = dest(3, 3, PixelFormat::Rgba8888, ScaleMode::Bilinear);
    dst.draw_pixmap(&src, 0, 0, 0, 3, 0, 0, 3, 3);
    dst.draw_pixmap(&src, 0, 0, 3, 3, 0, 0, 3, -1);
    dst.draw_pixmap(&src, 5, 5, 3, 3, 0, 0, 3, 3);
    dst.draw_pixmap(&src, 0, 0, 3, 3, -10, 0, 6, 3);
    dst.draw_pixmap(&src, 0, 0, 3, 3, 0, 9, 3, 3);
    assert!(dst.as_bytes().iter().all(|&v| v == 0));
}
