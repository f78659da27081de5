use pixmap::*;

fn alpha_grid(p: &Pixmap) -> Vec<Vec<u8>> {
    (0 .. p.height() as i32)
        .map(|y| (0 .. p.width() as i32).map(|x| p.get_pixel(x, y).unwrap().a).collect())
        .collect()
}

#[test_log::test]
fn t04_shared_edge_covered_once() {
    // Half transparent white over a transparent canvas: one draw gives
    // alpha 128, two draws would give 192
    let c = Rgba8::new(255, 255, 255, 128);
    let mut p = Pixmap::new(8, 8, PixelFormat::Rgba8888).unwrap();
    p.fill_triangle(0, 0, 4, 0, 0, 4, c);
    p.fill_triangle(4, 4, 0, 4, 4, 0, c);
    let grid = alpha_grid(&p);
    for y in 0 .. 8 {
        for x in 0 .. 8 {
            let expect = if x < 4 && y < 4 { 128 } else { 0 };
            assert_eq!(grid[y][x], expect, "pixel ({},{})", x, y);
        }
    }
}

#[test]
fn t04_quad_split_either_way() {
    let c = Rgba8::new(255, 255, 255, 128);
    for &(ax, ay, bx, by, cx, cy, dx, dy) in [
        (1, 1, 7, 2, 6, 7, 2, 6),
        (0, 0, 8, 0, 8, 8, 0, 8),
        (3, 0, 8, 4, 4, 8, 0, 3),
    ].iter() {
        let mut p1 = Pixmap::new(8, 8, PixelFormat::Rgba8888).unwrap();
        p1.fill_triangle(ax, ay, bx, by, cx, cy, c);
        p1.fill_triangle(ax, ay, cx, cy, dx, dy, c);
        let mut p2 = Pixmap::new(8, 8, PixelFormat::Rgba8888).unwrap();
        p2.fill_triangle(ax, ay, bx, by, dx, dy, c);
        p2.fill_triangle(bx, by, cx, cy, dx, dy, c);
        let (g1, g2) = (alpha_grid(&p1), alpha_grid(&p2));
        for row in g1.iter().chain(g2.iter()) {
            assert!(row.iter().all(|&a| a == 0 || a == 128), "{:?}", row);
        }
        assert_eq!(g1, g2);
    }
}

#[test]
fn t04_full_canvas() {
    let mut p = Pixmap::with_modes(8, 8, PixelFormat::Alpha, BlendMode::None, ScaleMode::Nearest).unwrap();
    p.fill_triangle(0, 0, 8, 0, 0, 8, Rgba8::white());
    p.fill_triangle(8, 8, 8, 0, 0, 8, Rgba8::white());
    assert!(p.as_bytes().iter().all(|&v| v == 255));
}

#[test]
fn t04_clipped_and_degenerate() {
    let mut p = Pixmap::with_modes(8, 8, PixelFormat::Alpha, BlendMode::None, ScaleMode::Nearest).unwrap();
    p.fill_triangle(-100, -100, 300, -100, -100, 300, Rgba8::white());
    assert!(p.as_bytes().iter().all(|&v| v == 255));

    let mut p = Pixmap::new(8, 8, PixelFormat::Alpha).unwrap();
    p.fill_triangle(1, 1, 1, 1, 1, 1, Rgba8::white());
    p.fill_triangle(0, 0, 7, 0, 3, 0, Rgba8::white());
    p.fill_triangle(20, 20, 30, 20, 20, 30, Rgba8::white());
    assert!(p.as_bytes().iter().all(|&v| v == 0));
}
