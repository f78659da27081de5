use std::path::PathBuf;

use pixmap::*;

fn tmp(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixmap_t06_{}_{}", std::process::id(), name))
}

#[test]
fn t06_new() {
    for &f in PixelFormat::ALL.iter() {
        let p = Pixmap::new(4, 4, f).unwrap();
        assert_eq!((p.width(), p.height(), p.format()), (4, 4, f));
        assert_eq!(p.as_bytes().len(), 16 * f.bpp());
    }
    let mut p = Pixmap::new(4, 4, PixelFormat::Rgba8888).unwrap();
    p.fill_rect(0, 0, 4, 4, Rgba8::unpack(0xFF0000FF));
    assert_eq!(p.get_pixel(2, 2).unwrap(), Rgba8::new(255, 0, 0, 255));

    let mut p = Pixmap::new(1, 1, PixelFormat::Alpha).unwrap();
    p.draw_pixel(0, 0, PixelFormat::Alpha.decode_value(0x80));
    assert_eq!(p.get_pixel(0, 0).unwrap(), Rgba8::new(255, 255, 255, 128));
}

#[test]
fn t06_invalid_dimensions() {
    for &(w, h) in [(0, 5), (5, 0), (0, 0)].iter() {
        match Pixmap::new(w, h, PixelFormat::Rgba8888) {
            Err(e @ Error::InvalidDimensions { .. }) => {
                assert!(!e.to_string().is_empty());
            }
            other => panic!("{}x{}: {:?}", w, h, other),
        }
    }
}

#[test]
fn t06_oversized_dimensions() {
    let max = u32::max_value();
    for &f in [PixelFormat::Alpha, PixelFormat::Rgba8888].iter() {
        match Pixmap::new(max, max, f) {
            Err(Error::InvalidDimensions { width, height }) => {
                assert_eq!((width, height), (max, max));
            }
            other => panic!("{:?}: {:?}", f, other.map(|p| p.width())),
        }
    }
    let p = Pixmap::new(2, 2, PixelFormat::Rgb888).unwrap();
    assert!(p.crop(0, 0, max, max).is_err());
}

#[test_log::test]
fn t06_png_round_trip() {
    let mut p = Pixmap::new(5, 3, PixelFormat::Rgba8888).unwrap();
    p.set_blend(BlendMode::None);
    p.clear(Rgba8::new(10, 20, 30, 255));
    p.draw_line(0, 0, 4, 2, Rgba8::new(200, 0, 0, 128));
    p.set_pixel(4, 0, Rgba8::transparent()).unwrap();

    let path = tmp("rgba.png");
    p.to_file(&path).unwrap();
    let q = Pixmap::from_file(&path).unwrap();
    assert_eq!(q.format(), PixelFormat::Rgba8888);
    assert_eq!(q.as_bytes(), p.as_bytes());

    let bytes = std::fs::read(&path).unwrap();
    let r = Pixmap::load(&bytes).unwrap();
    assert_eq!(r.as_bytes(), p.as_bytes());
    assert!(img_diff(&path, &path).unwrap());

    // Other formats are saved by their canonical colors, without alpha
    // when the format has none
    let path2 = tmp("rgb565.png");
    let c = p.convert(PixelFormat::Rgb565).unwrap();
    c.to_file(&path2).unwrap();
    let back = Pixmap::from_file(&path2).unwrap();
    assert_eq!(back.format(), PixelFormat::Rgb888);
    assert_eq!(back.to_rgba_vec(), c.to_rgba_vec());
    assert!(!img_diff(&path, &path2).unwrap());

    std::fs::remove_file(&path).unwrap();
    std::fs::remove_file(&path2).unwrap();
}

#[test]
fn t06_decoder_picks_format() {
    let gray = tmp("gray.png");
    image::save_buffer(&gray, &[0, 64, 128, 255], 2, 2, image::ColorType::Gray(8)).unwrap();
    let p = Pixmap::from_file(&gray).unwrap();
    assert_eq!(p.format(), PixelFormat::LuminanceAlpha);
    assert_eq!(p.get_pixel(1, 0).unwrap(), Rgba8::new(64, 64, 64, 255));
    assert_eq!(p.get_pixel(1, 1).unwrap(), Rgba8::white());

    let rgb = tmp("rgb.png");
    image::save_buffer(&rgb, &[1, 2, 3, 4, 5, 6], 2, 1, image::ColorType::RGB(8)).unwrap();
    let p = Pixmap::from_file(&rgb).unwrap();
    assert_eq!(p.format(), PixelFormat::Rgb888);
    assert_eq!(p.as_bytes(), &[1, 2, 3, 4, 5, 6]);

    std::fs::remove_file(&gray).unwrap();
    std::fs::remove_file(&rgb).unwrap();
}

#[test]
fn t06_decode_failure() {
    for bytes in [&b""[..], &b"not an image"[..], &[0x89, b'P', b'N', b'G'][..]].iter() {
        match Pixmap::load(bytes) {
            Err(e @ Error::Decode(_)) => assert!(!e.to_string().is_empty()),
            other => panic!("{:?}", other),
        }
    }
    match Pixmap::from_file(tmp("missing.png")) {
        Err(Error::Io(_)) => {}
        other => panic!("{:?}", other),
    }
}

/// Decoder reading a raw `w h format` header followed by pixel data
struct RawDecoder;

impl Decode for RawDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Pixmap, Error> {
        if bytes.len() < 3 {
            return Err(Error::Decode("short header".to_string()));
        }
        let format = PixelFormat::from_id(u32::from(bytes[2]))?;
        Pixmap::from_vec(bytes[3..].to_vec(), u32::from(bytes[0]), u32::from(bytes[1]), format)
    }
}

#[test]
fn t06_custom_decoder() {
    let p = Pixmap::load_with(&RawDecoder, &[2, 1, 3, 1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(p.format(), PixelFormat::Rgb888);
    assert_eq!(p.get_pixel(1, 0).unwrap(), Rgba8::new(4, 5, 6, 255));

    match Pixmap::load_with(&RawDecoder, &[1, 1, 9, 0]) {
        Err(Error::InvalidFormat(9)) => {}
        other => panic!("{:?}", other),
    }
    match Pixmap::load_with(&RawDecoder, &[0, 1, 1]) {
        Err(Error::InvalidDimensions { .. }) => {}
        other => panic!("{:?}", other),
    }
}

#[test]
fn t06_failure_reason() {
    record_failure(&Error::InvalidFormat(42));
    let msg = last_failure().unwrap();
    assert!(msg.contains("42"), "{}", msg);
}
