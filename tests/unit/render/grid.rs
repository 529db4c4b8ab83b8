use super::*;

fn checker(size: u32) -> PixelGrid {
    let pixels = (0..size * size)
        .map(|i| {
            if i % 2 == 0 {
                Rgba {
                    r: 1.0,
                    g: 0.5,
                    b: 0.0,
                    a: 0.5,
                }
            } else {
                Rgba::TRANSPARENT
            }
        })
        .collect();
    PixelGrid::from_pixels(size, pixels)
}

#[test]
fn get_is_row_major_and_bounded() {
    let g = checker(3);
    assert_eq!(g.get(0, 0).map(|p| p.a), Some(0.5));
    assert_eq!(g.get(1, 0), Some(Rgba::TRANSPARENT));
    assert_eq!(g.get(0, 1), Some(Rgba::TRANSPARENT));
    assert_eq!(g.get(3, 0), None);
    assert_eq!(g.get(0, 3), None);
}

#[test]
fn rgba8_conversions() {
    let g = checker(2);
    let straight = g.to_rgba8();
    let premul = g.to_rgba8_premul();
    assert_eq!(straight.len(), 16);
    assert_eq!(&straight[..4], &[255, 128, 0, 128]);
    assert_eq!(&premul[..4], &[128, 64, 0, 128]);
    assert_eq!(&straight[4..8], &[0, 0, 0, 0]);
}

#[test]
fn digest_depends_on_content_and_size() {
    let a = checker(4);
    let b = checker(4);
    assert_eq!(a.digest(), b.digest());

    let mut pixels = a.clone().into_pixels();
    pixels[5].r = 0.25;
    let c = PixelGrid::from_pixels(4, pixels);
    assert_ne!(a.digest(), c.digest());

    assert_ne!(checker(4).digest(), checker(2).digest());
}
