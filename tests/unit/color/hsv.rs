use super::*;

fn hue_deg(deg: f32) -> Rgb {
    hsv_to_rgb(Hsv {
        h: deg / 360.0,
        s: 1.0,
        v: 1.0,
    })
}

#[test]
fn primaries_have_expected_hues() {
    assert!(rgb_to_hsv(Rgb::new(1.0, 0.0, 0.0)).h.abs() < 1e-6);
    assert!((rgb_to_hsv(Rgb::new(0.0, 1.0, 0.0)).h - 1.0 / 3.0).abs() < 1e-6);
    assert!((rgb_to_hsv(Rgb::new(0.0, 0.0, 1.0)).h - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn hsv_roundtrip_on_grid() {
    for r in 0..=4 {
        for g in 0..=4 {
            for b in 0..=4 {
                let c = Rgb::new(r as f32 / 4.0, g as f32 / 4.0, b as f32 / 4.0);
                let back = hsv_to_rgb(rgb_to_hsv(c));
                assert!(back.max_abs_diff(c) < 1e-5, "{c:?} -> {back:?}");
            }
        }
    }
}

#[test]
fn hue_wraps_along_short_arc() {
    let mid = lerp_hsv(hue_deg(350.0), hue_deg(10.0), 0.5);
    let h = rgb_to_hsv(mid).h * 360.0;
    let dist_from_zero = h.min(360.0 - h);
    assert!(dist_from_zero < 1.0, "hue {h}");
    // Pure red, nowhere near cyan.
    assert!(mid.max_abs_diff(Rgb::new(1.0, 0.0, 0.0)) < 1e-3);
}

#[test]
fn endpoints_are_preserved() {
    let a = Rgb::new(0.8, 0.3, 0.1);
    let b = Rgb::new(0.1, 0.4, 0.9);
    assert!(lerp_hsv(a, b, 0.0).max_abs_diff(a) < 1e-5);
    assert!(lerp_hsv(a, b, 1.0).max_abs_diff(b) < 1e-5);
}

#[test]
fn gray_endpoint_borrows_hue() {
    let gray = Rgb::gray(0.5);
    let blue = Rgb::new(0.0, 0.0, 1.0);
    let mid = lerp_hsv(gray, blue, 0.5);
    let h = rgb_to_hsv(mid);
    assert!((h.h - 2.0 / 3.0).abs() < 1e-4, "{h:?}");
}
