use super::*;

const ALL: [LiftMode; 10] = [
    LiftMode::Centre,
    LiftMode::Top,
    LiftMode::Bottom,
    LiftMode::Left,
    LiftMode::Right,
    LiftMode::TopLeft,
    LiftMode::TopRight,
    LiftMode::BottomLeft,
    LiftMode::BottomRight,
    LiftMode::Edges,
];

#[test]
fn centre_weight_is_one_and_non_increasing() {
    let shape = LiftShape::from_mode(LiftMode::Centre);
    assert_eq!(shape.weight(0.5, 0.5, 1.5, 1.0), 1.0);

    let mut prev = f32::INFINITY;
    for i in 0..=50 {
        let r = i as f32 / 50.0 * 0.75;
        let w = shape.weight(0.5 + r, 0.5, 1.5, 1.0);
        assert!(w <= prev, "r={r} w={w} prev={prev}");
        prev = w;
    }
    assert!(shape.weight(0.0, 0.0, 1.5, 1.0) < 1e-6);
}

#[test]
fn every_point_mode_peaks_at_its_anchor() {
    for mode in ALL {
        let Some([ax, ay]) = mode.anchor() else {
            assert_eq!(mode, LiftMode::Edges);
            continue;
        };
        assert_eq!(hotspot_weight(ax, ay, [ax, ay], 2.0, 1.0), 1.0, "{mode:?}");
    }
}

#[test]
fn anchors_match_compass_names() {
    assert_eq!(LiftMode::Top.anchor(), Some([0.5, 0.0]));
    assert_eq!(LiftMode::BottomRight.anchor(), Some([1.0, 1.0]));
    assert_eq!(LiftMode::Left.anchor(), Some([0.0, 0.5]));
    assert_eq!(LiftMode::Edges.anchor(), None);
}

#[test]
fn distance_scale_widens_reach() {
    let near = hotspot_weight(0.9, 0.5, [0.5, 0.5], 1.0, 0.5);
    let far = hotspot_weight(0.9, 0.5, [0.5, 0.5], 1.0, 2.0);
    assert!(far > near);
}

#[test]
fn edges_peak_on_border_and_vanish_at_center() {
    assert_eq!(edge_weight(0.0, 0.4, 1.0, 1.0), 1.0);
    assert_eq!(edge_weight(0.7, 1.0, 1.0, 1.0), 1.0);
    assert_eq!(edge_weight(0.5, 0.5, 1.0, 1.0), 0.0);
    let quarter = edge_weight(0.25, 0.5, 1.0, 1.0);
    assert!((quarter - 0.5).abs() < 1e-6);
}

#[test]
fn lift_brightens_and_saturates() {
    let c = Rgb::new(0.5, 0.8, 0.1);
    let lifted = apply_lift(c, 0.5, 1.0);
    assert!((lifted.r - 0.75).abs() < 1e-6);
    assert_eq!(lifted.g, 1.0);
    assert!((lifted.b - 0.15).abs() < 1e-6);
    assert_eq!(apply_lift(c, 0.5, 0.0), c);
}
