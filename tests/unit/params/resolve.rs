use super::*;
use crate::color::ColorSpace;
use crate::fill::gradient::GradientDirection;
use crate::fill::lift::LiftMode;
use crate::params::color::ColorDef;

#[test]
fn amounts_are_clamped_into_documented_ranges() {
    let mut p = PlateParams::default();
    p.size = 5;
    p.mute = 3.0;
    p.lift.amount = 9.0;
    p.lift.falloff = -1.0;
    p.vignette = -0.5;
    p.outline.darken = 2.0;
    p.outline.strength = 100.0;
    p.shape.edge_aa = 0.0;
    p.shape.corner_radius = -4.0;
    p.shape.outline_thickness = 1000.0;

    let r = normalize(&p);
    assert_eq!(r.size, MIN_SIZE);
    assert_eq!(r.mute, 0.9);
    assert_eq!(r.lift.amount, 0.6);
    assert_eq!(r.lift.falloff, 0.05);
    assert_eq!(r.vignette, 0.0);
    assert_eq!(r.outline, OutlineStrategy::Derived { darken: 1.0 });
    assert_eq!(r.outline_strength, 4.0);
    assert_eq!(r.geometry.aa, 0.5);
    assert_eq!(r.geometry.corner_radius, 0.0);
    assert_eq!(r.geometry.outline, 8.0);
}

#[test]
fn size_upper_bound() {
    let p = PlateParams {
        size: 100_000,
        ..PlateParams::default()
    };
    assert_eq!(normalize(&p).size, MAX_SIZE);
}

#[test]
fn non_finite_values_use_fallbacks() {
    let mut p = PlateParams::default();
    p.mute = f32::NAN;
    p.lift.distance_scale = f32::INFINITY;
    p.fill.gradient.radial_power = f32::NAN;
    p.fill.mode = FillMode::Gradient;
    let r = normalize(&p);
    assert_eq!(r.mute, PlateParams::default().mute);
    assert_eq!(r.lift.distance_scale, 1.0);
    match r.fill {
        FillStrategy::Gradient { radial_power, .. } => assert_eq!(radial_power, 1.0),
        FillStrategy::Flat(_) => panic!("expected gradient fill"),
    }
}

#[test]
fn full_bleed_uses_inner_geometry() {
    let mut p = PlateParams::default();
    p.shape.mode = ShapeMode::FullBleedInnerOutline;
    p.shape.corner_radius = 30.0;
    p.shape.inner_corner_radius = 12.0;
    p.shape.inner_aa = 2.0;
    p.shape.inner_inset = 5.0;
    let r = normalize(&p);
    assert_eq!(r.geometry.corner_radius, 12.0);
    assert_eq!(r.geometry.aa, 2.0);
    assert_eq!(r.geometry.inset, 5.0);
    assert_eq!(r.shape_mode, ShapeMode::FullBleedInnerOutline);
}

#[test]
fn gradient_strategy_hits_both_colors() {
    let mut p = PlateParams::default();
    p.fill.mode = FillMode::Gradient;
    p.fill.gradient.from = ColorDef::rgb(1.0, 0.0, 0.0);
    p.fill.gradient.to = ColorDef::rgb(0.0, 0.0, 1.0);
    p.fill.gradient.space = ColorSpace::Rgb;
    p.fill.gradient.direction = GradientDirection::LeftToRight;
    let r = normalize(&p);
    assert_eq!(r.fill.color_at(0.0, 0.5), Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(r.fill.color_at(1.0, 0.5), Rgb::new(0.0, 0.0, 1.0));
}

#[test]
fn zero_lift_amount_has_zero_weight() {
    let mut p = PlateParams::default();
    p.lift.amount = 0.0;
    p.lift.mode = LiftMode::Edges;
    let r = normalize(&p);
    assert_eq!(r.lift.weight(0.0, 0.0), 0.0);
}

#[test]
fn outline_modes_resolve_their_colors() {
    let mut p = PlateParams::default();
    p.outline.color_mode = OutlineColourMode::ForcedColor;
    p.outline.forced_color = ColorDef::rgb(0.2, 0.3, 0.4);
    assert_eq!(
        normalize(&p).outline,
        OutlineStrategy::Forced(Rgb::new(0.2, 0.3, 0.4))
    );

    p.outline.color_mode = OutlineColourMode::CustomColor;
    p.outline.custom_color = ColorDef::rgb(2.0, 0.5, -1.0);
    assert_eq!(
        normalize(&p).outline,
        OutlineStrategy::Custom(Rgb::new(1.0, 0.5, 0.0))
    );
}

#[test]
fn non_finite_values_take_the_field_default() {
    let d = PlateParams::default();
    let mut p = PlateParams::default();
    p.mute = f32::NAN;
    p.lift.amount = f32::NAN;
    p.lift.falloff = f32::NAN;
    p.outline.darken = f32::INFINITY;
    p.outline.strength = f32::NEG_INFINITY;
    p.shape.corner_radius = f32::NAN;
    p.shape.outline_thickness = f32::NAN;
    p.shape.edge_aa = f32::NAN;

    let r = normalize(&p);
    assert_eq!(r.mute, d.mute);
    assert_eq!(r.lift.amount, d.lift.amount);
    assert_eq!(r.lift.falloff, d.lift.falloff);
    assert_eq!(
        r.outline,
        OutlineStrategy::Derived {
            darken: d.outline.darken
        }
    );
    assert_eq!(r.outline_strength, d.outline.strength);
    assert_eq!(r.geometry.corner_radius, d.shape.corner_radius);
    assert_eq!(r.geometry.outline, d.shape.outline_thickness);
    assert_eq!(r.geometry.aa, d.shape.edge_aa);

    p.shape.mode = ShapeMode::FullBleedInnerOutline;
    p.shape.inner_corner_radius = f32::NAN;
    p.shape.inner_inset = f32::INFINITY;
    let r = normalize(&p);
    assert_eq!(r.geometry.corner_radius, d.shape.inner_corner_radius);
    assert_eq!(r.geometry.inset, d.shape.inner_inset);
}

#[test]
fn non_finite_fallback_still_respects_the_range() {
    let mut p = PlateParams {
        size: 16,
        ..PlateParams::default()
    };
    p.shape.corner_radius = f32::NAN;
    let r = normalize(&p);
    assert_eq!(r.geometry.corner_radius, 8.0);
}
