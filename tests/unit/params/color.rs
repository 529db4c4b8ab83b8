use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgb(1.0, 0.0, 0.0));

    let c: ColorDef = serde_json::from_value(json!("00FF80")).unwrap();
    assert_eq!(c.g, 1.0);
    assert!((c.b - 128.0 / 255.0).abs() < 1e-6);
}

#[test]
fn parses_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgb(0.25, 0.5, 0.75));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75])).unwrap();
    assert_eq!(c, ColorDef::rgb(0.25, 0.5, 0.75));
}

#[test]
fn rejects_bad_inputs() {
    assert!(serde_json::from_value::<ColorDef>(json!("#ff00")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#gg0000")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}

#[test]
fn serializes_as_array() {
    let v = serde_json::to_value(ColorDef::rgb(0.5, 0.25, 1.0)).unwrap();
    assert_eq!(v, json!([0.5, 0.25, 1.0]));
}

#[test]
fn to_rgb_clamps_out_of_range() {
    let c = ColorDef::rgb(1.5, -0.5, f32::NAN).to_rgb();
    assert_eq!(c, Rgb::new(1.0, 0.0, 0.0));
}
