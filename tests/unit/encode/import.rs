use super::*;

#[test]
fn sidecar_path_replaces_extension() {
    assert_eq!(
        sidecar_path(Path::new("out/epic.png")),
        PathBuf::from("out/epic.import.json")
    );
}

#[test]
fn settings_parse_with_defaults() {
    let s: ImportSettings =
        serde_json::from_str(r#"{ "wrap_mode": "repeat", "generate_mipmaps": true }"#).unwrap();
    assert_eq!(s.wrap_mode, WrapMode::Repeat);
    assert!(s.generate_mipmaps);
    assert_eq!(s.filter_mode, FilterMode::Bilinear);
    assert_eq!(s.pixels_per_unit, 100.0);
}

#[test]
fn sidecar_carries_settings_verbatim() {
    let dir = PathBuf::from("target").join("unit_encode_import");
    let _ = std::fs::remove_dir_all(&dir);
    let settings = ImportSettings {
        pixels_per_unit: 64.0,
        generate_mipmaps: true,
        wrap_mode: WrapMode::Repeat,
        filter_mode: FilterMode::Point,
    };

    let out = write_sidecar(&settings, &dir.join("rare.png"), 128).unwrap();
    assert_eq!(out, dir.join("rare.import.json"));

    let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
    assert_eq!(v["image"], "rare.png");
    assert_eq!(v["size"], 128);
    assert_eq!(v["pixels_per_unit"], 64.0);
    assert_eq!(v["generate_mipmaps"], true);
    assert_eq!(v["wrap_mode"], "repeat");
    assert_eq!(v["filter_mode"], "point");
}

#[test]
fn sidecar_requires_an_image_file_name() {
    for bad in ["target/unit_encode_import_bad/..", "/", ""] {
        let err = write_sidecar(&ImportSettings::default(), Path::new(bad), 16).unwrap_err();
        assert!(matches!(err, PlateError::Validation(_)), "{bad:?}");
    }
}
