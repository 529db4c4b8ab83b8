use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PlateError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PlateError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(PlateError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PlateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
