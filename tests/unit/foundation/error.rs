use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WaveprintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WaveprintError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        WaveprintError::output("x")
            .to_string()
            .contains("output error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WaveprintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
