use super::*;

#[test]
fn log_filter_defaults_to_info_when_unset() {
    assert_eq!(log_filter(None).to_string(), "info");
}

#[test]
fn log_filter_defaults_to_info_when_blank() {
    assert_eq!(log_filter(Some("   ")).to_string(), "info");
}

#[test]
fn log_filter_uses_rust_log_directives() {
    let filter = log_filter(Some("recipe_notes=debug")).to_string();
    assert!(filter.contains("recipe_notes=debug"), "{filter}");
}
