use super::*;

fn configured() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[test]
fn unset_port_keeps_configured_address() {
    let addr = resolve_site_addr(configured(), |_| None).unwrap();
    assert_eq!(addr, configured());
}

#[test]
fn blank_port_keeps_configured_address() {
    let addr = resolve_site_addr(configured(), |_| Some("  ".to_owned())).unwrap();
    assert_eq!(addr, configured());
}

#[test]
fn port_override_binds_all_interfaces() {
    let addr = resolve_site_addr(configured(), |key| (key == "PORT").then(|| "8080".to_owned())).unwrap();
    assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
}

#[test]
fn invalid_port_is_rejected() {
    let err = resolve_site_addr(configured(), |_| Some("eighty".to_owned())).unwrap_err();
    assert!(matches!(err, ConfigError::Port { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(resolve_site_addr(configured(), |_| Some("70000".to_owned())).is_err());
}

#[test]
fn leptos_options_are_declared_for_cargo_leptos() {
    let manifest = include_str!("../Cargo.toml");
    assert!(manifest.contains("[[workspace.metadata.leptos]]"));
    assert!(manifest.contains("output-name = \"recipe-notes\""));
    assert!(manifest.contains("lib-package = \"client\""));
}
