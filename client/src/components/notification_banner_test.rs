use super::*;

fn render(note: Option<Notification>) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let notification = RwSignal::new(note);
        view! { <NotificationBanner notification=notification/> }.to_html()
    })
}

#[test]
fn error_banner_renders_message_with_alert_role() {
    let html = render(Some(Notification::error("Invalid email address.")));
    assert!(html.contains("notification--error"), "{html}");
    assert!(html.contains("role=\"alert\""), "{html}");
    assert!(html.contains("Invalid email address."), "{html}");
}

#[test]
fn success_banner_renders_status_role() {
    let html = render(Some(Notification::success("User registered")));
    assert!(html.contains("notification--success"), "{html}");
    assert!(html.contains("role=\"status\""), "{html}");
    assert!(html.contains("User registered"), "{html}");
}

#[test]
fn empty_banner_renders_no_markup() {
    let html = render(None);
    assert!(!html.contains("notification"), "{html}");
}
