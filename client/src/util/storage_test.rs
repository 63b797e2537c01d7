use super::*;

#[test]
fn normalize_user_id_keeps_real_ids() {
    assert_eq!(normalize_user_id(Some("64f1c0ffee".to_owned())), Some("64f1c0ffee".to_owned()));
}

#[test]
fn normalize_user_id_trims_whitespace() {
    assert_eq!(normalize_user_id(Some("  u1 \n".to_owned())), Some("u1".to_owned()));
}

#[test]
fn normalize_user_id_drops_blank_values() {
    assert_eq!(normalize_user_id(None), None);
    assert_eq!(normalize_user_id(Some(String::new())), None);
    assert_eq!(normalize_user_id(Some("   ".to_owned())), None);
}

#[test]
fn write_failed_message_names_key_and_cause() {
    let message = write_failed_message(USER_ID_KEY, "QuotaExceededError");
    assert!(message.contains("\"userID\""));
    assert!(message.contains("QuotaExceededError"));
    assert!(message.contains("will not survive reload"));
}
