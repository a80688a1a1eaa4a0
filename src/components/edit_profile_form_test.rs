use super::*;

#[test]
fn blank_inputs_become_null_columns() {
    assert_eq!(blank_to_none(""), None);
    assert_eq!(blank_to_none("   "), None);
    assert_eq!(blank_to_none("\t\n"), None);
}

#[test]
fn real_inputs_are_trimmed_and_kept() {
    assert_eq!(blank_to_none("  Kai  "), Some("Kai".to_owned()));
    assert_eq!(blank_to_none("kai"), Some("kai".to_owned()));
}

#[test]
fn details_map_to_fields_in_display_order() {
    let details = ProfileDetails {
        name: Some("Kai".to_owned()),
        username: Some("kai".to_owned()),
        email: Some("kai@example.com".to_owned()),
        about_me: None,
    };
    assert_eq!(
        fields_from_details(&details),
        (
            "kai@example.com".to_owned(),
            "kai".to_owned(),
            "Kai".to_owned(),
            String::new()
        )
    );
}

#[test]
fn a_missing_row_yields_all_empty_fields() {
    let (email, username, name, about) = fields_from_details(&ProfileDetails::default());
    assert!(email.is_empty() && username.is_empty() && name.is_empty() && about.is_empty());
}
