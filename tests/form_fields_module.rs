use platemate::form::profile_fields;
use platemate::profile::UserRecord;

fn member_record() -> UserRecord {
    UserRecord {
        name: "Ada Lovelace".to_string(),
        address: "1 Main St".to_string(),
        about_me: "I enjoy good food.".to_string(),
        chef_profile: "unused".to_string(),
        ..UserRecord::default()
    }
}

#[test]
fn member_fields_keep_about_me_between_name_and_address() {
    let fields = profile_fields(&member_record());
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["name", "aboutMe", "address"]);
}

#[test]
fn chef_fields_swap_in_the_chef_profile_slot() {
    let record = UserRecord {
        is_chef: true,
        ..member_record()
    };
    let fields = profile_fields(&record);
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["name", "chefProfile", "address"]);
    assert_eq!(fields[1].label, "Chef Profile");
    assert_eq!(fields[1].default_value, "unused");
}

#[test]
fn defaults_seed_from_the_user_snapshot() {
    let fields = profile_fields(&member_record());
    assert_eq!(fields[0].default_value, "Ada Lovelace");
    assert_eq!(fields[1].default_value, "I enjoy good food.");
    assert_eq!(fields[2].default_value, "1 Main St");
}

#[test]
fn name_rules_carry_the_exact_messages() {
    let fields = profile_fields(&member_record());
    let name = &fields[0];
    assert_eq!(name.rules.required.as_deref(), Some("Name is required."));
    let max = name.rules.max_length.as_ref().expect("max length rule");
    assert_eq!(max.limit, 50);
    assert_eq!(max.message, "Too many characters (max: 50).");
}

#[test]
fn long_text_slot_is_multiline_without_rules() {
    let fields = profile_fields(&member_record());
    let about = &fields[1];
    assert!(about.multiline);
    assert_eq!(about.rows, 5);
    assert!(about.rules.required.is_none());
    assert!(about.rules.max_length.is_none());
}

#[test]
fn address_is_required_only() {
    let fields = profile_fields(&member_record());
    let address = &fields[2];
    assert_eq!(
        address.rules.required.as_deref(),
        Some("Address is required.")
    );
    assert!(address.rules.max_length.is_none());
}
