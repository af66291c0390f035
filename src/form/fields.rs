use crate::profile::{ProfileRole, UserRecord};

pub const NAME_FIELD: &str = "name";
pub const ADDRESS_FIELD: &str = "address";
pub const ABOUT_ME_FIELD: &str = "aboutMe";
pub const CHEF_PROFILE_FIELD: &str = "chefProfile";

pub const NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLengthRule {
    pub limit: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationRules {
    pub required: Option<String>,
    pub max_length: Option<MaxLengthRule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub default_value: String,
    pub rules: ValidationRules,
    pub multiline: bool,
    pub rows: u16,
}

impl FieldDescriptor {
    fn single_line(name: &str, label: &str, default_value: &str, rules: ValidationRules) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            default_value: default_value.to_string(),
            rules,
            multiline: false,
            rows: 1,
        }
    }

    fn long_text(name: &str, label: &str, default_value: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            default_value: default_value.to_string(),
            rules: ValidationRules::default(),
            multiline: true,
            rows: 5,
        }
    }
}

/// The role-conditional long-text slot, resolved once per edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleField {
    AboutMe,
    ChefProfile,
}

impl RoleField {
    pub fn for_role(role: ProfileRole) -> Self {
        match role {
            ProfileRole::Chef => RoleField::ChefProfile,
            ProfileRole::Member => RoleField::AboutMe,
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            RoleField::AboutMe => ABOUT_ME_FIELD,
            RoleField::ChefProfile => CHEF_PROFILE_FIELD,
        }
    }

    fn descriptor(self, record: &UserRecord) -> FieldDescriptor {
        match self {
            RoleField::AboutMe => {
                FieldDescriptor::long_text(ABOUT_ME_FIELD, "About Me", &record.about_me)
            }
            RoleField::ChefProfile => {
                FieldDescriptor::long_text(CHEF_PROFILE_FIELD, "Chef Profile", &record.chef_profile)
            }
        }
    }
}

/// Ordered text-field descriptors for the edit surface. The role-conditional
/// field always sits between `name` and `address`.
pub fn profile_fields(record: &UserRecord) -> Vec<FieldDescriptor> {
    let mut fields = vec![
        FieldDescriptor::single_line(
            NAME_FIELD,
            "Full Name",
            &record.name,
            ValidationRules {
                required: Some("Name is required.".to_string()),
                max_length: Some(MaxLengthRule {
                    limit: NAME_MAX_LENGTH,
                    message: format!("Too many characters (max: {NAME_MAX_LENGTH})."),
                }),
            },
        ),
        FieldDescriptor::single_line(
            ADDRESS_FIELD,
            "Address",
            &record.address,
            ValidationRules {
                required: Some("Address is required.".to_string()),
                max_length: None,
            },
        ),
    ];
    fields.insert(1, RoleField::for_role(record.role()).descriptor(record));
    fields
}
