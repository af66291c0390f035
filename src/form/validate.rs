use crate::form::fields::FieldDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    RequiredFieldMissing,
    FieldTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.field == field)
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(|violation| violation.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Evaluates every rule of every field so a single failed submit reports the
/// complete set of violations, not just the first.
pub fn validate_fields(
    fields: &[FieldDescriptor],
    value_of: impl Fn(&str) -> String,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in fields {
        let value = value_of(&field.name);
        if let Some(message) = &field.rules.required {
            if value.trim().is_empty() {
                errors.push(Violation {
                    field: field.name.clone(),
                    kind: ViolationKind::RequiredFieldMissing,
                    message: message.clone(),
                });
            }
        }
        if let Some(rule) = &field.rules.max_length {
            if value.chars().count() > rule.limit {
                errors.push(Violation {
                    field: field.name.clone(),
                    kind: ViolationKind::FieldTooLong,
                    message: rule.message.clone(),
                });
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::profile_fields;
    use crate::profile::UserRecord;
    use std::collections::BTreeMap;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reports_every_violation_in_one_pass() {
        let fields = profile_fields(&UserRecord::default());
        let values = values(&[("name", "  "), ("aboutMe", ""), ("address", "")]);
        let errors = validate_fields(&fields, |name| {
            values.get(name).cloned().unwrap_or_default()
        });
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.for_field("name").next().map(|v| v.kind),
            Some(ViolationKind::RequiredFieldMissing)
        );
        assert_eq!(
            errors.for_field("address").next().map(|v| v.message.clone()),
            Some("Address is required.".to_string())
        );
    }

    #[test]
    fn flags_name_over_fifty_characters() {
        let fields = profile_fields(&UserRecord::default());
        let long_name = "x".repeat(51);
        let values = values(&[("name", long_name.as_str()), ("address", "1 Main St")]);
        let errors = validate_fields(&fields, |name| {
            values.get(name).cloned().unwrap_or_default()
        });
        assert_eq!(errors.len(), 1);
        let violation = errors.for_field("name").next().expect("name violation");
        assert_eq!(violation.kind, ViolationKind::FieldTooLong);
        assert_eq!(violation.message, "Too many characters (max: 50).");
    }

    #[test]
    fn accepts_a_complete_member_form() {
        let fields = profile_fields(&UserRecord::default());
        let values = values(&[("name", "Ada"), ("aboutMe", ""), ("address", "1 Main St")]);
        let errors = validate_fields(&fields, |name| {
            values.get(name).cloned().unwrap_or_default()
        });
        assert!(errors.is_empty());
    }
}
