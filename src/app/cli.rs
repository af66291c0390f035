#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Profile,
    EditProfile,
    Cuisines,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "profile" => CliVerb::Profile,
        "edit-profile" => CliVerb::EditProfile,
        "cuisines" => CliVerb::Cuisines,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  profile          Show the read-only profile page".to_string(),
        "  edit-profile     Open the profile edit surface".to_string(),
        "  cuisines         List the available cuisine catalog".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_verbs() {
        assert_eq!(parse_cli_verb("profile"), CliVerb::Profile);
        assert_eq!(parse_cli_verb("edit-profile"), CliVerb::EditProfile);
        assert_eq!(parse_cli_verb("cuisines"), CliVerb::Cuisines);
        assert_eq!(parse_cli_verb("setup"), CliVerb::Unknown);
    }
}
