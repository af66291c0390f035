use crate::catalog::CuisineCatalog;
use crate::profile::record::{ProfileRole, UserRecord};

/// Read-only profile page as display lines. Favorites resolve against the
/// catalog; ids no longer in the catalog render by number so the page never
/// hides stored state.
pub fn profile_page(record: &UserRecord, catalog: &CuisineCatalog) -> Vec<String> {
    let mut lines = vec![record.name.clone()];
    if let Some(location) = &record.general_location {
        lines.push(location.clone());
    }
    lines.push(format!(
        "avatar: {}",
        record
            .profile_image
            .as_ref()
            .map(|image| image.as_str().to_string())
            .unwrap_or_else(|| "none".to_string())
    ));
    lines.push(String::new());
    match record.role() {
        ProfileRole::Member => {
            lines.push("ABOUT ME:".to_string());
            lines.push(record.about_me.clone());
            lines.push(String::new());
            lines.push("FAVORITE CUISINE:".to_string());
            lines.push(favorite_chips(record, catalog));
        }
        ProfileRole::Chef => {
            lines.push("CHEF PROFILE:".to_string());
            lines.push(record.chef_profile.clone());
            lines.push(String::new());
            lines.push("CHEF CUISINE:".to_string());
            lines.push(
                record
                    .chef_cuisine
                    .as_ref()
                    .map(|name| name.as_str().to_string())
                    .unwrap_or_else(|| "none".to_string()),
            );
        }
    }
    lines
}

fn favorite_chips(record: &UserRecord, catalog: &CuisineCatalog) -> String {
    if record.cuisines.is_empty() {
        return "none yet".to_string();
    }
    record
        .cuisines
        .iter()
        .map(|entry| {
            let label = catalog
                .name_for(entry.id)
                .map(|name| name.as_str().to_string())
                .unwrap_or_else(|| format!("#{}", entry.id));
            format!("[{label}]")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_catalog, CuisineId, CuisineRef};

    #[test]
    fn member_page_lists_resolved_favorites() {
        let record = UserRecord {
            name: "Ada Lovelace".to_string(),
            address: "1 Main St".to_string(),
            general_location: Some("London".to_string()),
            about_me: "I enjoy good food.".to_string(),
            cuisines: vec![
                CuisineRef {
                    id: CuisineId::new(3),
                },
                CuisineRef {
                    id: CuisineId::new(6),
                },
            ],
            ..UserRecord::default()
        };
        let lines = profile_page(&record, &default_catalog());
        assert_eq!(lines[0], "Ada Lovelace");
        assert_eq!(lines[1], "London");
        assert!(lines.contains(&"ABOUT ME:".to_string()));
        assert_eq!(lines.last().expect("chips"), "[French] [Japanese]");
    }

    #[test]
    fn chef_page_shows_chef_sections_instead() {
        let record = UserRecord {
            name: "Paul Bocuse".to_string(),
            is_chef: true,
            chef_profile: "Classical French kitchen.".to_string(),
            ..UserRecord::default()
        };
        let lines = profile_page(&record, &default_catalog());
        assert!(lines.contains(&"CHEF PROFILE:".to_string()));
        assert!(!lines.iter().any(|line| line == "ABOUT ME:"));
        assert_eq!(lines.last().expect("chef cuisine"), "none");
    }

    #[test]
    fn unknown_favorite_ids_render_by_number() {
        let record = UserRecord {
            name: "Ada".to_string(),
            cuisines: vec![CuisineRef {
                id: CuisineId::new(42),
            }],
            ..UserRecord::default()
        };
        let lines = profile_page(&record, &default_catalog());
        assert_eq!(lines.last().expect("chips"), "[#42]");
    }
}
