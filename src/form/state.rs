use crate::catalog::{CuisineId, CuisineName, CuisineRef};
use crate::form::fields::{profile_fields, FieldDescriptor, RoleField, ADDRESS_FIELD, NAME_FIELD};
use crate::form::payload::ProfileUpdate;
use crate::form::validate::{validate_fields, ValidationErrors};
use crate::profile::{ImageRef, ProfileRole, UserRecord};
use std::collections::BTreeMap;

/// Role-resolved selection shape: members keep an insertion-ordered
/// favorite list, chefs keep at most one cuisine choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Favorites(Vec<CuisineId>),
    ChefChoice(Option<CuisineName>),
}

/// Mutable form state for one edit session.
///
/// Text values, the cuisine selection and the image slot all live here, and
/// `submit` reads them at call time, so the assembled payload can never trail
/// the latest selection state.
#[derive(Debug, Clone)]
pub struct EditDraft {
    record: UserRecord,
    fields: Vec<FieldDescriptor>,
    values: BTreeMap<String, String>,
    selection: Selection,
    image: Option<ImageRef>,
    preview: Option<String>,
}

impl EditDraft {
    pub fn from_record(record: UserRecord) -> Self {
        let fields = profile_fields(&record);
        let values = fields
            .iter()
            .map(|field| (field.name.clone(), field.default_value.clone()))
            .collect();
        let selection = match record.role() {
            ProfileRole::Member => {
                Selection::Favorites(record.cuisines.iter().map(|entry| entry.id).collect())
            }
            ProfileRole::Chef => Selection::ChefChoice(record.chef_cuisine.clone()),
        };
        Self {
            record,
            fields,
            values,
            selection,
            image: None,
            preview: None,
        }
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn into_record(self) -> UserRecord {
        self.record
    }

    pub fn role(&self) -> ProfileRole {
        self.record.role()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field_value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), String> {
        if !self.fields.iter().any(|field| field.name == name) {
            return Err(format!("unknown profile field `{name}`"));
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn favorite_cuisines(&self) -> &[CuisineId] {
        match &self.selection {
            Selection::Favorites(ids) => ids,
            Selection::ChefChoice(_) => &[],
        }
    }

    pub fn chef_cuisine(&self) -> Option<&CuisineName> {
        match &self.selection {
            Selection::ChefChoice(choice) => choice.as_ref(),
            Selection::Favorites(_) => None,
        }
    }

    pub fn is_favorite(&self, id: CuisineId) -> bool {
        self.favorite_cuisines().contains(&id)
    }

    /// Member multi-select: unselected ids append in click order, selected
    /// ids drop out with the remainder's order intact. Returns the new
    /// selected state of `id`.
    pub fn toggle_favorite(&mut self, id: CuisineId) -> Result<bool, String> {
        match &mut self.selection {
            Selection::Favorites(ids) => {
                if let Some(position) = ids.iter().position(|existing| *existing == id) {
                    ids.remove(position);
                    Ok(false)
                } else {
                    ids.push(id);
                    Ok(true)
                }
            }
            Selection::ChefChoice(_) => {
                Err("chef profiles carry a single cuisine choice".to_string())
            }
        }
    }

    /// Chef single-select: any choice replaces the current one outright;
    /// re-choosing the current cuisine leaves it selected.
    pub fn choose_chef_cuisine(&mut self, name: CuisineName) -> Result<(), String> {
        match &mut self.selection {
            Selection::ChefChoice(choice) => {
                *choice = Some(name);
                Ok(())
            }
            Selection::Favorites(_) => {
                Err("member profiles use the favorite-cuisine list".to_string())
            }
        }
    }

    pub fn attach_image(&mut self, image: ImageRef) {
        self.image = Some(image);
    }

    pub fn set_preview(&mut self, preview: String) {
        self.preview = Some(preview);
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// What the avatar shows: the fresh preview when one arrived, otherwise
    /// the stored image reference.
    pub fn avatar_source(&self) -> Option<&str> {
        self.preview
            .as_deref()
            .or_else(|| self.record.profile_image.as_ref().map(ImageRef::as_str))
    }

    pub fn validate(&self) -> ValidationErrors {
        validate_fields(&self.fields, |name| self.field_value(name).to_string())
    }

    /// Pulls every tracked value at call time, gates on validation and
    /// assembles the unified payload. `profileImage` is populated only when
    /// an image was selected this session.
    pub fn submit(&self) -> Result<ProfileUpdate, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let role_field = RoleField::for_role(self.role());
        let long_text = self.field_value(role_field.field_name()).to_string();
        let (about_me, chef_profile) = match role_field {
            RoleField::AboutMe => (Some(long_text), None),
            RoleField::ChefProfile => (None, Some(long_text)),
        };
        let (cuisines, chef_cuisine) = match &self.selection {
            Selection::Favorites(ids) => (
                Some(ids.iter().map(|id| CuisineRef { id: *id }).collect()),
                None,
            ),
            Selection::ChefChoice(choice) => (None, choice.clone()),
        };
        Ok(ProfileUpdate {
            name: self.field_value(NAME_FIELD).to_string(),
            address: self.field_value(ADDRESS_FIELD).to_string(),
            about_me,
            chef_profile,
            cuisines,
            chef_cuisine,
            profile_image: self.image.clone(),
        })
    }
}
