use crate::catalog::{CuisineName, CuisineRef};
use serde::{Deserialize, Serialize};

/// Opaque handle to an uploaded image; the editor stores what the picker
/// delivers and never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRole {
    Chef,
    Member,
}

impl ProfileRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileRole::Chef => "chef",
            ProfileRole::Member => "member",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_location: Option<String>,
    #[serde(default)]
    pub about_me: String,
    #[serde(default)]
    pub chef_profile: String,
    #[serde(default)]
    pub is_chef: bool,
    #[serde(default)]
    pub cuisines: Vec<CuisineRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_cuisine: Option<CuisineName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserRecord {
    pub fn role(&self) -> ProfileRole {
        if self.is_chef {
            ProfileRole::Chef
        } else {
            ProfileRole::Member
        }
    }
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            general_location: None,
            about_me: String::new(),
            chef_profile: String::new(),
            is_chef: false,
            cuisines: Vec::new(),
            chef_cuisine: None,
            profile_image: None,
            updated_at: None,
        }
    }
}
