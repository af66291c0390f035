use crate::catalog::{CuisineName, CuisineRef};
use crate::profile::ImageRef;
use serde::Serialize;

/// The flattened submission handed to the update collaborator.
///
/// Every optional key is dropped from the serialized document when unset:
/// a missing `profileImage` means "no change requested", which downstream
/// must keep distinct from an explicit value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chef_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<CuisineRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chef_cuisine: Option<CuisineName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<ImageRef>,
}
