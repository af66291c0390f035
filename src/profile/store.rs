use crate::app::state_paths::StatePaths;
use crate::form::ProfileUpdate;
use crate::profile::error::ProfileError;
use crate::profile::record::UserRecord;
use crate::shared::fs_atomic::atomic_write_file;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

pub fn load_record(paths: &StatePaths) -> Result<UserRecord, ProfileError> {
    let path = paths.profile_file();
    if !path.exists() {
        return Err(ProfileError::Missing {
            path: path.display().to_string(),
        });
    }
    let raw = fs::read_to_string(&path).map_err(|e| ProfileError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| ProfileError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

pub fn load_record_or_default(paths: &StatePaths) -> Result<UserRecord, ProfileError> {
    match load_record(paths) {
        Ok(record) => Ok(record),
        Err(ProfileError::Missing { .. }) => Ok(UserRecord::default()),
        Err(err) => Err(err),
    }
}

pub fn save_record(paths: &StatePaths, record: &UserRecord) -> Result<PathBuf, ProfileError> {
    let path = paths.profile_file();
    let encoded = serde_json::to_string_pretty(record).map_err(|e| ProfileError::Encode {
        path: path.display().to_string(),
        source: e,
    })?;
    atomic_write_file(&path, format!("{encoded}\n").as_bytes()).map_err(|e| {
        ProfileError::Write {
            path: path.display().to_string(),
            source: e,
        }
    })?;
    Ok(path)
}

/// The update collaborator: applies one submission to the stored record and
/// stamps the modification time. Keys absent from the payload leave the
/// record untouched; an absent `profileImage` in particular means "no change
/// requested", not "cleared".
pub fn apply_update(record: &mut UserRecord, update: &ProfileUpdate) {
    record.name = update.name.clone();
    record.address = update.address.clone();
    if let Some(about_me) = &update.about_me {
        record.about_me = about_me.clone();
    }
    if let Some(chef_profile) = &update.chef_profile {
        record.chef_profile = chef_profile.clone();
    }
    if let Some(cuisines) = &update.cuisines {
        record.cuisines = cuisines.clone();
    }
    if let Some(chef_cuisine) = &update.chef_cuisine {
        record.chef_cuisine = Some(chef_cuisine.clone());
    }
    if let Some(image) = &update.profile_image {
        record.profile_image = Some(image.clone());
    }
    record.updated_at = Some(Utc::now().to_rfc3339());
}
