use crate::profile::ProfileError;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub root: PathBuf,
}

impl StatePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn required_directories(&self) -> Vec<PathBuf> {
        vec![self.root.clone(), self.root.join("logs")]
    }

    pub fn profile_file(&self) -> PathBuf {
        self.root.join("profile.json")
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.root.join("cuisines.yaml")
    }
}

pub const DEFAULT_STATE_ROOT_DIR: &str = ".platemate";

pub fn default_state_root_path() -> Result<PathBuf, ProfileError> {
    let home = std::env::var_os("HOME").ok_or(ProfileError::HomeDirectoryUnavailable)?;
    Ok(PathBuf::from(home).join(DEFAULT_STATE_ROOT_DIR))
}

pub fn bootstrap_state_root(paths: &StatePaths) -> Result<(), ProfileError> {
    for dir in paths.required_directories() {
        fs::create_dir_all(&dir).map_err(|e| ProfileError::CreateDir {
            path: dir.display().to_string(),
            source: e,
        })?;
    }
    Ok(())
}
