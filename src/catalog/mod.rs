use crate::shared::fs_atomic::atomic_write_file;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read cuisine catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write cuisine catalog {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid cuisine catalog in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to encode cuisine catalog for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("cuisine catalog validation failed: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuisineId(u32);

impl CuisineId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CuisineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CuisineName(String);

impl CuisineName {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("cuisine name must be non-empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CuisineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for CuisineName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .map_err(|err| D::Error::custom(format!("invalid cuisine name `{raw}`: {err}")))
    }
}

/// Reference to a catalog entry by id, the shape carried in stored records
/// and update payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineRef {
    pub id: CuisineId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineOption {
    pub id: CuisineId,
    pub name: CuisineName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuisineCatalog(Vec<CuisineOption>);

impl CuisineCatalog {
    pub fn new(options: Vec<CuisineOption>) -> Result<Self, CatalogError> {
        let catalog = Self(options);
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn options(&self) -> &[CuisineOption] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn name_for(&self, id: CuisineId) -> Option<&CuisineName> {
        self.0
            .iter()
            .find(|option| option.id == id)
            .map(|option| &option.name)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.0.is_empty() {
            return Err(CatalogError::Invalid(
                "catalog must list at least one cuisine".to_string(),
            ));
        }
        let mut ids = BTreeSet::new();
        let mut names = BTreeSet::new();
        for option in &self.0 {
            if !ids.insert(option.id) {
                return Err(CatalogError::Invalid(format!(
                    "cuisine id `{}` appears more than once",
                    option.id
                )));
            }
            if !names.insert(option.name.as_str().to_string()) {
                return Err(CatalogError::Invalid(format!(
                    "cuisine name `{}` appears more than once",
                    option.name
                )));
            }
        }
        Ok(())
    }
}

pub fn default_catalog() -> CuisineCatalog {
    let seed = [
        (1, "American"),
        (2, "Chinese"),
        (3, "French"),
        (4, "Indian"),
        (5, "Italian"),
        (6, "Japanese"),
        (7, "Mexican"),
        (8, "Thai"),
    ];
    CuisineCatalog(
        seed.iter()
            .map(|(id, name)| CuisineOption {
                id: CuisineId::new(*id),
                name: CuisineName(name.to_string()),
            })
            .collect(),
    )
}

/// Loads the catalog from disk, seeding the default set on first use.
pub fn load_or_seed(path: &Path) -> Result<CuisineCatalog, CatalogError> {
    if !path.exists() {
        let catalog = default_catalog();
        let encoded = serde_yaml::to_string(&catalog).map_err(|e| CatalogError::Encode {
            path: path.display().to_string(),
            source: e,
        })?;
        atomic_write_file(path, encoded.as_bytes()).map_err(|e| CatalogError::Write {
            path: path.display().to_string(),
            source: e,
        })?;
        return Ok(catalog);
    }
    let raw = fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let catalog = serde_yaml::from_str::<CuisineCatalog>(&raw).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuisine_name_rejects_blank_input() {
        assert!(CuisineName::parse("   ").is_err());
        assert_eq!(
            CuisineName::parse(" Thai ").expect("valid name").as_str(),
            "Thai"
        );
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let options = vec![
            CuisineOption {
                id: CuisineId::new(1),
                name: CuisineName::parse("Thai").expect("name"),
            },
            CuisineOption {
                id: CuisineId::new(1),
                name: CuisineName::parse("French").expect("name"),
            },
        ];
        assert!(matches!(
            CuisineCatalog::new(options),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn default_catalog_resolves_names_by_id() {
        let catalog = default_catalog();
        assert_eq!(
            catalog.name_for(CuisineId::new(3)).map(CuisineName::as_str),
            Some("French")
        );
        assert_eq!(catalog.name_for(CuisineId::new(99)), None);
    }
}
