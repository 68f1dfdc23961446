use super::classifier::BuildArchetype;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const EMBEDDED_BUILDS: &str = include_str!("../../assets/fallback_builds.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStub {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub total_cost: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FallbackBundle {
    pub starters: Vec<ItemStub>,
    pub boots: Vec<ItemStub>,
    pub core_items: Vec<ItemStub>,
    pub luxury_items: Vec<ItemStub>,
}

/// Static bundles keyed by archetype label, used when no item catalog is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallbackCatalog {
    builds: BTreeMap<String, FallbackBundle>,
}

impl FallbackCatalog {
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_BUILDS)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::FallbackError(format!("Failed to parse fallback builds: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::FallbackError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Bundle for the archetype; empty when the table has no entry for it.
    pub fn bundle_for(&self, archetype: BuildArchetype) -> FallbackBundle {
        self.builds
            .get(archetype.label())
            .cloned()
            .unwrap_or_default()
    }
}
