use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::json::{JsonClientRepository, JsonPlanRepository};
use crate::storage::traits::Connection;

/// Connection for the local JSON-file backend.
///
/// Holds the base directory under which `clients.json` and `plans.json` live.
/// Cloning is cheap; repositories created from clones share the same files.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection rooted at `base_directory`, creating the
    /// directory if needed.
    pub fn new(base_directory: impl Into<PathBuf>) -> Result<Self> {
        let base_directory = base_directory.into();
        if !base_directory.exists() {
            fs::create_dir_all(&base_directory)?;
            info!("Created data directory: {:?}", base_directory);
        }
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub(crate) fn clients_path(&self) -> PathBuf {
        self.base_directory.join("clients.json")
    }

    pub(crate) fn plans_path(&self) -> PathBuf {
        self.base_directory.join("plans.json")
    }
}

impl Connection for JsonConnection {
    type ClientRepository = JsonClientRepository;
    type PlanRepository = JsonPlanRepository;

    fn create_client_repository(&self) -> Self::ClientRepository {
        JsonClientRepository::new(self.clone())
    }

    fn create_plan_repository(&self) -> Self::PlanRepository {
        JsonPlanRepository::new(self.clone())
    }
}
