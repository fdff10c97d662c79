//! # JSON Storage Module
//!
//! Local-device backend storing each collection as a single JSON array file
//! (`clients.json`, `plans.json`) under a base directory. A missing file
//! reads as an empty collection, which covers first-run behavior. All writes
//! go through a temp file followed by a rename so a crash mid-write never
//! leaves a half-written collection behind.

pub mod client_repository;
pub mod connection;
pub mod plan_repository;

pub use client_repository::JsonClientRepository;
pub use connection::JsonConnection;
pub use plan_repository::JsonPlanRepository;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a JSON array file into a vec, treating a missing file as empty.
pub(crate) fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {:?}", path))
}

/// Write a collection as a pretty-printed JSON array, atomically.
pub(crate) fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(items)?;
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)
        .with_context(|| format!("failed to write {:?}", temp_path))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("failed to replace {:?}", path))?;
    Ok(())
}
