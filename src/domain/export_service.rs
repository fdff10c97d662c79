//! Export service domain logic for the subscription manager.
//!
//! Produces the JSON backup of the full client list, either as in-memory
//! content for the embedding application to hand to the user, or written
//! straight to a directory on disk. The backup has exactly the shape the
//! importer accepts, so export and import round-trip.

use anyhow::Result;
use chrono::Local;
use log::{error, info};
use std::fs;
use std::path::PathBuf;

use crate::domain::models::client::Client;

/// A generated backup, ready to be saved by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDataResponse {
    pub json_content: String,
    pub filename: String,
    pub client_count: usize,
}

/// Outcome of writing a backup to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub client_count: usize,
}

/// Export service that handles all backup-related business logic
#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self
    }

    /// Serialize the full client list as a pretty-printed JSON backup.
    /// Refuses an empty list; there is nothing meaningful to back up.
    pub fn export_clients_json(&self, clients: &[Client]) -> Result<ExportDataResponse> {
        info!("📄 EXPORT: Exporting {} client(s) as JSON backup", clients.len());

        if clients.is_empty() {
            return Err(anyhow::anyhow!("There are no clients to export"));
        }

        let json_content = serde_json::to_string_pretty(clients)?;
        let filename = format!("iptv_clients_backup_{}.json", Local::now().format("%Y%m%d"));

        Ok(ExportDataResponse {
            json_content,
            filename,
            client_count: clients.len(),
        })
    }

    /// Write the backup to `custom_path`, or to the Documents folder (home
    /// directory as fallback) when no path is given.
    pub fn export_to_path(
        &self,
        clients: &[Client],
        custom_path: Option<String>,
    ) -> Result<ExportToPathResponse> {
        let export = self.export_clients_json(clients)?;

        let export_dir = match custom_path {
            Some(path) if !path.trim().is_empty() => PathBuf::from(self.sanitize_path(&path)),
            _ => match dirs::document_dir().or_else(dirs::home_dir) {
                Some(dir) => dir,
                None => {
                    error!("❌ EXPORT: Could not determine default export directory");
                    return Ok(ExportToPathResponse {
                        success: false,
                        message: "Failed to determine export directory".to_string(),
                        file_path: String::new(),
                        client_count: 0,
                    });
                }
            },
        };

        let file_path = export_dir.join(&export.filename);

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("❌ EXPORT: Failed to create export directory {:?}: {}", export_dir, e);
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                client_count: 0,
            });
        }

        match fs::write(&file_path, &export.json_content) {
            Ok(_) => {
                let file_path_str = file_path.to_string_lossy().to_string();
                info!(
                    "✅ EXPORT: Successfully exported {} client(s) to: {}",
                    export.client_count, file_path_str
                );
                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("Backup exported successfully to: {}", file_path_str),
                    file_path: file_path_str,
                    client_count: export.client_count,
                })
            }
            Err(e) => {
                error!("❌ EXPORT: Failed to write backup to {:?}: {}", file_path, e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write backup file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    client_count: 0,
                })
            }
        }
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double)
        if (cleaned.starts_with('"') && cleaned.ends_with('"') && cleaned.len() >= 2)
            || (cleaned.starts_with('\'') && cleaned.ends_with('\'') && cleaned.len() >= 2)
        {
            cleaned = cleaned[1..cleaned.len() - 1].to_string();
        }
        cleaned = cleaned.trim().to_string();

        // Handle escaped spaces
        cleaned = cleaned.replace("\\ ", " ");

        // Remove trailing separators
        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        // Tilde expansion for the home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}
