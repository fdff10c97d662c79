//! Import orchestration: parse a backup file, run it through the
//! reconciler, and apply the confirmed result as one bulk replace.
//!
//! Preview and commit are separate calls on purpose. The embedding
//! application shows the preview summary, collects the operator's explicit
//! confirmations, and only then commits; nothing here writes to storage
//! before `commit` is called with a non-empty accepted set.

use anyhow::{Context, Result};
use log::info;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::import::{reconcile, ImportOutcome};
use crate::domain::models::client::Client;
use crate::storage::traits::{ClientStorage, Connection};

/// How many rejection reasons are spelled out in the confirmation prompt;
/// the rest collapse into a single remainder line.
pub const MAX_DISPLAY_REASONS: usize = 5;

/// Result of parsing and validating an import file, ready for the
/// operator's confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPreview {
    /// The normalized records that passed validation, in file order.
    pub accepted: Vec<Client>,
    pub rejected_count: usize,
    /// Up to [`MAX_DISPLAY_REASONS`] rejection summaries plus a remainder
    /// line when more were suppressed.
    pub display_reasons: Vec<String>,
}

impl ImportPreview {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

#[derive(Debug, Clone)]
pub struct CommitImportResult {
    pub imported_count: usize,
    pub success_message: String,
}

/// Service for restoring a full client list from an external backup file
#[derive(Clone)]
pub struct ImportService<C: Connection> {
    client_repository: C::ClientRepository,
}

impl<C: Connection> ImportService<C> {
    /// Create a new ImportService
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            client_repository: connection.create_client_repository(),
        }
    }

    /// Parse `json_text` and partition it into accepted and rejected records.
    ///
    /// Fails when the text is not valid JSON or the top-level value is not an
    /// array; both are fatal to the attempt with no partial result. Content
    /// problems are returned in the preview instead.
    pub fn preview(
        &self,
        json_text: &str,
        known_plan_names: &HashSet<String>,
    ) -> Result<ImportPreview> {
        let raw: Value =
            serde_json::from_str(json_text).context("the import file is not valid JSON")?;
        let ImportOutcome { accepted, rejected } = reconcile(&raw, known_plan_names)?;

        info!(
            "Import preview: {} accepted, {} rejected",
            accepted.len(),
            rejected.len()
        );

        let mut display_reasons: Vec<String> = rejected
            .iter()
            .take(MAX_DISPLAY_REASONS)
            .map(|r| r.display())
            .collect();
        if rejected.len() > MAX_DISPLAY_REASONS {
            display_reasons.push(format!(
                "...and {} more error(s)",
                rejected.len() - MAX_DISPLAY_REASONS
            ));
        }

        Ok(ImportPreview {
            accepted,
            rejected_count: rejected.len(),
            display_reasons,
        })
    }

    /// Replace the entire stored client collection with `accepted`.
    ///
    /// Destructive replace, not a merge. An empty accepted set is refused so
    /// a bad file can never silently wipe the store.
    pub fn commit(&self, accepted: &[Client]) -> Result<CommitImportResult> {
        if accepted.is_empty() {
            return Err(anyhow::anyhow!(
                "no valid clients to import; existing data left untouched"
            ));
        }

        self.client_repository.replace_all(accepted)?;

        info!("Imported {} client(s), previous collection replaced", accepted.len());

        Ok(CommitImportResult {
            imported_count: accepted.len(),
            success_message: format!("{} client(s) imported successfully", accepted.len()),
        })
    }
}
