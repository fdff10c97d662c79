//! # IPTV Subscription Manager
//!
//! Backend library for a small IPTV reseller tool: subscriber records, a
//! plan catalog, renewal scheduling, dashboard aggregates, JSON backup
//! export, and validated bulk import. Storage is abstracted behind traits so
//! backends stay interchangeable; this crate ships a local JSON-file backend
//! and an in-memory one.
//!
//! The embedding application (UI, navigation, confirmation dialogs) sits on
//! top of [`Backend`] and the pure functions in [`domain::renewal`] and
//! [`domain::import`].

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::json::JsonConnection;
pub use storage::memory::MemoryConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub client_service: domain::ClientService<JsonConnection>,
    pub plan_service: domain::PlanService<JsonConnection>,
    pub import_service: domain::ImportService<JsonConnection>,
    pub statistics_service: domain::StatisticsService,
    pub reminder_service: domain::ReminderService,
    pub export_service: domain::ExportService,
}

impl Backend {
    /// Create a backend instance backed by JSON files under `data_dir`,
    /// seeding the default plan catalog on first run.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let connection = Arc::new(JsonConnection::new(data_dir)?);

        let client_service = domain::ClientService::new(connection.clone());
        let plan_service = domain::PlanService::new(connection.clone());
        let import_service = domain::ImportService::new(connection);

        plan_service.ensure_default_plans()?;

        Ok(Backend {
            client_service,
            plan_service,
            import_service,
            statistics_service: domain::StatisticsService::new(),
            reminder_service: domain::ReminderService::new(),
            export_service: domain::ExportService::new(),
        })
    }

    /// Create a backend at the platform data directory
    /// (`<data_dir>/iptv-manager`), falling back to the temp directory when
    /// the platform has none.
    pub fn with_default_data_dir() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("iptv-manager");
        Self::new(data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::client::CreateClientCommand;
    use crate::domain::models::client::Status;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_backend_wires_services_and_seeds_plans() {
        let temp_dir = tempdir().unwrap();
        let backend = Backend::new(temp_dir.path().to_path_buf()).unwrap();

        let plans = backend.plan_service.list_plans().unwrap().plans;
        assert_eq!(plans.len(), 4);

        let created = backend
            .client_service
            .create_client(CreateClientCommand {
                name: "João Silva".to_string(),
                contact: "5511987654321".to_string(),
                plan: plans[0].name.clone(),
                monthly_value: plans[0].price,
                due_date: 10,
                status: Status::Active,
            })
            .unwrap();

        let clients = backend.client_service.list_clients().unwrap().clients;
        let summary = backend.statistics_service.dashboard_summary(&clients);
        assert_eq!(summary.total_clients, 1);
        assert_eq!(summary.monthly_revenue, plans[0].price);

        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let upcoming = domain::renewal::upcoming_renewals(&clients, today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].client.id, created.client.id);
    }

    #[test]
    fn test_backend_reopens_existing_data() {
        let temp_dir = tempdir().unwrap();
        {
            let backend = Backend::new(temp_dir.path().to_path_buf()).unwrap();
            backend
                .client_service
                .create_client(CreateClientCommand {
                    name: "Persisted".to_string(),
                    contact: String::new(),
                    plan: "1 TELA".to_string(),
                    monthly_value: 25.0,
                    due_date: 5,
                    status: Status::Active,
                })
                .unwrap();
        }

        let reopened = Backend::new(temp_dir.path().to_path_buf()).unwrap();
        // Plans are not reseeded, clients survive.
        assert_eq!(reopened.plan_service.list_plans().unwrap().plans.len(), 4);
        assert_eq!(reopened.client_service.list_clients().unwrap().clients.len(), 1);
    }

    #[test]
    fn test_archived_plan_clients_survive_plan_deletion() {
        let temp_dir = tempdir().unwrap();
        let backend = Backend::new(temp_dir.path().to_path_buf()).unwrap();

        let plans = backend.plan_service.list_plans().unwrap().plans;
        let plan = plans
            .iter()
            .find(|p| p.name == "1 TELA")
            .cloned()
            .unwrap();

        backend
            .client_service
            .create_client(CreateClientCommand {
                name: "Maria".to_string(),
                contact: String::new(),
                plan: plan.name.clone(),
                monthly_value: plan.price,
                due_date: 15,
                status: Status::Active,
            })
            .unwrap();

        backend
            .plan_service
            .delete_plan(crate::domain::commands::plan::DeletePlanCommand {
                plan_id: plan.id,
            })
            .unwrap();

        // The client still references the deleted plan by name and stays usable.
        let clients = backend.client_service.list_clients().unwrap().clients;
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].plan, "1 TELA");

        let names = backend.plan_service.plan_names().unwrap();
        assert!(!names.contains("1 TELA"));

        // And the importer keeps accepting it even though the plan is gone.
        let export = backend.export_service.export_clients_json(&clients).unwrap();
        let preview = backend
            .import_service
            .preview(&export.json_content, &names)
            .unwrap();
        assert_eq!(preview.accepted_count(), 1);
        assert_eq!(preview.rejected_count, 0);
    }
}
