use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::client::{
    ClientListFilter, CreateClientCommand, CreateClientResult, DeleteClientCommand,
    DeleteClientResult, GetClientCommand, GetClientResult, ListClientsResult,
    SetClientStatusCommand, SetClientStatusResult, UpdateClientCommand, UpdateClientResult,
};
use crate::domain::models::client::Client;
use crate::storage::traits::{ClientStorage, Connection};

/// Service for managing subscriber records
#[derive(Clone)]
pub struct ClientService<C: Connection> {
    client_repository: C::ClientRepository,
}

impl<C: Connection> ClientService<C> {
    /// Create a new ClientService
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            client_repository: connection.create_client_repository(),
        }
    }

    /// Create a new client
    pub fn create_client(&self, command: CreateClientCommand) -> Result<CreateClientResult> {
        info!("Creating client: name={}, plan={}", command.name, command.plan);

        validate_name(&command.name)?;
        validate_due_date(command.due_date)?;
        validate_monthly_value(command.monthly_value)?;

        let client = Client {
            id: Client::generate_id(Utc::now().timestamp_millis() as u64),
            name: command.name.trim().to_string(),
            contact: command.contact.trim().to_string(),
            plan: command.plan,
            monthly_value: command.monthly_value,
            due_date: command.due_date,
            status: command.status,
        };

        self.client_repository.store_client(&client)?;

        info!("Created client: {} with ID: {}", client.name, client.id);

        Ok(CreateClientResult { client })
    }

    /// Get a client by ID
    pub fn get_client(&self, command: GetClientCommand) -> Result<GetClientResult> {
        let client = self.client_repository.get_client(&command.client_id)?;

        if client.is_none() {
            warn!("Client not found: {}", command.client_id);
        }

        Ok(GetClientResult { client })
    }

    /// List all clients
    pub fn list_clients(&self) -> Result<ListClientsResult> {
        let clients = self.client_repository.list_clients()?;

        info!("Found {} clients", clients.len());

        Ok(ListClientsResult { clients })
    }

    /// List clients matching a display filter: case-insensitive name
    /// substring, status, and plan name.
    pub fn filter_clients(&self, filter: ClientListFilter) -> Result<ListClientsResult> {
        let search = filter.search.map(|s| s.to_lowercase());

        let clients = self
            .client_repository
            .list_clients()?
            .into_iter()
            .filter(|client| {
                let name_match = search
                    .as_ref()
                    .map(|term| client.name.to_lowercase().contains(term))
                    .unwrap_or(true);
                let status_match = filter
                    .status
                    .map(|status| client.status == status)
                    .unwrap_or(true);
                let plan_match = filter
                    .plan
                    .as_ref()
                    .map(|plan| &client.plan == plan)
                    .unwrap_or(true);
                name_match && status_match && plan_match
            })
            .collect();

        Ok(ListClientsResult { clients })
    }

    /// Update an existing client
    pub fn update_client(&self, command: UpdateClientCommand) -> Result<UpdateClientResult> {
        info!("Updating client: {}", command.client_id);

        let mut client = self
            .client_repository
            .get_client(&command.client_id)?
            .ok_or_else(|| anyhow::anyhow!("Client not found: {}", command.client_id))?;

        if let Some(name) = command.name {
            validate_name(&name)?;
            client.name = name.trim().to_string();
        }
        if let Some(contact) = command.contact {
            client.contact = contact.trim().to_string();
        }
        if let Some(plan) = command.plan {
            client.plan = plan;
        }
        if let Some(monthly_value) = command.monthly_value {
            validate_monthly_value(monthly_value)?;
            client.monthly_value = monthly_value;
        }
        if let Some(due_date) = command.due_date {
            validate_due_date(due_date)?;
            client.due_date = due_date;
        }
        if let Some(status) = command.status {
            client.status = status;
        }

        self.client_repository.update_client(&client)?;

        info!("Updated client: {} with ID: {}", client.name, client.id);

        Ok(UpdateClientResult { client })
    }

    /// Activate or deactivate a client. Inactive clients drop out of revenue
    /// and renewal calculations but stay stored.
    pub fn set_status(&self, command: SetClientStatusCommand) -> Result<SetClientStatusResult> {
        let mut client = self
            .client_repository
            .get_client(&command.client_id)?
            .ok_or_else(|| anyhow::anyhow!("Client not found: {}", command.client_id))?;

        client.status = command.status;
        self.client_repository.update_client(&client)?;

        info!(
            "Set client {} status to {}",
            client.id,
            client.status.as_literal()
        );

        Ok(SetClientStatusResult { client })
    }

    /// Delete a client
    pub fn delete_client(&self, command: DeleteClientCommand) -> Result<DeleteClientResult> {
        info!("Deleting client: {}", command.client_id);

        let client = self
            .client_repository
            .get_client(&command.client_id)?
            .ok_or_else(|| anyhow::anyhow!("Client not found: {}", command.client_id))?;

        self.client_repository.delete_client(&command.client_id)?;

        info!("Deleted client: {} with ID: {}", client.name, client.id);

        Ok(DeleteClientResult {
            success_message: format!("Client '{}' deleted successfully", client.name),
        })
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow::anyhow!("Client name cannot be empty"));
    }
    Ok(())
}

fn validate_due_date(due_date: u32) -> Result<()> {
    if !(1..=31).contains(&due_date) {
        return Err(anyhow::anyhow!("Due day must be between 1 and 31"));
    }
    Ok(())
}

fn validate_monthly_value(monthly_value: f64) -> Result<()> {
    if !monthly_value.is_finite() || monthly_value < 0.0 {
        return Err(anyhow::anyhow!("Monthly value cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::client::Status;
    use crate::storage::json::JsonConnection;
    use crate::storage::memory::MemoryConnection;
    use tempfile::tempdir;

    fn setup_test() -> ClientService<MemoryConnection> {
        ClientService::new(Arc::new(MemoryConnection::new()))
    }

    fn create_command(name: &str, plan: &str, due_date: u32, status: Status) -> CreateClientCommand {
        CreateClientCommand {
            name: name.to_string(),
            contact: String::new(),
            plan: plan.to_string(),
            monthly_value: 25.0,
            due_date,
            status,
        }
    }

    #[test]
    fn test_create_client_trims_name() {
        let service = setup_test();
        let result = service
            .create_client(CreateClientCommand {
                name: "  João Silva ".to_string(),
                contact: " 5511987654321 ".to_string(),
                plan: "2 TELAS".to_string(),
                monthly_value: 35.0,
                due_date: 10,
                status: Status::Active,
            })
            .unwrap();

        assert_eq!(result.client.name, "João Silva");
        assert_eq!(result.client.contact, "5511987654321");
        assert!(result.client.id.starts_with("client::"));
    }

    #[test]
    fn test_create_client_validation() {
        let service = setup_test();

        let empty_name = create_command("  ", "1 TELA", 10, Status::Active);
        assert!(service.create_client(empty_name).is_err());

        let bad_due_date = create_command("A", "1 TELA", 0, Status::Active);
        assert!(service.create_client(bad_due_date).is_err());

        let bad_due_date_high = create_command("A", "1 TELA", 32, Status::Active);
        assert!(service.create_client(bad_due_date_high).is_err());

        let mut negative_value = create_command("A", "1 TELA", 10, Status::Active);
        negative_value.monthly_value = -1.0;
        assert!(service.create_client(negative_value).is_err());
    }

    #[test]
    fn test_get_and_list_clients() {
        let service = setup_test();
        let created = service
            .create_client(create_command("Maria", "1 TELA", 15, Status::Active))
            .unwrap();

        let fetched = service
            .get_client(GetClientCommand {
                client_id: created.client.id.clone(),
            })
            .unwrap();
        assert_eq!(fetched.client.unwrap().name, "Maria");

        let missing = service
            .get_client(GetClientCommand {
                client_id: "client::404".to_string(),
            })
            .unwrap();
        assert!(missing.client.is_none());

        assert_eq!(service.list_clients().unwrap().clients.len(), 1);
    }

    #[test]
    fn test_update_client_partial_fields() {
        let service = setup_test();
        let created = service
            .create_client(create_command("Pedro", "1 TELA", 20, Status::Active))
            .unwrap();

        let updated = service
            .update_client(UpdateClientCommand {
                client_id: created.client.id.clone(),
                plan: Some("2 TELAS".to_string()),
                monthly_value: Some(35.0),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.client.name, "Pedro");
        assert_eq!(updated.client.plan, "2 TELAS");
        assert_eq!(updated.client.monthly_value, 35.0);
        assert_eq!(updated.client.due_date, 20);
    }

    #[test]
    fn test_update_nonexistent_client_fails() {
        let service = setup_test();
        let result = service.update_client(UpdateClientCommand {
            client_id: "client::404".to_string(),
            name: Some("Ghost".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_set_status_toggle() {
        let service = setup_test();
        let created = service
            .create_client(create_command("Ana", "1 TELA", 5, Status::Active))
            .unwrap();

        let deactivated = service
            .set_status(SetClientStatusCommand {
                client_id: created.client.id.clone(),
                status: Status::Inactive,
            })
            .unwrap();
        assert_eq!(deactivated.client.status, Status::Inactive);

        let reactivated = service
            .set_status(SetClientStatusCommand {
                client_id: created.client.id,
                status: Status::Active,
            })
            .unwrap();
        assert_eq!(reactivated.client.status, Status::Active);
    }

    #[test]
    fn test_delete_client() {
        let service = setup_test();
        let created = service
            .create_client(create_command("Carlos", "1 TELA", 8, Status::Active))
            .unwrap();

        let result = service
            .delete_client(DeleteClientCommand {
                client_id: created.client.id.clone(),
            })
            .unwrap();
        assert!(result.success_message.contains("Carlos"));

        assert!(service
            .delete_client(DeleteClientCommand {
                client_id: created.client.id,
            })
            .is_err());
    }

    #[test]
    fn test_filter_clients() {
        let service = setup_test();
        service
            .create_client(create_command("João Silva", "2 TELAS", 10, Status::Active))
            .unwrap();
        service
            .create_client(create_command("Maria Oliveira", "1 TELA", 15, Status::Active))
            .unwrap();
        service
            .create_client(create_command("Pedro Souza", "1 TELA", 20, Status::Inactive))
            .unwrap();

        let by_name = service
            .filter_clients(ClientListFilter {
                search: Some("joão".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_name.clients.len(), 1);
        assert_eq!(by_name.clients[0].name, "João Silva");

        let by_status = service
            .filter_clients(ClientListFilter {
                status: Some(Status::Inactive),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_status.clients.len(), 1);

        let by_plan = service
            .filter_clients(ClientListFilter {
                plan: Some("1 TELA".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_plan.clients.len(), 2);

        let combined = service
            .filter_clients(ClientListFilter {
                search: Some("pedro".to_string()),
                status: Some(Status::Active),
                plan: None,
            })
            .unwrap();
        assert!(combined.clients.is_empty());
    }

    #[test]
    fn test_service_works_on_json_backend_too() {
        let temp_dir = tempdir().unwrap();
        let conn = JsonConnection::new(temp_dir.path().to_path_buf()).unwrap();
        let service = ClientService::new(Arc::new(conn));

        let created = service
            .create_client(create_command("Persisted", "1 TELA", 12, Status::Active))
            .unwrap();
        let fetched = service
            .get_client(GetClientCommand {
                client_id: created.client.id,
            })
            .unwrap();
        assert_eq!(fetched.client.unwrap().name, "Persisted");
    }
}
