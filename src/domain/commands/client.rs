//! Commands and results for client operations.

use crate::domain::models::client::{Client, Status};

#[derive(Debug, Clone)]
pub struct CreateClientCommand {
    pub name: String,
    pub contact: String,
    pub plan: String,
    pub monthly_value: f64,
    pub due_date: u32,
    pub status: Status,
}

#[derive(Debug, Clone)]
pub struct CreateClientResult {
    pub client: Client,
}

#[derive(Debug, Clone)]
pub struct GetClientCommand {
    pub client_id: String,
}

#[derive(Debug, Clone)]
pub struct GetClientResult {
    pub client: Option<Client>,
}

#[derive(Debug, Clone)]
pub struct ListClientsResult {
    pub clients: Vec<Client>,
}

/// Update command with optional fields; `None` leaves the stored value as-is.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientCommand {
    pub client_id: String,
    pub name: Option<String>,
    pub contact: Option<String>,
    pub plan: Option<String>,
    pub monthly_value: Option<f64>,
    pub due_date: Option<u32>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone)]
pub struct UpdateClientResult {
    pub client: Client,
}

#[derive(Debug, Clone)]
pub struct DeleteClientCommand {
    pub client_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteClientResult {
    pub success_message: String,
}

#[derive(Debug, Clone)]
pub struct SetClientStatusCommand {
    pub client_id: String,
    pub status: Status,
}

#[derive(Debug, Clone)]
pub struct SetClientStatusResult {
    pub client: Client,
}

/// Client-side display filter matching the list screen: name substring
/// (case-insensitive), status, and plan name. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct ClientListFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub plan: Option<String>,
}
