//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::client::Client;
use crate::domain::models::plan::Plan;

/// Trait defining the interface for client storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different backends (local JSON
/// files, hosted document stores, relational stores) without modification.
pub trait ClientStorage: Send + Sync {
    /// Store a new client
    fn store_client(&self, client: &Client) -> Result<()>;

    /// Retrieve a specific client by ID
    fn get_client(&self, client_id: &str) -> Result<Option<Client>>;

    /// List all clients in stored order
    fn list_clients(&self) -> Result<Vec<Client>>;

    /// Update an existing client
    fn update_client(&self, client: &Client) -> Result<()>;

    /// Delete a client by ID
    fn delete_client(&self, client_id: &str) -> Result<()>;

    /// Replace the entire client collection with `clients`.
    /// Used by the bulk import; atomic from the operator's point of view.
    fn replace_all(&self, clients: &[Client]) -> Result<()>;
}

/// Trait defining the interface for plan catalog storage operations
pub trait PlanStorage: Send + Sync {
    /// Store a new plan
    fn store_plan(&self, plan: &Plan) -> Result<()>;

    /// Retrieve a specific plan by ID
    fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>>;

    /// List all plans in stored order
    fn list_plans(&self) -> Result<Vec<Plan>>;

    /// Update an existing plan
    fn update_plan(&self, plan: &Plan) -> Result<()>;

    /// Delete a plan by ID. Clients referencing the plan by name are never
    /// touched; they become archived-plan clients.
    fn delete_plan(&self, plan_id: &str) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// A connection is the factory for the concrete repositories of one backend.
/// Services are generic over this trait, so the backend is chosen once at
/// wiring time and never branched on inside domain logic.
pub trait Connection: Send + Sync + Clone {
    /// The type of ClientStorage this connection creates
    type ClientRepository: ClientStorage + Clone;

    /// The type of PlanStorage this connection creates
    type PlanRepository: PlanStorage + Clone;

    /// Create a new client repository for this connection
    fn create_client_repository(&self) -> Self::ClientRepository;

    /// Create a new plan repository for this connection
    fn create_plan_repository(&self) -> Self::PlanRepository;
}
