//! # In-Memory Storage Module
//!
//! A process-local backend holding both collections behind `Arc<Mutex<_>>`.
//! It implements the same storage traits as the JSON backend, which keeps the
//! domain layer honest about being storage-agnostic, and it is the backend of
//! choice for tests that do not care about files. The hosted document-store
//! and relational backends of the original deployment would plug in at the
//! same trait seam.

use anyhow::Result;
use std::sync::{Arc, Mutex};

use crate::domain::models::client::Client;
use crate::domain::models::plan::Plan;
use crate::storage::traits::{ClientStorage, Connection, PlanStorage};

/// Connection for the in-memory backend. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
    clients: Arc<Mutex<Vec<Client>>>,
    plans: Arc<Mutex<Vec<Plan>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for MemoryConnection {
    type ClientRepository = MemoryClientRepository;
    type PlanRepository = MemoryPlanRepository;

    fn create_client_repository(&self) -> Self::ClientRepository {
        MemoryClientRepository {
            clients: self.clients.clone(),
        }
    }

    fn create_plan_repository(&self) -> Self::PlanRepository {
        MemoryPlanRepository {
            plans: self.plans.clone(),
        }
    }
}

/// In-memory client repository
#[derive(Debug, Clone)]
pub struct MemoryClientRepository {
    clients: Arc<Mutex<Vec<Client>>>,
}

impl MemoryClientRepository {
    fn with_clients<T>(&self, f: impl FnOnce(&mut Vec<Client>) -> T) -> Result<T> {
        let mut guard = self
            .clients
            .lock()
            .map_err(|_| anyhow::anyhow!("client store lock poisoned"))?;
        Ok(f(&mut guard))
    }
}

impl ClientStorage for MemoryClientRepository {
    fn store_client(&self, client: &Client) -> Result<()> {
        self.with_clients(|clients| clients.push(client.clone()))
    }

    fn get_client(&self, client_id: &str) -> Result<Option<Client>> {
        self.with_clients(|clients| clients.iter().find(|c| c.id == client_id).cloned())
    }

    fn list_clients(&self) -> Result<Vec<Client>> {
        self.with_clients(|clients| clients.clone())
    }

    fn update_client(&self, client: &Client) -> Result<()> {
        self.with_clients(|clients| {
            match clients.iter_mut().find(|c| c.id == client.id) {
                Some(existing) => {
                    *existing = client.clone();
                    Ok(())
                }
                None => Err(anyhow::anyhow!("Client not found for update")),
            }
        })?
    }

    fn delete_client(&self, client_id: &str) -> Result<()> {
        self.with_clients(|clients| clients.retain(|c| c.id != client_id))
    }

    fn replace_all(&self, new_clients: &[Client]) -> Result<()> {
        self.with_clients(|clients| *clients = new_clients.to_vec())
    }
}

/// In-memory plan catalog repository
#[derive(Debug, Clone)]
pub struct MemoryPlanRepository {
    plans: Arc<Mutex<Vec<Plan>>>,
}

impl MemoryPlanRepository {
    fn with_plans<T>(&self, f: impl FnOnce(&mut Vec<Plan>) -> T) -> Result<T> {
        let mut guard = self
            .plans
            .lock()
            .map_err(|_| anyhow::anyhow!("plan store lock poisoned"))?;
        Ok(f(&mut guard))
    }
}

impl PlanStorage for MemoryPlanRepository {
    fn store_plan(&self, plan: &Plan) -> Result<()> {
        self.with_plans(|plans| plans.push(plan.clone()))
    }

    fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>> {
        self.with_plans(|plans| plans.iter().find(|p| p.id == plan_id).cloned())
    }

    fn list_plans(&self) -> Result<Vec<Plan>> {
        self.with_plans(|plans| plans.clone())
    }

    fn update_plan(&self, plan: &Plan) -> Result<()> {
        self.with_plans(|plans| {
            match plans.iter_mut().find(|p| p.id == plan.id) {
                Some(existing) => {
                    *existing = plan.clone();
                    Ok(())
                }
                None => Err(anyhow::anyhow!("Plan not found for update")),
            }
        })?
    }

    fn delete_plan(&self, plan_id: &str) -> Result<()> {
        self.with_plans(|plans| plans.retain(|p| p.id != plan_id))
    }
}
