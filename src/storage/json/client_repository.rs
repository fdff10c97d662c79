use anyhow::Result;
use log::{info, warn};

use super::connection::JsonConnection;
use super::{read_collection, write_collection};
use crate::domain::models::client::Client;
use crate::storage::traits::ClientStorage;

/// JSON-file client repository
#[derive(Debug, Clone)]
pub struct JsonClientRepository {
    connection: JsonConnection,
}

impl JsonClientRepository {
    /// Create a new JSON client repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load(&self) -> Result<Vec<Client>> {
        read_collection(&self.connection.clients_path())
    }

    fn save(&self, clients: &[Client]) -> Result<()> {
        write_collection(&self.connection.clients_path(), clients)
    }
}

impl ClientStorage for JsonClientRepository {
    fn store_client(&self, client: &Client) -> Result<()> {
        let mut clients = self.load()?;
        clients.push(client.clone());
        self.save(&clients)?;
        info!("Stored client {} ({})", client.name, client.id);
        Ok(())
    }

    fn get_client(&self, client_id: &str) -> Result<Option<Client>> {
        let clients = self.load()?;
        Ok(clients.into_iter().find(|c| c.id == client_id))
    }

    fn list_clients(&self) -> Result<Vec<Client>> {
        self.load()
    }

    fn update_client(&self, client: &Client) -> Result<()> {
        let mut clients = self.load()?;
        match clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => {
                *existing = client.clone();
                self.save(&clients)?;
                info!("Updated client {} ({})", client.name, client.id);
                Ok(())
            }
            None => {
                warn!("Attempted to update a non-existent client: {}", client.id);
                Err(anyhow::anyhow!("Client not found for update"))
            }
        }
    }

    fn delete_client(&self, client_id: &str) -> Result<()> {
        let mut clients = self.load()?;
        let before = clients.len();
        clients.retain(|c| c.id != client_id);
        if clients.len() == before {
            warn!("Attempted to delete a non-existent client: {}", client_id);
        } else {
            info!("Deleted client {}", client_id);
        }
        self.save(&clients)
    }

    fn replace_all(&self, clients: &[Client]) -> Result<()> {
        self.save(clients)?;
        info!("Replaced client collection with {} record(s)", clients.len());
        Ok(())
    }
}
