use anyhow::Result;
use log::{info, warn};

use super::connection::JsonConnection;
use super::{read_collection, write_collection};
use crate::domain::models::plan::Plan;
use crate::storage::traits::PlanStorage;

/// JSON-file plan catalog repository
#[derive(Debug, Clone)]
pub struct JsonPlanRepository {
    connection: JsonConnection,
}

impl JsonPlanRepository {
    /// Create a new JSON plan repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load(&self) -> Result<Vec<Plan>> {
        read_collection(&self.connection.plans_path())
    }

    fn save(&self, plans: &[Plan]) -> Result<()> {
        write_collection(&self.connection.plans_path(), plans)
    }
}

impl PlanStorage for JsonPlanRepository {
    fn store_plan(&self, plan: &Plan) -> Result<()> {
        let mut plans = self.load()?;
        plans.push(plan.clone());
        self.save(&plans)?;
        info!("Stored plan {} ({})", plan.name, plan.id);
        Ok(())
    }

    fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>> {
        let plans = self.load()?;
        Ok(plans.into_iter().find(|p| p.id == plan_id))
    }

    fn list_plans(&self) -> Result<Vec<Plan>> {
        self.load()
    }

    fn update_plan(&self, plan: &Plan) -> Result<()> {
        let mut plans = self.load()?;
        match plans.iter_mut().find(|p| p.id == plan.id) {
            Some(existing) => {
                *existing = plan.clone();
                self.save(&plans)?;
                info!("Updated plan {} ({})", plan.name, plan.id);
                Ok(())
            }
            None => {
                warn!("Attempted to update a non-existent plan: {}", plan.id);
                Err(anyhow::anyhow!("Plan not found for update"))
            }
        }
    }

    fn delete_plan(&self, plan_id: &str) -> Result<()> {
        let mut plans = self.load()?;
        let before = plans.len();
        plans.retain(|p| p.id != plan_id);
        if plans.len() == before {
            warn!("Attempted to delete a non-existent plan: {}", plan_id);
        } else {
            info!("Deleted plan {}", plan_id);
        }
        self.save(&plans)
    }
}
