use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::commands::plan::{
    CreatePlanCommand, CreatePlanResult, DeletePlanCommand, DeletePlanResult, GetPlanCommand,
    GetPlanResult, ListPlansResult, UpdatePlanCommand, UpdatePlanResult,
};
use crate::domain::models::plan::{default_catalog, Plan};
use crate::storage::traits::{Connection, PlanStorage};

/// Service for managing the plan catalog
#[derive(Clone)]
pub struct PlanService<C: Connection> {
    plan_repository: C::PlanRepository,
}

impl<C: Connection> PlanService<C> {
    /// Create a new PlanService
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            plan_repository: connection.create_plan_repository(),
        }
    }

    /// Seed the default catalog when the plan store is empty (first run).
    /// Returns the number of plans created.
    pub fn ensure_default_plans(&self) -> Result<usize> {
        if !self.plan_repository.list_plans()?.is_empty() {
            return Ok(0);
        }

        let defaults = default_catalog();
        for (offset, (name, price)) in defaults.iter().enumerate() {
            let plan = Plan {
                // Offset keeps seeded ids distinct within one millisecond.
                id: Plan::generate_id(Utc::now().timestamp_millis() as u64 + offset as u64),
                name: name.to_string(),
                price: *price,
            };
            self.plan_repository.store_plan(&plan)?;
        }

        info!("Seeded {} default plans", defaults.len());
        Ok(defaults.len())
    }

    /// Create a new plan
    pub fn create_plan(&self, command: CreatePlanCommand) -> Result<CreatePlanResult> {
        info!("Creating plan: name={}, price={}", command.name, command.price);

        validate_plan_fields(&command.name, command.price)?;

        let plan = Plan {
            id: Plan::generate_id(Utc::now().timestamp_millis() as u64),
            name: command.name.trim().to_string(),
            price: command.price,
        };

        self.plan_repository.store_plan(&plan)?;

        info!("Created plan: {} with ID: {}", plan.name, plan.id);

        Ok(CreatePlanResult { plan })
    }

    /// Get a plan by ID
    pub fn get_plan(&self, command: GetPlanCommand) -> Result<GetPlanResult> {
        let plan = self.plan_repository.get_plan(&command.plan_id)?;

        if plan.is_none() {
            warn!("Plan not found: {}", command.plan_id);
        }

        Ok(GetPlanResult { plan })
    }

    /// List all plans
    pub fn list_plans(&self) -> Result<ListPlansResult> {
        let plans = self.plan_repository.list_plans()?;
        Ok(ListPlansResult { plans })
    }

    /// Snapshot of the current plan names, for passing into import and
    /// renewal call sites as an explicit read-only parameter.
    pub fn plan_names(&self) -> Result<HashSet<String>> {
        Ok(self
            .plan_repository
            .list_plans()?
            .into_iter()
            .map(|plan| plan.name)
            .collect())
    }

    /// Update an existing plan. Changing a price never touches existing
    /// clients' monthly values; those are snapshots taken at assignment.
    pub fn update_plan(&self, command: UpdatePlanCommand) -> Result<UpdatePlanResult> {
        info!("Updating plan: {}", command.plan_id);

        let mut plan = self
            .plan_repository
            .get_plan(&command.plan_id)?
            .ok_or_else(|| anyhow::anyhow!("Plan not found: {}", command.plan_id))?;

        if let Some(name) = command.name {
            if name.trim().is_empty() {
                return Err(anyhow::anyhow!("Plan name cannot be empty"));
            }
            plan.name = name.trim().to_string();
        }
        if let Some(price) = command.price {
            if !price.is_finite() || price < 0.0 {
                return Err(anyhow::anyhow!("Plan price cannot be negative"));
            }
            plan.price = price;
        }

        self.plan_repository.update_plan(&plan)?;

        info!("Updated plan: {} with ID: {}", plan.name, plan.id);

        Ok(UpdatePlanResult { plan })
    }

    /// Delete a plan from the catalog. Clients referencing it by name are
    /// left untouched and become archived-plan clients.
    pub fn delete_plan(&self, command: DeletePlanCommand) -> Result<DeletePlanResult> {
        info!("Deleting plan: {}", command.plan_id);

        let plan = self
            .plan_repository
            .get_plan(&command.plan_id)?
            .ok_or_else(|| anyhow::anyhow!("Plan not found: {}", command.plan_id))?;

        self.plan_repository.delete_plan(&command.plan_id)?;

        info!(
            "Deleted plan: {}; clients on it keep the name as an archived plan",
            plan.name
        );

        Ok(DeletePlanResult {
            success_message: format!("Plan '{}' deleted successfully", plan.name),
        })
    }
}

fn validate_plan_fields(name: &str, price: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow::anyhow!("Plan name cannot be empty"));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(anyhow::anyhow!("Plan price cannot be negative"));
    }
    Ok(())
}
