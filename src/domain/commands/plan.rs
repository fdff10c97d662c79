//! Commands and results for plan catalog operations.

use crate::domain::models::plan::Plan;

#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct CreatePlanResult {
    pub plan: Plan,
}

#[derive(Debug, Clone)]
pub struct GetPlanCommand {
    pub plan_id: String,
}

#[derive(Debug, Clone)]
pub struct GetPlanResult {
    pub plan: Option<Plan>,
}

#[derive(Debug, Clone)]
pub struct ListPlansResult {
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlanCommand {
    pub plan_id: String,
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct UpdatePlanResult {
    pub plan: Plan,
}

#[derive(Debug, Clone)]
pub struct DeletePlanCommand {
    pub plan_id: String,
}

#[derive(Debug, Clone)]
pub struct DeletePlanResult {
    pub success_message: String,
}
