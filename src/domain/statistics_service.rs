//! Aggregates for the dashboard and statistics views.
//!
//! Everything here is derived from the current client list on each load and
//! owns no state of its own.

use std::collections::HashMap;

use crate::domain::models::client::Client;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub active_clients: usize,
    pub inactive_clients: usize,
    /// Sum of active clients' monthly values. Inactive clients contribute
    /// nothing.
    pub monthly_revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub monthly: f64,
    pub annual: f64,
}

/// Subscriber count for one plan name, including archived plan names that
/// clients still reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanPopularity {
    pub plan: String,
    pub count: usize,
}

/// Statistics service that computes aggregates over a client snapshot
#[derive(Clone, Default)]
pub struct StatisticsService;

impl StatisticsService {
    pub fn new() -> Self {
        Self
    }

    /// Totals and revenue for the dashboard header cards.
    pub fn dashboard_summary(&self, clients: &[Client]) -> DashboardSummary {
        let total_clients = clients.len();
        let active_clients = clients.iter().filter(|c| c.is_active()).count();
        let monthly_revenue = clients
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.monthly_value)
            .sum();

        DashboardSummary {
            total_clients,
            active_clients,
            inactive_clients: total_clients - active_clients,
            monthly_revenue,
        }
    }

    /// Monthly and projected annual revenue over active clients.
    pub fn revenue(&self, clients: &[Client]) -> RevenueSummary {
        let monthly: f64 = clients
            .iter()
            .filter(|c| c.is_active())
            .map(|c| c.monthly_value)
            .sum();

        RevenueSummary {
            monthly,
            annual: monthly * 12.0,
        }
    }

    /// Subscriber count per plan name over all clients (active and
    /// inactive), most popular first. Ties break by plan name so the
    /// ordering is deterministic.
    pub fn plan_popularity(&self, clients: &[Client]) -> Vec<PlanPopularity> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for client in clients {
            *counts.entry(client.plan.as_str()).or_insert(0) += 1;
        }

        let mut popularity: Vec<PlanPopularity> = counts
            .into_iter()
            .map(|(plan, count)| PlanPopularity {
                plan: plan.to_string(),
                count,
            })
            .collect();
        popularity.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.plan.cmp(&b.plan)));
        popularity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::client::Status;

    fn client(name: &str, plan: &str, monthly_value: f64, status: Status) -> Client {
        Client {
            id: format!("client::{}", name),
            name: name.to_string(),
            contact: String::new(),
            plan: plan.to_string(),
            monthly_value,
            due_date: 10,
            status,
        }
    }

    fn sample_clients() -> Vec<Client> {
        vec![
            client("A", "2 TELAS", 35.0, Status::Active),
            client("B", "1 TELA", 25.0, Status::Active),
            client("C", "1 TELA", 25.0, Status::Inactive),
            client("D", "OLD PLAN", 45.0, Status::Active),
        ]
    }

    #[test]
    fn test_dashboard_summary() {
        let service = StatisticsService::new();
        let summary = service.dashboard_summary(&sample_clients());

        assert_eq!(summary.total_clients, 4);
        assert_eq!(summary.active_clients, 3);
        assert_eq!(summary.inactive_clients, 1);
        assert_eq!(summary.monthly_revenue, 105.0);
    }

    #[test]
    fn test_dashboard_summary_empty() {
        let service = StatisticsService::new();
        let summary = service.dashboard_summary(&[]);

        assert_eq!(summary.total_clients, 0);
        assert_eq!(summary.monthly_revenue, 0.0);
    }

    #[test]
    fn test_revenue_is_monthly_times_twelve() {
        let service = StatisticsService::new();
        let revenue = service.revenue(&sample_clients());

        assert_eq!(revenue.monthly, 105.0);
        assert_eq!(revenue.annual, 1260.0);
    }

    #[test]
    fn test_plan_popularity_counts_all_clients_sorted_desc() {
        let service = StatisticsService::new();
        let popularity = service.plan_popularity(&sample_clients());

        // "1 TELA" counts the inactive client too; archived "OLD PLAN" shows up.
        assert_eq!(popularity[0].plan, "1 TELA");
        assert_eq!(popularity[0].count, 2);
        assert_eq!(popularity.len(), 3);
        let singles: Vec<&str> = popularity[1..].iter().map(|p| p.plan.as_str()).collect();
        assert_eq!(singles, vec!["2 TELAS", "OLD PLAN"]);
    }
}
