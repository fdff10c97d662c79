use serde::{Deserialize, Serialize};

/// Domain model representing a reusable pricing template.
///
/// Clients join to plans by `name`, by value. Deleting a plan leaves clients
/// referencing it untouched; its name then counts as an archived plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// Current monthly price for new or updated assignments. Existing clients
    /// keep the `monthly_value` they were assigned with.
    pub price: f64,
}

impl Plan {
    /// Generate a unique ID for a plan
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("plan::{}", timestamp_millis)
    }
}

/// Catalog seeded on first run when the plan store is empty.
pub fn default_catalog() -> Vec<(&'static str, f64)> {
    vec![
        ("1 TELA", 25.0),
        ("2 TELAS", 35.0),
        ("1 TELA + YouTube_P", 45.0),
        ("2 TELAS + YouTube_P", 55.0),
    ]
}
