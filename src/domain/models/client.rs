use serde::{Deserialize, Serialize};

/// Subscription status of a client.
///
/// The serialized literals (`"Ativo"` / `"Inativo"`) are the values used in
/// stored data and backup files, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Ativo")]
    Active,
    #[serde(rename = "Inativo")]
    Inactive,
}

impl Status {
    /// Parse a stored status literal. Anything outside the closed set is `None`.
    pub fn from_literal(value: &str) -> Option<Status> {
        match value {
            "Ativo" => Some(Status::Active),
            "Inativo" => Some(Status::Inactive),
            _ => None,
        }
    }

    /// The stored literal for this status.
    pub fn as_literal(&self) -> &'static str {
        match self {
            Status::Active => "Ativo",
            Status::Inactive => "Inativo",
        }
    }
}

/// Domain model representing a subscriber in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Phone/messaging handle. Empty string means "no contact".
    #[serde(default)]
    pub contact: String,
    /// Plan referenced by name, not by id. May name a plan that is no longer
    /// in the catalog (an archived plan); such clients stay fully usable.
    pub plan: String,
    /// Billed amount, snapshotted when the plan was assigned. Changing the
    /// catalog price later does not touch this.
    pub monthly_value: f64,
    /// Recurring day-of-month billing anchor in 1..=31, not a calendar date.
    pub due_date: u32,
    pub status: Status,
}

impl Client {
    /// Generate a unique ID for a client
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("client::{}", timestamp_millis)
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_literals_round_trip() {
        assert_eq!(Status::from_literal("Ativo"), Some(Status::Active));
        assert_eq!(Status::from_literal("Inativo"), Some(Status::Inactive));
        assert_eq!(Status::from_literal("Bogus"), None);
        assert_eq!(Status::from_literal(""), None);
        assert_eq!(Status::Active.as_literal(), "Ativo");
        assert_eq!(Status::Inactive.as_literal(), "Inativo");
    }

    #[test]
    fn test_client_serializes_with_camel_case_fields() {
        let client = Client {
            id: "client::1".to_string(),
            name: "João Silva".to_string(),
            contact: "5511987654321".to_string(),
            plan: "2 TELAS".to_string(),
            monthly_value: 35.0,
            due_date: 10,
            status: Status::Active,
        };

        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["monthlyValue"], 35.0);
        assert_eq!(json["dueDate"], 10);
        assert_eq!(json["status"], "Ativo");

        let back: Client = serde_json::from_value(json).unwrap();
        assert_eq!(back, client);
    }

    #[test]
    fn test_client_deserializes_without_contact() {
        let json = r#"{"id":"client::1","name":"A","plan":"X","monthlyValue":10.0,"dueDate":5,"status":"Ativo"}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.contact, "");
    }
}
