use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Engine input/output types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub payer: String,
    pub recipients: Vec<String>,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub user: String,
    pub balance: f64, // positive = owed money, negative = owes money
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

// Ledger row type
#[derive(Debug, Clone)]
pub struct ExpenseRow {
    pub id: Uuid,
    pub payer: String,
    pub recipients: Vec<String>,
    pub amount: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// API response types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub payer: String,
    pub recipients: Vec<String>,
    pub amount: f64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub payer: String,
    pub recipients: Vec<String>,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub payer: String,
    pub recipients: Vec<String>,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct SettleRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

// Conversion helpers
impl From<&ExpenseRow> for ExpenseRecord {
    fn from(row: &ExpenseRow) -> Self {
        ExpenseRecord {
            payer: row.payer.clone(),
            recipients: row.recipients.clone(),
            amount: row.amount,
            description: row.description.clone(),
        }
    }
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id,
            payer: row.payer,
            recipients: row.recipients,
            amount: row.amount,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_description_defaults_to_empty() {
        let request: CreateExpenseRequest =
            serde_json::from_str(r#"{"payer":"A","recipients":["A","B"],"amount":12.5}"#)
                .expect("request should deserialize");
        assert_eq!(request.payer, "A");
        assert_eq!(request.recipients, vec!["A", "B"]);
        assert_eq!(request.amount, 12.5);
        assert_eq!(request.description, "");
    }

    #[test]
    fn settlement_serializes_with_from_to_amount() {
        let settlement = Settlement {
            from: "B".to_string(),
            to: "A".to_string(),
            amount: 50.0,
        };
        let json = serde_json::to_value(&settlement).expect("settlement should serialize");
        assert_eq!(
            json,
            serde_json::json!({"from": "B", "to": "A", "amount": 50.0})
        );
    }
}
