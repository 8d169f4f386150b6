use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod form;
pub mod reference;
pub mod transaction_table;
pub mod validation;

pub use form::{FormController, FormDraft, SubmitOutcome};
pub use reference::{ReferenceData, Session};
pub use transaction_table::{TransactionRow, TransactionTableService, TransactionTableView, TypeFilter};
pub use validation::{AccountDraft, ExpenseDraft, ExpenseFormData, FieldErrors, TransactionDraft};

/// Direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into an account
    Income,
    /// Money leaving an account
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// Wire and display label ("income" / "expense")
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid transaction type: {0}")]
pub struct ParseTransactionTypeError(pub String);

impl FromStr for TransactionType {
    type Err = ParseTransactionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ParseTransactionTypeError(other.to_string())),
        }
    }
}

/// A named money-holding bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

/// A named classification for a transaction, scoped to income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: TransactionType,
}

/// A single recorded money movement as returned by `GET /api/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Always positive; the direction comes from `transaction_type`
    pub amount: f64,
    pub note: String,
    pub description: String,
    /// Stored timestamp (RFC 3339 or plain `YYYY-MM-DD`)
    pub date: String,
    pub account_id: String,
    pub category_id: String,
    /// Embedded by the server when listing
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Body of `POST /api/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
}

/// Body of `POST /api/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub note: String,
    pub description: String,
    pub date: String,
    pub account_id: String,
    pub category_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_round_trips_through_str() {
        for transaction_type in TransactionType::ALL {
            let parsed: TransactionType = transaction_type.as_str().parse().unwrap();
            assert_eq!(parsed, transaction_type);
        }

        assert!("type".parse::<TransactionType>().is_err());
        assert!("Income".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_transaction_deserializes_with_embedded_references() {
        let json = r#"{
            "id": "t1",
            "type": "expense",
            "amount": 12.5,
            "note": "lunch",
            "description": "sandwich downtown",
            "date": "2023-05-07T10:00:00.000Z",
            "accountId": "a1",
            "categoryId": "c1",
            "userId": "u1",
            "account": {"id": "a1", "name": "Wallet", "userId": "u1", "createdAt": "x"},
            "category": {"id": "c1", "name": "Food", "type": "expense"}
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(transaction.account_id, "a1");
        assert_eq!(transaction.account.unwrap().name, "Wallet");
        assert_eq!(transaction.category.unwrap().category_type, TransactionType::Expense);
    }

    #[test]
    fn test_transaction_without_embedded_references() {
        let json = r#"{
            "id": "t2",
            "type": "income",
            "amount": 100,
            "note": "pay",
            "description": "monthly salary",
            "date": "2023-05-01",
            "accountId": "a1",
            "categoryId": "c2"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert!(transaction.account.is_none());
        assert!(transaction.category.is_none());
        assert_eq!(transaction.amount, 100.0);
    }

    #[test]
    fn test_create_transaction_request_uses_camel_case() {
        let request = CreateTransactionRequest {
            transaction_type: TransactionType::Income,
            amount: 10.0,
            note: "gift".to_string(),
            description: "birthday gift".to_string(),
            date: "2023-05-01".to_string(),
            account_id: "a1".to_string(),
            category_id: "c1".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["accountId"], "a1");
        assert_eq!(value["categoryId"], "c1");
        assert!(value.get("account_id").is_none());
    }
}
