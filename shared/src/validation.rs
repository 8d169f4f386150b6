//! Validation schema for the finance forms.
//!
//! Each form has a draft record holding the raw text of its inputs and a pure
//! `validate` function turning the draft into either the typed record that is
//! sent to the API or a field → message map. Nothing here has side effects, so
//! the UI can call it on every keystroke.

use crate::form::FormDraft;
use crate::{CreateAccountRequest, CreateTransactionRequest, TransactionType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character-length bounds for a text field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRule {
    pub min: usize,
    pub max: usize,
    /// Overrides the generic "at least N" message
    pub min_message: Option<&'static str>,
}

/// Numeric range for an amount field: `0 < amount <= max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRule {
    pub max: f64,
}

pub const NOTE_RULE: TextRule = TextRule {
    min: 3,
    max: 50,
    min_message: None,
};

pub const DESCRIPTION_RULE: TextRule = TextRule {
    min: 3,
    max: 100,
    min_message: Some("Description must be at least 3 char"),
};

pub const ACCOUNT_NAME_RULE: TextRule = TextRule {
    min: 3,
    max: 50,
    min_message: None,
};

pub const AMOUNT_RULE: AmountRule = AmountRule { max: 100_000.0 };

impl TextRule {
    /// Check a value against the bounds, counting characters rather than bytes
    pub fn check(&self, value: &str) -> Result<(), String> {
        let length = value.chars().count();
        if length < self.min {
            Err(self
                .min_message
                .map(str::to_string)
                .unwrap_or_else(|| format!("String must contain at least {} character(s)", self.min)))
        } else if length > self.max {
            Err(format!("String must contain at most {} character(s)", self.max))
        } else {
            Ok(())
        }
    }
}

impl AmountRule {
    /// Check an already parsed amount
    pub fn check(&self, amount: f64) -> Result<f64, String> {
        if !amount.is_finite() {
            Err("Expected number".to_string())
        } else if amount <= 0.0 {
            Err("Number must be greater than 0".to_string())
        } else if amount > self.max {
            Err(format!("Number must be less than or equal to {}", self.max))
        } else {
            Ok(amount)
        }
    }

    /// Parse the raw text of an amount input and check it
    pub fn parse(&self, input: &str) -> Result<f64, String> {
        let amount = input
            .trim()
            .parse::<f64>()
            .map_err(|_| "Expected number".to_string())?;
        self.check(amount)
    }
}

/// Reject an empty selection
pub fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Field name → human-readable message, in field order.
///
/// Only the first failure per field is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    /// Record the error side of a rule check, if any
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, message)| (*name, message.as_str()))
    }

    /// Keep only the entries for the given fields
    pub fn retain_fields(&self, mut keep: impl FnMut(&str) -> bool) -> FieldErrors {
        FieldErrors {
            entries: self
                .entries
                .iter()
                .filter(|(name, _)| keep(name))
                .cloned()
                .collect(),
        }
    }

    fn into_result<T>(self, value: Option<T>) -> Result<T, FieldErrors> {
        match value {
            Some(value) if self.is_empty() => Ok(value),
            _ => Err(self),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, message)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Raw input of the account creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountDraft {
    pub name: String,
}

impl AccountDraft {
    pub const NAME: &'static str = "name";
}

impl FormDraft for AccountDraft {
    type Output = CreateAccountRequest;

    const FIELDS: &'static [&'static str] = &[Self::NAME];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            Self::NAME => Some(self.name.as_str()),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            Self::NAME => Some(&mut self.name),
            _ => None,
        }
    }

    fn validate(&self) -> Result<CreateAccountRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check(Self::NAME, ACCOUNT_NAME_RULE.check(&self.name));

        errors.into_result(name.map(|_| CreateAccountRequest {
            name: self.name.clone(),
        }))
    }
}

/// Raw input of the transaction form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub transaction_type: String,
    pub amount: String,
    pub note: String,
    pub description: String,
    pub date: String,
    pub account_id: String,
    pub category_id: String,
}

impl TransactionDraft {
    pub const TYPE: &'static str = "type";
    pub const AMOUNT: &'static str = "amount";
    pub const NOTE: &'static str = "note";
    pub const DESCRIPTION: &'static str = "description";
    pub const DATE: &'static str = "date";
    pub const ACCOUNT_ID: &'static str = "accountId";
    pub const CATEGORY_ID: &'static str = "categoryId";
}

impl FormDraft for TransactionDraft {
    type Output = CreateTransactionRequest;

    const FIELDS: &'static [&'static str] = &[
        Self::TYPE,
        Self::AMOUNT,
        Self::NOTE,
        Self::DESCRIPTION,
        Self::DATE,
        Self::ACCOUNT_ID,
        Self::CATEGORY_ID,
    ];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            Self::TYPE => &self.transaction_type,
            Self::AMOUNT => &self.amount,
            Self::NOTE => &self.note,
            Self::DESCRIPTION => &self.description,
            Self::DATE => &self.date,
            Self::ACCOUNT_ID => &self.account_id,
            Self::CATEGORY_ID => &self.category_id,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            Self::TYPE => &mut self.transaction_type,
            Self::AMOUNT => &mut self.amount,
            Self::NOTE => &mut self.note,
            Self::DESCRIPTION => &mut self.description,
            Self::DATE => &mut self.date,
            Self::ACCOUNT_ID => &mut self.account_id,
            Self::CATEGORY_ID => &mut self.category_id,
            _ => return None,
        };
        Some(value)
    }

    fn validate(&self) -> Result<CreateTransactionRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let transaction_type = errors.check(
            Self::TYPE,
            self.transaction_type
                .parse::<TransactionType>()
                .map_err(|_| "Select income or expense".to_string()),
        );
        let amount = errors.check(Self::AMOUNT, AMOUNT_RULE.parse(&self.amount));
        errors.check(Self::NOTE, NOTE_RULE.check(&self.note));
        errors.check(Self::DESCRIPTION, DESCRIPTION_RULE.check(&self.description));
        errors.check(Self::DATE, required(&self.date, "Date is required"));
        errors.check(Self::ACCOUNT_ID, required(&self.account_id, "Select an account"));
        errors.check(Self::CATEGORY_ID, required(&self.category_id, "Select a category"));

        let request = match (transaction_type, amount) {
            (Some(transaction_type), Some(amount)) => Some(CreateTransactionRequest {
                transaction_type,
                amount,
                note: self.note.clone(),
                description: self.description.clone(),
                date: self.date.clone(),
                account_id: self.account_id.clone(),
                category_id: self.category_id.clone(),
            }),
            _ => None,
        };
        errors.into_result(request)
    }
}

/// Raw input of the quick expense form, which selects account and category by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub time: String,
    pub account: String,
    pub category: String,
    pub amount: String,
    pub note: String,
    pub description: String,
}

/// Validated output of the expense form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseFormData {
    pub time: String,
    pub account: String,
    pub category: String,
    pub amount: f64,
    pub note: String,
    pub description: String,
}

impl ExpenseDraft {
    pub const TIME: &'static str = "time";
    pub const ACCOUNT: &'static str = "account";
    pub const CATEGORY: &'static str = "category";
    pub const AMOUNT: &'static str = "amount";
    pub const NOTE: &'static str = "note";
    pub const DESCRIPTION: &'static str = "description";
}

impl FormDraft for ExpenseDraft {
    type Output = ExpenseFormData;

    const FIELDS: &'static [&'static str] = &[
        Self::TIME,
        Self::ACCOUNT,
        Self::CATEGORY,
        Self::AMOUNT,
        Self::NOTE,
        Self::DESCRIPTION,
    ];

    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            Self::TIME => &self.time,
            Self::ACCOUNT => &self.account,
            Self::CATEGORY => &self.category,
            Self::AMOUNT => &self.amount,
            Self::NOTE => &self.note,
            Self::DESCRIPTION => &self.description,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            Self::TIME => &mut self.time,
            Self::ACCOUNT => &mut self.account,
            Self::CATEGORY => &mut self.category,
            Self::AMOUNT => &mut self.amount,
            Self::NOTE => &mut self.note,
            Self::DESCRIPTION => &mut self.description,
            _ => return None,
        };
        Some(value)
    }

    fn validate(&self) -> Result<ExpenseFormData, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(Self::TIME, required(&self.time, "Time is required"));
        errors.check(Self::ACCOUNT, ACCOUNT_NAME_RULE.check(&self.account));
        errors.check(Self::CATEGORY, required(&self.category, "Select a category"));
        let amount = errors.check(Self::AMOUNT, AMOUNT_RULE.parse(&self.amount));
        errors.check(Self::NOTE, NOTE_RULE.check(&self.note));
        errors.check(Self::DESCRIPTION, DESCRIPTION_RULE.check(&self.description));

        errors.into_result(amount.map(|amount| ExpenseFormData {
            time: self.time.clone(),
            account: self.account.clone(),
            category: self.category.clone(),
            amount,
            note: self.note.clone(),
            description: self.description.clone(),
        }))
    }
}
