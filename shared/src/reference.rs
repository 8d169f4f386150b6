//! Session and reference data handed to components as plain values.

use crate::form::FormController;
use crate::validation::{ExpenseFormData, TransactionDraft};
use crate::{Account, Category, CreateTransactionRequest, TransactionType};

/// Credentials attached to every API request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }
}

/// Accounts and categories used to populate selectors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub accounts: Vec<Account>,
    pub income_categories: Vec<Category>,
    pub expense_categories: Vec<Category>,
}

/// Why a validated expense could not become a transaction request
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseResolveError {
    #[error("Expense time is required")]
    MissingTime,
    #[error("Unknown account: {0}")]
    UnknownAccount(String),
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),
}

impl ReferenceData {
    /// Split a flat category list by type, keeping server order within each
    pub fn from_parts(accounts: Vec<Account>, categories: Vec<Category>) -> Self {
        let (income_categories, expense_categories) = categories
            .into_iter()
            .partition(|category| category.category_type == TransactionType::Income);

        Self {
            accounts,
            income_categories,
            expense_categories,
        }
    }

    /// Expense categories followed by income categories
    pub fn categories(&self) -> Vec<Category> {
        self.expense_categories
            .iter()
            .chain(self.income_categories.iter())
            .cloned()
            .collect()
    }

    pub fn categories_for(&self, transaction_type: TransactionType) -> &[Category] {
        match transaction_type {
            TransactionType::Income => &self.income_categories,
            TransactionType::Expense => &self.expense_categories,
        }
    }

    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    pub fn category_by_name(&self, name: &str, transaction_type: TransactionType) -> Option<&Category> {
        self.categories_for(transaction_type)
            .iter()
            .find(|category| category.name == name)
    }

    /// Apply a type selection to the transaction form, dropping the chosen
    /// category when the new type does not offer it
    pub fn select_transaction_type(&self, form: &mut FormController<TransactionDraft>, value: &str) {
        form.set_field(TransactionDraft::TYPE, value);

        let Ok(transaction_type) = value.parse::<TransactionType>() else {
            return;
        };
        let category_id = form.value(TransactionDraft::CATEGORY_ID);
        let offered = self
            .categories_for(transaction_type)
            .iter()
            .any(|category| category.id == category_id);
        if !category_id.is_empty() && !offered {
            form.set_field(TransactionDraft::CATEGORY_ID, "");
        }
    }

    /// Turn a validated expense form into a transaction request by looking up
    /// the selected account and category names
    pub fn resolve_expense(&self, data: &ExpenseFormData) -> Result<CreateTransactionRequest, ExpenseResolveError> {
        if data.time.trim().is_empty() {
            return Err(ExpenseResolveError::MissingTime);
        }
        let account = self
            .account_by_name(&data.account)
            .ok_or_else(|| ExpenseResolveError::UnknownAccount(data.account.clone()))?;
        let category = self
            .category_by_name(&data.category, TransactionType::Expense)
            .ok_or_else(|| ExpenseResolveError::UnknownCategory(data.category.clone()))?;

        Ok(CreateTransactionRequest {
            transaction_type: TransactionType::Expense,
            amount: data.amount,
            note: data.note.clone(),
            description: data.description.clone(),
            date: data.time.clone(),
            account_id: account.id.clone(),
            category_id: category.id.clone(),
        })
    }
}
