//! Transaction table presentation logic.
//!
//! Turns the list returned by `GET /api/transactions` into display rows:
//! dates are reduced to `year-month-day`, rows can be narrowed to one
//! transaction type, the newest fetched row comes first, and the footer total
//! is the sum of whatever is currently visible.

use crate::{Transaction, TransactionType};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Type selector in the table header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    /// Parse the value of the header select; anything but a transaction type
    /// (including the `type` placeholder) shows every row
    pub fn from_select_value(value: &str) -> Self {
        value
            .parse::<TransactionType>()
            .map(TypeFilter::Only)
            .unwrap_or(TypeFilter::All)
    }

    pub fn matches(&self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(only) => *only == transaction_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_select_value(s))
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub formatted_amount: String,
    pub account_name: String,
    pub category_name: String,
    pub note: String,
    pub description: String,
}

/// Rows to render plus the footer total
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionTableView {
    pub rows: Vec<TransactionRow>,
    pub total: f64,
    pub formatted_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionTableConfig {
    pub currency_symbol: String,
    /// Show the last fetched row first
    pub newest_first: bool,
}

impl Default for TransactionTableConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            newest_first: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionTableService {
    config: TransactionTableConfig,
}

impl TransactionTableService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TransactionTableConfig) -> Self {
        Self { config }
    }

    /// Build the visible table for a fetched list and the selected filter
    pub fn build_view(&self, transactions: &[Transaction], filter: TypeFilter) -> TransactionTableView {
        let mut rows = Self::filter_rows(self.format_rows(transactions), filter);
        if self.config.newest_first {
            rows.reverse();
        }

        let total = Self::visible_total(&rows);
        TransactionTableView {
            formatted_total: self.format_total(total),
            rows,
            total,
        }
    }

    /// Format every transaction, keeping fetch order
    pub fn format_rows(&self, transactions: &[Transaction]) -> Vec<TransactionRow> {
        transactions
            .iter()
            .map(|transaction| self.format_row(transaction))
            .collect()
    }

    pub fn format_row(&self, transaction: &Transaction) -> TransactionRow {
        TransactionRow {
            id: transaction.id.clone(),
            date: Self::format_date(&transaction.date),
            transaction_type: transaction.transaction_type,
            amount: transaction.amount,
            formatted_amount: format!("{} {}", self.config.currency_symbol, transaction.amount),
            account_name: transaction
                .account
                .as_ref()
                .map(|account| account.name.clone())
                .unwrap_or_default(),
            category_name: transaction
                .category
                .as_ref()
                .map(|category| category.name.clone())
                .unwrap_or_default(),
            note: transaction.note.clone(),
            description: transaction.description.clone(),
        }
    }

    pub fn filter_rows(rows: Vec<TransactionRow>, filter: TypeFilter) -> Vec<TransactionRow> {
        rows.into_iter()
            .filter(|row| filter.matches(row.transaction_type))
            .collect()
    }

    pub fn visible_total(rows: &[TransactionRow]) -> f64 {
        rows.iter().fold(0.0, |total, row| total + row.amount)
    }

    /// Footer total rounded to two decimals, without currency symbol.
    ///
    /// Ties round away from zero, so `0.125` shows as `0.13`.
    pub fn format_total(&self, total: f64) -> String {
        let rounded = (total * 100.0).round() / 100.0;
        format!("{:.2}", rounded)
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Reduce a stored timestamp to unpadded `year-month-day`.
    ///
    /// The calendar date is taken in the offset the timestamp was written
    /// with. Values that are not a recognised date are returned unchanged.
    pub fn format_date(raw: &str) -> String {
        match Self::parse_date(raw) {
            Some(date) => format!("{}-{}-{}", date.year(), date.month(), date.day()),
            None => raw.to_string(),
        }
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.date_naive());
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(timestamp.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Account, Category};

    fn create_test_transaction(id: &str, transaction_type: TransactionType, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            transaction_type,
            amount,
            note: "note".to_string(),
            description: "description".to_string(),
            date: date.to_string(),
            account_id: "a1".to_string(),
            category_id: "c1".to_string(),
            account: Some(Account {
                id: "a1".to_string(),
                name: "Wallet".to_string(),
            }),
            category: Some(Category {
                id: "c1".to_string(),
                name: "General".to_string(),
                category_type: transaction_type,
            }),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            create_test_transaction("t1", TransactionType::Income, 10.0, "2023-01-05T10:00:00Z"),
            create_test_transaction("t2", TransactionType::Expense, 5.0, "2023-01-06T10:00:00Z"),
            create_test_transaction("t3", TransactionType::Income, 2.35, "2023-12-31T23:00:00Z"),
        ]
    }

    #[test]
    fn test_filter_expense_example() {
        let service = TransactionTableService::new();
        let transactions = vec![
            create_test_transaction("t1", TransactionType::Income, 10.0, "2023-01-05"),
            create_test_transaction("t2", TransactionType::Expense, 5.0, "2023-01-06"),
        ];

        let view = service.build_view(&transactions, TypeFilter::from_select_value("expense"));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].amount, 5.0);
        assert_eq!(view.total, 5.0);
        assert_eq!(view.formatted_total, "5.00");
    }

    #[test]
    fn test_income_filter_only_income_rows() {
        let view = TransactionTableService::new()
            .build_view(&sample(), TypeFilter::Only(TransactionType::Income));
        assert_eq!(view.rows.len(), 2);
        assert!(view
            .rows
            .iter()
            .all(|row| row.transaction_type == TransactionType::Income));
    }

    #[test]
    fn test_no_filter_shows_all_in_reverse_fetch_order() {
        let view = TransactionTableService::new().build_view(&sample(), TypeFilter::All);
        let ids: Vec<_> = view.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t2", "t1"]);
        assert_eq!(view.formatted_total, "17.35");
    }

    #[test]
    fn test_fetch_order_kept_when_configured() {
        let service = TransactionTableService::with_config(TransactionTableConfig {
            newest_first: false,
            ..TransactionTableConfig::default()
        });
        let view = service.build_view(&sample(), TypeFilter::All);
        assert_eq!(view.rows[0].id, "t1");
    }

    #[test]
    fn test_select_placeholder_means_all() {
        assert_eq!(TypeFilter::from_select_value("type"), TypeFilter::All);
        assert_eq!(TypeFilter::from_select_value(""), TypeFilter::All);
        assert_eq!(
            "income".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(TransactionType::Income)
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(TransactionTableService::format_date("2023-01-05T10:00:00Z"), "2023-1-5");
        assert_eq!(TransactionTableService::format_date("2023-11-25T10:00:00.000Z"), "2023-11-25");
        assert_eq!(TransactionTableService::format_date("2023-03-09T23:30:00-04:00"), "2023-3-9");
        assert_eq!(TransactionTableService::format_date("2023-03-09T08:15:00"), "2023-3-9");
        assert_eq!(TransactionTableService::format_date("2024-02-29"), "2024-2-29");
        assert_eq!(TransactionTableService::format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_row() {
        let mut transaction = create_test_transaction("t9", TransactionType::Expense, 12.5, "2023-05-07");
        transaction.category = None;

        let row = TransactionTableService::new().format_row(&transaction);
        assert_eq!(row.date, "2023-5-7");
        assert_eq!(row.formatted_amount, "$ 12.5");
        assert_eq!(row.account_name, "Wallet");
        assert_eq!(row.category_name, "");
    }

    #[test]
    fn test_empty_table() {
        let view = TransactionTableService::new().build_view(&[], TypeFilter::All);
        assert!(view.rows.is_empty());
        assert_eq!(view.formatted_total, "0.00");
    }

    #[test]
    fn test_filter_without_matches_totals_zero() {
        let transactions = vec![
            create_test_transaction("t1", TransactionType::Income, 10.0, "2023-01-05"),
            create_test_transaction("t2", TransactionType::Income, 4.0, "2023-01-06"),
        ];

        let view = TransactionTableService::new()
            .build_view(&transactions, TypeFilter::Only(TransactionType::Expense));
        assert!(view.rows.is_empty());
        assert_eq!(view.total, 0.0);
        assert!(view.total.is_sign_positive());
        assert_eq!(view.formatted_total, "0.00");
    }

    #[test]
    fn test_format_total_rounds_ties_up() {
        let service = TransactionTableService::new();
        assert_eq!(service.format_total(0.125), "0.13");
        assert_eq!(service.format_total(2.5), "2.50");
        assert_eq!(service.format_total(17.35), "17.35");
    }
}
