pub mod account_form;
pub mod expense_form;
pub mod field;
pub mod transaction_form;

pub use account_form::AccountForm;
pub use expense_form::ExpenseForm;
pub use transaction_form::TransactionForm;
