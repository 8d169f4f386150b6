pub mod transaction_page;
pub mod transaction_table;

pub use transaction_page::TransactionPage;
