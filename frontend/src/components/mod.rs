pub mod accounts;
pub mod forms;
pub mod header;
pub mod transactions;
