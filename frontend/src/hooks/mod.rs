pub mod use_accounts;
pub mod use_reference_data;
pub mod use_transactions;
pub mod use_update_counter;
