pub mod account_panel;

pub use account_panel::AccountPanel;
