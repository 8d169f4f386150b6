use yew::prelude::*;
use shared::Transaction;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
}

/// Fetch the transaction list, again every time `update` changes.
///
/// Each change issues an independent request; a failed fetch is logged and
/// the previous list stays on screen.
#[hook]
pub fn use_transactions(api_client: &ApiClient, update: u32) -> TransactionsState {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);

    {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();

        use_effect_with(update, move |update| {
            let update = *update;
            loading.set(true);

            spawn_local(async move {
                match api_client.get_transactions().await {
                    Ok(list) => {
                        Logger::debug_with_component(
                            "use-transactions",
                            &format!("Fetched {} transactions (update {})", list.len(), update),
                        );
                        transactions.set(list);
                    }
                    Err(e) if e.is_unauthorized() => {
                        Logger::warn_with_component("use-transactions", "Session token was rejected");
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "use-transactions",
                            &format!("Failed to fetch transactions: {}", e),
                        );
                    }
                }

                loading.set(false);
            });

            || ()
        });
    }

    TransactionsState {
        transactions: (*transactions).clone(),
        loading: *loading,
    }
}
