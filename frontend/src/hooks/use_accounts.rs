use yew::prelude::*;
use shared::{Account, CreateAccountRequest};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use super::use_update_counter::use_update_counter;

#[derive(Clone, PartialEq)]
pub struct AccountsState {
    pub accounts: Vec<Account>,
    pub loading: bool,
    /// Bumped after every successful create; drives the refetch
    pub update: u32,
}

pub struct UseAccountsResult {
    pub state: AccountsState,
    pub actions: UseAccountsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseAccountsActions {
    pub create_account: Callback<CreateAccountRequest>,
}

#[hook]
pub fn use_accounts(api_client: &ApiClient) -> UseAccountsResult {
    let accounts = use_state(Vec::<Account>::new);
    let loading = use_state(|| true);
    let update = use_update_counter();

    // Refetch whenever the counter moves
    {
        let api_client = api_client.clone();
        let accounts = accounts.clone();
        let loading = loading.clone();

        use_effect_with(update.value, move |_| {
            loading.set(true);

            spawn_local(async move {
                match api_client.get_accounts().await {
                    Ok(list) => accounts.set(list),
                    Err(e) => {
                        Logger::error_with_component("use-accounts", &format!("Failed to fetch accounts: {}", e));
                    }
                }

                loading.set(false);
            });

            || ()
        });
    }

    let create_account = {
        let api_client = api_client.clone();
        let bump = update.bump.clone();

        use_callback((), move |request: CreateAccountRequest, _| {
            let api_client = api_client.clone();
            let bump = bump.clone();

            spawn_local(async move {
                match api_client.create_account(&request).await {
                    Ok(()) => {
                        Logger::info_with_component("use-accounts", &format!("Created account {}", request.name));
                        bump.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("use-accounts", &format!("Failed to create account: {}", e));
                    }
                }
            });
        })
    };

    let state = AccountsState {
        accounts: (*accounts).clone(),
        loading: *loading,
        update: update.value,
    };

    let actions = UseAccountsActions { create_account };

    UseAccountsResult { state, actions }
}
