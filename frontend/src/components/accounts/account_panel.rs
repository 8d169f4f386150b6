use yew::prelude::*;
use crate::components::forms::AccountForm;
use crate::hooks::use_accounts::use_accounts;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AccountPanelProps {
    pub api_client: ApiClient,
    /// Fired after an account was created so selectors can reload
    pub on_change: Callback<()>,
}

#[function_component(AccountPanel)]
pub fn account_panel(props: &AccountPanelProps) -> Html {
    let accounts = use_accounts(&props.api_client);

    {
        let on_change = props.on_change.clone();
        use_effect_with(accounts.state.update, move |update| {
            if *update > 0 {
                on_change.emit(());
            }
            || ()
        });
    }

    html! {
        <section class="accounts-section">
            <h2>{"Accounts"}</h2>
            <AccountForm on_submit={accounts.actions.create_account.clone()} />
            {if accounts.state.loading && accounts.state.accounts.is_empty() {
                html! { <div class="loading">{"Loading accounts..."}</div> }
            } else if accounts.state.accounts.is_empty() {
                html! { <div class="empty">{"No accounts yet"}</div> }
            } else {
                html! {
                    <ul class="account-list">
                        {for accounts.state.accounts.iter().map(|account| html! {
                            <li key={account.id.clone()} class="account-chip">{&account.name}</li>
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
