use yew::prelude::*;
use shared::{AccountDraft, CreateAccountRequest, FormController};
use super::field::{input_callback, submit_callback, TextField};

#[derive(Properties, PartialEq)]
pub struct AccountFormProps {
    pub on_submit: Callback<CreateAccountRequest>,
}

#[function_component(AccountForm)]
pub fn account_form(props: &AccountFormProps) -> Html {
    let form = use_state(FormController::<AccountDraft>::new);
    let on_submit = submit_callback(&form, props.on_submit.clone(), "account-form");

    html! {
        <form class="account-form" onsubmit={on_submit}>
            <TextField
                id="name"
                label="create"
                placeholder="Savings, Wallet, Credit card..."
                value={form.value(AccountDraft::NAME).to_string()}
                error={form.visible_error(AccountDraft::NAME)}
                oninput={input_callback(&form, AccountDraft::NAME)}
            />
            <button type="submit" class="btn btn-primary" disabled={!form.is_valid()}>
                {"Add"}
            </button>
        </form>
    }
}
