use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::{CreateTransactionRequest, FormController, ReferenceData, TransactionDraft, TransactionType};
use super::field::{input_callback, select_callback, submit_callback, SelectField, SelectOption, TextField};

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub reference: ReferenceData,
    pub on_submit: Callback<CreateTransactionRequest>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let form = use_state(FormController::<TransactionDraft>::new);
    let on_submit = submit_callback(&form, props.on_submit.clone(), "transaction-form");

    let on_type_change = {
        let form = form.clone();
        let reference = props.reference.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            reference.select_transaction_type(&mut next, &select.value());
            form.set(next);
        })
    };

    let type_options: Vec<SelectOption> = TransactionType::ALL
        .iter()
        .map(|transaction_type| SelectOption::new(transaction_type.as_str(), transaction_type.as_str()))
        .collect();

    let account_options: Vec<SelectOption> = props
        .reference
        .accounts
        .iter()
        .map(|account| SelectOption::new(account.id.clone(), account.name.clone()))
        .collect();

    // Narrow categories to the chosen type once one is picked
    let categories = match form.value(TransactionDraft::TYPE).parse::<TransactionType>() {
        Ok(transaction_type) => props.reference.categories_for(transaction_type).to_vec(),
        Err(_) => props.reference.categories(),
    };
    let category_options: Vec<SelectOption> = categories
        .into_iter()
        .map(|category| SelectOption::new(category.id, category.name))
        .collect();

    html! {
        <section class="transaction-form-section">
            <h2>{"New Transaction"}</h2>
            <form class="transaction-form" onsubmit={on_submit}>
                <SelectField
                    id="type"
                    label="type"
                    placeholder="Select Type"
                    value={form.value(TransactionDraft::TYPE).to_string()}
                    options={type_options}
                    error={form.visible_error(TransactionDraft::TYPE)}
                    onchange={on_type_change}
                />
                <TextField
                    id="date"
                    label="date"
                    input_type="date"
                    value={form.value(TransactionDraft::DATE).to_string()}
                    error={form.visible_error(TransactionDraft::DATE)}
                    oninput={input_callback(&form, TransactionDraft::DATE)}
                />
                <SelectField
                    id="accountId"
                    label="account"
                    placeholder="Select Account"
                    value={form.value(TransactionDraft::ACCOUNT_ID).to_string()}
                    options={account_options}
                    error={form.visible_error(TransactionDraft::ACCOUNT_ID)}
                    onchange={select_callback(&form, TransactionDraft::ACCOUNT_ID)}
                />
                <SelectField
                    id="categoryId"
                    label="category"
                    placeholder="Select Category"
                    value={form.value(TransactionDraft::CATEGORY_ID).to_string()}
                    options={category_options}
                    error={form.visible_error(TransactionDraft::CATEGORY_ID)}
                    onchange={select_callback(&form, TransactionDraft::CATEGORY_ID)}
                />
                <TextField
                    id="amount"
                    label="amount"
                    input_type="number"
                    placeholder="5.00"
                    value={form.value(TransactionDraft::AMOUNT).to_string()}
                    error={form.visible_error(TransactionDraft::AMOUNT)}
                    oninput={input_callback(&form, TransactionDraft::AMOUNT)}
                />
                <TextField
                    id="note"
                    label="note"
                    value={form.value(TransactionDraft::NOTE).to_string()}
                    error={form.visible_error(TransactionDraft::NOTE)}
                    oninput={input_callback(&form, TransactionDraft::NOTE)}
                />
                <TextField
                    id="description"
                    label="description"
                    value={form.value(TransactionDraft::DESCRIPTION).to_string()}
                    error={form.visible_error(TransactionDraft::DESCRIPTION)}
                    oninput={input_callback(&form, TransactionDraft::DESCRIPTION)}
                />
                <button type="submit" class="btn btn-primary" disabled={!form.is_valid()}>
                    {"Save"}
                </button>
            </form>
        </section>
    }
}
