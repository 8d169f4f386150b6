use yew::prelude::*;
use shared::{ExpenseDraft, ExpenseFormData, FormController, ReferenceData};
use super::field::{input_callback, select_callback, submit_callback, SelectField, SelectOption, TextField};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub reference: ReferenceData,
    pub on_submit: Callback<ExpenseFormData>,
}

/// Quick expense entry; account and category are picked by name
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let form = use_state(FormController::<ExpenseDraft>::new);
    let on_submit = submit_callback(&form, props.on_submit.clone(), "expense-form");

    let account_options: Vec<SelectOption> = props
        .reference
        .accounts
        .iter()
        .map(|account| SelectOption::new(account.name.clone(), account.name.clone()))
        .collect();

    let category_options: Vec<SelectOption> = props
        .reference
        .expense_categories
        .iter()
        .map(|category| SelectOption::new(category.name.clone(), category.name.clone()))
        .collect();

    html! {
        <section class="expense-form-section">
            <h2>{"Expense Form"}</h2>
            <form class="expense-form" onsubmit={on_submit}>
                <TextField
                    id="time"
                    label="Time"
                    value={form.value(ExpenseDraft::TIME).to_string()}
                    error={form.visible_error(ExpenseDraft::TIME)}
                    oninput={input_callback(&form, ExpenseDraft::TIME)}
                />
                <SelectField
                    id="account"
                    label="account"
                    placeholder="Select Account"
                    value={form.value(ExpenseDraft::ACCOUNT).to_string()}
                    options={account_options}
                    error={form.visible_error(ExpenseDraft::ACCOUNT)}
                    onchange={select_callback(&form, ExpenseDraft::ACCOUNT)}
                />
                <SelectField
                    id="category"
                    label="category"
                    placeholder="Select Category"
                    value={form.value(ExpenseDraft::CATEGORY).to_string()}
                    options={category_options}
                    error={form.visible_error(ExpenseDraft::CATEGORY)}
                    onchange={select_callback(&form, ExpenseDraft::CATEGORY)}
                />
                <TextField
                    id="expense-amount"
                    label="amount"
                    value={form.value(ExpenseDraft::AMOUNT).to_string()}
                    error={form.visible_error(ExpenseDraft::AMOUNT)}
                    oninput={input_callback(&form, ExpenseDraft::AMOUNT)}
                />
                <TextField
                    id="expense-note"
                    label="note"
                    value={form.value(ExpenseDraft::NOTE).to_string()}
                    error={form.visible_error(ExpenseDraft::NOTE)}
                    oninput={input_callback(&form, ExpenseDraft::NOTE)}
                />
                <TextField
                    id="expense-description"
                    label="description"
                    value={form.value(ExpenseDraft::DESCRIPTION).to_string()}
                    error={form.visible_error(ExpenseDraft::DESCRIPTION)}
                    oninput={input_callback(&form, ExpenseDraft::DESCRIPTION)}
                />
                <button type="submit" class="btn btn-primary" disabled={!form.is_valid()}>
                    {"Send"}
                </button>
            </form>
        </section>
    }
}
